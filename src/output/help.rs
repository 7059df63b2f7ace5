#![forbid(unsafe_code)]

//! Command listing shown for `-h` and after an unknown command

use crate::router::Route;
use std::io::{self, Write};
use termcolor::{ColorSpec, NoColor, WriteColor};

/// Placeholder for a missing description or help text
pub const NOT_PROVIDED: &str = "Not provided";

/// Formats the route registry as a listing
///
/// ```text
/// Available commands:
///
///   ^users$
///     Description: List users
///     Help: Not provided
/// ```
pub struct HelpFormatter;

impl HelpFormatter {
    /// Plain-text listing
    pub fn format<C>(routes: &[Route<C>]) -> String {
        let mut buffer = NoColor::new(Vec::new());
        let _ = Self::write_to(&mut buffer, routes);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Writes the listing with bold pattern headings
    pub fn write_to<C, W: WriteColor + ?Sized>(out: &mut W, routes: &[Route<C>]) -> io::Result<()> {
        writeln!(out, "Available commands:")?;

        for route in routes {
            writeln!(out)?;
            write!(out, "  ")?;
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "{}", route.pattern())?;
            out.reset()?;
            writeln!(out)?;

            writeln!(
                out,
                "    Description: {}",
                route.description().unwrap_or(NOT_PROVIDED)
            )?;
            writeln!(out, "    Help: {}", route.help().unwrap_or(NOT_PROVIDED))?;
        }

        out.flush()
    }

    /// Help text of a single route
    pub fn write_route_help<C, W: Write + ?Sized>(out: &mut W, route: &Route<C>) -> io::Result<()> {
        writeln!(out, "{}", route.help().unwrap_or(NOT_PROVIDED))?;
        out.flush()
    }
}
