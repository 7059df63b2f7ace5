#![forbid(unsafe_code)]

//! Human-readable responder with colorization support

use super::Responder;
use serde_json::Value;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes results to one stream and errors to another
///
/// Strings are printed verbatim, `Null` prints nothing, any other value is
/// printed as pretty JSON. Errors are printed in red when the error stream
/// supports color.
pub struct HumanResponder<O, E> {
    out: O,
    err: E,
}

impl HumanResponder<StandardStream, StandardStream> {
    /// Responder bound to stdout and stderr
    pub fn stdio(color_choice: ColorChoice) -> Self {
        HumanResponder {
            out: StandardStream::stdout(color_choice),
            err: StandardStream::stderr(color_choice),
        }
    }
}

impl<O: WriteColor, E: WriteColor> HumanResponder<O, E> {
    pub fn new(out: O, err: E) -> Self {
        HumanResponder { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Text shown for a successful value, `None` for nothing
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())),
    }
}

impl<O: WriteColor, E: WriteColor> Responder for HumanResponder<O, E> {
    fn respond(&mut self, outcome: anyhow::Result<Value>) -> io::Result<()> {
        match outcome {
            Ok(value) => {
                if let Some(text) = render_value(&value) {
                    writeln!(self.out, "{}", text)?;
                }
                self.out.flush()
            }
            Err(e) => {
                self.err.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(self.err, "{}", e)?;
                self.err.reset()?;
                writeln!(self.err)?;
                self.err.flush()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandNotFound;
    use serde_json::json;
    use termcolor::{Ansi, NoColor};

    fn plain() -> HumanResponder<NoColor<Vec<u8>>, NoColor<Vec<u8>>> {
        HumanResponder::new(NoColor::new(Vec::new()), NoColor::new(Vec::new()))
    }

    fn captured(
        responder: HumanResponder<NoColor<Vec<u8>>, NoColor<Vec<u8>>>,
    ) -> (String, String) {
        let (out, err) = responder.into_inner();
        (
            String::from_utf8(out.into_inner()).unwrap(),
            String::from_utf8(err.into_inner()).unwrap(),
        )
    }

    #[test]
    fn test_string_printed_verbatim() {
        let mut responder = plain();
        responder.respond(Ok(json!("Hello World!"))).unwrap();

        let (out, err) = captured(responder);
        assert_eq!(out, "Hello World!\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_null_prints_nothing() {
        let mut responder = plain();
        responder.respond(Ok(Value::Null)).unwrap();

        let (out, err) = captured(responder);
        assert_eq!(out, "");
        assert_eq!(err, "");
    }

    #[test]
    fn test_structured_value_pretty_printed() {
        let mut responder = plain();
        responder.respond(Ok(json!({"users": ["alice"]}))).unwrap();

        let (out, _) = captured(responder);
        assert!(out.contains("\"users\": ["));
        assert!(out.contains("\"alice\""));
    }

    #[test]
    fn test_not_found_goes_to_error_stream() {
        let mut responder = plain();
        responder
            .respond(Err(anyhow::Error::new(CommandNotFound)))
            .unwrap();

        let (out, err) = captured(responder);
        assert_eq!(out, "");
        assert_eq!(err, "No Command Found!\n");
    }

    #[test]
    fn test_error_colored_when_supported() {
        let mut responder = HumanResponder::new(NoColor::new(Vec::new()), Ansi::new(Vec::new()));
        responder.respond(Err(anyhow::anyhow!("boom"))).unwrap();

        let (_, err) = responder.into_inner();
        let err = String::from_utf8(err.into_inner()).unwrap();
        assert!(err.contains("\x1b["));
        assert!(err.contains("boom"));
    }

    #[test]
    fn test_render_value_numbers() {
        assert_eq!(render_value(&json!(42)).as_deref(), Some("42"));
        assert_eq!(render_value(&json!(true)).as_deref(), Some("true"));
        assert_eq!(render_value(&Value::Null), None);
    }
}
