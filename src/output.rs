#![forbid(unsafe_code)]

//! Rendering of dispatch outcomes and the command listing

pub mod help;
pub mod human;
pub mod jsonl;

pub use help::HelpFormatter;
pub use human::HumanResponder;
pub use jsonl::JsonlResponder;

use crate::config::{OutputConfig, OutputFormat};
use serde_json::Value;
use std::io;

/// Sink for the outcome of a dispatch
///
/// Receives either the handler's value or an error: the handler's own error
/// untouched, or [`crate::CommandNotFound`].
pub trait Responder {
    fn respond(&mut self, outcome: anyhow::Result<Value>) -> io::Result<()>;
}

impl<R: Responder + ?Sized> Responder for Box<R> {
    fn respond(&mut self, outcome: anyhow::Result<Value>) -> io::Result<()> {
        (**self).respond(outcome)
    }
}

/// Builds the stdout/stderr responder selected by the configuration
pub fn responder_for(config: &OutputConfig) -> Box<dyn Responder> {
    match config.format {
        OutputFormat::Human => Box::new(HumanResponder::stdio(config.color.into())),
        OutputFormat::Json => Box::new(JsonlResponder::new(io::stdout())),
    }
}
