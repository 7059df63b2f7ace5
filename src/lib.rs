#![forbid(unsafe_code)]

//! cmdrouter: regex-routed sub-command dispatch for service binaries
//!
//! Register handlers against patterns on a [`Router`], then call
//! [`Router::run`] with the shared dependency container. The router picks
//! the first route whose pattern consumes the whole sub-command, runs it and
//! hands the result to a [`Responder`].

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod router;

pub use config::Config;
pub use context::{Context, Request};
pub use error::{CommandNotFound, ConfigError};
pub use output::Responder;
pub use router::{Outcome, Route, RouteOption, Router, with_description, with_full_pattern, with_help};
