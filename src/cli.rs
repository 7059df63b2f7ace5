//! Command-line front end for the demo binary

pub mod args;
pub mod demo;

// Re-export types for convenient access
pub use args::Cli;
pub use demo::{AppState, demo_router};
