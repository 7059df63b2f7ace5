#![forbid(unsafe_code)]

//! Sub-command registration and dispatch
//!
//! A [`Router`] owns an ordered list of routes. Dispatch joins the non-flag
//! arguments into one phrase, finds the first route whose pattern consumes
//! the whole phrase, runs its handler and hands the result to a
//! [`Responder`].

pub mod matcher;
pub mod route;
pub mod tokenizer;

pub use matcher::Matcher;
pub use route::{Handler, Route, RouteOption, with_description, with_full_pattern, with_help};
pub use tokenizer::{CommandLine, FlagKind, Segment};

use crate::config::Config;
use crate::context::{Context, Request};
use crate::error::CommandNotFound;
use crate::output::{HelpFormatter, Responder, responder_for};
use serde_json::Value;
use std::io;
use std::sync::Arc;
use termcolor::{StandardStream, WriteColor};
use tracing::{debug, warn};

/// What a dispatch ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Help requested without a sub-command; the listing was printed
    HelpListed,
    /// Help requested for a known sub-command; its help text was printed
    RouteHelp,
    /// Nothing matched; the responder got `CommandNotFound` and the listing was printed
    NotFound,
    /// A route matched but has no handler; the responder got `CommandNotFound`
    NoHandler,
    /// The handler ran and its result went to the responder
    Handled,
}

/// Registry of sub-commands for one process
pub struct Router<C> {
    routes: Vec<Route<C>>,
    config: Config,
}

impl<C> Router<C> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Router {
            routes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn routes(&self) -> &[Route<C>] {
        &self.routes
    }

    /// Appends a route
    ///
    /// The pattern is a regular expression that must consume the whole
    /// sub-command phrase. It is compiled on first use; an invalid pattern
    /// panics at that point. Earlier routes win over later ones.
    pub fn register<F>(
        &mut self,
        pattern: impl Into<String>,
        handler: F,
        options: impl IntoIterator<Item = RouteOption>,
    ) -> &mut Self
    where
        F: Fn(&Context<'_, C>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        let handler: Handler<C> = Arc::new(handler);
        self.routes.push(Route::new(pattern, Some(handler), options));
        self
    }

    /// Appends a route with no handler
    ///
    /// The route shows up in the listing and blocks later routes with an
    /// overlapping pattern, but dispatching to it reports `CommandNotFound`.
    pub fn reserve(
        &mut self,
        pattern: impl Into<String>,
        options: impl IntoIterator<Item = RouteOption>,
    ) -> &mut Self {
        self.routes.push(Route::new(pattern, None, options));
        self
    }

    /// Dispatches `args` (program name excluded)
    ///
    /// Listing and per-route help go to `out`; every other outcome goes
    /// through `responder`.
    pub fn dispatch<R, W>(
        &self,
        args: Vec<String>,
        container: &C,
        responder: &mut R,
        out: &mut W,
    ) -> io::Result<Outcome>
    where
        R: Responder + ?Sized,
        W: WriteColor + ?Sized,
    {
        let line = tokenizer::tokenize(&args);
        debug!(
            phrase = %line.phrase,
            help = line.help_requested,
            "tokenized arguments"
        );

        if line.help_requested && line.phrase.is_empty() {
            HelpFormatter::write_to(out, self.routes())?;
            return Ok(Outcome::HelpListed);
        }

        let route = Matcher::new(self.routes()).find(&line.phrase);
        let ctx = Context::new(Request::new(args), container);

        let Some(route) = route else {
            warn!(phrase = %line.phrase, "no route matched");
            responder.respond(Err(anyhow::Error::new(CommandNotFound)))?;
            HelpFormatter::write_to(out, self.routes())?;
            return Ok(Outcome::NotFound);
        };

        debug!(pattern = route.pattern(), "route matched");

        let Some(handler) = route.handler() else {
            warn!(pattern = route.pattern(), "matched route has no handler");
            responder.respond(Err(anyhow::Error::new(CommandNotFound)))?;
            return Ok(Outcome::NoHandler);
        };

        if line.help_requested {
            HelpFormatter::write_route_help(out, route)?;
            return Ok(Outcome::RouteHelp);
        }

        responder.respond(handler(&ctx))?;
        Ok(Outcome::Handled)
    }

    /// Dispatches the current process arguments
    ///
    /// Uses the configured responder on stdout/stderr and prints listings to
    /// stdout.
    pub fn run(&self, container: &C) -> io::Result<Outcome> {
        self.run_args(std::env::args().skip(1).collect(), container)
    }

    /// Like [`Router::run`] with arguments sourced by the caller
    pub fn run_args(&self, args: Vec<String>, container: &C) -> io::Result<Outcome> {
        let mut responder = responder_for(&self.config.output);
        let mut out = StandardStream::stdout(self.config.output.color.into());
        self.dispatch(args, container, &mut responder, &mut out)
    }
}

impl<C> Default for Router<C> {
    fn default() -> Self {
        Self::new()
    }
}
