#![forbid(unsafe_code)]

//! Per-dispatch invocation context handed to route handlers

use crate::router::tokenizer::{self, Segment};
use std::collections::BTreeMap;

/// Read-only view of the arguments a command was invoked with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    args: Vec<String>,
}

impl Request {
    /// Wraps the arguments, program name already removed
    pub fn new(args: Vec<String>) -> Self {
        Request { args }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments cut at every flag, see [`tokenizer::segments`]
    pub fn segments(&self) -> Vec<Segment> {
        tokenizer::segments(&self.args)
    }

    /// Raw value of `-name=value` or `--name=value`
    ///
    /// A bare `-name` / `--name` reads as `"true"`. When the flag is given
    /// more than once the last one wins. No type conversion is attempted.
    pub fn param(&self, name: &str) -> Option<String> {
        self.flags()
            .filter(|(key, _)| *key == name)
            .last()
            .map(|(_, value)| value.to_string())
    }

    /// Every flag as name -> raw value, later occurrences overriding earlier ones
    pub fn params(&self) -> BTreeMap<String, String> {
        self.flags()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn flags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.args.iter().filter_map(|arg| {
            let body = arg.strip_prefix('-')?;
            let body = body.strip_prefix('-').unwrap_or(body);
            if body.is_empty() {
                return None;
            }
            Some(body.split_once('=').unwrap_or((body, "true")))
        })
    }
}

/// Arguments plus the shared dependency container for one dispatch
pub struct Context<'a, C> {
    request: Request,
    container: &'a C,
}

impl<'a, C> Context<'a, C> {
    pub fn new(request: Request, container: &'a C) -> Self {
        Context { request, container }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn args(&self) -> &[String] {
        self.request.args()
    }

    /// Shorthand for [`Request::param`]
    pub fn param(&self, name: &str) -> Option<String> {
        self.request.param(name)
    }

    pub fn container(&self) -> &'a C {
        self.container
    }
}
