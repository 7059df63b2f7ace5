#![forbid(unsafe_code)]

//! Registered routes and their registration options

use crate::context::Context;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Business logic bound to a route
///
/// Returns the value handed to the responder; `Value::Null` means "nothing to show".
/// Errors are passed to the responder untouched.
pub type Handler<C> = Arc<dyn Fn(&Context<'_, C>) -> anyhow::Result<Value> + Send + Sync>;

/// Optional route metadata applied at registration time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOption {
    Description(String),
    Help(String),
    FullPattern(String),
}

/// Sets the text shown next to the route in the command listing
pub fn with_description(text: impl Into<String>) -> RouteOption {
    RouteOption::Description(text.into())
}

/// Sets the text printed when the route is invoked with `-h` or `--help`
pub fn with_help(text: impl Into<String>) -> RouteOption {
    RouteOption::Help(text.into())
}

/// Adds a long-form pattern tried when the short pattern does not match
pub fn with_full_pattern(pattern: impl Into<String>) -> RouteOption {
    RouteOption::FullPattern(pattern.into())
}

/// A pattern plus the handler it triggers
pub struct Route<C> {
    pattern: RoutePattern,
    handler: Option<Handler<C>>,
    description: Option<String>,
    help: Option<String>,
    full_pattern: Option<RoutePattern>,
}

impl<C> Route<C> {
    pub(crate) fn new(
        pattern: impl Into<String>,
        handler: Option<Handler<C>>,
        options: impl IntoIterator<Item = RouteOption>,
    ) -> Self {
        let mut route = Route {
            pattern: RoutePattern::new(pattern.into()),
            handler,
            description: None,
            help: None,
            full_pattern: None,
        };

        for option in options {
            match option {
                RouteOption::Description(text) => route.description = Some(text),
                RouteOption::Help(text) => route.help = Some(text),
                RouteOption::FullPattern(pattern) => {
                    route.full_pattern = Some(RoutePattern::new(pattern))
                }
            }
        }

        route
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn full_pattern(&self) -> Option<&str> {
        self.full_pattern.as_ref().map(RoutePattern::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn handler(&self) -> Option<&Handler<C>> {
        self.handler.as_ref()
    }

    /// True if the short pattern, or failing that the full pattern, consumes
    /// the whole candidate
    ///
    /// # Panics
    ///
    /// Panics if either pattern is not a valid regular expression.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.pattern.fully_consumes(candidate) {
            return true;
        }

        self.full_pattern
            .as_ref()
            .is_some_and(|full| full.fully_consumes(candidate))
    }
}

impl<C> fmt::Debug for Route<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .field("full_pattern", &self.full_pattern())
            .field("description", &self.description)
            .field("help", &self.help)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Route pattern compiled on first use
///
/// Compilation is deferred so registration stays infallible; the compiled
/// regex is kept for the rest of the process.
struct RoutePattern {
    source: String,
    compiled: OnceLock<Regex>,
}

impl RoutePattern {
    fn new(source: String) -> Self {
        RoutePattern {
            source,
            compiled: OnceLock::new(),
        }
    }

    fn as_str(&self) -> &str {
        &self.source
    }

    fn regex(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            Regex::new(&self.source)
                .unwrap_or_else(|e| panic!("invalid command pattern {:?}: {}", self.source, e))
        })
    }

    /// Splitting the candidate on the pattern leaves nothing but empty fragments
    fn fully_consumes(&self, candidate: &str) -> bool {
        self.regex().split(candidate).all(str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(pattern: &str, options: Vec<RouteOption>) -> Route<()> {
        Route::new(pattern, None, options)
    }

    #[test]
    fn test_defaults_without_options() {
        let r = route("^users$", vec![]);
        assert_eq!(r.pattern(), "^users$");
        assert_eq!(r.description(), None);
        assert_eq!(r.help(), None);
        assert_eq!(r.full_pattern(), None);
        assert!(r.handler().is_none());
    }

    #[test]
    fn test_options_set_fields() {
        let r = route(
            "^ls$",
            vec![
                with_description("List things"),
                with_help("ls [filter]"),
                with_full_pattern("^list$"),
            ],
        );
        assert_eq!(r.description(), Some("List things"));
        assert_eq!(r.help(), Some("ls [filter]"));
        assert_eq!(r.full_pattern(), Some("^list$"));
    }

    #[test]
    fn test_later_option_wins() {
        let r = route("x", vec![with_help("first"), with_help("second")]);
        assert_eq!(r.help(), Some("second"));
    }

    #[test]
    fn test_anchored_pattern_matches_exact_candidate() {
        let r = route("^users$", vec![]);
        assert!(r.matches("users"));
        assert!(!r.matches("users list"));
        assert!(!r.matches("user"));
    }

    #[test]
    fn test_unanchored_pattern_must_consume_everything() {
        let r = route("users", vec![]);
        assert!(r.matches("users"));
        assert!(r.matches("usersusers"));
        assert!(!r.matches("users users"));
        assert!(!r.matches("my users"));
    }

    #[test]
    fn test_regex_pattern() {
        let r = route("^(add|remove) user$", vec![]);
        assert!(r.matches("add user"));
        assert!(r.matches("remove user"));
        assert!(!r.matches("rename user"));
    }

    #[test]
    fn test_full_pattern_fallback() {
        let r = route("^ls$", vec![with_full_pattern("^list$")]);
        assert!(r.matches("ls"));
        assert!(r.matches("list"));
        assert!(!r.matches("lst"));
    }

    #[test]
    fn test_compiled_once() {
        let r = route("^a$", vec![]);
        assert!(r.matches("a"));
        let first = r.pattern.regex() as *const Regex;
        assert!(!r.matches("b"));
        assert_eq!(first, r.pattern.regex() as *const Regex);
    }

    #[test]
    #[should_panic(expected = "invalid command pattern")]
    fn test_invalid_pattern_panics_on_match() {
        let r = route("(unclosed", vec![]);
        r.matches("anything");
    }

    #[test]
    fn test_invalid_pattern_registers_without_error() {
        let r = route("(unclosed", vec![]);
        assert_eq!(r.pattern(), "(unclosed");
    }

    #[test]
    fn test_debug_hides_handler() {
        let r = route("^a$", vec![with_description("d")]);
        let text = format!("{:?}", r);
        assert!(text.contains("^a$"));
        assert!(text.contains("has_handler: false"));
    }
}
