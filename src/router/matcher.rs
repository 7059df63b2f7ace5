#![forbid(unsafe_code)]

//! Resolves a sub-command phrase to a registered route

use super::route::Route;

/// First-match-wins lookup over the route registry
pub struct Matcher<'a, C> {
    routes: &'a [Route<C>],
}

impl<'a, C> Matcher<'a, C> {
    pub fn new(routes: &'a [Route<C>]) -> Self {
        Matcher { routes }
    }

    /// Returns the earliest registered route that fully matches `candidate`
    ///
    /// Surrounding whitespace is ignored. An empty candidate splits into a
    /// single empty fragment, so it is accepted by the first route.
    pub fn find(&self, candidate: &str) -> Option<&'a Route<C>> {
        let candidate = candidate.trim();
        self.routes.iter().find(|route| route.matches(candidate))
    }
}
