//! Navigation between the add, list, and detail screens.

use contacts_types::{NavRequest, Route};

/// Receives navigation requests from the store.
///
/// Requests are fire-and-forget: the store has finished mutating its state
/// before it calls `navigate`, and never waits on the result.
pub trait Navigator {
    fn navigate(&mut self, request: NavRequest);
}

/// A stack of screens. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStack {
    stack: Vec<Route>,
}

impl RouteStack {
    #[must_use]
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        // The stack always holds at least the root.
        self.stack.last().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.stack
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }
}

impl Default for RouteStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl Navigator for RouteStack {
    fn navigate(&mut self, request: NavRequest) {
        match request {
            NavRequest::Reset(route) => {
                self.stack.clear();
                self.stack.push(route);
            }
            NavRequest::Push(route) => self.stack.push(route),
            NavRequest::Back => {
                if self.can_go_back() {
                    self.stack.pop();
                } else {
                    tracing::debug!(route = ?self.current(), "Back at root ignored");
                    return;
                }
            }
        }
        tracing::debug!(?request, current = ?self.current(), depth = self.depth(), "Navigated");
    }
}
