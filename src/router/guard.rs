//! Gate protected pages behind a signed in session.

use super::routes::Route;
use crate::auth::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    /// Send the visitor to `to`, remembering where they were headed
    Redirect { to: Route, from: String },
}

/// Decide what to show for `route` requested at `location`. This only
/// looks at the session as it is right now.
pub fn guard(session: &Session, route: Route, location: &str) -> GuardDecision {
    if route.is_protected() && !session.is_authenticated() {
        tracing::debug!("Unauthenticated visit to {}, redirecting to login", location);
        return GuardDecision::Redirect {
            to: Route::Login,
            from: location.to_string(),
        };
    }
    GuardDecision::Render(route)
}
