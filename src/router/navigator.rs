use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::guard::{GuardDecision, guard};
use super::routes::Route;
use crate::auth::SessionManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Where the visitor was headed before being sent here
    pub from: Option<String>,
}

impl Location {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            from: None,
        }
    }
}

struct NavState {
    current: Location,
    history: Vec<Location>,
}

/// Shared handle to the current location. Clones observe the same state.
#[derive(Clone)]
pub struct Navigator {
    state: Arc<RwLock<NavState>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

impl Navigator {
    pub fn new(start: &str) -> Self {
        let current = Location::new(start);
        Self {
            state: Arc::new(RwLock::new(NavState {
                history: vec![current.clone()],
                current,
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, NavState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, NavState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current(&self) -> Location {
        self.read().current.clone()
    }

    pub fn current_path(&self) -> String {
        self.read().current.path.clone()
    }

    pub fn history(&self) -> Vec<Location> {
        self.read().history.clone()
    }

    pub fn navigate(&self, path: &str) {
        self.push(Location::new(path));
    }

    pub fn navigate_with_origin(&self, path: &str, from: &str) {
        self.push(Location {
            path: path.to_string(),
            from: Some(from.to_string()),
        });
    }

    /// Swap the current entry without growing the history.
    pub fn replace(&self, location: Location) {
        let mut state = self.write();
        if let Some(last) = state.history.last_mut() {
            *last = location.clone();
        }
        state.current = location;
    }

    /// Full page load: any remembered origin is gone afterwards.
    pub fn hard_navigate(&self, path: &str) {
        tracing::warn!("Hard navigation to {}", path);
        self.push(Location::new(path));
    }

    fn push(&self, location: Location) {
        tracing::debug!("Navigating to {}", location.path);
        let mut state = self.write();
        state.history.push(location.clone());
        state.current = location;
    }

    /// Navigate to `path` and run the route guard against `session`.
    /// Returns the route that ends up rendered.
    pub fn visit(&self, path: &str, session: &SessionManager) -> Route {
        self.navigate(path);

        let Some(route) = Route::from_path(path) else {
            self.replace(Location::new(Route::Home.path()));
            return Route::Home;
        };

        match guard(&session.snapshot(), route, path) {
            GuardDecision::Render(route) => route,
            GuardDecision::Redirect { to, from } => {
                self.replace(Location {
                    path: to.path().to_string(),
                    from: Some(from),
                });
                to
            }
        }
    }
}
