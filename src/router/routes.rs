use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Rag,
    Architect,
    LearningPath,
    Templates,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Rag,
        Route::Architect,
        Route::LearningPath,
        Route::Templates,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Rag => "/rag",
            Route::Architect => "/architect",
            Route::LearningPath => "/learning-path",
            Route::Templates => "/templates",
        }
    }

    /// Pages that require a signed in session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Rag | Route::Architect)
    }

    /// Match a location to a route, ignoring any query string, fragment
    /// or trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.path())
    }
}
