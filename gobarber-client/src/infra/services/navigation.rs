use parking_lot::Mutex;
use std::fmt;

/// Named client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    Dashboard,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::SignIn => "/",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::SignIn => "sign_in",
            Route::Dashboard => "dashboard",
            Route::Profile => "profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        log::info!("navigate -> {} ({})", route.name(), route.path());
    }
}

/// In-process history stack
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl HistoryNavigator {
    pub fn starting_at(route: Route) -> Self {
        Self {
            history: Mutex::new(vec![route]),
        }
    }

    pub fn current(&self) -> Option<Route> {
        self.history.lock().last().copied()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: Route) {
        self.history.lock().push(route);
    }
}
