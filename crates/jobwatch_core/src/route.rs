use crate::query::QueryKey;

/// Client-visible pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Jobs,
    Logs,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Jobs, Route::Logs];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Jobs => "/jobs",
            Route::Logs => "/logs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Jobs => "Jobs",
            Route::Logs => "Logs",
        }
    }

    /// Resolves a path such as `/jobs` or `/logs/`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    /// Queries a page observes while it is shown.
    pub fn queries(self, log_lines: u32) -> Vec<QueryKey> {
        match self {
            Route::Home => vec![
                QueryKey::Stats,
                QueryKey::Logs { lines: log_lines },
                QueryKey::Jobs,
                QueryKey::TopJobs,
            ],
            Route::Jobs => vec![QueryKey::Jobs],
            Route::Logs => vec![QueryKey::Logs { lines: log_lines }],
        }
    }
}
