//! JobWatch core: pure dashboard state machine, query cache and view-model helpers.
mod effect;
mod logos;
mod logs;
mod model;
mod msg;
mod query;
mod route;
mod state;
mod theme;
mod update;
mod view_model;

pub use effect::Effect;
pub use logos::{company_logo, DEFAULT_LOGO};
pub use logs::{classify_line, lines_newest_first, ClassifiedLine, LogCounts, LogLevel, SpanStyle};
pub use model::{CompanyJobs, Job, JobsByCompany, Stats, TopJob, TopJobsResult};
pub use msg::Msg;
pub use query::{
    CacheSettings, PollIntervals, QueryCache, QueryData, QueryKey, QueryResult, QueryState,
    DEFAULT_LOG_LINES,
};
pub use route::Route;
pub use state::{AppState, StateSettings};
pub use theme::{SubscriptionId, Theme, ThemeStore};
pub use update::update;
pub use view_model::{
    format_last_scrape, title_case, AppViewModel, CompanyGroupView, HomeView, JobLineView,
    LogLineView, LogSegment, NavItem, PageBody, PageView, PieSlice, TopJobCard, TopJobsView,
    TOP_JOBS_LIMIT,
};
