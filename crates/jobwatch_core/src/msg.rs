use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Show a page; also used once at startup to mount the first page.
    Navigate {
        route: crate::Route,
        now: Instant,
    },
    /// Periodic timer driving polling and cache garbage collection.
    Tick { now: Instant },
    /// A fetch started by `Effect::Fetch` finished.
    QueryResolved {
        key: crate::QueryKey,
        seq: u64,
        result: crate::QueryResult,
        now: Instant,
    },
    /// User clicked a company group header on the jobs page.
    CompanyToggled(String),
}
