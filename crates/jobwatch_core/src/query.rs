//! Polling query cache.
//!
//! The cache is a pure state machine: it never performs I/O and takes the
//! current time as an argument. The platform asks it which queries are
//! due, starts a fetch for each one through [`QueryCache::begin_fetch`],
//! and feeds the outcome back through [`QueryCache::resolve`].
//!
//! Each entry carries the sequence number of its single in-flight fetch.
//! A result is only accepted when its sequence number matches, so a
//! response that arrives after its entry was collected and recreated can
//! never overwrite newer state.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use crate::model::{JobsByCompany, Stats, TopJobsResult};

/// Number of log lines requested when no explicit count is given.
pub const DEFAULT_LOG_LINES: u32 = 500;

/// Identity of a cached query: its name plus parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    Jobs,
    Logs { lines: u32 },
    Stats,
    TopJobs,
}

impl QueryKey {
    pub fn name(&self) -> &'static str {
        match self {
            QueryKey::Jobs => "jobs",
            QueryKey::Logs { .. } => "logs",
            QueryKey::Stats => "stats",
            QueryKey::TopJobs => "top_jobs",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Logs { lines } => write!(f, "[\"logs\", {lines}]"),
            other => write!(f, "[\"{}\"]", other.name()),
        }
    }
}

/// Resolved payload of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Jobs(JobsByCompany),
    Logs(String),
    Stats(Stats),
    TopJobs(TopJobsResult),
}

impl QueryData {
    pub fn as_jobs(&self) -> Option<&JobsByCompany> {
        match self {
            QueryData::Jobs(jobs) => Some(jobs),
            _ => None,
        }
    }

    pub fn as_logs(&self) -> Option<&str> {
        match self {
            QueryData::Logs(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_stats(&self) -> Option<&Stats> {
        match self {
            QueryData::Stats(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_top_jobs(&self) -> Option<&TopJobsResult> {
        match self {
            QueryData::TopJobs(top) => Some(top),
            _ => None,
        }
    }
}

/// Outcome of one fetch; the error side is the message shown to the user.
pub type QueryResult = Result<QueryData, String>;

/// Refetch period per query while it is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub jobs: Duration,
    pub logs: Duration,
    pub stats: Duration,
    pub top_jobs: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            jobs: Duration::from_secs(5 * 60),
            logs: Duration::from_secs(10),
            stats: Duration::from_secs(10),
            top_jobs: Duration::from_secs(30),
        }
    }
}

impl PollIntervals {
    pub fn for_key(&self, key: &QueryKey) -> Duration {
        match key {
            QueryKey::Jobs => self.jobs,
            QueryKey::Logs { .. } => self.logs,
            QueryKey::Stats => self.stats,
            QueryKey::TopJobs => self.top_jobs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub intervals: PollIntervals,
    /// How long an unobserved entry is kept before it is collected.
    pub gc_time: Duration,
    /// A fetch with no result this long past its poll interval is treated
    /// as lost and may be started again.
    pub abandon_after: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            intervals: PollIntervals::default(),
            gc_time: Duration::from_secs(5 * 60),
            abandon_after: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct QueryEntry {
    data: Option<QueryData>,
    error: Option<String>,
    in_flight: Option<u64>,
    last_started: Option<Instant>,
    observers: usize,
    unobserved_since: Option<Instant>,
}

/// Read-only view of one query, as consumed by pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryState<'a> {
    pub data: Option<&'a QueryData>,
    pub error: Option<&'a str>,
    /// No data and no error yet.
    pub is_loading: bool,
    pub is_fetching: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryCache {
    settings: CacheSettings,
    entries: BTreeMap<QueryKey, QueryEntry>,
    next_seq: u64,
}

impl QueryCache {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            settings,
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Registers one observer of `key`. Returns true when the query should
    /// be fetched right away.
    pub fn subscribe(&mut self, key: QueryKey, now: Instant) -> bool {
        let entry = self.entries.entry(key).or_default();
        entry.observers += 1;
        entry.unobserved_since = None;
        self.is_due(&key, now)
    }

    /// Drops one observer of `key`. Polling stops once nobody observes it.
    pub fn unsubscribe(&mut self, key: QueryKey, now: Instant) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.observers = entry.observers.saturating_sub(1);
            if entry.observers == 0 {
                entry.unobserved_since = Some(now);
            }
        }
    }

    pub fn observers(&self, key: &QueryKey) -> usize {
        self.entries.get(key).map_or(0, |e| e.observers)
    }

    /// Marks a fetch of `key` as started and returns its sequence number,
    /// or `None` when a fetch for the same identity is already in flight.
    /// A fetch silent for longer than its interval plus `abandon_after` no
    /// longer blocks a new one.
    pub fn begin_fetch(&mut self, key: QueryKey, now: Instant) -> Option<u64> {
        let limit = self.settings.intervals.for_key(&key) + self.settings.abandon_after;
        let entry = self.entries.entry(key).or_default();
        if is_pending(entry, limit, now) {
            return None;
        }
        if entry.observers == 0 && entry.unobserved_since.is_none() {
            entry.unobserved_since = Some(now);
        }
        self.next_seq += 1;
        entry.in_flight = Some(self.next_seq);
        entry.last_started = Some(now);
        Some(self.next_seq)
    }

    /// Applies a fetch outcome. Returns false when the result is stale and
    /// was dropped.
    ///
    /// Success replaces `data` and clears `error`; failure keeps the last
    /// good `data` and records `error`. An unobserved entry starts its
    /// garbage-collection clock again at `now`.
    pub fn resolve(&mut self, key: QueryKey, seq: u64, result: QueryResult, now: Instant) -> bool {
        let Some(entry) = self.entries.get_mut(&key) else {
            return false;
        };
        if entry.in_flight != Some(seq) {
            return false;
        }
        entry.in_flight = None;
        if entry.observers == 0 {
            entry.unobserved_since = Some(now);
        }
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
            }
            Err(message) => entry.error = Some(message),
        }
        true
    }

    /// Observed queries whose poll interval has elapsed and that have no
    /// fetch in flight.
    pub fn due(&self, now: Instant) -> Vec<QueryKey> {
        self.entries
            .keys()
            .filter(|key| self.is_due(key, now))
            .copied()
            .collect()
    }

    fn is_due(&self, key: &QueryKey, now: Instant) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return false;
        };
        let interval = self.settings.intervals.for_key(key);
        if entry.observers == 0 || is_pending(entry, interval + self.settings.abandon_after, now) {
            return false;
        }
        match entry.last_started {
            None => true,
            Some(started) => now.saturating_duration_since(started) >= interval,
        }
    }

    /// Removes entries nobody has observed for `gc_time`. Returns how many
    /// were removed.
    pub fn collect_garbage(&mut self, now: Instant) -> usize {
        let gc_time = self.settings.gc_time;
        let before = self.entries.len();
        self.entries.retain(|_, entry| match entry.unobserved_since {
            Some(since) => now.saturating_duration_since(since) < gc_time,
            None => true,
        });
        before - self.entries.len()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn snapshot(&self, key: &QueryKey) -> QueryState<'_> {
        match self.entries.get(key) {
            Some(entry) => QueryState {
                data: entry.data.as_ref(),
                error: entry.error.as_deref(),
                is_loading: entry.data.is_none() && entry.error.is_none(),
                is_fetching: entry.in_flight.is_some(),
            },
            None => QueryState {
                data: None,
                error: None,
                is_loading: true,
                is_fetching: false,
            },
        }
    }
}

/// True while a started fetch may still report back.
fn is_pending(entry: &QueryEntry, limit: Duration, now: Instant) -> bool {
    match (entry.in_flight, entry.last_started) {
        (Some(_), Some(started)) => now.saturating_duration_since(started) < limit,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> QueryCache {
        QueryCache::new(CacheSettings::default())
    }

    #[test]
    fn key_display_matches_query_identity() {
        assert_eq!(QueryKey::Jobs.to_string(), "[\"jobs\"]");
        assert_eq!(QueryKey::Logs { lines: 500 }.to_string(), "[\"logs\", 500]");
    }

    #[test]
    fn unknown_key_snapshot_is_loading() {
        let cache = cache();
        let snap = cache.snapshot(&QueryKey::Stats);
        assert!(snap.is_loading);
        assert!(snap.data.is_none());
        assert!(!snap.is_fetching);
    }

    #[test]
    fn begin_fetch_dedups_in_flight() {
        let mut cache = cache();
        let now = Instant::now();
        cache.subscribe(QueryKey::Stats, now);
        cache.subscribe(QueryKey::Stats, now);
        let first = cache.begin_fetch(QueryKey::Stats, now);
        assert!(first.is_some());
        assert_eq!(cache.begin_fetch(QueryKey::Stats, now), None);
        assert!(cache.due(now).is_empty());
    }
}
