use std::collections::BTreeSet;
use std::time::Instant;

use crate::query::{CacheSettings, QueryCache, QueryKey, DEFAULT_LOG_LINES};
use crate::view_model::{self, AppViewModel};
use crate::{Effect, Route, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSettings {
    pub cache: CacheSettings,
    /// Line count used by the logs query of every page.
    pub log_lines: u32,
}

impl Default for StateSettings {
    fn default() -> Self {
        Self {
            cache: CacheSettings::default(),
            log_lines: DEFAULT_LOG_LINES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    route: Route,
    mounted: bool,
    cache: QueryCache,
    expanded: BTreeSet<String>,
    log_lines: u32,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(StateSettings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: StateSettings) -> Self {
        Self {
            route: Route::default(),
            mounted: false,
            cache: QueryCache::new(settings.cache),
            expanded: BTreeSet::new(),
            log_lines: settings.log_lines,
            dirty: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn log_lines(&self) -> u32 {
        self.log_lines
    }

    pub fn is_expanded(&self, company: &str) -> bool {
        self.expanded.contains(company)
    }

    pub fn view(&self, theme: Theme) -> AppViewModel {
        view_model::build(self, theme)
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Switches to `route`, moving query observation from the old page to
    /// the new one.
    pub(crate) fn navigate(&mut self, route: Route, now: Instant) {
        if self.mounted && self.route == route {
            return;
        }
        let next = route.queries(self.log_lines);
        for key in &next {
            self.cache.subscribe(*key, now);
        }
        if self.mounted {
            for key in self.route.queries(self.log_lines) {
                self.cache.unsubscribe(key, now);
            }
        }
        self.route = route;
        self.mounted = true;
        self.mark_dirty();
    }

    /// Starts a fetch for every due query.
    pub(crate) fn start_due_fetches(&mut self, now: Instant) -> Vec<Effect> {
        let due = self.cache.due(now);
        let mut effects = Vec::with_capacity(due.len());
        for key in due {
            if let Some(seq) = self.cache.begin_fetch(key, now) {
                effects.push(Effect::Fetch { key, seq });
            }
        }
        if !effects.is_empty() {
            self.mark_dirty();
        }
        effects
    }

    pub(crate) fn resolve(
        &mut self,
        key: QueryKey,
        seq: u64,
        result: crate::QueryResult,
        now: Instant,
    ) -> bool {
        let accepted = self.cache.resolve(key, seq, result, now);
        if accepted {
            self.mark_dirty();
        }
        accepted
    }

    pub(crate) fn collect_garbage(&mut self, now: Instant) {
        if self.cache.collect_garbage(now) > 0 {
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_company(&mut self, company: String) {
        if !self.expanded.remove(&company) {
            self.expanded.insert(company);
        }
        self.mark_dirty();
    }
}
