use chrono::{DateTime, NaiveDateTime};

use crate::logs::{classify_line, lines_newest_first, LogCounts, SpanStyle};
use crate::query::{QueryCache, QueryKey};
use crate::{company_logo, AppState, JobsByCompany, Route, Theme, TopJobsResult};

/// Maximum number of cards in the top jobs panel.
pub const TOP_JOBS_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub route: Route,
    pub theme: Theme,
    pub nav: Vec<NavItem>,
    pub page: PageView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home(HomeView),
    Jobs(PageBody<Vec<CompanyGroupView>>),
    Logs(PageBody<Vec<LogLineView>>),
}

/// Loading / error / data tri-state of a page that needs its data to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody<T> {
    Loading(String),
    Error(String),
    Ready(T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub total_jobs: u64,
    pub companies: u64,
    pub total_scrapes: u64,
    pub avg_duration: String,
    pub last_scrape: String,
    pub warnings: usize,
    pub errors: usize,
    pub pie: Vec<PieSlice>,
    pub top_jobs: TopJobsView,
    /// Set while the latest stats poll failed; the numbers above are stale.
    pub stats_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Share of the whole pie, 0.0..=1.0.
    pub fraction: f32,
    /// Where the slice starts, as a fraction of a full turn.
    pub start: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopJobsView {
    Loading,
    Error(String),
    Ready {
        badge: String,
        cards: Vec<TopJobCard>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopJobCard {
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub link: String,
    pub logo: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyGroupView {
    pub company: String,
    pub header: String,
    pub count: usize,
    pub expanded: bool,
    pub logo: &'static str,
    pub jobs: Vec<JobLineView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLineView {
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLineView {
    pub segments: Vec<LogSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSegment {
    pub text: String,
    pub style: SpanStyle,
}

pub(crate) fn build(state: &AppState, theme: Theme) -> AppViewModel {
    let route = state.route();
    let nav = Route::ALL
        .into_iter()
        .map(|r| NavItem {
            route: r,
            label: r.title(),
            active: r == route,
        })
        .collect();

    let cache = state.cache();
    let logs_key = QueryKey::Logs {
        lines: state.log_lines(),
    };
    let page = match route {
        Route::Home => PageView::Home(home_view(cache, logs_key, theme)),
        Route::Jobs => PageView::Jobs(jobs_view(state, theme)),
        Route::Logs => PageView::Logs(logs_view(cache, logs_key)),
    };

    AppViewModel {
        route,
        theme,
        nav,
        page,
    }
}

fn home_view(cache: &QueryCache, logs_key: QueryKey, theme: Theme) -> HomeView {
    let stats_state = cache.snapshot(&QueryKey::Stats);
    let stats = stats_state.data.and_then(|d| d.as_stats());

    let log_text = cache
        .snapshot(&logs_key)
        .data
        .and_then(|d| d.as_logs())
        .unwrap_or("");
    let counts = LogCounts::from_text(log_text);

    let pie = cache
        .snapshot(&QueryKey::Jobs)
        .data
        .and_then(|d| d.as_jobs())
        .map(pie_slices)
        .unwrap_or_default();

    HomeView {
        total_jobs: stats.map_or(0, |s| s.total_jobs),
        companies: stats.map_or(0, |s| s.companies),
        total_scrapes: stats.map_or(0, |s| s.total_scrapes),
        avg_duration: format!("{:.2}s", stats.map_or(0.0, |s| s.scrape_durations_seconds)),
        last_scrape: stats.map_or_else(|| "N/A".to_string(), |s| format_last_scrape(&s.last_scrape)),
        warnings: counts.warnings,
        errors: counts.errors,
        pie,
        top_jobs: top_jobs_view(cache, theme),
        stats_error: stats_state
            .error
            .map(|e| format!("Error loading stats: {e}")),
    }
}

fn pie_slices(jobs: &JobsByCompany) -> Vec<PieSlice> {
    let total = jobs.total_jobs();
    let mut start = 0.0_f32;
    jobs.iter()
        .map(|group| {
            let value = group.jobs.len();
            let fraction = if total == 0 {
                0.0
            } else {
                value as f32 / total as f32
            };
            let slice = PieSlice {
                label: group.company.clone(),
                value,
                fraction,
                start,
            };
            start += fraction;
            slice
        })
        .collect()
}

fn top_jobs_view(cache: &QueryCache, theme: Theme) -> TopJobsView {
    let snap = cache.snapshot(&QueryKey::TopJobs);
    if snap.is_loading {
        return TopJobsView::Loading;
    }
    match (snap.error, snap.data.and_then(|d| d.as_top_jobs())) {
        (None, Some(top)) => top_jobs_ready(top, theme),
        _ => TopJobsView::Error("Error loading jobs".to_string()),
    }
}

fn top_jobs_ready(top: &TopJobsResult, theme: Theme) -> TopJobsView {
    let badge = if top.keywords.is_empty() {
        let n = top.jobs.len();
        format!("{n} {}", if n == 1 { "job" } else { "jobs" })
    } else {
        top.keywords
            .iter()
            .map(|kw| title_case(kw))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let cards = top
        .jobs
        .iter()
        .take(TOP_JOBS_LIMIT)
        .map(|job| TopJobCard {
            company: job.company.clone(),
            title: job.title.clone(),
            location: job.location.clone(),
            link: job.link.clone(),
            logo: company_logo(&job.company, theme.is_dark()),
        })
        .collect();
    TopJobsView::Ready { badge, cards }
}

fn jobs_view(state: &AppState, theme: Theme) -> PageBody<Vec<CompanyGroupView>> {
    let snap = state.cache().snapshot(&QueryKey::Jobs);
    if let Some(err) = snap.error {
        return PageBody::Error(format!("Error loading jobs: {err}"));
    }
    let Some(jobs) = snap.data.and_then(|d| d.as_jobs()) else {
        return PageBody::Loading("Loading jobs...".to_string());
    };
    let groups = jobs
        .iter()
        .map(|group| CompanyGroupView {
            company: group.company.clone(),
            header: format!("{} ({})", group.company, group.jobs.len()),
            count: group.jobs.len(),
            expanded: state.is_expanded(&group.company),
            logo: company_logo(&group.company, theme.is_dark()),
            jobs: group
                .jobs
                .iter()
                .map(|job| JobLineView {
                    label: match &job.location {
                        Some(location) => format!("{} - {}", job.title, location),
                        None => job.title.clone(),
                    },
                    link: job.link.clone(),
                })
                .collect(),
        })
        .collect();
    PageBody::Ready(groups)
}

fn logs_view(cache: &QueryCache, logs_key: QueryKey) -> PageBody<Vec<LogLineView>> {
    let snap = cache.snapshot(&logs_key);
    if let Some(err) = snap.error {
        return PageBody::Error(format!("Error loading logs: {err}"));
    }
    let Some(text) = snap.data.and_then(|d| d.as_logs()) else {
        return PageBody::Loading("Loading logs...".to_string());
    };
    let lines = lines_newest_first(text)
        .into_iter()
        .map(|line| LogLineView {
            segments: classify_line(line)
                .segments()
                .into_iter()
                .map(|(text, style)| LogSegment {
                    text: text.to_string(),
                    style,
                })
                .collect(),
        })
        .collect();
    PageBody::Ready(lines)
}

/// `2025-10-12 22:44:00` → `October 12 at 10:44 PM`. `N/A` and
/// unparseable values are returned unchanged.
pub fn format_last_scrape(raw: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()));
    match parsed {
        Some(dt) => dt.format("%B %-d at %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// Upper-cases the first letter of every space-separated word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
