use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single job listing as scraped from a company career page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyJobs {
    pub company: String,
    pub jobs: Vec<Job>,
}

/// Jobs grouped by company, in the key order of the `/jobs` response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobsByCompany {
    groups: Vec<CompanyJobs>,
}

impl JobsByCompany {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the jobs of `company`. A replaced company keeps
    /// its original position.
    pub fn insert(&mut self, company: impl Into<String>, jobs: Vec<Job>) {
        let company = company.into();
        match self.groups.iter_mut().find(|g| g.company == company) {
            Some(group) => group.jobs = jobs,
            None => self.groups.push(CompanyJobs { company, jobs }),
        }
    }

    pub fn get(&self, company: &str) -> Option<&[Job]> {
        self.groups
            .iter()
            .find(|g| g.company == company)
            .map(|g| g.jobs.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompanyJobs> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_jobs(&self) -> usize {
        self.groups.iter().map(|g| g.jobs.len()).sum()
    }
}

impl Serialize for JobsByCompany {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.company, &group.jobs)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for JobsByCompany {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct JobsVisitor;

        impl<'de> Visitor<'de> for JobsVisitor {
            type Value = JobsByCompany;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of company name to job list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut jobs = JobsByCompany::new();
                while let Some((company, list)) = access.next_entry::<String, Vec<Job>>()? {
                    jobs.insert(company, list);
                }
                Ok(jobs)
            }
        }

        deserializer.deserialize_map(JobsVisitor)
    }
}

/// Aggregate scrape statistics from `/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_jobs: u64,
    pub companies: u64,
    pub total_scrapes: u64,
    /// Average scrape duration in seconds.
    pub scrape_durations_seconds: f64,
    /// `YYYY-MM-DD HH:MM:SS`, or `N/A` before the first scrape.
    pub last_scrape: String,
}

/// A keyword-matched job from `/top_jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopJob {
    pub company: String,
    pub title: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Keywords that matched this job.
    #[serde(default)]
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopJobsResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default)]
    pub jobs: Vec<TopJob>,
    #[serde(default)]
    pub keywords: Vec<String>,
}
