//! Listing view model
//!
//! Jobs as the page shows them: the API record plus two display-only
//! annotations (featured flag and posted date), and the featured/regular
//! split driven by the search box.

use chrono::{Duration, NaiveDate};
use common::{Job, NewJob};
use rand::Rng;
use serde::Serialize;

/// How many of the fetched jobs are flagged featured
pub const FEATURED_COUNT: usize = 3;

/// Upper bound (inclusive) of the random posted-date offset, in days
pub const MAX_POSTED_OFFSET_DAYS: i64 = 29;

/// A job with its display annotations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedJob {
    pub job: Job,
    pub featured: bool,
    pub posted_date: NaiveDate,
}

impl ListedJob {
    /// Display form of a record returned by the create call. Server-echoed
    /// annotations win; otherwise the submitted draft's values are used.
    pub fn from_created(job: Job, submitted: &NewJob) -> Self {
        let featured = job.featured.unwrap_or(submitted.featured);
        let posted_date = job
            .posted_date
            .as_deref()
            .and_then(parse_posted_date)
            .unwrap_or(submitted.posted_date);
        Self {
            job,
            featured,
            posted_date,
        }
    }

    /// Case-insensitive title substring match
    pub fn matches(&self, query: &str) -> bool {
        self.job
            .title
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Annotates a freshly fetched list: the first [`FEATURED_COUNT`] records are
/// featured, and each gets a posted date `today - rand(0..=29)` days.
pub fn annotate<R: Rng + ?Sized>(jobs: Vec<Job>, today: NaiveDate, rng: &mut R) -> Vec<ListedJob> {
    jobs.into_iter()
        .enumerate()
        .map(|(index, job)| {
            let offset = rng.gen_range(0..=MAX_POSTED_OFFSET_DAYS);
            ListedJob {
                job,
                featured: index < FEATURED_COUNT,
                posted_date: today - Duration::days(offset),
            }
        })
        .collect()
}

/// Accepts `YYYY-MM-DD` and anything starting with it (e.g. RFC 3339)
pub fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// "Today", "Yesterday", "N days ago"
pub fn age_label(posted: NaiveDate, today: NaiveDate) -> String {
    match (today - posted).num_days().abs() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n => format!("{n} days ago"),
    }
}

/// The two listing sections for one query
#[derive(Debug, Default, Serialize)]
pub struct JobSections<'a> {
    pub featured: Vec<&'a ListedJob>,
    pub normal: Vec<&'a ListedJob>,
}

impl<'a> JobSections<'a> {
    /// Filters `jobs` by `query`, then splits on the featured flag.
    /// Order within each section follows list order.
    pub fn build(jobs: &'a [ListedJob], query: &str) -> Self {
        let (featured, normal): (Vec<_>, Vec<_>) = jobs
            .iter()
            .filter(|job| job.matches(query))
            .partition(|job| job.featured);
        Self { featured, normal }
    }

    pub fn len(&self) -> usize {
        self.featured.len() + self.normal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
