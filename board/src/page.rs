//! Landing page state
//!
//! Everything the page shows is derived from this struct. Network calls are
//! split into a start and a finish step so a host can run them without
//! holding the page borrowed across the request; the `load` and `submit`
//! helpers do both in sequence.

use chrono::NaiveDate;
use client::JobSource;
use common::{DraftField, Job, NewJob};
use rand::Rng;

use crate::content::{self, DEFAULT_CATEGORY};
use crate::document::{ANIMATION_STYLES, AssetGuard, Document, FONT_STYLESHEET, ScrollListener};
use crate::listing::{JobSections, ListedJob, annotate};
use crate::saved::SavedJobs;
use crate::scroll::{ScrollTarget, ScrollTracker};

pub const LOAD_ERROR: &str = "Failed to load jobs.";
pub const POST_ERROR: &str = "Failed to post job. Please try again.";

/// Resources held while the page is mounted; dropping it unmounts.
#[must_use = "dropping the guard unmounts the page"]
#[derive(Debug)]
pub struct Mounted {
    _font: AssetGuard,
    _animations: AssetGuard,
    scroll: ScrollListener,
}

impl Mounted {
    /// Feeds scroll offsets the document reported since the last call into `page`
    pub fn deliver_scroll(&self, page: &mut HomePage) {
        for offset in self.scroll.take_offsets() {
            page.on_scroll(offset);
        }
    }
}

#[derive(Debug, Clone)]
pub struct HomePage {
    jobs: Vec<ListedJob>,
    loading: bool,
    error: Option<String>,
    query: String,
    saved: SavedJobs,
    draft: NewJob,
    post_form_open: bool,
    scroll: ScrollTracker,
    category: &'static str,
    location: &'static str,
    today: NaiveDate,
}

impl HomePage {
    /// A page that has not received its job list yet
    pub fn new(today: NaiveDate) -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            error: None,
            query: String::new(),
            saved: SavedJobs::new(),
            draft: NewJob::empty(today),
            post_form_open: false,
            scroll: ScrollTracker::new(),
            category: DEFAULT_CATEGORY,
            location: "",
            today,
        }
    }

    /// Installs the page's stylesheets and scroll listener on `document`
    pub fn mount(document: &Document) -> Mounted {
        tracing::debug!("mounting landing page");
        Mounted {
            _font: document.acquire(&FONT_STYLESHEET),
            _animations: document.acquire(&ANIMATION_STYLES),
            scroll: document.listen_scroll(),
        }
    }

    // =========================================================================
    // Job list
    // =========================================================================

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies a fetch result. On failure the current list is kept.
    pub fn finish_load<R: Rng + ?Sized>(&mut self, result: client::Result<Vec<Job>>, rng: &mut R) {
        match result {
            Ok(jobs) => {
                tracing::info!(count = jobs.len(), "job list loaded");
                self.jobs = annotate(jobs, self.today, rng);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load jobs");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// Fetches and applies the job list
    pub async fn load<S, R>(&mut self, source: &S, rng: &mut R)
    where
        S: JobSource + ?Sized,
        R: Rng + ?Sized,
    {
        self.begin_load();
        let result = source.fetch_jobs().await;
        self.finish_load(result, rng);
    }

    pub fn jobs(&self) -> &[ListedJob] {
        &self.jobs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // =========================================================================
    // Search and sections
    // =========================================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sections(&self) -> JobSections<'_> {
        JobSections::build(&self.jobs, &self.query)
    }

    /// Selects a category chip. Unknown ids are ignored.
    pub fn select_category(&mut self, id: &str) -> bool {
        match content::category(id) {
            Some(category) => {
                self.category = category.id;
                true
            }
            None => false,
        }
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Selects a location option. Unknown values are ignored.
    pub fn select_location(&mut self, value: &str) -> bool {
        match content::location(value) {
            Some(location) => {
                self.location = location.value;
                true
            }
            None => false,
        }
    }

    pub fn location(&self) -> &'static str {
        self.location
    }

    // =========================================================================
    // Saved jobs
    // =========================================================================

    pub fn toggle_save(&mut self, id: common::JobId) -> bool {
        self.saved.toggle(id)
    }

    pub fn saved(&self) -> &SavedJobs {
        &self.saved
    }

    // =========================================================================
    // Post-job form
    // =========================================================================

    pub fn open_post_form(&mut self) {
        if !self.post_form_open {
            self.draft = NewJob::empty(self.today);
            self.post_form_open = true;
        }
    }

    /// Cancels the form, discarding the draft
    pub fn close_post_form(&mut self) {
        self.post_form_open = false;
        self.draft = NewJob::empty(self.today);
    }

    pub fn is_post_form_open(&self) -> bool {
        self.post_form_open
    }

    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn set_draft_featured(&mut self, featured: bool) {
        self.draft.featured = featured;
    }

    pub fn draft(&self) -> &NewJob {
        &self.draft
    }

    /// Snapshot of the draft to send. Nothing prevents several snapshots
    /// being in flight at once; each becomes its own record.
    pub fn begin_submit(&self) -> NewJob {
        self.draft.clone()
    }

    /// Applies a create result for the `submitted` payload
    pub fn finish_submit(&mut self, submitted: &NewJob, result: client::Result<Job>) {
        match result {
            Ok(job) => {
                tracing::info!(id = job.id, title = %job.title, "job posted");
                self.jobs.push(ListedJob::from_created(job, submitted));
                self.post_form_open = false;
                self.draft = NewJob::empty(self.today);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to post job");
                self.error = Some(POST_ERROR.to_string());
            }
        }
    }

    /// Posts the current draft; returns whether it was accepted
    pub async fn submit<S>(&mut self, source: &S) -> bool
    where
        S: JobSource + ?Sized,
    {
        let payload = self.begin_submit();
        let result = source.create_job(&payload).await;
        let accepted = result.is_ok();
        self.finish_submit(&payload, result);
        accepted
    }

    // =========================================================================
    // Scroll
    // =========================================================================

    pub fn on_scroll(&mut self, offset: f64) {
        if self.scroll.on_scroll(offset) {
            tracing::trace!(offset, visible = self.scroll.is_visible(), "scroll-to-top toggled");
        }
    }

    pub fn show_scroll_to_top(&self) -> bool {
        self.scroll.is_visible()
    }

    pub fn scroll_to_top(&self) -> ScrollTarget {
        self.scroll.scroll_to_top()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
