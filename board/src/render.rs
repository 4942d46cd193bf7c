//! Terminal rendering of the landing page

use colored::Colorize;
use std::fmt::Write;

use crate::backdrop::{Frame, PARTICLE_RGB};
use crate::content::{self, CATEGORIES, STATS, TECHNOLOGIES};
use crate::listing::{ListedJob, age_label};
use crate::page::HomePage;
use common::{DraftField, JOB_TYPES, JobId};
use serde::Serialize;

/// Featured cards shown at most
pub const FEATURED_DISPLAY_LIMIT: usize = 3;

pub const LOADING_TEXT: &str = "Loading jobs...";
pub const NO_FEATURED_TEXT: &str = "No featured jobs available.";
pub const NO_REGULAR_TEXT: &str = "No regular jobs available.";
pub const SEARCH_PLACEHOLDER: &str = "Job title, skills, or keywords";
pub const FALLBACK_LOGO: &str = "default-icon.png";

/// Route the apply button leads to
pub fn apply_route(id: JobId) -> String {
    format!("/details/{id}")
}

/// Renders the whole page, top to bottom
pub fn render_page(page: &HomePage, backdrop: Option<&Frame>) -> String {
    let mut out = String::new();

    if let Some(frame) = backdrop {
        let (r, g, b) = PARTICLE_RGB;
        let _ = writeln!(out, "{}", frame.to_string().truecolor(r, g, b).dimmed());
    }

    render_hero(&mut out, page);
    if page.is_post_form_open() {
        render_post_form(&mut out, page);
    }
    render_listings(&mut out, page);
    render_stats(&mut out, page.is_loading());
    render_technologies(&mut out);

    if page.show_scroll_to_top() {
        let _ = writeln!(out, "\n{}", "↑ Back to top".magenta().bold());
    }

    out
}

/// Machine-readable view of what the page currently shows
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageView<'a> {
    query: &'a str,
    category: &'a str,
    location: &'a str,
    loading: bool,
    error: Option<&'a str>,
    featured: Vec<&'a ListedJob>,
    normal: Vec<&'a ListedJob>,
    saved: Vec<JobId>,
    show_scroll_to_top: bool,
}

/// Renders the page's derived state as pretty JSON
pub fn render_json(page: &HomePage) -> serde_json::Result<String> {
    let sections = page.sections();
    let view = PageView {
        query: page.query(),
        category: page.category(),
        location: page.location(),
        loading: page.is_loading(),
        error: page.error(),
        featured: sections.featured,
        normal: sections.normal,
        saved: page.saved().iter().collect(),
        show_scroll_to_top: page.show_scroll_to_top(),
    };
    serde_json::to_string_pretty(&view)
}

fn render_hero(out: &mut String, page: &HomePage) {
    let _ = writeln!(out, "{}", "Find Your Dream Job Today".bold().magenta());
    let _ = writeln!(
        out,
        "Discover thousands of opportunities with top companies and start your next career adventure.\n"
    );

    let query = if page.query().is_empty() {
        SEARCH_PLACEHOLDER.dimmed().to_string()
    } else {
        page.query().to_string()
    };
    let location = content::location(page.location()).map_or("Any Location", |l| l.label);
    let _ = writeln!(out, "🔍 {query}   📍 {location}");

    let chips: Vec<String> = CATEGORIES
        .iter()
        .map(|c| {
            if c.id == page.category() {
                format!("[{}]", c.name).bold().to_string()
            } else {
                format!(" {} ", c.name)
            }
        })
        .collect();
    let _ = writeln!(out, "{}\n", chips.join(" "));
    let _ = writeln!(out, "{}\n", "+ Post a Job".bold());
}

fn render_post_form(out: &mut String, page: &HomePage) {
    let draft = page.draft();
    let _ = writeln!(out, "{}", "Post a New Job".bold().magenta());

    let labels = [
        (DraftField::Title, "Job Title"),
        (DraftField::Company, "Company"),
        (DraftField::Location, "Location"),
        (DraftField::JobType, "Job Type"),
        (DraftField::Salary, "Salary Range"),
        (DraftField::Logo, "Logo URL"),
    ];
    for (field, label) in labels {
        let value = draft.get(field);
        let shown = if value.is_empty() && field == DraftField::JobType {
            format!("Select Job Type ({})", JOB_TYPES.join(", "))
        } else {
            value.to_string()
        };
        let _ = writeln!(out, "  {label:<13} {shown}");
    }
    let checkbox = if draft.featured { "[x]" } else { "[ ]" };
    let _ = writeln!(out, "  {checkbox} Feature this job");
    let _ = writeln!(out, "  Posted {}", draft.posted_date.format("%Y-%m-%d"));
    let _ = writeln!(out, "  (Cancel)  {}\n", "[Post Job]".bold());
}

fn render_listings(out: &mut String, page: &HomePage) {
    let sections = page.sections();
    // Cards stay hidden behind the loading or error line.
    let show_cards = !page.is_loading() && page.error().is_none();

    let _ = writeln!(out, "{}", "🔥 Featured Opportunities".bold().yellow());
    render_status(out, page, sections.featured.is_empty(), NO_FEATURED_TEXT);
    if show_cards {
        for job in sections.featured.iter().take(FEATURED_DISPLAY_LIMIT) {
            render_card(out, page, job, true);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "📈 All Opportunities".bold().blue());
    render_status(out, page, sections.normal.is_empty(), NO_REGULAR_TEXT);
    if show_cards {
        for job in &sections.normal {
            render_card(out, page, job, false);
        }
    }
}

fn render_status(out: &mut String, page: &HomePage, empty: bool, empty_text: &str) {
    if page.is_loading() {
        let _ = writeln!(out, "{}", LOADING_TEXT.dimmed());
    }
    if let Some(error) = page.error() {
        let _ = writeln!(out, "{}", error.red());
    }
    if !page.is_loading() && empty {
        let _ = writeln!(out, "{}", empty_text.dimmed());
    }
}

fn render_card(out: &mut String, page: &HomePage, listed: &ListedJob, premium: bool) {
    let job = &listed.job;
    let star = if page.saved().contains(job.id) {
        "★".yellow().to_string()
    } else {
        "☆".to_string()
    };
    let logo = if job.logo.is_empty() { FALLBACK_LOGO } else { job.logo.as_str() };

    let _ = write!(out, "  {star} {}", job.title.bold());
    if premium {
        let _ = write!(out, "  {}", "Premium position".yellow());
    }
    let _ = writeln!(out);

    let mut details = vec![job.company.as_str(), job.location.as_str(), job.job_type.as_str()];
    if !job.salary.is_empty() {
        details.push(job.salary.as_str());
    }
    details.retain(|d| !d.is_empty());
    let _ = writeln!(out, "    {}", details.join(" · "));
    let _ = writeln!(
        out,
        "    {} · logo {} · Apply → {}",
        age_label(listed.posted_date, page.today()),
        logo,
        apply_route(job.id)
    );
}

fn render_stats(out: &mut String, loading: bool) {
    let _ = writeln!(out, "\n{}", "NEXUS STATISTICS".bold().cyan());
    for stat in STATS.iter() {
        let _ = writeln!(out, "  {:>8}  {}", stat.display_value(loading).bold(), stat.label);
    }
}

fn render_technologies(out: &mut String) {
    let _ = writeln!(out, "\n{}", "TOP TECHNOLOGIES".bold().magenta());
    let badges: Vec<String> = TECHNOLOGIES
        .iter()
        .map(|t| format!("{} {}", t.icon, t.name))
        .collect();
    let _ = writeln!(out, "  {}", badges.join("   "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::tests::{FakeSource, four_jobs, loaded_page, today};
    use crate::page::{HomePage, LOAD_ERROR, POST_ERROR};

    fn plain() {
        colored::control::set_override(false);
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_both_empty_states() {
        plain();
        let source = FakeSource {
            fail_fetch: true,
            ..Default::default()
        };
        let page = loaded_page(&source).await;

        let out = render_page(&page, None);

        assert!(out.contains(LOAD_ERROR));
        assert!(out.contains(NO_FEATURED_TEXT));
        assert!(out.contains(NO_REGULAR_TEXT));
        assert!(!out.contains(LOADING_TEXT));
    }

    #[test]
    fn test_loading_page() {
        plain();
        let page = HomePage::new(today());

        let out = render_page(&page, None);

        assert!(out.contains(LOADING_TEXT));
        assert!(!out.contains(NO_FEATURED_TEXT));
        assert!(out.contains("..."));
        assert!(!out.contains("10,000+"));
    }

    #[tokio::test]
    async fn test_cards_and_stats() {
        plain();
        let mut page = loaded_page(&four_jobs()).await;
        page.toggle_save(2);

        let out = render_page(&page, None);

        assert!(out.contains("★ Product Designer"));
        assert!(out.contains("☆ Backend Engineer"));
        assert!(out.contains("Apply → /details/4"));
        assert!(out.contains(FALLBACK_LOGO));
        assert!(out.contains("10,000+"));
        assert!(out.contains("TensorFlow"));
        assert_eq!(out.matches("Premium position").count(), 3);
    }

    #[tokio::test]
    async fn test_featured_cards_capped() {
        plain();
        let source = four_jobs();
        let mut page = loaded_page(&source).await;
        page.open_post_form();
        page.update_draft(DraftField::Title, "Staff Engineer");
        page.set_draft_featured(true);
        page.submit(&source).await;

        let out = render_page(&page, None);

        assert_eq!(page.sections().featured.len(), 4);
        assert_eq!(out.matches("Premium position").count(), FEATURED_DISPLAY_LIMIT);
    }

    #[tokio::test]
    async fn test_failed_post_hides_cards() {
        plain();
        let source = FakeSource {
            fail_create: true,
            ..four_jobs()
        };
        let mut page = loaded_page(&source).await;
        page.open_post_form();
        page.update_draft(DraftField::Title, "Staff Engineer");
        assert!(!page.submit(&source).await);

        let out = render_page(&page, None);

        assert_eq!(out.matches(POST_ERROR).count(), 2);
        assert!(!out.contains("Premium position"));
        assert!(!out.contains("Backend Engineer"));
        assert!(!out.contains("Recruiter"));
        assert!(!out.contains(NO_FEATURED_TEXT));
        assert_eq!(page.jobs().len(), 4);
    }

    #[test]
    fn test_post_form_and_scroll_control() {
        plain();
        let mut page = HomePage::new(today());
        page.open_post_form();
        page.update_draft(DraftField::Company, "Acme");
        page.on_scroll(450.0);

        let out = render_page(&page, None);

        assert!(out.contains("Post a New Job"));
        assert!(out.contains("Acme"));
        assert!(out.contains("Select Job Type (Full-time, Part-time, Contract, Internship)"));
        assert!(out.contains("↑ Back to top"));
    }

    #[tokio::test]
    async fn test_json_view() {
        let mut page = loaded_page(&four_jobs()).await;
        page.set_query("engineer");
        page.toggle_save(3);

        let value: serde_json::Value = serde_json::from_str(&render_json(&page).unwrap()).unwrap();

        assert_eq!(value["query"], "engineer");
        assert_eq!(value["loading"], false);
        assert_eq!(value["featured"].as_array().unwrap().len(), 2);
        assert_eq!(value["featured"][0]["job"]["id"], 1);
        assert_eq!(value["featured"][0]["featured"], true);
        assert!(value["featured"][0]["postedDate"].is_string());
        assert_eq!(value["normal"].as_array().unwrap().len(), 0);
        assert_eq!(value["saved"], serde_json::json!([3]));
    }

    #[test]
    fn test_apply_route() {
        assert_eq!(apply_route(42), "/details/42");
    }
}
