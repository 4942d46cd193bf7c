//! Shared job-board types
//!
//! The wire shapes exchanged with the job API: the record the API returns
//! and the draft the post-job form submits.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the remote job source
pub type JobId = i64;

/// Logo a fresh draft starts with
pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/150";

/// Options offered by the job type selector
pub const JOB_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Internship"];

/// A job record as returned by the API.
///
/// `featured` and `posted_date` are only present when the server echoes
/// them back (the create endpoint does); the listing endpoint omits them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub job_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub salary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(rename = "postedDate", default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
}

/// The post-job form state, serialized verbatim as the create payload
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub logo: String,
    pub featured: bool,
    pub posted_date: NaiveDate,
}

impl NewJob {
    /// An empty draft dated `today`
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            job_type: String::new(),
            salary: String::new(),
            logo: PLACEHOLDER_LOGO.to_string(),
            featured: false,
            posted_date: today,
        }
    }

    /// Sets one free-text field
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Company => self.company = value,
            DraftField::Location => self.location = value,
            DraftField::JobType => self.job_type = value,
            DraftField::Salary => self.salary = value,
            DraftField::Logo => self.logo = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Company => &self.company,
            DraftField::Location => &self.location,
            DraftField::JobType => &self.job_type,
            DraftField::Salary => &self.salary,
            DraftField::Logo => &self.logo,
        }
    }
}

/// Free-text fields of the draft, addressed by their form input name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Company,
    Location,
    JobType,
    Salary,
    Logo,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Title,
        DraftField::Company,
        DraftField::Location,
        DraftField::JobType,
        DraftField::Salary,
        DraftField::Logo,
    ];

    /// The input name used by the form and the JSON payload
    pub fn name(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Company => "company",
            DraftField::Location => "location",
            DraftField::JobType => "type",
            DraftField::Salary => "salary",
            DraftField::Logo => "logo",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("unknown draft field: {s}"))
    }
}

// The API sends `null` for blank columns; treat those like missing keys.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
