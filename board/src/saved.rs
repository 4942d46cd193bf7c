//! Starred jobs, held in memory for the lifetime of the page

use common::JobId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedJobs {
    ids: BTreeSet<JobId>,
}

impl SavedJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`; returns whether it is saved afterwards
    pub fn toggle(&mut self, id: JobId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = JobId> + '_ {
        self.ids.iter().copied()
    }
}
