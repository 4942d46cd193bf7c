//! Static page content: category chips, location options, stat cards and
//! technology badges.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub static CATEGORIES: [Category; 4] = [
    Category { id: "all", name: "All Jobs" },
    Category { id: "tech", name: "Technology" },
    Category { id: "design", name: "Design" },
    Category { id: "remote", name: "Remote" },
];

pub const DEFAULT_CATEGORY: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub static LOCATIONS: [LocationOption; 4] = [
    LocationOption { value: "", label: "Any Location" },
    LocationOption { value: "remote", label: "Remote" },
    LocationOption { value: "sf", label: "San Francisco" },
    LocationOption { value: "ny", label: "New York" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
}

impl StatCard {
    /// Value shown while the job list is still loading
    pub const PENDING: &'static str = "...";

    pub fn display_value(&self, loading: bool) -> &'static str {
        if loading { Self::PENDING } else { self.value }
    }
}

pub static STATS: [StatCard; 3] = [
    StatCard { value: "10,000+", label: "Active Job Listings" },
    StatCard { value: "5M+", label: "Registered Users" },
    StatCard { value: "93%", label: "Placement Rate" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub name: &'static str,
    pub icon: &'static str,
}

pub static TECHNOLOGIES: [TechBadge; 6] = [
    TechBadge { name: "React", icon: "⚛️" },
    TechBadge { name: "Vue", icon: "🟢" },
    TechBadge { name: "Angular", icon: "🔺" },
    TechBadge { name: "Node.js", icon: "🟢" },
    TechBadge { name: "Python", icon: "🐍" },
    TechBadge { name: "TensorFlow", icon: "🧠" },
];

pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn location(value: &str) -> Option<&'static LocationOption> {
    LOCATIONS.iter().find(|l| l.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(category("design").map(|c| c.name), Some("Design"));
        assert!(category("finance").is_none());
        assert_eq!(location("sf").map(|l| l.label), Some("San Francisco"));
        assert_eq!(location("").map(|l| l.label), Some("Any Location"));
    }

    #[test]
    fn test_stat_value_pending_while_loading() {
        assert_eq!(STATS[0].display_value(true), "...");
        assert_eq!(STATS[0].display_value(false), "10,000+");
    }
}
