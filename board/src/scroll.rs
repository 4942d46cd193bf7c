//! Scroll-to-top control

/// Offset past which the control becomes visible
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A scroll request for the host surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTarget {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    visible: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll event; returns true when visibility changed
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let visible = offset > SCROLL_TOP_THRESHOLD;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// What clicking the control asks the host to do
    pub fn scroll_to_top(&self) -> ScrollTarget {
        ScrollTarget {
            top: 0.0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(301.0);
        assert!(tracker.is_visible());
        tracker.on_scroll(299.0);
        assert!(!tracker.is_visible());
        tracker.on_scroll(300.0);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_change_reported_once() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.on_scroll(10.0));
        assert!(tracker.on_scroll(500.0));
        assert!(!tracker.on_scroll(800.0));
        assert!(tracker.on_scroll(0.0));
    }

    #[test]
    fn test_scroll_to_top_is_smooth_to_zero() {
        let target = ScrollTracker::new().scroll_to_top();
        assert_eq!(target.top, 0.0);
        assert_eq!(target.behavior, ScrollBehavior::Smooth);
    }
}
