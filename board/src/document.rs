//! Host document resources
//!
//! Stylesheets and the scroll listener are acquired through guards; a
//! resource stays installed exactly as long as some guard for it is alive.
//! Scroll offsets reported to the document queue up on every live listener.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// `<link rel="stylesheet">` to an external sheet
    Stylesheet { href: &'static str },
    /// Inline CSS bundled at build time
    InlineStyle { css: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub id: &'static str,
    pub kind: AssetKind,
}

pub static FONT_STYLESHEET: Asset = Asset {
    id: "font-space-grotesk",
    kind: AssetKind::Stylesheet {
        href: "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;500;600;700&family=Syncopate:wght@400;700&display=swap",
    },
};

pub static ANIMATION_STYLES: Asset = Asset {
    id: "board-animations",
    kind: AssetKind::InlineStyle {
        css: include_str!("../assets/animations.css"),
    },
};

#[derive(Debug, Default)]
struct DocumentState {
    assets: BTreeMap<&'static str, usize>,
    /// Pending offsets per listener id
    scroll_listeners: BTreeMap<u64, Vec<f64>>,
    next_listener: u64,
}

/// Shared handle to the host document
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: Arc<Mutex<DocumentState>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs `asset` until the returned guard drops
    pub fn acquire(&self, asset: &'static Asset) -> AssetGuard {
        *self.lock().assets.entry(asset.id).or_insert(0) += 1;
        tracing::trace!(asset = asset.id, "asset installed");
        AssetGuard {
            document: self.clone(),
            asset,
        }
    }

    /// Registers a scroll listener until the returned guard drops
    pub fn listen_scroll(&self) -> ScrollListener {
        let mut state = self.lock();
        let id = state.next_listener;
        state.next_listener += 1;
        state.scroll_listeners.insert(id, Vec::new());
        ScrollListener {
            document: self.clone(),
            id,
        }
    }

    /// Reports a vertical scroll offset; returns how many listeners got it
    pub fn scroll(&self, offset: f64) -> usize {
        let mut state = self.lock();
        for pending in state.scroll_listeners.values_mut() {
            pending.push(offset);
        }
        let delivered = state.scroll_listeners.len();
        if delivered == 0 {
            tracing::trace!(offset, "scroll with no listener");
        }
        delivered
    }

    /// Ids of currently installed assets
    pub fn installed(&self) -> Vec<&'static str> {
        self.lock().assets.keys().copied().collect()
    }

    pub fn scroll_listeners(&self) -> usize {
        self.lock().scroll_listeners.len()
    }
}

#[derive(Debug)]
pub struct AssetGuard {
    document: Document,
    asset: &'static Asset,
}

impl AssetGuard {
    pub fn asset(&self) -> &'static Asset {
        self.asset
    }
}

impl Drop for AssetGuard {
    fn drop(&mut self) {
        let mut state = self.document.lock();
        if let Some(count) = state.assets.get_mut(self.asset.id) {
            *count -= 1;
            if *count == 0 {
                state.assets.remove(self.asset.id);
                tracing::trace!(asset = self.asset.id, "asset removed");
            }
        }
    }
}

#[derive(Debug)]
pub struct ScrollListener {
    document: Document,
    id: u64,
}

impl ScrollListener {
    /// Offsets reported since the last call, oldest first
    pub fn take_offsets(&self) -> Vec<f64> {
        self.document
            .lock()
            .scroll_listeners
            .get_mut(&self.id)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.document.lock().scroll_listeners.remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_removed_when_guard_drops() {
        let document = Document::new();
        let guard = document.acquire(&FONT_STYLESHEET);
        assert_eq!(document.installed(), vec!["font-space-grotesk"]);

        drop(guard);
        assert!(document.installed().is_empty());
    }

    #[test]
    fn test_shared_asset_outlives_first_guard() {
        let document = Document::new();
        let first = document.acquire(&ANIMATION_STYLES);
        let second = document.acquire(&ANIMATION_STYLES);

        drop(first);
        assert_eq!(document.installed(), vec!["board-animations"]);
        drop(second);
        assert!(document.installed().is_empty());
    }

    #[test]
    fn test_scroll_listener_detaches() {
        let document = Document::new();
        let listener = document.listen_scroll();
        assert_eq!(document.scroll_listeners(), 1);
        drop(listener);
        assert_eq!(document.scroll_listeners(), 0);
    }

    #[test]
    fn test_scroll_reaches_live_listeners_in_order() {
        let document = Document::new();
        let first = document.listen_scroll();
        let second = document.listen_scroll();

        assert_eq!(document.scroll(120.0), 2);
        assert_eq!(document.scroll(340.0), 2);

        assert_eq!(first.take_offsets(), vec![120.0, 340.0]);
        assert!(first.take_offsets().is_empty());
        assert_eq!(second.take_offsets(), vec![120.0, 340.0]);
    }

    #[test]
    fn test_scroll_after_detach_is_dropped() {
        let document = Document::new();
        assert_eq!(document.scroll(50.0), 0);

        let listener = document.listen_scroll();
        assert!(listener.take_offsets().is_empty());
        drop(listener);

        assert_eq!(document.scroll(400.0), 0);
        let late = document.listen_scroll();
        assert!(late.take_offsets().is_empty());
    }

    #[test]
    fn test_animation_css_is_bundled() {
        match ANIMATION_STYLES.kind {
            AssetKind::InlineStyle { css } => assert!(css.contains("@keyframes shimmer")),
            other => panic!("unexpected asset kind {other:?}"),
        }
    }
}
