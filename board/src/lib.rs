//! Job board landing page
//!
//! The page's state and the transforms behind it: fetched jobs annotated
//! for display, the featured/regular split, saved jobs, the post-job draft,
//! the scroll-to-top control, and a decorative particle backdrop. `render`
//! draws all of it for a terminal.

pub mod backdrop;
pub mod config;
pub mod content;
pub mod document;
pub mod listing;
pub mod logging;
pub mod page;
pub mod render;
pub mod saved;
pub mod scroll;

pub use config::Config;
pub use listing::{JobSections, ListedJob};
pub use page::{HomePage, Mounted};
