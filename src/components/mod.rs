//! UI Components
//!
//! Leptos components for the landing page.

mod header;
mod articles;

pub use header::Header;
pub use articles::ArticlesSection;
