//! Selection state for the page selector.
//!
//! This module contains:
//! - Page count validation and page labels
//! - Per-page selections with the derived "all pages" flag
//! - Summary of the selection used by the "Done" action

mod pages;
mod summary;

pub use pages::*;
pub use summary::*;
