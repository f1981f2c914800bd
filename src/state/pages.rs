//! Page selections and the derived "all pages" flag.

use crate::error::{Error, Result};
use crate::state::Summary;
use std::fmt;
use std::str::FromStr;

/// Number of pages shown when nothing else is configured.
pub const DEFAULT_PAGE_COUNT: u32 = 4;

/// Largest page count the panel accepts from any source.
pub const MAX_PAGE_COUNT: u32 = 50;

/// A validated page count in `1..=MAX_PAGE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCount(u32);

impl PageCount {
    pub fn new(count: i64) -> Result<Self> {
        match u32::try_from(count) {
            Ok(n) if (1..=MAX_PAGE_COUNT).contains(&n) => Ok(Self(n)),
            _ => Err(Error::InvalidPageCount(count.to_string())),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageCount {
    fn default() -> Self {
        Self(DEFAULT_PAGE_COUNT)
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PageCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let parsed: i64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidPageCount(trimmed.to_string()))?;
        Self::new(parsed)
    }
}

/// Display label for a 1-based page number.
pub fn page_label(number: u32) -> String {
    format!("Page {number}")
}

/// One page and whether it is included in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    pub number: u32,
    pub label: String,
    pub checked: bool,
}

/// Selection truth for the whole panel.
///
/// `selections` always holds exactly one entry per page, ascending by page
/// number. `all_checked` is recomputed after every single-page change and
/// taken as given by [`PanelState::set_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    selections: Vec<PageSelection>,
    all_checked: bool,
}

impl PanelState {
    pub fn new(count: PageCount) -> Self {
        let selections = (1..=count.get())
            .map(|number| PageSelection {
                number,
                label: page_label(number),
                checked: false,
            })
            .collect();
        Self {
            selections,
            all_checked: false,
        }
    }

    /// Replace every selection with a fresh, unchecked set for `count` pages.
    pub fn initialize(&mut self, count: PageCount) {
        *self = Self::new(count);
    }

    pub fn selections(&self) -> &[PageSelection] {
        &self.selections
    }

    pub fn page_count(&self) -> usize {
        self.selections.len()
    }

    pub fn all_checked(&self) -> bool {
        self.all_checked
    }

    pub fn is_checked(&self, label: &str) -> Option<bool> {
        self.position(label).map(|i| self.selections[i].checked)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.selections.iter().position(|p| p.label == label)
    }

    pub fn set_all(&mut self, checked: bool) {
        for page in &mut self.selections {
            page.checked = checked;
        }
        self.all_checked = checked;
        tracing::debug!(checked, pages = self.selections.len(), "set all pages");
    }

    pub fn set_page(&mut self, label: &str, checked: bool) -> Result<()> {
        let index = self
            .position(label)
            .ok_or_else(|| Error::UnknownPage(label.to_string()))?;
        self.set_page_at(index, checked);
        Ok(())
    }

    /// Index-addressed variant of [`PanelState::set_page`].
    ///
    /// Out-of-range indices are ignored.
    pub fn set_page_at(&mut self, index: usize, checked: bool) {
        let Some(page) = self.selections.get_mut(index) else {
            return;
        };
        page.checked = checked;
        self.all_checked = self.selections.iter().all(|p| p.checked);
        tracing::debug!(
            page = index + 1,
            checked,
            all_checked = self.all_checked,
            "set page"
        );
    }

    pub fn checked_labels(&self) -> Vec<String> {
        self.selections
            .iter()
            .filter(|p| p.checked)
            .map(|p| p.label.clone())
            .collect()
    }

    pub fn summarize(&self) -> Summary {
        let checked = self.checked_labels();
        if checked.is_empty() {
            Summary::Empty
        } else if checked.len() == self.selections.len() {
            Summary::AllSelected
        } else {
            Summary::Partial(checked)
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(PageCount::default())
    }
}
