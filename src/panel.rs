//! The page selection panel: selection state plus one checkbox control per
//! row, and the "Done" summary.

use crate::checkbox::{CheckboxControl, PointerEvent, Variant};
use crate::deferred::ClearTicket;
use crate::error::Result;
use crate::layout;
use crate::notify::Notifier;
use crate::state::{PageCount, PanelState, Summary};
use std::time::{Duration, Instant};

pub const ALL_PAGES_LABEL: &str = "All pages";

/// Which checkbox an event is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    AllPages,
    /// Zero-based row index into the page list.
    Page(usize),
}

/// A scheduled clear of a control's "just clicked" flag.
///
/// Carries the panel epoch so clears from controls replaced by a later
/// [`SelectionPanel::initialize`] are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub target: Target,
    epoch: u64,
    ticket: ClearTicket,
}

impl PendingClear {
    pub fn delay(&self) -> Duration {
        self.ticket.delay()
    }
}

/// Render data for one checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: String,
    pub checked: bool,
    pub variant: Variant,
}

pub struct SelectionPanel<N> {
    count: PageCount,
    state: PanelState,
    all_pages: CheckboxControl,
    pages: Vec<CheckboxControl>,
    notifier: N,
    epoch: u64,
}

impl<N: Notifier> SelectionPanel<N> {
    pub fn new(count: PageCount, notifier: N) -> Self {
        Self {
            count,
            state: PanelState::new(count),
            all_pages: CheckboxControl::new(),
            pages: controls_for(count),
            notifier,
            epoch: 0,
        }
    }

    /// Start over with `count` unchecked pages. Previous selections and
    /// pointer state are discarded.
    pub fn initialize(&mut self, count: PageCount) {
        self.count = count;
        self.state.initialize(count);
        self.all_pages = CheckboxControl::new();
        self.pages = controls_for(count);
        self.epoch += 1;
        tracing::info!(pages = count.get(), "panel initialized");
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn page_count(&self) -> PageCount {
        self.count
    }

    pub fn height(&self) -> u32 {
        layout::panel_height(self.count)
    }

    pub fn set_all(&mut self, checked: bool) {
        self.state.set_all(checked);
    }

    pub fn set_page(&mut self, label: &str, checked: bool) -> Result<()> {
        self.state.set_page(label, checked)
    }

    /// Route a pointer event to a control. Clicks toggle the selection
    /// through the control's callback.
    pub fn pointer(
        &mut self,
        target: Target,
        event: PointerEvent,
        now: Instant,
    ) -> Option<PendingClear> {
        let ticket = match target {
            Target::AllPages => {
                let checked = self.state.all_checked();
                let state = &mut self.state;
                self.all_pages.handle(event, checked, now, |v| state.set_all(v))
            }
            Target::Page(index) => {
                let control = self.pages.get_mut(index)?;
                let checked = self.state.selections()[index].checked;
                let state = &mut self.state;
                control.handle(event, checked, now, |v| state.set_page_at(index, v))
            }
        }?;
        Some(PendingClear {
            target,
            epoch: self.epoch,
            ticket,
        })
    }

    /// Apply a scheduled clear. Returns whether the view changed.
    pub fn expire(&mut self, pending: PendingClear) -> bool {
        if pending.epoch != self.epoch {
            tracing::trace!(?pending.target, "dropping clear from replaced control");
            return false;
        }
        self.control_mut(pending.target)
            .is_some_and(|c| c.expire(pending.ticket))
    }

    /// Clock-driven clear of every elapsed "just clicked" window.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.all_pages.tick(now);
        for control in &mut self.pages {
            changed |= control.tick(now);
        }
        changed
    }

    pub fn summarize(&self) -> Summary {
        self.state.summarize()
    }

    /// The "Done" action: summarize and hand the result to the notifier.
    pub fn done(&mut self) -> Summary {
        let summary = self.summarize();
        let severity = summary.severity();
        let text = summary.message();
        tracing::info!(%severity, %text, "selection summarized");
        self.notifier.notify(severity, &text);
        summary
    }

    pub fn all_pages_row(&self) -> RowView {
        let checked = self.state.all_checked();
        RowView {
            label: ALL_PAGES_LABEL.to_string(),
            checked,
            variant: self.all_pages.variant(checked),
        }
    }

    pub fn page_rows(&self) -> Vec<RowView> {
        self.state
            .selections()
            .iter()
            .zip(&self.pages)
            .map(|(page, control)| RowView {
                label: page.label.clone(),
                checked: page.checked,
                variant: control.variant(page.checked),
            })
            .collect()
    }

    fn control_mut(&mut self, target: Target) -> Option<&mut CheckboxControl> {
        match target {
            Target::AllPages => Some(&mut self.all_pages),
            Target::Page(index) => self.pages.get_mut(index),
        }
    }
}

fn controls_for(count: PageCount) -> Vec<CheckboxControl> {
    (0..count.get()).map(|_| CheckboxControl::new()).collect()
}
