// Test helper functions for building panels and driving pointer sequences
#![allow(dead_code)]

use page_selector::{
    Notification, PageCount, PendingClear, PointerEvent, SelectionPanel, Target, Variant,
};
use std::time::Instant;

pub type TestPanel = SelectionPanel<Vec<Notification>>;

/// Create a panel with `pages` pages that records its notifications
pub fn create_panel(pages: i64) -> TestPanel {
    SelectionPanel::new(PageCount::new(pages).unwrap(), Vec::new())
}

/// Full click gesture as a host delivers it: enter, down, up, click
pub fn click(panel: &mut TestPanel, target: Target, now: Instant) -> Option<PendingClear> {
    panel.pointer(target, PointerEvent::Enter, now);
    panel.pointer(target, PointerEvent::Down, now);
    panel.pointer(target, PointerEvent::Up, now);
    panel.pointer(target, PointerEvent::Click, now)
}

/// Click and move the pointer away again
pub fn click_and_leave(
    panel: &mut TestPanel,
    target: Target,
    now: Instant,
) -> Option<PendingClear> {
    let pending = click(panel, target, now);
    panel.pointer(target, PointerEvent::Leave, now);
    pending
}

/// Variant currently shown for a page row
pub fn page_variant(panel: &TestPanel, index: usize) -> Variant {
    panel.page_rows()[index].variant
}

/// Labels of the checked pages, in display order
pub fn checked_labels(panel: &TestPanel) -> Vec<String> {
    panel.state().checked_labels()
}
