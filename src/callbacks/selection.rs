//! Checkbox pointer callbacks.
//!
//! Handles: pointer events for "All pages" and each page row, and the
//! deferred clear of the "just clicked" icon.

use super::{refresh_view, SharedPanel};
use crate::{AppWindow, PageRow, PointerKind};
use page_selector::{PendingClear, PointerEvent, Target};
use slint::{ComponentHandle, Timer};
use std::rc::Rc;
use std::time::Instant;

/// Sets up all checkbox-related callbacks on the UI.
pub fn setup_selection_callbacks(
    ui: &AppWindow,
    panel: SharedPanel,
    rows: Rc<slint::VecModel<PageRow>>,
) {
    setup_all_pages_pointer(ui, panel.clone(), rows.clone());
    setup_page_pointer(ui, panel, rows);
}

fn setup_all_pages_pointer(
    ui: &AppWindow,
    panel: SharedPanel,
    rows: Rc<slint::VecModel<PageRow>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_all_pages_pointer(move |kind| {
        dispatch(&ui_weak, &panel, &rows, Target::AllPages, kind);
    });
}

fn setup_page_pointer(
    ui: &AppWindow,
    panel: SharedPanel,
    rows: Rc<slint::VecModel<PageRow>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_page_pointer(move |index, kind| {
        let Ok(index) = usize::try_from(index) else { return };
        dispatch(&ui_weak, &panel, &rows, Target::Page(index), kind);
    });
}

fn dispatch(
    ui_weak: &slint::Weak<AppWindow>,
    panel: &SharedPanel,
    rows: &Rc<slint::VecModel<PageRow>>,
    target: Target,
    kind: PointerKind,
) {
    let Some(ui) = ui_weak.upgrade() else { return };
    let pending = panel
        .borrow_mut()
        .pointer(target, pointer_event(kind), Instant::now());
    if let Some(pending) = pending {
        schedule_clear(ui_weak.clone(), panel.clone(), rows.clone(), pending);
    }
    refresh_view(&ui, &panel.borrow(), rows);
}

// Stale clears are ignored by the panel, so timers are never cancelled here.
fn schedule_clear(
    ui_weak: slint::Weak<AppWindow>,
    panel: SharedPanel,
    rows: Rc<slint::VecModel<PageRow>>,
    pending: PendingClear,
) {
    Timer::single_shot(pending.delay(), move || {
        let changed = panel.borrow_mut().expire(pending);
        if !changed {
            return;
        }
        if let Some(ui) = ui_weak.upgrade() {
            refresh_view(&ui, &panel.borrow(), &rows);
        }
    });
}

fn pointer_event(kind: PointerKind) -> PointerEvent {
    match kind {
        PointerKind::Enter => PointerEvent::Enter,
        PointerKind::Leave => PointerEvent::Leave,
        PointerKind::Down => PointerEvent::Down,
        PointerKind::Up => PointerEvent::Up,
        PointerKind::Click => PointerEvent::Click,
    }
}
