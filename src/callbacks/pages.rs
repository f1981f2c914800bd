//! Page count callback.
//!
//! Changing the count rebuilds the panel from scratch; earlier selections
//! are dropped.

use super::{refresh_view, spin_value, SharedPanel};
use crate::{AppWindow, PageRow};
use page_selector::PageCount;
use slint::ComponentHandle;
use std::rc::Rc;

pub fn setup_page_count_callbacks(
    ui: &AppWindow,
    panel: SharedPanel,
    rows: Rc<slint::VecModel<PageRow>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_page_count_edited(move |value| {
        let Some(ui) = ui_weak.upgrade() else { return };
        let current = panel.borrow().page_count();
        match PageCount::new(i64::from(value)) {
            Ok(count) if count == current => {}
            Ok(count) => {
                panel.borrow_mut().initialize(count);
                refresh_view(&ui, &panel.borrow(), &rows);
            }
            Err(e) => {
                tracing::warn!("{e}");
                ui.set_page_count(spin_value(current.get()));
            }
        }
    });
}
