//! Callback handlers for the page selector window.
//!
//! This module contains the UI callback wiring organized by functionality:
//! - `selection` - Checkbox pointer events and deferred "just clicked" clears
//! - `summary` - The "Done" button
//! - `pages` - Changing the number of pages

pub mod pages;
pub mod selection;
pub mod summary;

use crate::toast::ToastNotifier;
use crate::{AppWindow, PageRow};
use page_selector::{RowView, SelectionPanel};
use slint::Model;
use std::cell::RefCell;
use std::rc::Rc;

/// Panel shared between the window callbacks.
pub type SharedPanel = Rc<RefCell<SelectionPanel<ToastNotifier>>>;

fn to_page_row(row: &RowView) -> PageRow {
    PageRow {
        label: row.label.as_str().into(),
        checked: row.checked,
        variant: i32::try_from(row.variant.index()).unwrap_or_default(),
    }
}

/// Page count as the spin box's `int`. Counts are capped well below
/// `i32::MAX`, so saturation never kicks in for a valid count.
pub fn spin_value(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Push the panel's rows and height into the window. Unchanged rows are
/// left alone so the `for` repeater keeps its item state.
pub fn refresh_view(
    ui: &AppWindow,
    panel: &SelectionPanel<ToastNotifier>,
    rows: &slint::VecModel<PageRow>,
) {
    ui.set_all_pages(to_page_row(&panel.all_pages_row()));

    let page_rows = panel.page_rows();
    if rows.row_count() != page_rows.len() {
        rows.set_vec(page_rows.iter().map(to_page_row).collect::<Vec<_>>());
    } else {
        for (i, row) in page_rows.iter().enumerate() {
            let row = to_page_row(row);
            if rows.row_data(i).as_ref() != Some(&row) {
                rows.set_row_data(i, row);
            }
        }
    }

    ui.set_panel_height(panel.height() as f32);
}
