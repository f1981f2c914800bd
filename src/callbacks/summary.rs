//! "Done" button callback.

use super::SharedPanel;
use crate::AppWindow;

pub fn setup_summary_callbacks(ui: &AppWindow, panel: SharedPanel) {
    ui.on_done(move || {
        let summary = panel.borrow_mut().done();
        tracing::debug!(?summary, "done clicked");
    });
}
