//! Toast rendering for the Slint window.

use crate::AppWindow;
use page_selector::{Notifier, Severity, ToastPosition};
use slint::{Timer, TimerMode};
use std::time::Duration;

/// Shows the latest notification as a toast and hides it after
/// `auto_dismiss`. A newer toast restarts the dismissal timer.
pub struct ToastNotifier {
    ui: slint::Weak<AppWindow>,
    auto_dismiss: Duration,
    timer: Timer,
}

impl ToastNotifier {
    pub fn new(ui: &AppWindow, auto_dismiss: Duration, position: ToastPosition) -> Self {
        ui.set_toast_top(position.is_top());
        ui.set_toast_left(position.is_left());
        Self {
            ui: slint::ComponentHandle::as_weak(ui),
            auto_dismiss,
            timer: Timer::default(),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, severity: Severity, text: &str) {
        let Some(ui) = self.ui.upgrade() else { return };
        ui.set_toast_text(text.into());
        ui.set_toast_success(severity == Severity::Success);
        ui.set_toast_visible(true);

        let ui_weak = self.ui.clone();
        self.timer.start(TimerMode::SingleShot, self.auto_dismiss, move || {
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_toast_visible(false);
            }
        });
    }
}
