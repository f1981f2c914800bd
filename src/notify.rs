//! Transient user notifications (toasts).
//!
//! The panel never renders notifications itself. It hands them to a
//! [`Notifier`], which the host supplies: the Slint window shows a toast,
//! tests collect them into a `Vec<Notification>`.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Success => f.write_str("success"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
}

/// Receives notifications emitted by the panel.
pub trait Notifier {
    fn notify(&mut self, severity: Severity, text: &str);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, severity: Severity, text: &str) {
        self.push(Notification {
            severity,
            text: text.to_string(),
        });
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, severity: Severity, text: &str) {
        (**self).notify(severity, text);
    }
}

/// Screen corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ToastPosition {
    pub fn is_top(self) -> bool {
        matches!(self, ToastPosition::TopLeft | ToastPosition::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, ToastPosition::TopLeft | ToastPosition::BottomLeft)
    }
}
