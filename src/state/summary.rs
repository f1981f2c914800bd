//! Classification of the current selection for the "Done" action.

use crate::notify::{Notification, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Empty,
    AllSelected,
    /// Checked page labels in ascending page order.
    Partial(Vec<String>),
}

impl Summary {
    pub fn severity(&self) -> Severity {
        match self {
            Summary::Empty => Severity::Info,
            Summary::AllSelected | Summary::Partial(_) => Severity::Success,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Summary::Empty => "No pages are selected".to_string(),
            Summary::AllSelected => "All pages are selected".to_string(),
            Summary::Partial(labels) => format!("Selected pages: {}", labels.join(", ")),
        }
    }

    pub fn to_notification(&self) -> Notification {
        Notification {
            severity: self.severity(),
            text: self.message(),
        }
    }
}
