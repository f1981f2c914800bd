//! Page selection panel: pick which pages to print or export.
//!
//! The library holds all of the widget's behaviour and has no rendering
//! dependency:
//! - `state` - per-page selections, the "all pages" flag and the summary
//! - `checkbox` - pointer interaction state and icon variant of one checkbox
//! - `panel` - the composed panel that routes events and emits notifications
//! - `deferred` - generation-keyed cancellable clears
//! - `config` - `config.toml` and command-line settings
//!
//! The `page-selector` binary renders it with Slint.

pub mod checkbox;
pub mod config;
pub mod deferred;
pub mod error;
pub mod layout;
pub mod notify;
pub mod panel;
pub mod state;

pub use checkbox::{CheckboxControl, CheckboxVisualState, InteractionFlags, PointerEvent, Variant};
pub use error::{ConfigError, Error, Result};
pub use notify::{Notification, Notifier, Severity, ToastPosition};
pub use panel::{PendingClear, RowView, SelectionPanel, Target};
pub use state::{PageCount, PageSelection, PanelState, Summary};
