//! Pointer interaction state for a single checkbox.
//!
//! A checkbox shows one of eight icons. Which one depends on whether it is
//! checked and on the recent pointer history: hovering, pressing, releasing
//! over a checked box, and the short window right after a click that checked
//! it. [`Variant::select`] is the pure mapping from those flags to an icon;
//! [`CheckboxControl`] applies pointer events to the flags.

use crate::deferred::{ClearTicket, DeferredClear};
use std::time::{Duration, Instant};

/// How long the "just clicked" icon stays up after checking a box.
pub const JUST_CLICKED_WINDOW: Duration = Duration::from_millis(100);

/// Pointer events delivered by the host, in host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionFlags {
    pub hovered: bool,
    pub pressed: bool,
    pub was_just_pressed: bool,
    pub just_clicked: bool,
}

/// Everything the icon choice depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckboxVisualState {
    pub checked: bool,
    pub flags: InteractionFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    DefaultUnchecked,
    HoverUnchecked,
    PressedUnchecked,
    JustClickedChecked,
    SettledChecked,
    HoverChecked,
    PressedChecked,
    HoverAfterPressChecked,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::DefaultUnchecked,
        Variant::HoverUnchecked,
        Variant::PressedUnchecked,
        Variant::JustClickedChecked,
        Variant::SettledChecked,
        Variant::HoverChecked,
        Variant::PressedChecked,
        Variant::HoverAfterPressChecked,
    ];

    /// First matching rule wins.
    pub fn select(state: &CheckboxVisualState) -> Variant {
        let InteractionFlags {
            hovered,
            pressed,
            was_just_pressed,
            just_clicked,
        } = state.flags;

        if !state.checked {
            return if pressed && hovered {
                Variant::PressedUnchecked
            } else if hovered {
                Variant::HoverUnchecked
            } else {
                Variant::DefaultUnchecked
            };
        }

        if pressed && hovered {
            Variant::PressedChecked
        } else if hovered && was_just_pressed {
            Variant::HoverAfterPressChecked
        } else if hovered && just_clicked {
            Variant::JustClickedChecked
        } else if hovered {
            Variant::HoverChecked
        } else if just_clicked {
            Variant::JustClickedChecked
        } else {
            Variant::SettledChecked
        }
    }

    /// Asset label of the icon, without extension.
    pub fn asset_name(self) -> &'static str {
        match self {
            Variant::DefaultUnchecked => "checkbox-default",
            Variant::HoverUnchecked => "checkbox-var2",
            Variant::PressedUnchecked => "checkbox-var3",
            Variant::JustClickedChecked => "checkbox-var4",
            Variant::SettledChecked => "checkbox-var5",
            Variant::HoverChecked => "checkbox-var6",
            Variant::PressedChecked => "checkbox-var7",
            Variant::HoverAfterPressChecked => "checkbox-var8",
        }
    }

    /// Position in [`Variant::ALL`]; the UI indexes its icon array with it.
    pub fn index(self) -> usize {
        match self {
            Variant::DefaultUnchecked => 0,
            Variant::HoverUnchecked => 1,
            Variant::PressedUnchecked => 2,
            Variant::JustClickedChecked => 3,
            Variant::SettledChecked => 4,
            Variant::HoverChecked => 5,
            Variant::PressedChecked => 6,
            Variant::HoverAfterPressChecked => 7,
        }
    }
}

/// Transient pointer state of one checkbox.
///
/// The checked value is not stored here; the owner passes it in with each
/// event and learns about toggles through the callback given to
/// [`CheckboxControl::click`].
#[derive(Debug, Default)]
pub struct CheckboxControl {
    flags: InteractionFlags,
    clear: DeferredClear,
}

impl CheckboxControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> InteractionFlags {
        self.flags
    }

    pub fn visual_state(&self, checked: bool) -> CheckboxVisualState {
        CheckboxVisualState {
            checked,
            flags: self.flags,
        }
    }

    pub fn variant(&self, checked: bool) -> Variant {
        Variant::select(&self.visual_state(checked))
    }

    pub fn pointer_enter(&mut self) {
        self.flags.hovered = true;
        if !self.flags.pressed {
            self.flags.was_just_pressed = false;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.flags = InteractionFlags::default();
        self.clear.cancel();
    }

    pub fn pointer_down(&mut self) {
        self.flags.pressed = true;
        self.flags.was_just_pressed = false;
        self.reset_just_clicked();
    }

    pub fn pointer_up(&mut self, checked: bool) {
        self.flags.pressed = false;
        if self.flags.hovered && checked {
            self.flags.was_just_pressed = true;
        }
        self.reset_just_clicked();
    }

    /// Toggle `checked` through `on_toggle` and update the click feedback.
    ///
    /// Returns a ticket when a deferred clear of `just_clicked` was
    /// scheduled; the host hands it back to [`CheckboxControl::expire`]
    /// after [`ClearTicket::delay`].
    pub fn click(
        &mut self,
        checked: bool,
        now: Instant,
        on_toggle: impl FnOnce(bool),
    ) -> Option<ClearTicket> {
        let new_checked = !checked;
        on_toggle(new_checked);
        self.flags.pressed = false;
        self.flags.was_just_pressed = false;
        if new_checked {
            self.flags.just_clicked = true;
            Some(self.clear.schedule(now, JUST_CLICKED_WINDOW))
        } else {
            self.reset_just_clicked();
            None
        }
    }

    /// Apply one event. Only [`PointerEvent::Click`] uses `now` and
    /// `on_toggle`.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        checked: bool,
        now: Instant,
        on_toggle: impl FnOnce(bool),
    ) -> Option<ClearTicket> {
        tracing::trace!(?event, checked, flags = ?self.flags, "checkbox event");
        match event {
            PointerEvent::Enter => self.pointer_enter(),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::Down => self.pointer_down(),
            PointerEvent::Up => self.pointer_up(checked),
            PointerEvent::Click => return self.click(checked, now, on_toggle),
        }
        None
    }

    /// Clear `just_clicked` if `ticket` is still current. Returns whether
    /// anything changed.
    pub fn expire(&mut self, ticket: ClearTicket) -> bool {
        if self.clear.fire(ticket) {
            self.flags.just_clicked = false;
            true
        } else {
            false
        }
    }

    /// Clock-driven alternative to [`CheckboxControl::expire`].
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.clear.poll(now) {
            self.flags.just_clicked = false;
            true
        } else {
            false
        }
    }

    fn reset_just_clicked(&mut self) {
        self.flags.just_clicked = false;
        self.clear.cancel();
    }
}
