//! Pointer input as reported by the host.

use hackerland_config::schema::DragModifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    Middle,
    Other(u32),
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    /// Super / logo key.
    pub logo: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        ctrl: false,
        shift: false,
        logo: false,
    };

    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };

    pub fn has(&self, modifier: DragModifier) -> bool {
        match modifier {
            DragModifier::Alt => self.alt,
            DragModifier::Super => self.logo,
            DragModifier::Ctrl => self.ctrl,
            DragModifier::Shift => self.shift,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        x: f64,
        y: f64,
        button: PointerButton,
        modifiers: Modifiers,
    },
    Motion {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
        button: PointerButton,
    },
}

/// Whether the core used a pointer event. `Unhandled` lets the host apply
/// its default behaviour (focus follows pointer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Consumed,
    Unhandled,
}
