//! Keybinding definitions for backfill
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (quit from anywhere)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Form keys
// =============================================================================

/// Start the run (validates first)
pub const SUBMIT: KeyCode = KeyCode::Enter;

/// Leave the form (quits the application)
pub const ESC: KeyCode = KeyCode::Esc;

/// Next field
pub const NEXT_FIELD: KeyCode = KeyCode::Tab;

/// Previous field
pub const PREV_FIELD: KeyCode = KeyCode::BackTab;

/// Check if key moves focus to the next field (Tab or ↓)
pub fn is_next_field(code: KeyCode) -> bool {
    matches!(code, NEXT_FIELD | KeyCode::Down)
}

/// Check if key moves focus to the previous field (Shift+Tab or ↑)
pub fn is_prev_field(code: KeyCode) -> bool {
    matches!(code, PREV_FIELD | KeyCode::Up)
}

// =============================================================================
// Run screen keys
// =============================================================================

/// Request cancellation of the active run
pub const CANCEL_RUN: KeyCode = KeyCode::Char('c');

/// Quit (asks first while a run is active)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Return to the form once the run finished
pub const BACK: KeyCode = KeyCode::Enter;

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const FORM_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Tab",
        label: "Next",
        color: Color::Cyan,
    },
    KeyHint {
        key: "S-Tab",
        label: "Prev",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Enter",
        label: "Start",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Quit",
        color: Color::Red,
    },
];

pub const RUN_ACTIVE_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "c",
        label: "Cancel run",
        color: Color::Yellow,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

pub const RUN_FINISHED_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        label: "Back to form",
        color: Color::Green,
    },
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
];

pub const CONFIRM_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "y",
        label: "Yes",
        color: Color::Green,
    },
    KeyHint {
        key: "n",
        label: "No",
        color: Color::Red,
    },
];

pub const ALERT_HINTS: &[KeyHint] = &[KeyHint {
    key: "Enter",
    label: "Close",
    color: Color::Cyan,
}];
