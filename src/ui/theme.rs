//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::model::LogLevel;

/// Colors for the form
pub mod form {
    use super::*;

    /// Border of the focused field
    pub const FOCUSED_BORDER: Color = Color::Yellow;
    /// Border of unfocused fields
    pub const NORMAL_BORDER: Color = Color::DarkGray;
    /// Border of a field that failed validation
    pub const INVALID_BORDER: Color = Color::Red;
    /// Placeholder text
    pub const PLACEHOLDER: Color = Color::DarkGray;
    /// Title bar
    pub const TITLE: Color = Color::Cyan;
}

/// Colors for the run screen
pub mod run {
    use super::*;

    /// Progress gauge fill
    pub const GAUGE: Color = Color::Green;
    /// Run ID in the title
    pub const RUN_ID: Color = Color::Yellow;
    /// Status line while cancellation is pending
    pub const CANCELLING: Color = Color::Yellow;
}

/// Color of a run log line
pub fn log_level(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::Reset,
        LogLevel::Success => Color::Green,
        LogLevel::Warning => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}
