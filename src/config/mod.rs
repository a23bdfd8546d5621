//! Configuration
//!
//! Two layers:
//! - [`Settings`]: optional TOML file with defaults for the form and console
//! - [`RunInput`]: raw text collected from the user, validated into a
//!   [`crate::model::RunConfig`] with every problem reported at once

mod input;
mod settings;

pub use input::{ConfigError, ConfigErrors, Field, RunInput};
pub use settings::{Settings, SettingsError};
