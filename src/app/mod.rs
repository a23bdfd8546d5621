//! Application module
//!
//! Contains the terminal form's state and logic, split into:
//! - `state`: App struct, screens and run lifecycle
//! - `input`: Key event handling
//! - `render`: UI rendering

mod input;
mod render;
mod state;

pub use state::{App, Screen};
