//! UI layer
//!
//! Contains views, components, widgets, and theme definitions.

pub mod components;
pub mod theme;
pub mod views;
pub mod widgets;
