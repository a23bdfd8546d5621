//! Screens of the terminal form

mod form;
mod run;

pub use form::{FormAction, FormView};
pub use run::{RunAction, RunView};
