//! Terminal views for the retirement calculator.
//!
//! - `calculator_form` - the single input/result form
//! - `status_bar` - key hint line shown under the form

mod calculator_form;
mod status_bar;

pub use calculator_form::{on_escape, show_calculator_form};
pub use status_bar::{KeyHint, build_status_bar, hint_text, hints};
