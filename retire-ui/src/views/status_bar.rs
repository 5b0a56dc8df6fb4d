//! Status bar component for displaying keyboard shortcuts.

use cursive::view::Resizable;
use cursive::views::{LinearLayout, TextView};

/// Keyboard shortcut hint for the status bar.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Joins hints as `key: action │ key: action`.
pub fn hint_text(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Build a status bar from a list of key hints.
pub fn build_status_bar(hints: &[KeyHint]) -> LinearLayout {
    LinearLayout::horizontal().child(TextView::new(hint_text(hints)).full_width())
}

/// Key hints shown under the calculator form.
pub mod hints {
    use super::KeyHint;

    pub const TAB: KeyHint = KeyHint::new("Tab", "Next");
    pub const SHIFT_TAB: KeyHint = KeyHint::new("S-Tab", "Prev");
    pub const ENTER: KeyHint = KeyHint::new("Enter", "Calculate");
    pub const ESC: KeyHint = KeyHint::new("Esc", "Back");
    pub const CTRL_Q: KeyHint = KeyHint::new("C-q", "Quit");
}
