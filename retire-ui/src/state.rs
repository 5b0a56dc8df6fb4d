//! Application state for the retirement calculator.
//!
//! Holds the session's inputs, the last successful results and the latest
//! notification. Created fresh for every session; nothing is persisted.

use std::fmt;

use retire_core::{
    CalculatorError, CalculatorInputs, CalculatorResults, InputField, RetirementCalculator,
};
use tracing::{debug, trace, warn};

use crate::utils::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A transient message shown after the user presses "Calculate".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn calculation_complete() -> Self {
        Self {
            kind: NotificationKind::Info,
            title: "Calculation Complete",
            description: "Your retirement projection has been updated.",
        }
    }

    pub fn from_error(error: &CalculatorError) -> Self {
        match error {
            CalculatorError::InvalidAges { .. } => Self {
                kind: NotificationKind::Error,
                title: "Invalid Ages",
                description: "Retirement age must be greater than current age",
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Form-local state owned by the running calculator.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current field values, starting from the form defaults.
    pub inputs: CalculatorInputs,

    /// Results of the last successful calculation. Editing inputs leaves
    /// these in place until the next successful calculation.
    pub results: Option<CalculatorResults>,

    /// Most recent notification, if any.
    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the raw text of one field, coercing unparseable text to 0.
    pub fn edit_field(
        &mut self,
        field: InputField,
        raw: &str,
    ) {
        let value = parse_number(raw);
        trace!(field = field.key(), raw, value, "field edited");
        self.inputs.set(field, value);
    }

    /// Runs the projection on the current inputs.
    ///
    /// Success replaces the results wholesale; failure keeps whatever was
    /// shown before. Either way the returned notification is also stored.
    pub fn calculate(&mut self) -> Notification {
        let notification = match RetirementCalculator::new().calculate(&self.inputs) {
            Ok(results) => {
                debug!(
                    total_needed = results.total_needed,
                    years_until_retirement = results.years_until_retirement,
                    required_monthly_savings = results.required_monthly_savings,
                    "calculation complete"
                );
                self.results = Some(results);
                Notification::calculation_complete()
            }
            Err(error) => {
                warn!(%error, "calculation rejected");
                Notification::from_error(&error)
            }
        };
        self.notification = Some(notification.clone());
        notification
    }

    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
