//! Error types for the card form.
//!
//! Field errors are advisory: they block submission and are shown next to
//! the offending input, but never leave the form in an inconsistent state.

use crate::form::ViewState;
use crate::validate::ValidationReport;
use std::fmt;

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldError {
    /// The field is empty or contains only whitespace.
    Blank,

    /// The card number contains characters other than digits and spaces.
    InvalidFormat,
}

impl FieldError {
    /// Returns the message rendered next to the input.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Blank => "Can't be blank",
            Self::InvalidFormat => "Wrong format, numbers only",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// Errors returned by [`CardForm`](crate::CardForm) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submission was blocked by at least one failing field.
    Rejected(ValidationReport),

    /// The action does not apply to the currently visible view.
    WrongView {
        /// The view the action requires.
        expected: ViewState,
        /// The view that is currently visible.
        actual: ViewState,
    },
}

impl FormError {
    /// Returns the validation report if this is a rejected submission.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Rejected(report) => Some(report),
            Self::WrongView { .. } => None,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(report) => {
                let failed: Vec<String> = report
                    .errors()
                    .map(|(field, err)| format!("{}: {}", field, err))
                    .collect();
                write!(f, "form rejected ({})", failed.join(", "))
            }

            Self::WrongView { expected, actual } => {
                write!(
                    f,
                    "action requires the {} view, but the {} view is shown",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for FormError {}
