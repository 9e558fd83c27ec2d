//! Field validation.
//!
//! Every field is required. The card number must additionally consist of
//! digits and spaces only; that rule is checked on every keystroke and
//! again at submit time, since the value may have been altered in between.
//!
//! # Example
//!
//! ```
//! use card_form::validate::{validate_field, validate_form};
//! use card_form::{Field, FieldError, FormFields};
//!
//! assert_eq!(validate_field(Field::Name, "   "), Err(FieldError::Blank));
//! assert_eq!(validate_field(Field::Number, "12a4"), Err(FieldError::InvalidFormat));
//! assert_eq!(validate_field(Field::Cvc, "123"), Ok(()));
//!
//! let report = validate_form(&FormFields::new());
//! assert!(!report.is_valid());
//! assert_eq!(report.error_count(), 5);
//! ```

use crate::error::FieldError;
use crate::field::{Field, FormFields};
use crate::format::has_invalid_characters;

/// Outcome of validating one field.
pub type FieldResult = Result<(), FieldError>;

/// Validates a single field value as done on submit.
///
/// Blank is reported before the character-set check.
pub fn validate_field(field: Field, value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err(FieldError::Blank);
    }

    if field == Field::Number {
        check_number_input(value)?;
    }

    Ok(())
}

/// Character-set check run while the card number is being typed.
///
/// An empty value passes: blank is only an error on submit.
///
/// # Example
///
/// ```
/// use card_form::validate::check_number_input;
/// use card_form::FieldError;
///
/// assert!(check_number_input("").is_ok());
/// assert!(check_number_input("1234 56").is_ok());
/// assert_eq!(check_number_input("12-4"), Err(FieldError::InvalidFormat));
/// ```
#[inline]
pub fn check_number_input(value: &str) -> FieldResult {
    if has_invalid_characters(value) {
        Err(FieldError::InvalidFormat)
    } else {
        Ok(())
    }
}

/// Validates every field of the form.
pub fn validate_form(fields: &FormFields) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (field, value) in fields.iter() {
        report.record(field, validate_field(field, value));
    }
    report
}

/// Per-field results of one validation run.
///
/// The form is valid only if every field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: [Option<FieldError>; 5],
}

impl ValidationReport {
    /// Creates a report in which every field passes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the result for a field, replacing any earlier one.
    pub fn record(&mut self, field: Field, result: FieldResult) {
        self.errors[field.index()] = result.err();
    }

    /// Returns the result for a field.
    #[inline]
    pub fn result(&self, field: Field) -> FieldResult {
        match self.errors[field.index()] {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns the error for a field, if it failed.
    #[inline]
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    /// Returns true if every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    /// Iterates the failing fields in display order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .iter()
            .filter_map(move |f| self.error_for(*f).map(|e| (*f, e)))
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_some()).count()
    }

    /// Removes every recorded error.
    pub fn clear(&mut self) {
        self.errors = [None; 5];
    }
}
