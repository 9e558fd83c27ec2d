//! Live card preview.
//!
//! The preview is a one-way projection of the form fields onto the card
//! mock-up. Empty inputs fall back to placeholders.
//!
//! # Example
//!
//! ```
//! use card_form::preview::{CardPreview, PreviewConfig};
//! use card_form::{Field, FormFields};
//!
//! let config = PreviewConfig::default();
//! let fields = FormFields::new()
//!     .with(Field::Name, "A B")
//!     .with(Field::Month, "04");
//!
//! let preview = CardPreview::derive(&fields, "1234 5678 9", &config);
//! assert_eq!(preview.name(), "A B");
//! assert_eq!(preview.number_segments(), &["1234", "5678", "9", "0000"]);
//! assert_eq!(preview.expiry(), "04/00");
//! assert_eq!(preview.cvc(), "000");
//! ```

use crate::field::{Field, FormFields};
use crate::format::split_into_segments;

/// Number of segments shown on the card front.
pub const NUMBER_SEGMENTS: usize = 4;

/// Placeholder cardholder name.
pub const DEFAULT_NAME: &str = "Jane Appleseed";

/// Placeholder for each card number segment.
pub const DEFAULT_NUMBER_SEGMENT: &str = "0000";

/// Placeholder for the expiry month and year.
pub const DEFAULT_EXPIRY_PART: &str = "00";

/// Placeholder CVC.
pub const DEFAULT_CVC: &str = "000";

/// Placeholders shown while inputs are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewConfig {
    name: String,
    number_segment: String,
    month: String,
    year: String,
    cvc: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            number_segment: DEFAULT_NUMBER_SEGMENT.to_string(),
            month: DEFAULT_EXPIRY_PART.to_string(),
            year: DEFAULT_EXPIRY_PART.to_string(),
            cvc: DEFAULT_CVC.to_string(),
        }
    }
}

impl PreviewConfig {
    /// Creates the standard placeholders.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placeholder cardholder name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the placeholder used for each missing number segment.
    pub fn with_number_segment(mut self, segment: impl Into<String>) -> Self {
        self.number_segment = segment.into();
        self
    }

    /// Sets the placeholder expiry month.
    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    /// Sets the placeholder expiry year.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Sets the placeholder CVC.
    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = cvc.into();
        self
    }

    /// Placeholder for the given field.
    pub fn placeholder(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number_segment,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Cvc => &self.cvc,
        }
    }
}

/// What the card mock-up currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardPreview {
    name: String,
    number: [String; NUMBER_SEGMENTS],
    expiry: String,
    cvc: String,
}

impl CardPreview {
    /// Preview of an empty form.
    pub fn placeholder(config: &PreviewConfig) -> Self {
        Self::derive(&FormFields::new(), "", config)
    }

    /// Projects the fields onto the card.
    ///
    /// `number` is the formatted card number to show, which may lag behind
    /// the number field while that field holds invalid characters.
    pub fn derive(fields: &FormFields, number: &str, config: &PreviewConfig) -> Self {
        Self {
            name: or_placeholder(fields.get(Field::Name), config.placeholder(Field::Name)),
            number: number_segments(number, config.placeholder(Field::Number)),
            expiry: format!(
                "{}/{}",
                or_placeholder(fields.get(Field::Month), config.placeholder(Field::Month)),
                or_placeholder(fields.get(Field::Year), config.placeholder(Field::Year)),
            ),
            cvc: or_placeholder(fields.get(Field::Cvc), config.placeholder(Field::Cvc)),
        }
    }

    /// Cardholder name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The four number segments.
    #[inline]
    pub fn number_segments(&self) -> &[String; NUMBER_SEGMENTS] {
        &self.number
    }

    /// Number segments joined by single spaces.
    pub fn number(&self) -> String {
        self.number.join(" ")
    }

    /// Expiry as `MM/YY`.
    #[inline]
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// Card verification code.
    #[inline]
    pub fn cvc(&self) -> &str {
        &self.cvc
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Splits a formatted number into exactly four display segments.
///
/// Missing or empty segments fall back to the placeholder, anything past
/// the fourth segment is not shown.
fn number_segments(formatted: &str, placeholder: &str) -> [String; NUMBER_SEGMENTS] {
    let parts = split_into_segments(formatted);
    std::array::from_fn(|i| match parts.get(i) {
        Some(part) if !part.is_empty() => (*part).to_string(),
        _ => placeholder.to_string(),
    })
}
