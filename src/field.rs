//! Form field identifiers and the raw values captured from the inputs.
//!
//! Values are kept exactly as typed. Month, year and CVC are display
//! strings, never parsed into integers.

use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One of the five text inputs of the card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// Cardholder name
    Name,
    /// Card number
    Number,
    /// Expiry month (MM)
    Month,
    /// Expiry year (YY)
    Year,
    /// Card verification code
    Cvc,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Number,
        Field::Month,
        Field::Year,
        Field::Cvc,
    ];

    /// Returns the lowercase identifier of the field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::Month => "month",
            Self::Year => "year",
            Self::Cvc => "cvc",
        }
    }

    /// Returns the human-readable label shown next to the input.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Cardholder Name",
            Self::Number => "Card Number",
            Self::Month => "Exp. Date (MM)",
            Self::Year => "Exp. Date (YY)",
            Self::Cvc => "CVC",
        }
    }

    /// Position of the field in [`Field::ALL`].
    #[inline]
    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Number => 1,
            Self::Month => 2,
            Self::Year => 3,
            Self::Cvc => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown field '{}' (expected name, number, month, year or cvc)",
            self.0
        )
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "number" | "card" | "card-number" => Ok(Self::Number),
            "month" | "mm" => Ok(Self::Month),
            "year" | "yy" => Ok(Self::Year),
            "cvc" | "cvv" => Ok(Self::Cvc),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Raw values of the five inputs.
///
/// The buffers are wiped when the form is cleared and when the value is
/// dropped. `Debug` masks the card number and the CVC.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FormFields {
    name: String,
    number: String,
    month: String,
    year: String,
    cvc: String,
}

impl FormFields {
    /// Creates an empty set of fields.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning `self` for chaining.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Cvc => &self.cvc,
        }
    }

    /// Replaces the value of a field. The previous buffer is wiped.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = self.slot_mut(field);
        slot.zeroize();
        *slot = value.into();
    }

    /// Wipes every field back to the empty string.
    pub fn clear(&mut self) {
        self.zeroize();
    }

    /// Returns true if every field is the empty string.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Iterates `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Number => &mut self.number,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
            Field::Cvc => &mut self.cvc,
        }
    }
}

/// Masks all but the last four non-space characters of a card number.
pub(crate) fn mask_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().filter(|c| *c != ' ').collect();
    let visible = chars.len().saturating_sub(4);
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { *c })
        .collect()
}

impl fmt::Debug for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the full number or the CVC in logs
        f.debug_struct("FormFields")
            .field("name", &self.name)
            .field("number", &mask_number(&self.number))
            .field("month", &self.month)
            .field("year", &self.year)
            .field("cvc", &"*".repeat(self.cvc.chars().count()))
            .finish()
    }
}
