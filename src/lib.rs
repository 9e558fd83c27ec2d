//! # card_form
//!
//! Controller for a credit card entry form with a live card preview.
//!
//! ## Features
//!
//! - Card number grouping in blocks of four, stable under re-formatting
//! - Live preview of name, number, expiry and CVC with placeholders
//! - Required-field and numbers-only validation on submit
//! - Two-view state machine: editing form and success message
//! - Adapters: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{CardForm, Field, ViewState};
//!
//! let mut form = CardForm::new();
//!
//! // Empty submit: every field is blank
//! let err = form.submit().unwrap_err();
//! assert_eq!(err.report().unwrap().error_count(), 5);
//!
//! form.input(Field::Name, "A B").unwrap();
//! form.input(Field::Number, "1111222233334444").unwrap();
//! form.input(Field::Month, "04").unwrap();
//! form.input(Field::Year, "29").unwrap();
//! form.input(Field::Cvc, "123").unwrap();
//!
//! // The preview mirrors the inputs
//! let preview = form.preview();
//! assert_eq!(preview.number_segments(), &["1111", "2222", "3333", "4444"]);
//! assert_eq!(preview.expiry(), "04/29");
//!
//! form.submit().unwrap();
//! assert_eq!(form.view_state(), ViewState::Success);
//!
//! // Continue: back to an empty form
//! form.acknowledge().unwrap();
//! assert_eq!(form.preview().name(), "Jane Appleseed");
//! ```
//!
//! ## Card Formatting
//!
//! ```rust
//! use card_form::format;
//!
//! assert_eq!(format::format_card_number("123456789"), "1234 5678 9");
//! assert_eq!(format::format_card_number("12 34 56"), "1234 56");
//! assert_eq!(format::strip_spaces("1234 5678"), "12345678");
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use card_form::validate::{validate_field, validate_form};
//! use card_form::{Field, FieldError, FormFields};
//!
//! assert_eq!(validate_field(Field::Number, "12a4"), Err(FieldError::InvalidFormat));
//! assert_eq!(FieldError::Blank.to_string(), "Can't be blank");
//!
//! let fields = FormFields::new().with(Field::Name, "A B");
//! let report = validate_form(&fields);
//! assert_eq!(report.error_count(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for rendered views |
//! | `cli` | Command-line tool `cardform` |
//! | `wasm` | WebAssembly bindings |
//!
//! ## Security
//!
//! - Field buffers are zeroized when replaced, cleared or dropped
//! - `Debug` output masks the card number and the CVC
//! - Logs carry field names and error kinds, never card data
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod field;
pub mod form;
pub mod format;
pub mod preview;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use error::{FieldError, FormError};
pub use field::{Field, FormFields, UnknownField};
pub use form::{Action, CardForm, FieldMessage, FormView, ViewState};
pub use preview::{CardPreview, PreviewConfig};
pub use validate::{validate_field, validate_form, FieldResult, ValidationReport};
