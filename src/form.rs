//! The card form controller.
//!
//! [`CardForm`] owns the field values, the per-field errors and the
//! visible view. The view is either the editing form or the success
//! message:
//!
//! ```text
//! Editing --submit (all fields valid)--> Success --acknowledge--> Editing
//! ```
//!
//! Everything a renderer needs is available as a [`FormView`] snapshot
//! computed from that state by [`CardForm::render`].
//!
//! # Example
//!
//! ```
//! use card_form::{CardForm, Field, ViewState};
//!
//! let mut form = CardForm::new();
//! form.input(Field::Name, "A B").unwrap();
//! form.input(Field::Number, "1111222233334444").unwrap();
//! form.input(Field::Month, "04").unwrap();
//! form.input(Field::Year, "29").unwrap();
//! form.input(Field::Cvc, "123").unwrap();
//!
//! assert_eq!(form.fields().get(Field::Number), "1111 2222 3333 4444");
//! assert_eq!(form.preview().expiry(), "04/29");
//!
//! form.submit().unwrap();
//! assert_eq!(form.view_state(), ViewState::Success);
//!
//! form.acknowledge().unwrap();
//! assert_eq!(form.view_state(), ViewState::Editing);
//! assert!(form.fields().is_empty());
//! ```

use crate::error::{FieldError, FormError};
use crate::field::{mask_number, Field, FormFields};
use crate::format::{first_invalid_character, format_card_number};
use crate::preview::{CardPreview, PreviewConfig};
use crate::validate::{check_number_input, validate_form, ValidationReport};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// The two mutually exclusive views of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewState {
    /// The form is visible and editable.
    #[default]
    Editing,
    /// The confirmation shown after a valid submission.
    Success,
}

impl ViewState {
    /// Returns the lowercase name of the view.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user changed the value of an input.
    Input(Field, String),
    /// The user submitted the form.
    Submit,
    /// The user dismissed the success view.
    Acknowledge,
}

/// Controller for the card entry form.
#[derive(Clone)]
pub struct CardForm {
    config: PreviewConfig,
    fields: FormFields,
    /// Last formatted card number that passed the live character check.
    /// Wiped when replaced, on reset and on drop.
    accepted_number: Zeroizing<String>,
    errors: ValidationReport,
    view: ViewState,
}

impl fmt::Debug for CardForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardForm")
            .field("view", &self.view)
            .field("fields", &self.fields)
            .field("accepted_number", &mask_number(&self.accepted_number))
            .field("errors", &self.errors)
            .finish()
    }
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CardForm {
    /// Creates an empty form in the editing view with the standard placeholders.
    pub fn new() -> Self {
        Self::with_config(PreviewConfig::default())
    }

    /// Creates an empty form using custom preview placeholders.
    pub fn with_config(config: PreviewConfig) -> Self {
        Self {
            config,
            fields: FormFields::new(),
            accepted_number: Zeroizing::new(String::new()),
            errors: ValidationReport::new(),
            view: ViewState::Editing,
        }
    }

    /// Returns the visible view.
    #[inline]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    /// Returns the current field values.
    #[inline]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Returns the errors currently shown next to the inputs.
    #[inline]
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Returns the placeholder configuration.
    #[inline]
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Computes the card preview for the current state.
    pub fn preview(&self) -> CardPreview {
        CardPreview::derive(&self.fields, &self.accepted_number, &self.config)
    }

    /// Handles a change to one of the inputs.
    ///
    /// The card number is checked on every change. When it holds only
    /// digits and spaces it is regrouped in place and becomes the number
    /// shown on the card; otherwise the field gets an
    /// [`FieldError::InvalidFormat`] error and the card keeps showing the
    /// last well-formed number.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        self.expect_view(ViewState::Editing)?;

        let value = value.into();

        if field == Field::Number {
            match check_number_input(&value) {
                Ok(()) => {
                    let formatted = format_card_number(&value);
                    self.accepted_number = Zeroizing::new(formatted.clone());
                    self.fields.set(Field::Number, formatted);
                    self.errors.record(Field::Number, Ok(()));
                }
                Err(err) => {
                    if let Some((position, _)) = first_invalid_character(&value) {
                        tracing::debug!(
                            position,
                            length = value.chars().count(),
                            "card number rejected while typing"
                        );
                    }
                    self.fields.set(Field::Number, value);
                    self.errors.record(Field::Number, Err(err));
                }
            }
        } else {
            self.fields.set(field, value);
        }

        tracing::trace!(field = %field, "preview refreshed");
        Ok(())
    }

    /// Assigns a field value without running the live checks.
    ///
    /// This models a value changed by script between input events. The
    /// preview is not refreshed for the card number; the next
    /// [`submit`](Self::submit) still validates it.
    ///
    /// Unlike [`input`](Self::input), this is allowed in either view,
    /// including [`ViewState::Success`]. A value set there shows up in
    /// [`render`](Self::render) until [`acknowledge`](Self::acknowledge)
    /// clears the form.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Validates every field and, if all pass, switches to the success view.
    ///
    /// The errors from any previous run are replaced by this run's results.
    pub fn submit(&mut self) -> Result<(), FormError> {
        self.expect_view(ViewState::Editing)?;

        let report = validate_form(&self.fields);
        self.errors = report.clone();

        if !report.is_valid() {
            tracing::debug!(
                errors = report.error_count(),
                "submission rejected"
            );
            return Err(FormError::Rejected(report));
        }

        self.view = ViewState::Success;
        tracing::debug!(from = %ViewState::Editing, to = %ViewState::Success, "view changed");
        Ok(())
    }

    /// Dismisses the success view and starts over with an empty form.
    pub fn acknowledge(&mut self) -> Result<(), FormError> {
        self.expect_view(ViewState::Success)?;

        self.reset();
        tracing::debug!(from = %ViewState::Success, to = %ViewState::Editing, "view changed");
        Ok(())
    }

    /// Applies a single action.
    pub fn dispatch(&mut self, action: Action) -> Result<(), FormError> {
        match action {
            Action::Input(field, value) => self.input(field, value),
            Action::Submit => self.submit(),
            Action::Acknowledge => self.acknowledge(),
        }
    }

    /// Applies actions in order, stopping at the first one that fails.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::{Action, CardForm, Field, ViewState};
    ///
    /// let mut form = CardForm::new();
    /// let result = form.replay([
    ///     Action::Input(Field::Name, "A B".into()),
    ///     Action::Submit,
    ///     Action::Acknowledge,
    /// ]);
    ///
    /// assert!(result.is_err());
    /// assert_eq!(form.view_state(), ViewState::Editing);
    /// assert_eq!(form.errors().error_count(), 4);
    /// ```
    pub fn replay<I>(&mut self, actions: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(())
    }

    /// Renders the full state into a snapshot.
    pub fn render(&self) -> FormView {
        FormView {
            view: self.view,
            fields: self
                .fields
                .iter()
                .map(|(field, value)| (field, value.to_string()))
                .collect(),
            preview: self.preview(),
            errors: self
                .errors
                .errors()
                .map(|(field, error)| FieldMessage { field, error })
                .collect(),
        }
    }

    fn expect_view(&self, expected: ViewState) -> Result<(), FormError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(FormError::WrongView {
                expected,
                actual: self.view,
            })
        }
    }

    fn reset(&mut self) {
        self.fields.clear();
        self.accepted_number.zeroize();
        self.errors.clear();
        self.view = ViewState::Editing;
    }
}

/// An error message shown next to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldMessage {
    /// The input the message belongs to.
    pub field: Field,
    /// The failure.
    pub error: FieldError,
}

impl FieldMessage {
    /// The text to render.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.error.message()
    }
}

/// Snapshot of everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormView {
    /// The visible view.
    pub view: ViewState,
    /// Input values in display order.
    pub fields: Vec<(Field, String)>,
    /// The card mock-up.
    pub preview: CardPreview,
    /// At most one message per failing input, in display order.
    pub errors: Vec<FieldMessage>,
}

impl FormView {
    /// Returns the message shown next to a field, if any.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|m| m.field == field)
            .map(FieldMessage::message)
    }

    /// Returns true if the success view is shown.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.view == ViewState::Success
    }
}
