//! WebAssembly bindings for the card form.
//!
//! The page keeps its DOM; the handlers forward events to a
//! [`CardFormHandle`] and re-render from its getters.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardFormHandle } from 'card_form';
//!
//! await init();
//! const form = new CardFormHandle();
//!
//! numberInput.addEventListener("input", () => {
//!     form.input("number", numberInput.value);
//!     numberInput.value = form.value("number");
//!     numberError.textContent = form.error("number") ?? "";
//!     form.number_segments().forEach((s, i) => segments[i].textContent = s);
//! });
//!
//! formElement.addEventListener("submit", (e) => {
//!     e.preventDefault();
//!     if (form.submit()) {
//!         showSuccess();
//!     } else {
//!         renderErrors(form);
//!     }
//! });
//!
//! continueButton.addEventListener("click", () => {
//!     form.acknowledge();
//!     renderAll(form);
//! });
//! ```

#![cfg(feature = "wasm")]

use crate::{CardForm, Field};
use wasm_bindgen::prelude::*;

fn parse_field(name: &str) -> Result<Field, JsValue> {
    name.parse::<Field>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The form controller, exposed to JavaScript.
#[wasm_bindgen]
pub struct CardFormHandle {
    inner: CardForm,
}

#[wasm_bindgen]
impl CardFormHandle {
    /// Creates an empty form in the editing view.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardFormHandle {
        CardFormHandle {
            inner: CardForm::new(),
        }
    }

    /// Forwards an input event. Throws for an unknown field name or when
    /// the form is not in the editing view.
    pub fn input(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        self.inner
            .input(field, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Submits the form. Returns true if the success view is now shown.
    pub fn submit(&mut self) -> bool {
        self.inner.submit().is_ok()
    }

    /// Dismisses the success view. Returns false if it was not shown.
    pub fn acknowledge(&mut self) -> bool {
        self.inner.acknowledge().is_ok()
    }

    /// Current value of an input (the card number comes back regrouped).
    pub fn value(&self, field: &str) -> Result<String, JsValue> {
        let field = parse_field(field)?;
        Ok(self.inner.fields().get(field).to_string())
    }

    /// Message to show next to an input, if any.
    pub fn error(&self, field: &str) -> Result<Option<String>, JsValue> {
        let field = parse_field(field)?;
        Ok(self
            .inner
            .errors()
            .error_for(field)
            .map(|e| e.message().to_string()))
    }

    /// Either `"editing"` or `"success"`.
    #[wasm_bindgen(getter)]
    pub fn view(&self) -> String {
        self.inner.view_state().name().to_string()
    }

    /// Cardholder name shown on the card.
    #[wasm_bindgen(getter)]
    pub fn preview_name(&self) -> String {
        self.inner.preview().name().to_string()
    }

    /// Expiry shown on the card, as `MM/YY`.
    #[wasm_bindgen(getter)]
    pub fn preview_expiry(&self) -> String {
        self.inner.preview().expiry().to_string()
    }

    /// CVC shown on the back of the card.
    #[wasm_bindgen(getter)]
    pub fn preview_cvc(&self) -> String {
        self.inner.preview().cvc().to_string()
    }

    /// The four card number segments as an array of strings.
    pub fn number_segments(&self) -> js_sys::Array {
        let segments = js_sys::Array::new();
        for segment in self.inner.preview().number_segments() {
            segments.push(&JsValue::from_str(segment));
        }
        segments
    }
}

impl Default for CardFormHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Groups a card number into blocks of four.
///
/// # Example
/// ```javascript
/// format_card_number("123456789")  // "1234 5678 9"
/// ```
#[wasm_bindgen]
pub fn format_card_number(card_number: &str) -> String {
    crate::format::format_card_number(card_number)
}

/// Returns true if the card number holds anything but digits and spaces.
#[wasm_bindgen]
pub fn has_invalid_characters(card_number: &str) -> bool {
    crate::format::has_invalid_characters(card_number)
}
