//! Fuzz target for the form controller.
//!
//! Drives the form with arbitrary action sequences and checks that it
//! never panics and never reaches the success view with invalid fields.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{validate::validate_form, Action, CardForm, Field, ViewState};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzAction {
    Input(u8, String),
    Set(u8, String),
    Submit,
    Acknowledge,
}

fn field(index: u8) -> Field {
    Field::ALL[index as usize % Field::ALL.len()]
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let mut form = CardForm::new();

    for action in actions {
        match action {
            FuzzAction::Input(i, value) => {
                let _ = form.dispatch(Action::Input(field(i), value));
            }
            FuzzAction::Set(i, value) => form.set_value(field(i), value),
            FuzzAction::Submit => {
                let valid = validate_form(form.fields()).is_valid();
                let was_editing = form.view_state() == ViewState::Editing;
                let _ = form.submit();
                if was_editing {
                    assert_eq!(form.view_state() == ViewState::Success, valid);
                }
            }
            FuzzAction::Acknowledge => {
                let _ = form.acknowledge();
            }
        }

        let view = form.render();
        assert_eq!(view.preview.number_segments().len(), 4);
    }
});
