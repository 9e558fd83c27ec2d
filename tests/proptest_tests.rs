//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_form::{
    format::{format_card_number, has_invalid_characters, strip_spaces},
    validate::validate_form,
    Action, CardForm, Field, FieldError, FormFields, ViewState,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Digits and spaces in any arrangement.
fn digits_and_spaces() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![4 => prop::char::range('0', '9'), 1 => Just(' ')], 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Any field.
fn field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Name),
        Just(Field::Number),
        Just(Field::Month),
        Just(Field::Year),
        Just(Field::Cvc),
    ]
}

/// A random user action.
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (field_strategy(), "[0-9a-z ]{0,12}").prop_map(|(f, v)| Action::Input(f, v)),
        2 => Just(Action::Submit),
        1 => Just(Action::Acknowledge),
    ]
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Formatting is idempotent.
    #[test]
    fn format_is_idempotent(s in digits_and_spaces()) {
        let once = format_card_number(&s);
        prop_assert_eq!(format_card_number(&once), once);
    }

    /// Property: Idempotence holds for arbitrary text, not only digits.
    #[test]
    fn format_is_idempotent_for_any_text(s in ".*") {
        let once = format_card_number(&s);
        prop_assert_eq!(format_card_number(&once), once);
    }

    /// Property: Formatting preserves the non-space characters in order.
    #[test]
    fn format_preserves_characters(s in ".*") {
        prop_assert_eq!(strip_spaces(&format_card_number(&s)), strip_spaces(&s));
    }

    /// Property: Every group has four characters except possibly the last.
    #[test]
    fn format_groups_of_four(s in digits_and_spaces()) {
        let formatted = format_card_number(&s);
        if !formatted.is_empty() {
            let groups: Vec<&str> = formatted.split(' ').collect();
            let (last, full) = groups.split_last().unwrap();
            for g in full {
                prop_assert_eq!(g.chars().count(), 4);
            }
            prop_assert!((1..=4).contains(&last.chars().count()));
        }
    }

    /// Property: Formatting never introduces invalid characters.
    #[test]
    fn format_keeps_number_charset(s in digits_and_spaces()) {
        prop_assert!(!has_invalid_characters(&format_card_number(&s)));
    }
}

// =============================================================================
// VALIDATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: The report is valid iff no field failed.
    #[test]
    fn report_validity_matches_errors(
        name in ".{0,8}",
        number in "[0-9 a]{0,8}",
        month in "[0-9 ]{0,3}",
        year in "[0-9 ]{0,3}",
        cvc in "[0-9 ]{0,4}",
    ) {
        let fields = FormFields::new()
            .with(Field::Name, name)
            .with(Field::Number, number)
            .with(Field::Month, month)
            .with(Field::Year, year)
            .with(Field::Cvc, cvc);
        let report = validate_form(&fields);

        prop_assert_eq!(report.is_valid(), report.error_count() == 0);
        for (field, value) in fields.iter() {
            let blank = value.trim().is_empty();
            match report.error_for(field) {
                Some(FieldError::Blank) => prop_assert!(blank),
                Some(FieldError::InvalidFormat) => {
                    prop_assert_eq!(field, Field::Number);
                    prop_assert!(!blank);
                    prop_assert!(has_invalid_characters(value));
                }
                None => prop_assert!(!blank),
            }
        }
    }
}

// =============================================================================
// CONTROLLER PROPERTIES
// =============================================================================

proptest! {
    /// Property: The preview always shows exactly four non-empty segments.
    #[test]
    fn preview_has_four_segments(actions in proptest::collection::vec(action_strategy(), 0..30)) {
        let mut form = CardForm::new();
        for action in actions {
            let _ = form.dispatch(action);
            let preview = form.preview();
            prop_assert_eq!(preview.number_segments().len(), 4);
            prop_assert!(preview.number_segments().iter().all(|s| !s.is_empty()));
            prop_assert!(preview.expiry().contains('/'));
        }
    }

    /// Property: Success is only ever reached from a fully valid form.
    #[test]
    fn success_implies_valid_fields(actions in proptest::collection::vec(action_strategy(), 0..30)) {
        let mut form = CardForm::new();
        for action in actions {
            let before = form.view_state();
            let fields_valid = validate_form(form.fields()).is_valid();
            let is_submit = matches!(action, Action::Submit);

            let _ = form.dispatch(action);

            if before == ViewState::Editing && form.view_state() == ViewState::Success {
                prop_assert!(is_submit);
                prop_assert!(fields_valid);
            }
            if form.view_state() == ViewState::Success {
                prop_assert!(form.errors().is_valid());
            }
        }
    }

    /// Property: Acknowledging always lands on an empty editing form.
    #[test]
    fn acknowledge_resets_everything(actions in proptest::collection::vec(action_strategy(), 0..30)) {
        let mut form = CardForm::new();
        for action in actions {
            if form.dispatch(action.clone()).is_ok() && action == Action::Acknowledge {
                prop_assert_eq!(form.view_state(), ViewState::Editing);
                prop_assert!(form.fields().is_empty());
                prop_assert!(form.errors().is_valid());
                prop_assert_eq!(form.preview(), CardForm::new().preview());
            }
        }
    }

    /// Property: A number accepted while typing is stored formatted.
    #[test]
    fn accepted_number_is_formatted(s in digits_and_spaces()) {
        let mut form = CardForm::new();
        form.input(Field::Number, s.as_str()).unwrap();
        prop_assert_eq!(form.fields().get(Field::Number), format_card_number(&s));
        prop_assert!(form.errors().error_for(Field::Number).is_none());
    }
}
