use crate::ui::mvi::Reducer;

use super::field::{apply_edit, FieldId};
use super::intent::RegistrationIntent;
use super::state::{RegistrationForm, RegistrationState};

pub struct RegistrationReducer;

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Intent = RegistrationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RegistrationIntent::Open { policy } => {
                RegistrationState::Editing(RegistrationForm::new(policy))
            }
            RegistrationIntent::Cancel => RegistrationState::Closed,
            RegistrationIntent::Edit { field, text } => match state {
                RegistrationState::Editing(form) if form.dialog.is_none() => {
                    RegistrationState::Editing(edit(form, field, text))
                }
                other => other,
            },
            RegistrationIntent::FocusNext => map_form(state, |mut form| {
                form.focused = (form.focused + 1) % FieldId::ALL.len();
                form
            }),
            RegistrationIntent::FocusPrev => map_form(state, |mut form| {
                form.focused = if form.focused == 0 {
                    FieldId::ALL.len() - 1
                } else {
                    form.focused - 1
                };
                form
            }),
            RegistrationIntent::Submit => match state {
                RegistrationState::Editing(mut form) if form.dialog.is_none() => {
                    match form.ready_snapshot() {
                        Ok(_) => RegistrationState::Closed,
                        Err(err) => {
                            form.dialog = Some(err);
                            RegistrationState::Editing(form)
                        }
                    }
                }
                other => other,
            },
            RegistrationIntent::DismissDialog => map_form(state, |mut form| {
                form.dialog = None;
                form
            }),
        }
    }
}

fn map_form(
    state: RegistrationState,
    f: impl FnOnce(RegistrationForm) -> RegistrationForm,
) -> RegistrationState {
    match state {
        RegistrationState::Editing(form) => RegistrationState::Editing(f(form)),
        RegistrationState::Closed => RegistrationState::Closed,
    }
}

fn edit(form: RegistrationForm, field: FieldId, text: String) -> RegistrationForm {
    let result = apply_edit(&form.draft, field, &text, form.policy);
    let validity = match result.validity {
        Some(update) => form.validity.apply(update),
        None => form.validity,
    };
    let mut inputs = form.inputs;
    inputs.insert(field, text);

    RegistrationForm {
        draft: result.draft,
        validity,
        inputs,
        dialog: result.notice,
        ..form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::registration::error::ValidationError;
    use crate::ui::registration::field::NoticePolicy;

    fn open() -> RegistrationState {
        RegistrationReducer::reduce(
            RegistrationState::Closed,
            RegistrationIntent::Open {
                policy: NoticePolicy::default(),
            },
        )
    }

    fn type_into(state: RegistrationState, field: FieldId, text: &str) -> RegistrationState {
        RegistrationReducer::reduce(
            state,
            RegistrationIntent::Edit {
                field,
                text: text.to_string(),
            },
        )
    }

    fn form(state: &RegistrationState) -> &RegistrationForm {
        state.form().expect("form should be open")
    }

    #[test]
    fn open_starts_from_placeholders() {
        let state = open();
        let form = form(&state);
        assert_eq!(form.draft.first_name, "default firstName");
        assert!(!form.validity.is_complete());
        assert_eq!(form.focused_field(), FieldId::UserName);
    }

    #[test]
    fn edits_on_closed_form_are_ignored() {
        let state = type_into(RegistrationState::Closed, FieldId::Email, "a@b.fi");
        assert_eq!(state, RegistrationState::Closed);
    }

    #[test]
    fn submit_incomplete_shows_warning() {
        let state = type_into(open(), FieldId::UserName, "ada");
        let state = RegistrationReducer::reduce(state, RegistrationIntent::Submit);
        let form = form(&state);
        match &form.dialog {
            Some(ValidationError::Incomplete { fields }) => {
                assert!(!fields.contains(&FieldId::UserName));
                assert!(fields.contains(&FieldId::Email));
            }
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn submit_complete_closes() {
        let mut state = open();
        for (field, text) in [
            (FieldId::UserName, "ada"),
            (FieldId::FirstName, "Ada"),
            (FieldId::LastName, "Lovelace"),
            (FieldId::Email, "ada@example.com"),
            (FieldId::Password, "secret"),
            (FieldId::Phone, "0401234567"),
        ] {
            state = type_into(state, field, text);
        }
        let state = RegistrationReducer::reduce(state, RegistrationIntent::Submit);
        assert_eq!(state, RegistrationState::Closed);
    }

    #[test]
    fn dialog_blocks_edits_until_dismissed() {
        let state = type_into(open(), FieldId::Phone, "abc");
        assert!(form(&state).dialog.is_some());
        assert_eq!(form(&state).input(FieldId::Phone), "abc");

        let state = type_into(state, FieldId::UserName, "ignored");
        assert_eq!(form(&state).input(FieldId::UserName), "");

        let state = RegistrationReducer::reduce(state, RegistrationIntent::DismissDialog);
        let state = type_into(state, FieldId::UserName, "ada");
        assert_eq!(form(&state).draft.user_name, "ada");
    }

    #[test]
    fn cleared_email_becomes_invalid() {
        let state = type_into(open(), FieldId::Email, "ada@example.com");
        assert!(form(&state).validity.is_valid(FieldId::Email));
        let state = type_into(state, FieldId::Email, "");
        assert!(!form(&state).validity.is_valid(FieldId::Email));
        assert_eq!(form(&state).draft.email, "ada@example.com");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let state = RegistrationReducer::reduce(open(), RegistrationIntent::FocusPrev);
        assert_eq!(form(&state).focused_field(), FieldId::Image);
        let state = RegistrationReducer::reduce(state, RegistrationIntent::FocusNext);
        assert_eq!(form(&state).focused_field(), FieldId::UserName);
    }

    #[test]
    fn cancel_discards_the_form() {
        let state = type_into(open(), FieldId::UserName, "ada");
        let state = RegistrationReducer::reduce(state, RegistrationIntent::Cancel);
        assert_eq!(state, RegistrationState::Closed);
        assert_eq!(form(&open()).draft.user_name, "default userName");
    }
}
