use crate::ui::mvi::Intent;

use super::field::{FieldId, NoticePolicy};

#[derive(Debug, Clone)]
pub enum RegistrationIntent {
    /// Show a fresh form.
    Open { policy: NoticePolicy },
    /// The whole text of `field` is now `text`.
    Edit { field: FieldId, text: String },
    FocusNext,
    FocusPrev,
    /// Closes the form when every tracked field is valid, otherwise shows
    /// the "complete the form" dialog.
    Submit,
    Cancel,
    DismissDialog,
}

impl Intent for RegistrationIntent {}
