//! Per-field edit handling.
//!
//! An edit never mutates the draft in place: [`apply_edit`] returns the next
//! draft together with the validity change and notice it produced, and the
//! reducer folds those into the form.

use tracing::debug;

use crate::config::FormConfig;
use crate::validation::{is_email_shaped, is_non_empty, is_numeric_shaped};

use super::error::ValidationError;
use super::state::DraftCustomer;

/// Inputs of the registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    UserName,
    FirstName,
    LastName,
    Email,
    Password,
    Phone,
    DateOfBirth,
    Image,
}

/// How an entry is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Must not be blank. Always stored.
    Required,
    /// Stored only when it looks like an email; blank is invalid.
    Email,
    /// Stored only when it reads as a number; blank is invalid.
    Phone,
    /// Stored as typed, never tracked.
    Free,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::UserName,
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::Phone,
        FieldId::DateOfBirth,
        FieldId::Image,
    ];

    /// Fields that gate submission.
    pub const TRACKED: [FieldId; 6] = [
        FieldId::UserName,
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::Phone,
    ];

    /// Wire name, also used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserName => "userName",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::Phone => "phone",
            Self::DateOfBirth => "dateOfBirth",
            Self::Image => "image",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UserName => "Username",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email (valid emails only)",
            Self::Password => "Password",
            Self::Phone => "Phone number (numbers only)",
            Self::DateOfBirth => "Date of birth",
            Self::Image => "Image",
        }
    }

    /// Hint shown in an input that has not been typed into.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::UserName => "Enter your username",
            Self::FirstName => "Enter your first name",
            Self::LastName => "Enter your last name",
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
            Self::Phone => "Enter your phone number",
            Self::DateOfBirth => "Enter your date of birth",
            Self::Image => "Enter an image URL",
        }
    }

    /// Longest accepted entry, in characters.
    pub fn max_len(&self) -> usize {
        match self {
            Self::UserName | Self::FirstName | Self::LastName | Self::Password => 15,
            Self::Email | Self::Phone => 20,
            Self::DateOfBirth => 30,
            Self::Image => 200,
        }
    }

    pub fn rule(&self) -> FieldRule {
        match self {
            Self::UserName | Self::FirstName | Self::LastName | Self::Password => {
                FieldRule::Required
            }
            Self::Email => FieldRule::Email,
            Self::Phone => FieldRule::Phone,
            Self::DateOfBirth | Self::Image => FieldRule::Free,
        }
    }

    pub fn is_tracked(&self) -> bool {
        !matches!(self.rule(), FieldRule::Free)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }

    /// Text of the "Wrong Format!" dialog for this field.
    pub fn format_hint(&self) -> &'static str {
        match self {
            Self::Phone => "Phone number must be a number!",
            Self::Email => "Email must be in email format!",
            _ => "Please check this field!",
        }
    }
}

/// Which format failures pop a blocking notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticePolicy {
    pub phone: bool,
    pub email: bool,
}

impl Default for NoticePolicy {
    fn default() -> Self {
        Self {
            phone: true,
            email: false,
        }
    }
}

impl From<&FormConfig> for NoticePolicy {
    fn from(config: &FormConfig) -> Self {
        Self {
            phone: config.notify_invalid_phone,
            email: config.notify_invalid_email,
        }
    }
}

impl NoticePolicy {
    pub fn notifies(&self, field: FieldId) -> bool {
        match field {
            FieldId::Phone => self.phone,
            FieldId::Email => self.email,
            _ => false,
        }
    }
}

/// Validity change of one tracked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityUpdate {
    pub field: FieldId,
    pub valid: bool,
}

/// Result of one edit.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub draft: DraftCustomer,
    pub validity: Option<ValidityUpdate>,
    pub notice: Option<ValidationError>,
}

/// Apply `text` typed into `field` to `draft`.
pub fn apply_edit(
    draft: &DraftCustomer,
    field: FieldId,
    text: &str,
    policy: NoticePolicy,
) -> FieldEdit {
    let rule = field.rule();
    let shaped = match rule {
        FieldRule::Required => is_non_empty(text),
        FieldRule::Email => is_email_shaped(text),
        FieldRule::Phone => is_numeric_shaped(text),
        FieldRule::Free => true,
    };

    let store = match rule {
        FieldRule::Required | FieldRule::Free => true,
        FieldRule::Email | FieldRule::Phone => shaped,
    };
    let next = if store {
        draft.with(field, text)
    } else {
        draft.clone()
    };

    let validity = match rule {
        FieldRule::Free => None,
        FieldRule::Required => Some(shaped),
        FieldRule::Email | FieldRule::Phone => Some(shaped && is_non_empty(text)),
    };

    let format_failed = matches!(rule, FieldRule::Email | FieldRule::Phone) && !shaped;
    let notice = (format_failed && is_non_empty(text) && policy.notifies(field))
        .then_some(ValidationError::WrongFormat { field });

    debug!(field = field.name(), valid = ?validity, stored = store, "field edited");

    FieldEdit {
        draft: next,
        validity: validity.map(|valid| ValidityUpdate { field, valid }),
        notice,
    }
}
