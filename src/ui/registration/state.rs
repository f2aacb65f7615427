use std::collections::BTreeMap;

use crate::gateway::{NewCustomer, PASSWORD_MASK};
use crate::ui::mvi::UiState;

use super::error::ValidationError;
use super::field::{FieldId, NoticePolicy, ValidityUpdate};

/// Values collected by the registration form, not yet submitted.
#[derive(Clone, PartialEq, Eq)]
pub struct DraftCustomer {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub password: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

impl Default for DraftCustomer {
    fn default() -> Self {
        Self {
            first_name: "default firstName".to_string(),
            last_name: "default lastName".to_string(),
            user_name: "default userName".to_string(),
            password: "default password".to_string(),
            date_of_birth: "default dateOfBirth".to_string(),
            email: "default email".to_string(),
            phone: "default phone".to_string(),
            image: "default image".to_string(),
        }
    }
}

impl DraftCustomer {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::UserName => &self.user_name,
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Phone => &self.phone,
            FieldId::DateOfBirth => &self.date_of_birth,
            FieldId::Image => &self.image,
        }
    }

    /// Copy of this draft with `field` replaced.
    pub fn with(&self, field: FieldId, text: &str) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FieldId::UserName => &mut next.user_name,
            FieldId::FirstName => &mut next.first_name,
            FieldId::LastName => &mut next.last_name,
            FieldId::Email => &mut next.email,
            FieldId::Password => &mut next.password,
            FieldId::Phone => &mut next.phone,
            FieldId::DateOfBirth => &mut next.date_of_birth,
            FieldId::Image => &mut next.image,
        };
        *slot = text.to_string();
        next
    }
}

impl std::fmt::Debug for DraftCustomer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftCustomer")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("user_name", &self.user_name)
            .field("password", &PASSWORD_MASK)
            .field("date_of_birth", &self.date_of_birth)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("image", &self.image)
            .finish()
    }
}

impl From<&DraftCustomer> for NewCustomer {
    fn from(draft: &DraftCustomer) -> Self {
        NewCustomer {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            user_name: draft.user_name.clone(),
            password: draft.password.clone(),
            date_of_birth: draft.date_of_birth.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            image: draft.image.clone(),
        }
    }
}

/// Validity of the tracked fields. Starts all-false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityMap(BTreeMap<FieldId, bool>);

impl Default for ValidityMap {
    fn default() -> Self {
        Self(FieldId::TRACKED.iter().map(|field| (*field, false)).collect())
    }
}

impl ValidityMap {
    /// Untracked fields never fail.
    pub fn is_valid(&self, field: FieldId) -> bool {
        self.0.get(&field).copied().unwrap_or(true)
    }

    pub fn apply(mut self, update: ValidityUpdate) -> Self {
        if update.field.is_tracked() {
            self.0.insert(update.field, update.valid);
        }
        self
    }

    pub fn failing(&self) -> Vec<FieldId> {
        self.0
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.0.values().all(|valid| *valid)
    }
}

/// An open registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub draft: DraftCustomer,
    pub validity: ValidityMap,
    /// Text shown in each input; may hold entries the draft rejected.
    pub inputs: BTreeMap<FieldId, String>,
    pub focused: usize,
    /// Blocking dialog; edits are ignored while it is shown.
    pub dialog: Option<ValidationError>,
    pub policy: NoticePolicy,
}

impl RegistrationForm {
    pub fn new(policy: NoticePolicy) -> Self {
        Self {
            draft: DraftCustomer::default(),
            validity: ValidityMap::default(),
            inputs: BTreeMap::new(),
            focused: 0,
            dialog: None,
            policy,
        }
    }

    pub fn focused_field(&self) -> FieldId {
        FieldId::ALL[self.focused % FieldId::ALL.len()]
    }

    /// Text currently typed into `field`.
    pub fn input(&self, field: FieldId) -> &str {
        self.inputs.get(&field).map(String::as_str).unwrap_or("")
    }

    /// The draft to submit, or the dialog that blocks submission.
    pub fn ready_snapshot(&self) -> Result<DraftCustomer, ValidationError> {
        if self.validity.is_complete() {
            Ok(self.draft.clone())
        } else {
            Err(ValidationError::Incomplete {
                fields: self.validity.failing(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RegistrationState {
    #[default]
    Closed,
    Editing(RegistrationForm),
}

impl UiState for RegistrationState {}

impl RegistrationState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn form(&self) -> Option<&RegistrationForm> {
        match self {
            Self::Editing(form) => Some(form),
            Self::Closed => None,
        }
    }
}
