//! Customer registration modal.

mod dialog;
mod error;
mod field;
mod intent;
mod reducer;
mod state;

pub use dialog::render_registration;
pub use error::ValidationError;
pub use field::{apply_edit, FieldEdit, FieldId, FieldRule, NoticePolicy, ValidityUpdate};
pub use intent::RegistrationIntent;
pub use reducer::RegistrationReducer;
pub use state::{DraftCustomer, RegistrationForm, RegistrationState, ValidityMap};
