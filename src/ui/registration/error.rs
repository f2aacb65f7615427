use thiserror::Error;

use super::field::FieldId;

/// Why the registration form refused to go further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Submit was pressed while tracked fields are still invalid.
    #[error("Please complete the form!")]
    Incomplete { fields: Vec<FieldId> },

    /// A non-empty entry failed its format check.
    #[error("{}", .field.format_hint())]
    WrongFormat { field: FieldId },
}

impl ValidationError {
    /// Title of the blocking dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Incomplete { .. } => "Warning!",
            Self::WrongFormat { .. } => "Wrong Format!",
        }
    }
}
