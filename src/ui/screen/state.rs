use crate::ui::mvi::UiState;

/// Text shown in the Message state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Error(String),
    Confirmation(String),
}

impl Banner {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Confirmation(message) => write!(f, "Confirmation: {message}"),
        }
    }
}

/// Background work the Loading state waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Work {
    Items,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pending {
    pub items: bool,
    pub session: bool,
}

impl Pending {
    pub fn all() -> Self {
        Self {
            items: true,
            session: true,
        }
    }

    pub fn only(work: Work) -> Self {
        Self::default().with(work, true)
    }

    pub fn with(self, work: Work, pending: bool) -> Self {
        match work {
            Work::Items => Self {
                items: pending,
                ..self
            },
            Work::Session => Self {
                session: pending,
                ..self
            },
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.items && !self.session
    }
}

/// What the account screen shows. Exactly one view at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    /// Waiting on background work. A banner raised meanwhile is held in
    /// `queued` and shown once everything settles.
    Loading {
        pending: Pending,
        queued: Option<Banner>,
    },
    Message(Banner),
    Content,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Loading {
            pending: Pending::all(),
            queued: None,
        }
    }
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn banner(&self) -> Option<&Banner> {
        match self {
            Self::Message(banner) => Some(banner),
            _ => None,
        }
    }
}
