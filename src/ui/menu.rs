use crate::session::SessionStatus;

/// Rows of the account menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Register,
    Session,
    About,
    Settings,
    Premium,
    DeleteAccount,
    Support,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 7] = [
        MenuEntry::Register,
        MenuEntry::Session,
        MenuEntry::About,
        MenuEntry::Settings,
        MenuEntry::Premium,
        MenuEntry::DeleteAccount,
        MenuEntry::Support,
    ];

    pub fn label(&self, session: SessionStatus) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Session => session.action_label(),
            Self::About => "About",
            Self::Settings => "Settings",
            Self::Premium => "Premium",
            Self::DeleteAccount => "Delete Account",
            Self::Support => "Support",
        }
    }

    /// Rows that only announce a future feature.
    pub fn is_coming_soon(&self) -> bool {
        matches!(self, Self::Settings | Self::Premium | Self::DeleteAccount)
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, Self::DeleteAccount)
    }
}
