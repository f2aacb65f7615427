use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::gateway::{Item, NewCustomer, Operation};
use crate::session::{SessionPolicy, SessionStatus, LOGGED_OUT};
use crate::ui::events::AppEvent;
use crate::ui::input::handle_key;
use crate::ui::menu::MenuEntry;
use crate::ui::mvi::Reducer;
use crate::ui::overlay::Overlay;
use crate::ui::registration::{
    FieldId, NoticePolicy, RegistrationIntent, RegistrationReducer, RegistrationState,
};
use crate::ui::screen::{Banner, ScreenIntent, ScreenReducer, ScreenState, Work};

/// Why the session flag is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    /// Screen just became active.
    Activation,
    /// The Login/Logout row was selected.
    Toggle,
}

/// Work handed to the background worker.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    FetchItems,
    ReadSession(SessionCheck),
    WriteSession {
        token: String,
        status: SessionStatus,
    },
    CreateCustomer(NewCustomer),
}

/// Run an MVI reducer on one of the app's state fields.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: ScreenState,
    registration: RegistrationState,
    overlay: Overlay,
    session: SessionStatus,
    items: Vec<Item>,
    menu_selected: usize,
    animation_tick: u8,
    notice_policy: NoticePolicy,
    session_policy: Box<dyn SessionPolicy>,
    command_sender: Option<mpsc::Sender<UiCommand>>,
}

impl App {
    pub fn new(notice_policy: NoticePolicy, session_policy: Box<dyn SessionPolicy>) -> Self {
        Self {
            should_quit: false,
            screen: ScreenState::default(),
            registration: RegistrationState::default(),
            overlay: Overlay::default(),
            session: SessionStatus::default(),
            items: Vec::new(),
            menu_selected: 0,
            animation_tick: 0,
            notice_policy,
            session_policy,
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: mpsc::Sender<UiCommand>) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn registration(&self) -> &RegistrationState {
        &self.registration
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn session(&self) -> SessionStatus {
        self.session
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Enter Loading and start the item fetch and session read.
    pub fn mount(&mut self) {
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::Mount);
        self.request_items();
        self.request_session(SessionCheck::Activation);
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick => self.animation_tick = self.animation_tick.wrapping_add(1),
            AppEvent::ItemsFetched(result) => self.on_items_fetched(result),
            AppEvent::SessionRead { check, token } => {
                self.on_session_read(check, token.as_deref())
            }
            AppEvent::SessionWritten { status, result } => {
                self.on_session_written(status, result)
            }
            AppEvent::MutationFinished { operation, result } => {
                self.on_mutation_finished(operation, result)
            }
        }
    }

    // ========================================================================
    // Worker results
    // ========================================================================

    fn on_items_fetched(&mut self, result: Result<Vec<Item>, String>) {
        match result {
            Ok(items) => {
                debug!(count = items.len(), "item list replaced");
                self.items = items;
            }
            Err(message) => self.raise(Banner::Error(message)),
        }
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::Settled(Work::Items));
    }

    fn on_session_read(&mut self, check: SessionCheck, token: Option<&str>) {
        let status = SessionStatus::resolve(self.session_policy.as_ref(), token);
        debug!(?check, ?status, "session flag resolved");

        match (check, status) {
            (SessionCheck::Activation, _) => {
                self.session = status;
                if status == SessionStatus::LoggedOut {
                    self.overlay = Overlay::Login;
                }
                dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::Settled(Work::Session));
            }
            (SessionCheck::Toggle, SessionStatus::LoggedIn) => {
                self.write_session(LOGGED_OUT.to_string(), SessionStatus::LoggedOut);
            }
            (SessionCheck::Toggle, _) => {
                self.session = status;
                self.overlay = Overlay::Login;
            }
        }
    }

    fn on_session_written(&mut self, status: SessionStatus, result: Result<(), String>) {
        match result {
            Ok(()) => {
                info!(?status, "session flag updated");
                self.session = status;
                if status == SessionStatus::LoggedOut {
                    self.overlay = Overlay::logged_out();
                }
            }
            Err(message) => self.raise(Banner::Error(message)),
        }
    }

    fn on_mutation_finished(&mut self, operation: Operation, result: Result<(), String>) {
        match result {
            Ok(()) => {
                if let Some(text) = operation.confirmation() {
                    self.raise(Banner::Confirmation(text.to_string()));
                }
            }
            Err(message) => self.raise(Banner::Error(message)),
        }
    }

    fn raise(&mut self, banner: Banner) {
        debug!(error = banner.is_error(), "banner raised");
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::Raise(banner));
    }

    /// Close the banner and fetch the items again.
    pub fn dismiss_message(&mut self) {
        if self.screen.banner().is_none() {
            return;
        }
        dispatch_mvi!(self, screen, ScreenReducer, ScreenIntent::Dismiss);
        self.request_items();
    }

    // ========================================================================
    // Menu and overlays
    // ========================================================================

    pub fn move_selection(&mut self, delta: isize) {
        let len = MenuEntry::ALL.len() as isize;
        self.menu_selected = (self.menu_selected as isize + delta).rem_euclid(len) as usize;
    }

    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::ALL[self.menu_selected % MenuEntry::ALL.len()]
    }

    pub fn activate(&mut self, entry: MenuEntry) {
        debug!(?entry, "menu row selected");
        match entry {
            MenuEntry::Register => self.open_registration(),
            MenuEntry::Session => self.request_session(SessionCheck::Toggle),
            MenuEntry::About => self.overlay = Overlay::About,
            MenuEntry::Support => self.overlay = Overlay::Support,
            MenuEntry::Settings | MenuEntry::Premium | MenuEntry::DeleteAccount => {
                self.overlay = Overlay::coming_soon()
            }
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Callback of the login screen once the user has signed in.
    pub fn complete_login(&mut self, token: &str) {
        if self.overlay == Overlay::Login {
            self.overlay = Overlay::None;
        }
        self.write_session(token.to_string(), SessionStatus::LoggedIn);
    }

    // ========================================================================
    // Registration form (MVI pattern)
    // ========================================================================

    pub fn open_registration(&mut self) {
        let policy = self.notice_policy;
        dispatch_mvi!(
            self,
            registration,
            RegistrationReducer,
            RegistrationIntent::Open { policy }
        );
    }

    /// Replace the whole text of `field`. Entries over the field's length
    /// limit are dropped.
    pub fn edit_field(&mut self, field: FieldId, text: String) {
        if text.chars().count() > field.max_len() {
            debug!(field = field.name(), "entry over length limit ignored");
            return;
        }
        dispatch_mvi!(
            self,
            registration,
            RegistrationReducer,
            RegistrationIntent::Edit { field, text }
        );
    }

    pub fn type_char(&mut self, c: char) {
        let Some(form) = self.registration.form() else {
            return;
        };
        let field = form.focused_field();
        let mut text = form.input(field).to_string();
        text.push(c);
        self.edit_field(field, text);
    }

    pub fn backspace(&mut self) {
        let Some(form) = self.registration.form() else {
            return;
        };
        let field = form.focused_field();
        let mut text = form.input(field).to_string();
        if text.pop().is_some() {
            self.edit_field(field, text);
        }
    }

    pub fn focus_next_field(&mut self) {
        dispatch_mvi!(self, registration, RegistrationReducer, RegistrationIntent::FocusNext);
    }

    pub fn focus_prev_field(&mut self) {
        dispatch_mvi!(self, registration, RegistrationReducer, RegistrationIntent::FocusPrev);
    }

    /// Send the form when every tracked field is valid; otherwise the form
    /// stays open with the "complete the form" dialog.
    pub fn submit_registration(&mut self) {
        let Some(form) = self.registration.form() else {
            return;
        };
        if form.dialog.is_some() {
            return;
        }
        let snapshot = form.ready_snapshot();
        dispatch_mvi!(self, registration, RegistrationReducer, RegistrationIntent::Submit);

        match snapshot {
            Ok(draft) => {
                info!("submitting registration");
                let customer = NewCustomer::from(&draft);
                if let Err(message) = self.send_command(UiCommand::CreateCustomer(customer)) {
                    self.on_mutation_finished(Operation::CreateCustomer, Err(message));
                }
            }
            Err(err) => debug!(%err, "registration blocked"),
        }
    }

    pub fn cancel_registration(&mut self) {
        dispatch_mvi!(self, registration, RegistrationReducer, RegistrationIntent::Cancel);
    }

    pub fn dismiss_form_dialog(&mut self) {
        dispatch_mvi!(
            self,
            registration,
            RegistrationReducer,
            RegistrationIntent::DismissDialog
        );
    }

    // ========================================================================
    // Worker commands
    // ========================================================================

    fn request_items(&mut self) {
        if let Err(message) = self.send_command(UiCommand::FetchItems) {
            self.on_items_fetched(Err(message));
        }
    }

    fn request_session(&mut self, check: SessionCheck) {
        if self.send_command(UiCommand::ReadSession(check)).is_err() {
            self.on_session_read(check, None);
        }
    }

    fn write_session(&mut self, token: String, status: SessionStatus) {
        if let Err(message) = self.send_command(UiCommand::WriteSession { token, status }) {
            self.on_session_written(status, Err(message));
        }
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("background worker is not running".to_string());
        };

        sender.try_send(command).map_err(|err| {
            warn!(error = %err, "failed to queue command");
            format!("command queue unavailable: {err}")
        })
    }
}
