//! UI-level state that drives rendering.
//! A projection of session events, updated each frame by draining the
//! EventBus.

use momo_types::config::ClientConfig;
use momo_types::event::ChatEvent;
use momo_types::message::ChatInteraction;

pub const REGISTERED_NOTICE: &str = "Registro exitoso. Ahora inicia sesión.";
pub const EXPIRED_NOTICE: &str = "Sesión expirada o no autorizada. Por favor, inicia sesión.";

/// Which top-level view is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The login/register form
    Auth,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A chat entry for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub sender: Sender,
    pub content: String,
    pub is_error: bool,
}

/// Message shown under the auth form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub is_error: bool,
}

/// What the auth form asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSubmission {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
}

/// State visible to UI panels
pub struct UiState {
    pub screen: Screen,
    pub auth_mode: AuthMode,
    pub auth_name: String,
    pub auth_email: String,
    pub auth_password: String,
    pub auth_feedback: Option<Feedback>,
    /// Displayed transcript, oldest first
    pub messages: Vec<ChatEntry>,
    pub input_text: String,
    /// A request is in flight; input and submit buttons are disabled
    pub busy: bool,
    /// The large MoMo avatar shown above an empty conversation
    pub show_welcome_avatar: bool,
    pub user_email: Option<String>,
    welcome_message: String,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_welcome(ClientConfig::default().welcome_message)
    }

    pub fn with_welcome(welcome_message: impl Into<String>) -> Self {
        Self {
            screen: Screen::Auth,
            auth_mode: AuthMode::Login,
            auth_name: String::new(),
            auth_email: String::new(),
            auth_password: String::new(),
            auth_feedback: None,
            messages: Vec::new(),
            input_text: String::new(),
            busy: false,
            show_welcome_avatar: true,
            user_email: None,
            welcome_message: welcome_message.into(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::SessionRestored => {
                    self.screen = Screen::Chat;
                }
                ChatEvent::LoginRequired => {
                    self.show_auth(None);
                }
                ChatEvent::LoggedIn { email } => {
                    self.screen = Screen::Chat;
                    self.user_email = email;
                    self.auth_password.clear();
                    self.auth_feedback = None;
                    self.busy = false;
                }
                ChatEvent::Registered => {
                    self.set_auth_mode(AuthMode::Login);
                    self.auth_feedback = Some(Feedback {
                        text: REGISTERED_NOTICE.to_string(),
                        is_error: false,
                    });
                    self.busy = false;
                }
                ChatEvent::LoggedOut => {
                    self.show_auth(None);
                }
                ChatEvent::AuthFailed { message } => {
                    self.auth_feedback = Some(Feedback { text: message, is_error: true });
                    self.busy = false;
                }
                ChatEvent::SessionExpired => {
                    self.show_auth(Some(Feedback {
                        text: EXPIRED_NOTICE.to_string(),
                        is_error: true,
                    }));
                }
                ChatEvent::HistoryLoaded { interactions } => {
                    self.load_history(interactions);
                    self.busy = false;
                }
                ChatEvent::HistoryFailed { message } => {
                    self.push_bot(message, true);
                    self.busy = false;
                }
                ChatEvent::RequestStarted => {
                    self.busy = true;
                }
                // Replies never render over the login form.
                ChatEvent::BotReplied { .. } if self.screen == Screen::Auth => {
                    log::debug!("Dropping bot reply received on the auth screen");
                }
                ChatEvent::BotReplied { reply } => {
                    let is_error = reply.is_error();
                    self.push_bot(reply.text, is_error);
                    self.busy = false;
                }
            }
        }
    }

    /// Add a user message to the display
    pub fn push_user_message(&mut self, text: &str) {
        self.show_welcome_avatar = false;
        self.messages.push(ChatEntry {
            sender: Sender::User,
            content: text.to_string(),
            is_error: false,
        });
    }

    /// Switch between login and register. Clears the form.
    pub fn toggle_auth_mode(&mut self) {
        let next = match self.auth_mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.set_auth_mode(next);
        self.auth_name.clear();
        self.auth_email.clear();
        self.auth_password.clear();
    }

    /// Read the auth form into a submission for the current mode.
    ///
    /// Fields are passed as typed; the session client validates them.
    pub fn auth_submission(&self) -> AuthSubmission {
        match self.auth_mode {
            AuthMode::Login => AuthSubmission::Login {
                email: self.auth_email.clone(),
                password: self.auth_password.clone(),
            },
            AuthMode::Register => AuthSubmission::Register {
                name: self.auth_name.clone(),
                email: self.auth_email.clone(),
                password: self.auth_password.clone(),
            },
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }

    fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
        self.auth_feedback = None;
    }

    fn show_auth(&mut self, feedback: Option<Feedback>) {
        self.screen = Screen::Auth;
        self.set_auth_mode(AuthMode::Login);
        self.auth_feedback = feedback;
        self.auth_password.clear();
        self.messages.clear();
        self.input_text.clear();
        self.busy = false;
        self.show_welcome_avatar = true;
        self.user_email = None;
    }

    fn load_history(&mut self, interactions: Vec<ChatInteraction>) {
        self.messages.clear();
        if interactions.is_empty() {
            self.show_welcome_avatar = true;
            let welcome = self.welcome_message.clone();
            self.messages.push(ChatEntry {
                sender: Sender::Bot,
                content: welcome,
                is_error: false,
            });
            return;
        }

        self.show_welcome_avatar = false;
        for interaction in interactions {
            self.messages.push(ChatEntry {
                sender: Sender::User,
                content: interaction.user_message,
                is_error: false,
            });
            self.messages.push(ChatEntry {
                sender: Sender::Bot,
                content: interaction.bot_response,
                is_error: false,
            });
        }
    }

    fn push_bot(&mut self, content: String, is_error: bool) {
        self.show_welcome_avatar = false;
        self.messages.push(ChatEntry {
            sender: Sender::Bot,
            content,
            is_error,
        });
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
