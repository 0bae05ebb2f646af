//! Main egui application — routes between the auth and chat screens and
//! dispatches session operations.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use momo_core::event_bus::EventBus;
use momo_core::SessionClient;
use momo_types::event::ChatEvent;
use momo_types::AuthError;
use momo_ui::panels::{auth, chat};
use momo_ui::state::{AuthSubmission, Screen, UiState};
use momo_ui::theme;

const HISTORY_ERROR: &str = "Error al cargar el historial.";

/// The main application state
pub struct MomoApp {
    ui_state: UiState,
    event_bus: EventBus,
    client: Rc<SessionClient>,
    first_frame: bool,
    confirm_logout: bool,
}

impl MomoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: Rc<SessionClient>) -> Self {
        let app = Self {
            ui_state: UiState::with_welcome(client.config().welcome_message.clone()),
            event_bus: EventBus::new(),
            client,
            first_frame: true,
            confirm_logout: false,
        };
        app.start_session(&cc.egui_ctx);
        app
    }

    /// Pick up a persisted token, or ask for a login
    fn start_session(&self, ctx: &egui::Context) {
        let client = self.client.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if client.restore().await.is_some() {
                event_bus.emit(ChatEvent::SessionRestored);
                load_history(&client, &event_bus).await;
            } else {
                event_bus.emit(ChatEvent::LoginRequired);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_auth(&self, submission: AuthSubmission, ctx: &egui::Context) {
        let client = self.client.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        self.event_bus.emit(ChatEvent::RequestStarted);
        wasm_bindgen_futures::spawn_local(async move {
            match submission {
                AuthSubmission::Login { email, password } => {
                    match client.login(&email, &password).await {
                        Ok(session) => {
                            event_bus.emit(ChatEvent::LoggedIn { email: session.email });
                            load_history(&client, &event_bus).await;
                        }
                        Err(e) => event_bus.emit(ChatEvent::from_auth_error(&e)),
                    }
                }
                AuthSubmission::Register { name, email, password } => {
                    match client.register(&name, &email, &password).await {
                        Ok(()) => event_bus.emit(ChatEvent::Registered),
                        Err(e) => event_bus.emit(ChatEvent::from_auth_error(&e)),
                    }
                }
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        if text.trim().is_empty() {
            return;
        }
        let client = self.client.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        self.event_bus.emit(ChatEvent::RequestStarted);
        wasm_bindgen_futures::spawn_local(async move {
            match client.send_message(&text).await {
                Ok(Some(reply)) => event_bus.emit(ChatEvent::BotReplied { reply }),
                Ok(None) => {}
                // A logout or newer login already reset the screen.
                Err(AuthError::SessionChanged) => {}
                Err(e) if e.requires_login() => event_bus.emit(ChatEvent::SessionExpired),
                Err(e) => {
                    log::error!("Send failed: {}", e);
                    event_bus.emit(ChatEvent::from_auth_error(&e));
                }
            }
            ctx.request_repaint();
        });
    }

    fn dispatch_logout(&self, ctx: &egui::Context) {
        let client = self.client.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            client.logout().await;
            event_bus.emit(ChatEvent::LoggedOut);
            ctx.request_repaint();
        });
    }

    fn logout_dialog(&mut self, ctx: &egui::Context) {
        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Cerrar sesión")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("¿Estás seguro de que quieres cerrar sesión?");
                ui.horizontal(|ui| {
                    confirmed = ui.button("Sí").clicked();
                    cancelled = ui.button("Cancelar").clicked();
                });
            });

        if confirmed {
            self.confirm_logout = false;
            self.dispatch_logout(ctx);
        } else if cancelled {
            self.confirm_logout = false;
        }
    }
}

/// Fetch the transcript and report the outcome on the bus
async fn load_history(client: &SessionClient, event_bus: &EventBus) {
    event_bus.emit(ChatEvent::RequestStarted);
    match client.fetch_history().await {
        Ok(interactions) => event_bus.emit(ChatEvent::HistoryLoaded { interactions }),
        Err(AuthError::SessionChanged) => {}
        Err(e) if e.requires_login() => event_bus.emit(ChatEvent::SessionExpired),
        Err(e) => {
            log::error!("History failed: {}", e);
            event_bus.emit(ChatEvent::HistoryFailed { message: HISTORY_ERROR.to_string() });
        }
    }
}

impl eframe::App for MomoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("MoMo").strong().color(theme::ACCENT).size(16.0));
                if self.ui_state.screen == Screen::Chat {
                    if let Some(email) = &self.ui_state.user_email {
                        ui.separator();
                        ui.label(RichText::new(email).color(theme::TEXT_SECONDARY).small());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Cerrar sesión").clicked() {
                            self.confirm_logout = true;
                        }
                    });
                }
            });
        });

        if self.confirm_logout {
            self.logout_dialog(ctx);
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.ui_state.screen {
            Screen::Auth => {
                if let Some(submission) = auth::auth_panel(ui, &mut self.ui_state) {
                    self.dispatch_auth(submission, ctx);
                }
            }
            Screen::Chat => {
                if let Some(text) = chat::chat_panel(ui, &mut self.ui_state) {
                    self.dispatch_message(text, ctx);
                }
            }
        });
    }
}
