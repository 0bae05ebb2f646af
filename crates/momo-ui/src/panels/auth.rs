//! Login / register form.

use egui::{self, RichText, Vec2};
use crate::state::{AuthMode, AuthSubmission, UiState};
use crate::theme::*;

/// Render the auth form. Returns a submission when the user presses the
/// submit button or Enter in the password field.
pub fn auth_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<AuthSubmission> {
    let mut submitted = None;
    let registering = state.auth_mode == AuthMode::Register;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        egui::Frame::default()
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.set_width(AUTH_FORM_WIDTH);
                ui.vertical_centered(|ui| {
                    let title = if registering { "Crear cuenta" } else { "Iniciar sesión" };
                    ui.heading(RichText::new(title).color(TEXT_PRIMARY).strong());
                });
                ui.add_space(8.0);

                if registering {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.auth_name)
                            .hint_text("Nombre")
                            .desired_width(f32::INFINITY),
                    );
                }
                ui.add(
                    egui::TextEdit::singleline(&mut state.auth_email)
                        .hint_text("Correo electrónico")
                        .desired_width(f32::INFINITY),
                );
                let password = ui.add(
                    egui::TextEdit::singleline(&mut state.auth_password)
                        .password(true)
                        .hint_text("Contraseña")
                        .desired_width(f32::INFINITY),
                );

                if let Some(feedback) = &state.auth_feedback {
                    let color = if feedback.is_error { ERROR } else { SUCCESS };
                    ui.label(RichText::new(&feedback.text).color(color).small());
                }

                ui.add_space(4.0);
                let label = if registering { "Registrarse" } else { "Entrar" };
                let submit = ui.add_enabled(
                    !state.is_busy(),
                    egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(AUTH_FORM_WIDTH, 32.0)),
                );

                let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (submit.clicked() || enter) && !state.is_busy() {
                    log::debug!("Auth form submitted ({:?})", state.auth_mode);
                    submitted = Some(state.auth_submission());
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let (prompt, switch) = if registering {
                        ("¿Ya tienes cuenta?", "Inicia sesión")
                    } else {
                        ("¿No tienes cuenta?", "Regístrate")
                    };
                    ui.label(RichText::new(prompt).color(TEXT_SECONDARY).small());
                    if ui.link(switch).clicked() {
                        state.toggle_auth_mode();
                    }
                });
            });
    });

    submitted
}
