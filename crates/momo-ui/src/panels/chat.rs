//! Chat panel — displays the conversation and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use crate::state::{ChatEntry, Sender, UiState};
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.show_welcome_avatar {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new("🐒").size(72.0));
                                ui.label(RichText::new("MoMo").color(ACCENT).strong());
                            });
                            ui.add_space(8.0);
                        }

                        for entry in &state.messages {
                            render_message(ui, entry);
                            ui.add_space(4.0);
                        }

                        if state.is_busy() {
                            ui.label(RichText::new("MoMo está escribiendo…").color(TEXT_SECONDARY).italics());
                        }
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let busy = state.is_busy();
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Escribe un mensaje...")
                        .desired_width(ui.available_width() - 90.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add_enabled(!busy, input);

                    let send_enabled = !busy && !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Enviar").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SECONDARY })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(80.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter || send_btn.clicked()) {
                        let text = state.input_text.trim().to_string();
                        state.push_user_message(&text);
                        state.input_text.clear();
                        submitted = Some(text);
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (align, bg) = match (entry.sender, entry.is_error) {
        (Sender::User, _) => (Align::Max, USER_BUBBLE),
        (Sender::Bot, true) => (Align::Min, ERROR_BUBBLE),
        (Sender::Bot, false) => (Align::Min, BOT_BUBBLE),
    };
    let label = match entry.sender {
        Sender::User => "Tú",
        Sender::Bot => "MoMo",
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.75);
                ui.label(RichText::new(label).color(ACCENT).strong().small());
                ui.label(RichText::new(&entry.content).color(TEXT_PRIMARY));
            });
    });
}
