//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 247, 242);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(238, 232, 224);
pub const BG_SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(51, 47, 44);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(120, 112, 104);
pub const ACCENT: Color32 = Color32::from_rgb(126, 170, 146);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(214, 234, 222);
pub const BOT_BUBBLE: Color32 = Color32::from_rgb(255, 255, 255);
pub const SUCCESS: Color32 = Color32::from_rgb(46, 139, 87);
pub const ERROR: Color32 = Color32::from_rgb(200, 64, 64);
pub const ERROR_BUBBLE: Color32 = Color32::from_rgb(252, 228, 228);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);
pub const AUTH_FORM_WIDTH: f32 = 320.0;

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SURFACE;
    style.visuals.extreme_bg_color = BG_SURFACE;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 8.0);

    ctx.set_style(style);
}
