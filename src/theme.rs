//! Passport palette and shared frames.

use eframe::egui;
use egui::{Color32, CornerRadius, Margin, Stroke};

// Cover / left interior page
pub const NAVY: Color32 = Color32::from_rgb(30, 58, 138);
pub const NAVY_DEEP: Color32 = Color32::from_rgb(23, 37, 84);

// Gold titling on the cover
pub const GOLD: Color32 = Color32::from_rgb(252, 211, 77);
pub const GOLD_FAINT: Color32 = Color32::from_rgb(253, 230, 138);

// Right page paper and ink
pub const PAPER: Color32 = Color32::from_rgb(255, 251, 235);
pub const PAPER_EDGE: Color32 = Color32::from_rgb(253, 230, 138);
pub const INK: Color32 = Color32::from_rgb(69, 26, 3);
pub const INK_SOFT: Color32 = Color32::from_rgb(120, 53, 15);

// Approval stamp
pub const STAMP_RED: Color32 = Color32::from_rgb(220, 38, 38);

// Spacing constants
pub const SPACING_TINY: f32 = 4.0;
pub const SPACING_SMALL: f32 = 8.0;
pub const SPACING_MEDIUM: f32 = 12.0;
pub const SPACING_LARGE: f32 = 20.0;
pub const SPACING_HUGE: f32 = 32.0;

pub const MARGIN_CARD: f32 = 15.0;
pub const MARGIN_PAGE: f32 = 24.0;

pub fn apply_stampbook_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.widgets.active.bg_fill = NAVY;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.widgets.hovered.bg_fill = NAVY_DEEP;
    visuals.widgets.hovered.corner_radius = CornerRadius::same(6);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(226, 232, 240);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(6);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(241, 245, 249);
    visuals.widgets.noninteractive.corner_radius = CornerRadius::same(6);

    visuals.selection.bg_fill = NAVY.linear_multiply(0.4);

    visuals.window_corner_radius = CornerRadius::same(12);
    visuals.window_shadow.blur = 15;
    visuals.window_shadow.color = Color32::from_rgba_premultiplied(0, 0, 0, 150);

    // Pale blue backdrop behind every view
    visuals.panel_fill = Color32::from_rgb(239, 246, 255);
    visuals.faint_bg_color = Color32::from_rgb(248, 250, 252);
    visuals.extreme_bg_color = Color32::WHITE;

    ctx.set_visuals(visuals);
}

/// Rounded card used by the intake form.
pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(MARGIN_CARD as i8))
        .stroke(Stroke::new(1.0, Color32::from_rgb(203, 213, 225)))
}

/// The closed navy cover.
pub fn cover_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(NAVY)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(MARGIN_PAGE as i8))
        .stroke(Stroke::new(1.0, GOLD.linear_multiply(0.3)))
}

/// Left interior page of the opened passport.
pub fn interior_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(NAVY_DEEP)
        .inner_margin(Margin::same(MARGIN_PAGE as i8))
}

/// Right detail page of the opened passport.
pub fn paper_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(PAPER)
        .inner_margin(Margin::same(MARGIN_PAGE as i8))
        .stroke(Stroke::new(1.0, PAPER_EDGE))
}
