//! Closed-cover view: navy booklet, gold titling, a cosmetic serial and a
//! click-to-open affordance. The whole cover is one click target.

use eframe::egui;
use egui::RichText;

use crate::gui::letterspace;
use crate::machine::StageEvent;
use crate::theme;

// Roughly the 9:14 booklet proportions of a real passport.
const COVER_W: f32 = 330.0;
const COVER_H: f32 = 500.0;

pub fn render(ctx: &egui::Context, serial: &str) -> Option<StageEvent> {
    let mut event = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(((ui.available_height() - COVER_H) / 2.0).max(theme::SPACING_LARGE));

            let response = ui
                .scope_builder(egui::UiBuilder::new().sense(egui::Sense::click()), |ui| {
                    ui.set_width(COVER_W);
                    theme::cover_frame().show(ui, |ui| {
                        ui.set_min_height(COVER_H - 2.0 * theme::MARGIN_PAGE);
                        cover_contents(ui, serial);
                    });
                })
                .response;

            if response.clicked() {
                event = Some(StageEvent::Open);
            }
            response.on_hover_cursor(egui::CursorIcon::PointingHand);
        });
    });

    if crate::gui::start_over_overlay(ctx) {
        event = Some(StageEvent::Reset);
    }
    event
}

fn cover_contents(ui: &mut egui::Ui, serial: &str) {
    let hovered = ui.rect_contains_pointer(ui.max_rect());

    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_LARGE);
        ui.label(
            RichText::new("\u{1F6E1}")
                .size(48.0)
                .color(theme::GOLD.linear_multiply(0.25)),
        );
        ui.add_space(theme::SPACING_HUGE);

        ui.label(
            RichText::new(letterspace("OFFICIAL DOCUMENT"))
                .size(11.0)
                .strong()
                .color(theme::GOLD),
        );
        ui.add_space(theme::SPACING_SMALL);
        ui.label(
            RichText::new("PASSPORT")
                .size(40.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
        gold_rule(ui);
        ui.add_space(theme::SPACING_HUGE);

        ui.label(
            RichText::new(letterspace("PASSPORT NUMBER"))
                .size(9.0)
                .color(theme::GOLD_FAINT.linear_multiply(0.6)),
        );
        ui.add_space(theme::SPACING_TINY);
        ui.label(
            RichText::new(letterspace(serial))
                .monospace()
                .size(13.0)
                .color(theme::GOLD_FAINT),
        );

        ui.add_space((ui.available_height() - 52.0).max(0.0));
        ui.label(
            RichText::new(letterspace("CLICK TO OPEN"))
                .size(9.0)
                .color(theme::GOLD_FAINT.linear_multiply(0.5)),
        );
        if hovered {
            ui.label(
                RichText::new("Official Travel Authorization")
                    .size(11.0)
                    .color(theme::GOLD_FAINT.linear_multiply(0.8)),
            );
        }
    });
}

fn gold_rule(ui: &mut egui::Ui) {
    ui.add_space(theme::SPACING_SMALL);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 2.0), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, 1.0, theme::GOLD.linear_multiply(0.7));
}
