//! Opened-passport view: a two-page spread with the traveller's details on
//! the right page, plus the approval stamp once its delay has elapsed.

use eframe::egui;
use egui::{RichText, Stroke, emath::Rot2, epaint::TextShape};

use crate::dates;
use crate::flags;
use crate::gui::letterspace;
use crate::machine::{PageState, Stamp, StageEvent};
use crate::record::TravelRecord;
use crate::theme;

const PAGE_W: f32 = 360.0;
const PAGE_H: f32 = 520.0;

/// What the page view reports back to the app for this frame.
pub struct PageOutput {
    pub event: Option<StageEvent>,
    pub export_clicked: bool,
    /// Screen rect of the spread, the subtree an export captures.
    pub page_rect: egui::Rect,
}

pub fn render(
    ctx: &egui::Context,
    record: &TravelRecord,
    page: &PageState,
    photo_tex: Option<&egui::TextureHandle>,
    export_busy: bool,
    status: &str,
) -> PageOutput {
    let mut event = None;
    let mut export_clicked = false;
    let mut page_rect = egui::Rect::NOTHING;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_LARGE);

                let spread = ui
                    .horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;

                        let left = theme::interior_frame().show(ui, |ui| {
                            ui.set_width(PAGE_W - 2.0 * theme::MARGIN_PAGE);
                            ui.set_min_height(PAGE_H - 2.0 * theme::MARGIN_PAGE);
                            interior_page(ui);
                        });
                        let right = theme::paper_frame().show(ui, |ui| {
                            ui.set_width(PAGE_W - 2.0 * theme::MARGIN_PAGE);
                            ui.set_min_height(PAGE_H - 2.0 * theme::MARGIN_PAGE);
                            detail_page(ui, record, page, photo_tex);
                        });

                        (left.response.rect, right.response.rect)
                    })
                    .inner;

                let (left_rect, right_rect) = spread;
                page_rect = left_rect.union(right_rect);

                if let Stamp::Visible { rotation_degrees } = page.stamp() {
                    paint_stamp(ui.painter(), right_rect, *rotation_degrees, record, page);
                }

                ui.add_space(theme::SPACING_LARGE);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_MEDIUM;

                    let close = egui::Button::new(
                        RichText::new("Close Passport")
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .fill(theme::NAVY)
                    .min_size(egui::vec2(140.0, 36.0));
                    if ui.add(close).clicked() {
                        event = Some(StageEvent::Close);
                    }

                    let export = egui::Button::new("\u{2B07}  Export PNG")
                        .min_size(egui::vec2(140.0, 36.0));
                    if ui.add_enabled(!export_busy, export).clicked() {
                        export_clicked = true;
                    }
                    if export_busy {
                        ui.spinner();
                        ui.label(RichText::new("Exporting\u{2026}").weak());
                    }
                });

                if !status.is_empty() {
                    ui.add_space(theme::SPACING_SMALL);
                    ui.label(RichText::new(status).small().weak());
                }
                ui.add_space(theme::SPACING_LARGE);
            });
        });
    });

    if crate::gui::start_over_overlay(ctx) {
        event = Some(StageEvent::Reset);
    }

    PageOutput {
        event,
        export_clicked,
        page_rect,
    }
}

/// Left page: the cover interior, all decoration.
fn interior_page(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_HUGE);
        ui.label(
            RichText::new("\u{1F6E1}")
                .size(56.0)
                .color(theme::GOLD.linear_multiply(0.3)),
        );
        ui.add_space(theme::SPACING_HUGE);

        ui.label(
            RichText::new(letterspace("ISSUED BY"))
                .size(11.0)
                .strong()
                .color(theme::GOLD),
        );
        ui.add_space(theme::SPACING_SMALL);
        ui.label(
            RichText::new("OFFICIAL")
                .size(26.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
        ui.label(
            RichText::new("PASSPORT")
                .size(26.0)
                .strong()
                .color(theme::GOLD_FAINT),
        );

        ui.add_space((ui.available_height() - 48.0).max(0.0));
        ui.label(
            RichText::new(letterspace("VALID INDEFINITELY"))
                .size(9.0)
                .color(theme::GOLD_FAINT.linear_multiply(0.6)),
        );
        ui.label(
            RichText::new("For official travel use only")
                .size(9.0)
                .color(theme::GOLD_FAINT.linear_multiply(0.5)),
        );
    });
}

/// Right page: the traveller's details.
fn detail_page(
    ui: &mut egui::Ui,
    record: &TravelRecord,
    page: &PageState,
    photo_tex: Option<&egui::TextureHandle>,
) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(letterspace("PERSONAL INFORMATION"))
                .size(10.0)
                .strong()
                .color(theme::INK_SOFT),
        );
        ui.label(RichText::new("PASSPORT").size(22.0).strong().color(theme::INK));
    });
    paper_rule(ui);
    ui.add_space(theme::SPACING_MEDIUM);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            photo_box(ui, photo_tex);
            ui.vertical_centered(|ui| {
                ui.label(field_label("PHOTO"));
            });
        });
        ui.add_space(theme::SPACING_MEDIUM);

        ui.vertical(|ui| {
            ui.label(field_label("SURNAME / GIVEN NAMES"));
            ui.label(
                RichText::new(record.display_name())
                    .size(16.0)
                    .strong()
                    .color(theme::INK),
            );
            ui.add_space(theme::SPACING_MEDIUM);

            ui.label(field_label("DATE OF BIRTH"));
            ui.label(
                RichText::new(record.display_birth_date())
                    .monospace()
                    .size(11.0)
                    .color(theme::INK_SOFT),
            );
            ui.add_space(theme::SPACING_SMALL);

            ui.label(field_label("NATIONALITY"));
            let nationality = match flags::flag_for(&record.nationality) {
                Some(glyph) => format!("{glyph} {}", record.display_nationality()),
                None => record.display_nationality(),
            };
            ui.label(
                RichText::new(nationality)
                    .monospace()
                    .size(11.0)
                    .color(theme::INK_SOFT),
            );
        });
    });

    ui.add_space(theme::SPACING_MEDIUM);
    paper_rule(ui);
    ui.label(field_label("AUTHORIZED DESTINATION"));
    ui.label(
        RichText::new(record.display_destination())
            .size(18.0)
            .strong()
            .color(theme::INK),
    );
    paper_rule(ui);
    ui.add_space(theme::SPACING_MEDIUM);

    ui.columns(3, |columns| {
        if let [id_col, issued_col, expires_col] = columns {
            id_col.vertical_centered(|ui| {
                ui.label(field_label("PASSPORT ID"));
                ui.label(
                    RichText::new(&page.document_id)
                        .monospace()
                        .size(11.0)
                        .color(theme::INK_SOFT),
                );
            });
            issued_col.vertical_centered(|ui| {
                ui.label(field_label("ISSUED"));
                ui.label(
                    RichText::new(dates::format_long_date(page.issued))
                        .size(10.0)
                        .color(theme::INK_SOFT),
                );
            });
            expires_col.vertical_centered(|ui| {
                ui.label(field_label("EXPIRES"));
                ui.label(
                    RichText::new(dates::format_long_date(page.expiry))
                        .size(10.0)
                        .color(theme::INK_SOFT),
                );
            });
        }
    });
}

fn field_label(text: &str) -> RichText {
    RichText::new(letterspace(text))
        .size(8.0)
        .strong()
        .color(theme::INK_SOFT)
}

fn paper_rule(ui: &mut egui::Ui) {
    ui.add_space(theme::SPACING_SMALL);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 2.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .rect_filled(rect, 1.0, theme::PAPER_EDGE.linear_multiply(0.5));
    ui.add_space(theme::SPACING_SMALL);
}

/// Circular photo, or a placeholder glyph when none was provided.
fn photo_box(ui: &mut egui::Ui, photo_tex: Option<&egui::TextureHandle>) {
    const SIZE: f32 = 112.0;
    match photo_tex {
        Some(tex) => {
            ui.add(
                egui::Image::from_texture(tex)
                    .fit_to_exact_size(egui::vec2(SIZE, SIZE))
                    .corner_radius(egui::CornerRadius::same((SIZE / 2.0) as u8)),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(SIZE, SIZE), egui::Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), SIZE / 2.0, egui::Color32::from_rgb(203, 213, 225));
            painter.circle_stroke(rect.center(), SIZE / 2.0, Stroke::new(2.0, theme::INK_SOFT));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "\u{1F4F7}",
                egui::FontId::proportional(30.0),
                theme::INK_SOFT,
            );
        }
    }
}

/// The red approval ring, tilted by the page's drawn angle, carrying a
/// checkmark, the destination and the issue date.
fn paint_stamp(
    painter: &egui::Painter,
    right_rect: egui::Rect,
    rotation_degrees: f32,
    record: &TravelRecord,
    page: &PageState,
) {
    let anchor = egui::pos2(right_rect.right() - 120.0, right_rect.center().y);
    let angle = rotation_degrees.to_radians();

    painter.circle_stroke(anchor, 64.0, Stroke::new(3.0, theme::STAMP_RED));
    painter.circle_stroke(
        anchor,
        57.0,
        Stroke::new(1.0, theme::STAMP_RED.linear_multiply(0.5)),
    );

    stamp_text(painter, anchor, -20.0, angle, "\u{2713}", 26.0);
    stamp_text(painter, anchor, 8.0, angle, &record.display_destination(), 10.0);
    stamp_text(
        painter,
        anchor,
        24.0,
        angle,
        &dates::format_long_date(page.issued),
        9.0,
    );
}

/// Lays one line of stamp text centered at `offset_y` below the stamp
/// center, rotated with the stamp around its center.
fn stamp_text(
    painter: &egui::Painter,
    center: egui::Pos2,
    offset_y: f32,
    angle: f32,
    text: &str,
    size: f32,
) {
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        egui::FontId::proportional(size),
        theme::STAMP_RED,
    );
    let local = egui::vec2(-galley.size().x / 2.0, offset_y - galley.size().y / 2.0);
    let pos = center + Rot2::from_angle(angle) * local;
    painter.add(TextShape::new(pos, galley, theme::STAMP_RED).with_angle(angle));
}
