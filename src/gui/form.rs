//! Intake view: the four required fields plus the optional photo.

use eframe::egui;
use egui::RichText;

use crate::machine::StageEvent;
use crate::record::FormFields;
use crate::theme;

const PHOTO_FILTER: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

pub fn render(
    ctx: &egui::Context,
    fields: &mut FormFields,
    photo_tex: Option<&egui::TextureHandle>,
) -> Option<StageEvent> {
    let mut submitted = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_HUGE);
                ui.set_max_width(440.0);

                theme::card_frame(ui).show(ui, |ui| {
                    ui.add_space(theme::SPACING_SMALL);
                    ui.heading(RichText::new("Passport Generator").size(30.0).color(theme::NAVY));
                    ui.label(
                        RichText::new("Fill your details to create your official passport").weak(),
                    );
                    ui.add_space(theme::SPACING_LARGE);

                    let show_missing = fields.show_missing;
                    text_field(
                        ui,
                        "Full Name",
                        "John Alexander Smith",
                        &mut fields.full_name,
                        show_missing,
                    );
                    text_field(
                        ui,
                        "Date of Birth",
                        "YYYY-MM-DD",
                        &mut fields.date_of_birth,
                        show_missing,
                    );
                    text_field(
                        ui,
                        "Nationality",
                        "United States",
                        &mut fields.nationality,
                        show_missing,
                    );
                    text_field(
                        ui,
                        "Destination",
                        "Paris, France",
                        &mut fields.destination,
                        show_missing,
                    );

                    photo_picker(ui, fields, photo_tex);

                    ui.add_space(theme::SPACING_LARGE);
                    if fields.show_missing && !fields.missing_fields().is_empty() {
                        ui.label(
                            RichText::new("All fields except the photo are required.")
                                .small()
                                .color(theme::STAMP_RED),
                        );
                        ui.add_space(theme::SPACING_SMALL);
                    }

                    let submit = egui::Button::new(
                        RichText::new("Generate Passport")
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .fill(theme::NAVY)
                    .min_size(egui::vec2(ui.available_width(), 40.0));
                    if ui.add(submit).clicked() {
                        submitted = true;
                    }
                    ui.add_space(theme::SPACING_SMALL);
                });
            });
        });
    });

    submitted.then_some(StageEvent::Submit)
}

fn text_field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String, show_missing: bool) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).strong());
            if show_missing && value.trim().is_empty() {
                ui.label(RichText::new("required").small().color(theme::STAMP_RED));
            }
        });
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme::SPACING_MEDIUM);
    });
}

fn photo_picker(ui: &mut egui::Ui, fields: &mut FormFields, photo_tex: Option<&egui::TextureHandle>) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        ui.label(RichText::new("Profile Photo").strong());
        ui.label(RichText::new("Optional").small().weak());
        ui.add_space(theme::SPACING_TINY);

        let clicked = match photo_tex {
            Some(tex) => ui
                .add(egui::Button::image(
                    egui::Image::from_texture(tex).fit_to_exact_size(egui::vec2(72.0, 72.0)),
                ))
                .on_hover_text("Click to pick a different photo")
                .clicked(),
            None => {
                let button = egui::Button::new("\u{1F4F7}  Click to upload your photo")
                    .min_size(egui::vec2(ui.available_width(), 56.0));
                ui.add(button).clicked()
            }
        };
        if clicked {
            pick_photo(fields);
        }
    });
}

/// Opens the native image picker and decodes the pick. Any failure is logged
/// and leaves the photo absent; it never blocks submission.
fn pick_photo(fields: &mut FormFields) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Choose a passport photo")
        .add_filter("Images", PHOTO_FILTER)
        .pick_file()
    else {
        return;
    };
    match crate::record::load_photo(&path) {
        Ok(photo) => fields.photo = Some(photo),
        Err(e) => tracing::warn!("Ignoring unreadable photo {}: {e}", path.display()),
    }
}
