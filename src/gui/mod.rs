//! The single-window GUI: owns the presentation state machine, routes clicks
//! into it, drives the stamp-reveal timer, and wires the export adapter to
//! the viewport screenshot mechanism.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use eframe::egui;

pub mod cover;
pub mod form;
pub mod page;

use crate::export::{self, ExportState};
use crate::machine::{Stage, StageEvent};
use crate::record::Photo;

pub struct StampbookApp {
    stage: Stage,
    /// Transient line under the page buttons (export outcome, mostly).
    status: String,
    export: ExportState,
    /// Screen rect of the passport spread from the last rendered frame.
    /// Only meaningful while the page view is up; the capture crops to it.
    page_rect: Option<egui::Rect>,
    /// Uploaded photo texture together with the photo it was made from.
    /// Holding the `Photo` keeps its allocation alive, so pointer identity
    /// stays a sound cache key.
    photo_texture: Option<(Photo, egui::TextureHandle)>,
}

impl StampbookApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::theme::apply_stampbook_theme(&cc.egui_ctx);
        Self {
            stage: Stage::default(),
            status: String::new(),
            export: ExportState::default(),
            page_rect: None,
            photo_texture: None,
        }
    }

    /// Applies a user interaction to the state machine.
    fn apply(&mut self, event: StageEvent) {
        let stage = std::mem::take(&mut self.stage);
        self.stage = stage.advance(
            event,
            Instant::now(),
            Local::now().date_naive(),
            &mut rand::thread_rng(),
        );
        self.status.clear();
        if matches!(event, StageEvent::Reset) {
            self.photo_texture = None;
        }
        tracing::debug!("Applied {event:?}, now in {}", self.stage_name());
    }

    fn stage_name(&self) -> &'static str {
        match self.stage {
            Stage::Form(_) => "Form",
            Stage::Cover { .. } => "Cover",
            Stage::Page { .. } => "Page",
        }
    }

    /// Asks the viewport for a screenshot, unless one is already on its way.
    /// A no-op outside the page view: there is nothing to export.
    fn request_export(&mut self, ctx: &egui::Context) {
        if !self.stage.is_page() {
            return;
        }
        if self.export.try_begin_capture() {
            tracing::info!("Requesting viewport capture for export");
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        }
    }

    /// Collects screenshot frames and finished encodes.
    fn handle_export_events(&mut self, ctx: &egui::Context) {
        if let Some(result) = self.export.poll() {
            match result {
                Ok(path) => {
                    tracing::info!("Exported passport to {}", path.display());
                    self.status = format!("Saved {}", path.display());
                }
                Err(e) => {
                    // Never surfaced as a dialog; the user can simply retry.
                    tracing::warn!("Passport export failed: {e}");
                    self.status = "Export failed, see logs".to_owned();
                }
            }
        }

        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = screenshot else { return };
        if !self.export.take_pending_capture() {
            return;
        }
        match (self.page_rect, self.stage.record()) {
            (Some(rect), Some(record)) if self.stage.is_page() => {
                let rx = export::spawn_encode(
                    image,
                    rect,
                    ctx.pixels_per_point(),
                    record.full_name.clone(),
                    ctx.clone(),
                );
                self.export.set_encoding(rx);
            }
            _ => {
                tracing::warn!("Capture arrived after the page view was gone; dropping it");
            }
        }
    }

    /// Uploads (or reuses) the texture for the photo the current view shows.
    fn texture_for(&mut self, ctx: &egui::Context, photo: &Photo) -> egui::TextureHandle {
        if let Some((cached, tex)) = &self.photo_texture {
            if Arc::ptr_eq(cached, photo) {
                return tex.clone();
            }
        }
        let tex = ctx.load_texture(
            "traveller-photo",
            egui::ImageData::Color(photo.clone()),
            egui::TextureOptions::LINEAR,
        );
        self.photo_texture = Some((photo.clone(), tex.clone()));
        tex
    }
}

impl eframe::App for StampbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_export_events(ctx);

        let photo = match &self.stage {
            Stage::Form(fields) => fields.photo.clone(),
            Stage::Cover { .. } => None,
            Stage::Page { record, .. } => record.photo.clone(),
        };
        let photo_tex = photo.map(|p| self.texture_for(ctx, &p));

        let mut event = None;
        let mut export_clicked = false;

        match &mut self.stage {
            Stage::Form(fields) => {
                self.page_rect = None;
                event = form::render(ctx, fields, photo_tex.as_ref());
            }
            Stage::Cover { serial, .. } => {
                self.page_rect = None;
                event = cover::render(ctx, serial);
            }
            Stage::Page { record, page } => {
                page.tick(Instant::now(), &mut rand::thread_rng());

                let out = page::render(
                    ctx,
                    record,
                    page,
                    photo_tex.as_ref(),
                    self.export.is_busy(),
                    &self.status,
                );
                self.page_rect = Some(out.page_rect);
                event = out.event;
                export_clicked = out.export_clicked;

                // Wake up exactly when the stamp is due.
                if let Some(due) = page.reveal_at() {
                    ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
                }
            }
        }

        if export_clicked {
            self.request_export(ctx);
        }
        if let Some(event) = event {
            self.apply(event);
        }

        if self.export.is_busy() {
            ctx.request_repaint();
        }
    }
}

/// "Start Over" pinned to the bottom-left corner; shared by the cover and
/// page views. Returns true when clicked.
pub(crate) fn start_over_overlay(ctx: &egui::Context) -> bool {
    let mut clicked = false;
    egui::Area::new(egui::Id::new("start_over"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(24.0, -24.0))
        .show(ctx, |ui| {
            if ui.button("Start Over").clicked() {
                clicked = true;
            }
        });
    clicked
}

/// Spaces out the capitals the way passport section labels are printed:
/// `"PASSPORT NUMBER"` → `"P A S S P O R T   N U M B E R"`.
pub(crate) fn letterspace(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterspace() {
        assert_eq!(letterspace("ID"), "I D");
        assert_eq!(letterspace("A B"), "A   B");
        assert_eq!(letterspace(""), "");
    }

    #[test]
    fn test_photo_cache_key_is_allocation_identity() {
        // The texture cache compares photos by Arc identity, not content.
        // Equal-looking uploads are distinct allocations and must re-upload;
        // clones of the cached photo must hit. The cache retains its Arc, so
        // the allocation it points at can never be reused under it.
        let first: Photo = Arc::new(egui::ColorImage::example());
        let second: Photo = Arc::new(egui::ColorImage::example());
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &first.clone()));
    }
}
