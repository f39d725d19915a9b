//! Export adapter: passport page → PNG in the Downloads folder.
//!
//! The GUI asks the viewport for a screenshot, hands the captured frame to
//! [`spawn_encode`], and polls the [`ExportState`] guard for the outcome.
//! Cropping, supersampling and PNG encoding happen on a worker thread so the
//! interface never blocks. Only one capture may be in flight at a time; the
//! guard refuses re-entry rather than queueing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossbeam_channel::{Receiver, TryRecvError};
use image::RgbaImage;
use image::imageops::FilterType;

use crate::error::{Result, ResultExt as _, StampbookError};

/// Exported bitmaps are rendered at twice the widget's logical size.
pub const SUPERSAMPLE: f32 = 2.0;

/// Lowercases and collapses internal whitespace runs to single hyphens:
/// `"John  Alexander Smith"` → `"john-alexander-smith"`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The deterministic export filename for a traveller.
pub fn export_filename(full_name: &str) -> String {
    format!("passport-{}.png", slugify(full_name))
}

/// Where exports land: the user's Downloads directory, or the working
/// directory if the platform has no notion of one.
pub fn export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Tracks the two phases of an export: waiting for the viewport screenshot,
/// then waiting for the worker thread. Busy in either phase.
#[derive(Default)]
pub struct ExportState {
    capture_pending: bool,
    rx: Option<Receiver<Result<PathBuf>>>,
}

impl ExportState {
    pub fn is_busy(&self) -> bool {
        self.capture_pending || self.rx.is_some()
    }

    /// Claims the capture slot. Returns `false` (and does nothing) if an
    /// export is already in flight, so rapid double-clicks emit one file.
    pub fn try_begin_capture(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.capture_pending = true;
        true
    }

    /// Consumes the pending-capture claim when the screenshot frame arrives.
    /// Returns `false` for screenshots nobody asked for.
    pub fn take_pending_capture(&mut self) -> bool {
        std::mem::take(&mut self.capture_pending)
    }

    /// Moves into the encode phase.
    pub fn set_encoding(&mut self, rx: Receiver<Result<PathBuf>>) {
        self.rx = Some(rx);
    }

    /// Non-blocking check for the worker's outcome. Clears the busy flag
    /// when a result (success or failure) has arrived. A worker that dies
    /// without reporting counts as a failure, so the guard never wedges.
    pub fn poll(&mut self) -> Option<Result<PathBuf>> {
        match self.rx.as_ref()?.try_recv() {
            Ok(result) => {
                self.rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err(StampbookError::Capture(
                    "export worker exited without reporting a result".to_owned(),
                )))
            }
        }
    }
}

/// Crops a full-viewport screenshot to the passport rect and scales it to
/// [`SUPERSAMPLE`]× the widget's logical size.
pub fn process_capture(
    screenshot: &egui::ColorImage,
    page_rect: egui::Rect,
    pixels_per_point: f32,
) -> Result<RgbaImage> {
    let region = screenshot.region(&page_rect, Some(pixels_per_point));
    let [width, height] = region.size;
    if width == 0 || height == 0 {
        return Err(StampbookError::Capture(format!(
            "captured region is empty ({page_rect:?})"
        )));
    }

    let captured = RgbaImage::from_raw(width as u32, height as u32, region.as_raw().to_vec())
        .ok_or_else(|| {
            StampbookError::Capture("captured region has inconsistent dimensions".to_owned())
        })?;

    let target_w = (page_rect.width() * SUPERSAMPLE).round().max(1.0) as u32;
    let target_h = (page_rect.height() * SUPERSAMPLE).round().max(1.0) as u32;
    if (captured.width(), captured.height()) == (target_w, target_h) {
        return Ok(captured);
    }
    Ok(image::imageops::resize(
        &captured,
        target_w,
        target_h,
        FilterType::CatmullRom,
    ))
}

/// Encodes a bitmap as PNG at `path`.
pub fn write_png(bitmap: &RgbaImage, path: &Path) -> Result<()> {
    bitmap
        .save(path)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))
}

/// Processes and writes a captured frame on a worker thread. The result
/// arrives on the returned channel; `ctx` is repainted so the GUI notices.
pub fn spawn_encode(
    screenshot: Arc<egui::ColorImage>,
    page_rect: egui::Rect,
    pixels_per_point: f32,
    full_name: String,
    ctx: egui::Context,
) -> Receiver<Result<PathBuf>> {
    let (tx, rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let result = (|| {
            let bitmap = process_capture(&screenshot, page_rect, pixels_per_point)?;
            let path = export_dir().join(export_filename(&full_name));
            write_png(&bitmap, &path)?;
            Ok(path)
        })();

        if let Err(e) = tx.send(result) {
            tracing::error!("Failed to deliver export result: {e}");
        }
        ctx.request_repaint();
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("John Alexander Smith"), "john-alexander-smith");
        assert_eq!(slugify("  Ada   Lovelace  "), "ada-lovelace");
        assert_eq!(slugify("Prince"), "prince");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename("John Alexander Smith"),
            "passport-john-alexander-smith.png"
        );
    }

    #[test]
    fn test_guard_refuses_second_capture() {
        let mut state = ExportState::default();
        assert!(state.try_begin_capture(), "first capture should be accepted");
        assert!(!state.try_begin_capture(), "second capture must be refused");
        assert!(state.is_busy());

        // The screenshot frame arrives; the claim is consumed exactly once.
        assert!(state.take_pending_capture());
        assert!(!state.take_pending_capture());
    }

    #[test]
    fn test_guard_clears_after_result() {
        let mut state = ExportState::default();
        assert!(state.try_begin_capture());
        state.take_pending_capture();

        let (tx, rx) = crossbeam_channel::bounded(1);
        state.set_encoding(rx);
        assert!(state.is_busy());
        assert!(state.poll().is_none(), "no result yet");

        tx.send(Err(StampbookError::Capture("boom".to_owned())))
            .expect("receiver alive");
        let result = state.poll().expect("result should arrive");
        assert!(result.is_err());
        assert!(!state.is_busy(), "busy flag must clear even on failure");
        assert!(state.try_begin_capture(), "user may retry after a failure");
    }

    #[test]
    fn test_guard_clears_when_worker_dies() {
        let mut state = ExportState::default();
        assert!(state.try_begin_capture());
        state.take_pending_capture();

        let (tx, rx) = crossbeam_channel::bounded::<Result<PathBuf>>(1);
        state.set_encoding(rx);
        assert!(state.poll().is_none(), "no result yet");

        // A panicking worker drops its sender without ever sending.
        drop(tx);
        let result = state.poll().expect("disconnect must surface as a result");
        assert!(result.is_err());
        assert!(!state.is_busy(), "a dead worker must not wedge the guard");
        assert!(state.try_begin_capture(), "user may retry after the loss");
    }

    #[test]
    fn test_process_capture_crops_and_scales() {
        // 100x80 screenshot at 1.0 px/pt, with a marker pixel at (10, 10).
        let mut pixels = vec![egui::Color32::WHITE; 100 * 80];
        pixels[10 * 100 + 10] = egui::Color32::RED;
        let screenshot = egui::ColorImage {
            size: [100, 80],
            pixels,
            ..Default::default()
        };

        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(40.0, 30.0));
        let bitmap = process_capture(&screenshot, rect, 1.0).expect("capture should succeed");
        assert_eq!(bitmap.width(), 80, "2x the logical width");
        assert_eq!(bitmap.height(), 60, "2x the logical height");
        // Marker lands at the crop origin.
        let px = bitmap.get_pixel(0, 0);
        assert!(px.0[0] > px.0[1], "top-left should keep the red marker");
    }

    #[test]
    fn test_process_capture_rejects_empty_region() {
        let screenshot = egui::ColorImage {
            size: [100, 80],
            pixels: vec![egui::Color32::WHITE; 100 * 80],
            ..Default::default()
        };
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(0.0, 0.0));
        assert!(process_capture(&screenshot, rect, 1.0).is_err());
    }
}
