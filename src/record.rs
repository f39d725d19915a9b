//! Intake data: the editable form draft and the immutable travel record.
//!
//! The form only checks that the four required fields are non-blank; it never
//! inspects their content. The record produced by a successful submission is
//! frozen for the rest of the session and only goes away on "Start Over".

use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, ResultExt as _};

/// A decoded passport photo, ready for upload to the GPU.
pub type Photo = Arc<egui::ColorImage>;

/// The one record the whole application revolves around. Exists exactly
/// while the passport (cover or page) is on screen.
#[derive(Clone)]
pub struct TravelRecord {
    pub full_name: String,
    /// Raw intake value, e.g. `1815-12-10`. Parsed lazily at render time so a
    /// malformed date degrades to a placeholder instead of blocking intake.
    pub date_of_birth: String,
    pub nationality: String,
    pub destination: String,
    pub photo: Option<Photo>,
}

impl TravelRecord {
    /// Name as printed on the page (passports shout).
    pub fn display_name(&self) -> String {
        self.full_name.trim().to_uppercase()
    }

    pub fn display_destination(&self) -> String {
        self.destination.trim().to_uppercase()
    }

    /// Nationality prints exactly as entered; only the name and destination
    /// lines are forced to capitals.
    pub fn display_nationality(&self) -> String {
        self.nationality.trim().to_owned()
    }

    /// Birth date as `dd/mm/YYYY`, or `Invalid Date`.
    pub fn display_birth_date(&self) -> String {
        crate::dates::format_birth_date(&self.date_of_birth)
    }
}

/// The intake draft the form view edits in place.
#[derive(Clone, Default)]
pub struct FormFields {
    pub full_name: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub destination: String,
    pub photo: Option<Photo>,
    /// Set after a refused submission so the view can highlight blanks.
    pub show_missing: bool,
}

impl FormFields {
    /// Labels of required fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("Full Name");
        }
        if self.date_of_birth.trim().is_empty() {
            missing.push("Date of Birth");
        }
        if self.nationality.trim().is_empty() {
            missing.push("Nationality");
        }
        if self.destination.trim().is_empty() {
            missing.push("Destination");
        }
        missing
    }

    /// Freezes the draft into a [`TravelRecord`], or refuses if any required
    /// field is blank. The photo is always optional.
    pub fn submit(&self) -> Option<TravelRecord> {
        if !self.missing_fields().is_empty() {
            return None;
        }
        Some(TravelRecord {
            full_name: self.full_name.trim().to_owned(),
            date_of_birth: self.date_of_birth.trim().to_owned(),
            nationality: self.nationality.trim().to_owned(),
            destination: self.destination.trim().to_owned(),
            photo: self.photo.clone(),
        })
    }
}

/// Reads and decodes a user-selected image file into a [`Photo`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a decodable image.
/// Callers treat either case the same as "no photo provided".
pub fn load_photo(path: &Path) -> Result<Photo> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read photo file: {}", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode photo: {}", path.display()))?
        .into_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(Arc::new(egui::ColorImage::from_rgba_unmultiplied(
        size,
        decoded.as_raw(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormFields {
        FormFields {
            full_name: "Ada Lovelace".to_owned(),
            date_of_birth: "1815-12-10".to_owned(),
            nationality: "FRANCE".to_owned(),
            destination: "Paris, France".to_owned(),
            photo: None,
            show_missing: false,
        }
    }

    #[test]
    fn test_submit_carries_fields_over_exactly() {
        let record = filled_form().submit().expect("all fields present");
        assert_eq!(record.full_name, "Ada Lovelace");
        assert_eq!(record.date_of_birth, "1815-12-10");
        assert_eq!(record.nationality, "FRANCE");
        assert_eq!(record.destination, "Paris, France");
        assert!(record.photo.is_none());
    }

    #[test]
    fn test_submit_refused_when_any_field_blank() {
        for field in 0..4 {
            let mut form = filled_form();
            match field {
                0 => form.full_name.clear(),
                1 => form.date_of_birth.clear(),
                2 => form.nationality.clear(),
                _ => form.destination = "   ".to_owned(),
            }
            assert!(form.submit().is_none(), "blank field {field} should refuse");
            assert_eq!(form.missing_fields().len(), 1);
        }
    }

    #[test]
    fn test_display_accessors_uppercase() {
        let record = filled_form().submit().expect("all fields present");
        assert_eq!(record.display_name(), "ADA LOVELACE");
        assert_eq!(record.display_destination(), "PARIS, FRANCE");
        assert_eq!(record.display_birth_date(), "10/12/1815");
    }

    #[test]
    fn test_nationality_prints_as_entered() {
        let mut form = filled_form();
        form.nationality = "  République française ".to_owned();
        let record = form.submit().expect("all fields present");
        assert_eq!(record.display_nationality(), "République française");
    }
}
