//! Randomly generated cosmetic identifiers.
//!
//! Serial numbers, document ids and the stamp angle carry no meaning; they
//! exist for visual variety and are regenerated every time the view that
//! shows them is (re-)entered. Each generator takes an explicit `Rng` so
//! callers can pass `thread_rng()` in the app and a seeded `StdRng` in tests.

use rand::Rng;

/// Character set shared by the cover serial and the document id.
const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the document id shown on the passport page.
pub const DOCUMENT_ID_LEN: usize = 9;

/// Length of the random part of the cover serial (after the `PP` prefix).
pub const SERIAL_SUFFIX_LEN: usize = 8;

/// Inclusive bound, in degrees, for the stamp's random tilt.
pub const STAMP_TILT_DEGREES: f32 = 10.0;

fn random_code(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ID_CHARS.len());
            char::from(ID_CHARS[idx])
        })
        .collect()
}

/// The "passport number" printed on the closed cover, e.g. `PP4K7Q2N9X`.
pub fn cover_serial(rng: &mut impl Rng) -> String {
    format!("PP{}", random_code(rng, SERIAL_SUFFIX_LEN))
}

/// The 9-character document id printed in the page footer.
pub fn document_id(rng: &mut impl Rng) -> String {
    random_code(rng, DOCUMENT_ID_LEN)
}

/// Tilt applied to the approval stamp, uniform in [-10, +10] degrees.
pub fn stamp_rotation(rng: &mut impl Rng) -> f32 {
    rng.gen_range(-STAMP_TILT_DEGREES..=STAMP_TILT_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    #[test]
    fn test_document_id_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let id = document_id(&mut rng);
            assert_eq!(id.len(), DOCUMENT_ID_LEN, "id should be 9 chars: {id}");
            assert!(
                id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "id should only contain A-Z0-9: {id}"
            );
        }
    }

    #[test]
    fn test_cover_serial_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let serial = cover_serial(&mut rng);
            assert!(serial.starts_with("PP"), "serial should start with PP: {serial}");
            assert_eq!(serial.len(), 2 + SERIAL_SUFFIX_LEN);
            assert!(
                serial.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "serial should only contain A-Z0-9: {serial}"
            );
        }
    }

    #[test]
    fn test_stamp_rotation_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let deg = stamp_rotation(&mut rng);
            assert!((-10.0..=10.0).contains(&deg), "rotation out of range: {deg}");
        }
    }

    #[test]
    fn test_seeded_generators_are_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(document_id(&mut a), document_id(&mut b));
        assert_eq!(cover_serial(&mut a), cover_serial(&mut b));
        assert_eq!(stamp_rotation(&mut a), stamp_rotation(&mut b));
    }
}
