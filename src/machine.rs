//! The presentation state machine.
//!
//! Three mutually exclusive views, modeled as a tagged union so that a page
//! without a record is unrepresentable:
//!
//! ```text
//! Form --Submit(valid)--> Cover --Open--> Page
//!                           ^               |
//!                           +----Close------+
//!         Cover|Page --Reset--> Form
//! ```
//!
//! [`Stage::advance`] is a total function of (stage, event); events that make
//! no sense in the current stage leave it unchanged. The module is egui-free
//! on purpose: the GUI feeds it clicks and the clock, tests feed it a seeded
//! RNG and a synthetic timeline.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use rand::Rng;

use crate::dates;
use crate::ident;
use crate::record::{FormFields, TravelRecord};

/// How long after the page opens the approval stamp slams down.
pub const STAMP_DELAY: Duration = Duration::from_millis(3000);

/// Page sub-state: the stamp starts hidden and appears once, after
/// [`STAMP_DELAY`]. Its tilt is drawn when it becomes visible.
#[derive(Clone, Debug, PartialEq)]
pub enum Stamp {
    Pending,
    Visible { rotation_degrees: f32 },
}

/// Display fields derived fresh on every page entry. Dropping this state is
/// what cancels the pending stamp reveal; there is no timer to unhook.
#[derive(Clone, Debug)]
pub struct PageState {
    pub document_id: String,
    pub issued: NaiveDate,
    pub expiry: NaiveDate,
    entered_at: Instant,
    stamp: Stamp,
}

impl PageState {
    pub fn new(now: Instant, today: NaiveDate, rng: &mut impl Rng) -> Self {
        Self {
            document_id: ident::document_id(rng),
            issued: today,
            expiry: dates::expiry_date(today),
            entered_at: now,
            stamp: Stamp::Pending,
        }
    }

    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    /// When the stamp is due, if it is still pending.
    pub fn reveal_at(&self) -> Option<Instant> {
        match self.stamp {
            Stamp::Pending => Some(self.entered_at + STAMP_DELAY),
            Stamp::Visible { .. } => None,
        }
    }

    /// Advances the stamp sub-state. Flips pending → visible exactly when
    /// the delay has elapsed, drawing the tilt at that moment.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        if let Some(due) = self.reveal_at() {
            if now >= due {
                self.stamp = Stamp::Visible {
                    rotation_degrees: ident::stamp_rotation(rng),
                };
            }
        }
    }
}

/// The view currently owning the screen, with exactly the data it needs.
pub enum Stage {
    Form(FormFields),
    Cover { record: TravelRecord, serial: String },
    Page { record: TravelRecord, page: PageState },
}

impl Default for Stage {
    fn default() -> Self {
        Self::Form(FormFields::default())
    }
}

/// A user interaction the machine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageEvent {
    /// "Generate Passport" on the form.
    Submit,
    /// Click on the closed cover.
    Open,
    /// "Close Passport" on the page.
    Close,
    /// "Start Over" from cover or page.
    Reset,
}

impl Stage {
    /// Applies one event. Total: there is no error branch, and an event that
    /// does not apply to the current stage is a no-op.
    pub fn advance(
        self,
        event: StageEvent,
        now: Instant,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> Self {
        match (self, event) {
            (Self::Form(fields), StageEvent::Submit) => match fields.submit() {
                Some(record) => Self::Cover {
                    record,
                    serial: ident::cover_serial(rng),
                },
                None => {
                    let mut fields = fields;
                    fields.show_missing = true;
                    Self::Form(fields)
                }
            },
            (Self::Cover { record, .. }, StageEvent::Open) => Self::Page {
                record,
                page: PageState::new(now, today, rng),
            },
            // Closing discards the page state; re-opening derives everything
            // fresh, including a new cover serial.
            (Self::Page { record, .. }, StageEvent::Close) => Self::Cover {
                record,
                serial: ident::cover_serial(rng),
            },
            (Self::Cover { .. } | Self::Page { .. }, StageEvent::Reset) => {
                Self::Form(FormFields::default())
            }
            (stage, _) => stage,
        }
    }

    /// True while a passport page is on screen (export is only meaningful then).
    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page { .. })
    }

    pub fn record(&self) -> Option<&TravelRecord> {
        match self {
            Self::Form(_) => None,
            Self::Cover { record, .. } | Self::Page { record, .. } => Some(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike as _;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date")
    }

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
    fn test_valid_submit_reaches_cover() {
        let mut rng = StdRng::seed_from_u64(1);
        let stage = Stage::Form(filled_form()).advance(
            StageEvent::Submit,
            Instant::now(),
            today(),
            &mut rng,
        );
        match stage {
            Stage::Cover { record, serial } => {
                assert_eq!(record.full_name, "Ada Lovelace");
                assert!(serial.starts_with("PP"));
            }
            _ => panic!("expected Cover after valid submit"),
        }
    }

    #[test]
    fn test_invalid_submit_stays_in_form() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut fields = filled_form();
        fields.destination.clear();
        let stage =
            Stage::Form(fields).advance(StageEvent::Submit, Instant::now(), today(), &mut rng);
        assert!(stage.record().is_none(), "no record may exist in Form");
        match stage {
            Stage::Form(fields) => {
                assert!(fields.show_missing, "refused submit should flag blanks");
            }
            _ => panic!("expected to stay in Form"),
        }
    }

    #[test]
    fn test_open_derives_fresh_page_fields() {
        let mut rng = StdRng::seed_from_u64(2);
        let t0 = Instant::now();
        let stage = Stage::Form(filled_form())
            .advance(StageEvent::Submit, t0, today(), &mut rng)
            .advance(StageEvent::Open, t0, today(), &mut rng);
        match &stage {
            Stage::Page { page, .. } => {
                assert_eq!(page.document_id.len(), 9);
                assert_eq!(page.issued, today());
                assert_eq!(page.expiry.year(), today().year() + 10);
                assert_eq!(*page.stamp(), Stamp::Pending);
            }
            _ => panic!("expected Page after open"),
        }

        // Close and re-open: the document id is derived fresh.
        let first_id = match &stage {
            Stage::Page { page, .. } => page.document_id.clone(),
            _ => unreachable!(),
        };
        let stage = stage
            .advance(StageEvent::Close, t0, today(), &mut rng)
            .advance(StageEvent::Open, t0, today(), &mut rng);
        match stage {
            Stage::Page { page, .. } => {
                assert_ne!(page.document_id, first_id, "re-entry should regenerate the id");
            }
            _ => panic!("expected Page after re-open"),
        }
    }

    #[test]
    fn test_stamp_reveals_at_exactly_three_seconds() {
        let mut rng = StdRng::seed_from_u64(3);
        let t0 = Instant::now();
        let mut page = PageState::new(t0, today(), &mut rng);

        page.tick(t0 + Duration::from_millis(2999), &mut rng);
        assert_eq!(*page.stamp(), Stamp::Pending, "stamp must not appear early");

        page.tick(t0 + STAMP_DELAY, &mut rng);
        match page.stamp() {
            Stamp::Visible { rotation_degrees } => {
                assert!((-10.0..=10.0).contains(rotation_degrees));
            }
            Stamp::Pending => panic!("stamp should be visible at the deadline"),
        }
        assert_eq!(page.reveal_at(), None, "no further reveal is scheduled");
    }

    #[test]
    fn test_leaving_page_cancels_pending_stamp() {
        let mut rng = StdRng::seed_from_u64(4);
        let t0 = Instant::now();
        let stage = Stage::Form(filled_form())
            .advance(StageEvent::Submit, t0, today(), &mut rng)
            .advance(StageEvent::Open, t0, today(), &mut rng)
            .advance(StageEvent::Close, t0 + Duration::from_millis(1000), today(), &mut rng);
        // The page state is gone along with its deadline; nothing fires later.
        assert!(matches!(stage, Stage::Cover { .. }));
    }

    #[test]
    fn test_reset_discards_record_from_cover_and_page() {
        let mut rng = StdRng::seed_from_u64(5);
        let t0 = Instant::now();

        let cover = Stage::Form(filled_form()).advance(StageEvent::Submit, t0, today(), &mut rng);
        let stage = cover.advance(StageEvent::Reset, t0, today(), &mut rng);
        assert!(matches!(&stage, Stage::Form(f) if f.full_name.is_empty()));
        assert!(stage.record().is_none());

        let page = Stage::Form(filled_form())
            .advance(StageEvent::Submit, t0, today(), &mut rng)
            .advance(StageEvent::Open, t0, today(), &mut rng);
        let stage = page.advance(StageEvent::Reset, t0, today(), &mut rng);
        assert!(stage.record().is_none());
    }

    #[test]
    fn test_irrelevant_events_are_no_ops() {
        let mut rng = StdRng::seed_from_u64(6);
        let t0 = Instant::now();

        let stage = Stage::Form(filled_form()).advance(StageEvent::Open, t0, today(), &mut rng);
        assert!(matches!(stage, Stage::Form(_)));

        let stage = Stage::Form(filled_form())
            .advance(StageEvent::Submit, t0, today(), &mut rng)
            .advance(StageEvent::Submit, t0, today(), &mut rng);
        assert!(matches!(stage, Stage::Cover { .. }));
    }
}
