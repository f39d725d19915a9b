//! # Stampbook - Novelty Passport Generator
//!
//! Stampbook renders a purely decorative, animated "passport" from a short
//! form: name, birth date, nationality, destination, and an optional photo.
//! There is no server, no persistence and no identity semantics; the output
//! is a pretty picture, optionally exported as a PNG.
//!
//! ## Flow
//!
//! ```text
//! Form ──submit──> Cover ──click──> Page ──3000 ms──> Page + stamp
//!   ^                ^                │
//!   │                └────close───────┘
//!   └───────────"Start Over"──────────┘
//! ```
//!
//! ## Core modules
//!
//! - [`machine`]: the Form/Cover/Page state machine and the stamp sub-state
//! - [`record`]: intake validation and the immutable travel record
//! - [`ident`]: seeded-RNG-friendly cosmetic serials, ids and stamp tilt
//! - [`dates`]: fixed-locale date formatting and the ten-year expiry rule
//! - [`flags`]: static nationality → flag glyph lookup
//! - [`export`]: page capture → 2× PNG in the Downloads folder
//! - [`gui`]: the eframe application and its three views
//!
//! ## Randomness
//!
//! Every cosmetic value (cover serial, document id, stamp tilt) is a pure
//! function of an `Rng` handed in by the caller, so the app passes
//! `thread_rng()` and tests pass a seeded `StdRng` and get exact values.

pub mod dates;
pub mod error;
pub mod export;
pub mod flags;
pub mod gui;
pub mod ident;
pub mod logging;
pub mod machine;
pub mod record;
pub mod theme;
