//! Chord frettings for fretted string instruments.
//!
//! Given a chord and an instrument, [`all_frettings`] lists the playable ways
//! to voice the chord on the neck, best first, and [`fretting_for`] returns the
//! best one.
//!
//! ```rust
//! use fretboard::{fretting_for_name, FrettingOptions, Instrument};
//!
//! let guitar = Instrument::guitar();
//! let fretting = fretting_for_name("E Major", &guitar, &FrettingOptions::default())?;
//! assert_eq!(fretting.fret_string(), "022100");
//! assert_eq!(fretting.finger_count(), 3);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

pub mod chord;
pub mod config;
pub mod error;
pub mod fretting;
pub mod instrument;
pub mod pitch;

pub use chord::{Chord, ChordQuality, CHORD_QUALITIES};
pub use config::{Config, FrettingOptions};
pub use error::*;
pub use fretting::{
    all_frettings, all_frettings_for_name, detect_barres, fretting_for, fretting_for_name, Barre,
    FretArray, FretPosition, Fretting, FrettingProperties,
};
pub use instrument::Instrument;
pub use pitch::{Interval, Pitch, PitchClass};
