//! # Fretting Module
//!
//! Find playable ways to voice a chord on a fretted string instrument.
//!
//! ## Pipeline
//! 1. **Candidates** - per string, the frets (near the nut unless
//!    `all_positions`) that sound a chord tone
//! 2. **Fret arrays** - lazy cartesian product of candidates, each string
//!    may also be muted
//! 3. **Hard filters** - every chord pitch class must sound; stopped frets
//!    must fit within `max_fret_spread`
//! 4. **Barres** - candidate single-finger bars, and every subset of them
//! 5. **Frettings** - one per (fret array, barre subset)
//! 6. **Playability filters** - soft filters that never empty the result
//! 7. **Ranking** - root position, note count, barre count, finger count
//!
//! ## Sub-modules
//! - `types` - Fretting, FretPosition, Barre, FrettingProperties
//! - `enumerate` - candidate frets and the cartesian product
//! - `barre` - barre detection and barre subsets
//! - `filters` - soft playability filter stages
//! - `rank` - ranking keys and comparator
//! - `engine` - entry points
//!
//! ## Example
//! ```rust
//! use fretboard::fretting::fretting_for_name;
//! use fretboard::{FrettingOptions, Instrument};
//!
//! let guitar = Instrument::guitar();
//! let fretting = fretting_for_name("G Major", &guitar, &FrettingOptions::default())?;
//! assert_eq!(fretting.fret_string(), "320003");
//! assert!(fretting.barres().is_empty());
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

mod barre;
mod engine;
mod enumerate;
mod filters;
mod rank;
mod types;


pub use barre::{barre_sets, detect_barres};
pub use engine::{all_frettings, all_frettings_for_name, fretting_for, fretting_for_name};
pub use enumerate::{
    fret_array_count, fret_arrays, fret_candidates, is_complete, within_spread, FretArrays,
};
pub use filters::{apply_playability_filters, playability_stages, FilterStage};
pub use rank::{compare_frettings, rank_frettings, Preference, RankingKey, RANKING_KEYS};
pub use types::{Barre, FretArray, FretPosition, Fretting, FrettingProperties};
