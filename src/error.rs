//! # Error Types
//!
//! This module defines all error types for the fretboard library.
//!
//! Input errors (bad note names, unknown chord qualities, unknown instruments)
//! are raised before any search begins. An instrument that simply cannot sound
//! a chord is not an error for [`all_frettings`](crate::all_frettings), which
//! returns an empty list; only [`fretting_for`](crate::fretting_for) turns that
//! into [`FretboardError::NoFretting`].
//!
//! ## Usage
//! ```rust
//! use fretboard::{fretting_for_name, FretboardError, FrettingOptions, Instrument};
//!
//! let guitar = Instrument::guitar();
//! match fretting_for_name("H Major", &guitar, &FrettingOptions::default()) {
//!     Ok(fretting) => println!("{}", fretting.fret_string()),
//!     Err(FretboardError::InvalidChord(name)) => eprintln!("not a chord: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretboardError {
    /// A note name that could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidPitch("X4".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch name: X4");
    /// ```
    #[error("Invalid pitch name: {0}")]
    InvalidPitch(String),

    /// A chord name with no resolvable root or an unknown quality.
    #[error("Invalid chord name: {0}")]
    InvalidChord(String),

    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// A fret array sounds a note that is not a tone of the chord.
    ///
    /// Only raised when a fretting is built by hand; the search never
    /// produces such arrays.
    #[error("String {string} at fret {fret} does not sound a chord tone")]
    NotAChordTone { string: usize, fret: u8 },

    /// A fret array whose length differs from the instrument's string count.
    #[error("Expected {expected} strings, got a fret array of {actual}")]
    StringCountMismatch { expected: usize, actual: usize },

    /// The cartesian product of per-string candidates is larger than the
    /// configured limit.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::SearchTooLarge { fret_arrays: 2_000_000, limit: 1_000_000 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Search too large: 2000000 candidate fret arrays exceeds the limit of 1000000"
    /// );
    /// ```
    #[error("Search too large: {fret_arrays} candidate fret arrays exceeds the limit of {limit}")]
    SearchTooLarge { fret_arrays: u128, limit: u64 },

    /// The instrument cannot sound the chord under the given options.
    #[error("No playable fretting for {chord} on {instrument}")]
    NoFretting { chord: String, instrument: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
