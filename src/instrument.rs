//! # Fretted Instruments
//!
//! An [`Instrument`] is an ordered list of open-string pitches (index = string
//! number, lowest string first) plus the highest usable fret.
//!
//! ## Presets
//! | Name       | Tuning              | Frets |
//! |------------|---------------------|-------|
//! | `guitar`   | E2 A2 D3 G3 B3 E4   | 12    |
//! | `bass`     | E1 A1 D2 G2         | 12    |
//! | `ukulele`  | G4 C4 E4 A4         | 12    |
//! | `mandolin` | G3 D4 A4 E5         | 12    |
//! | `violin`   | G3 D4 A4 E5         | 7     |
//! | `viola`    | C3 G3 D4 A4         | 7     |
//! | `cello`    | C2 G2 D3 A3         | 7     |
//!
//! Fretless instruments use a fret count that covers the first few hand
//! positions.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use crate::error::FretboardError;
use crate::pitch::Pitch;

const PRESETS: &[(&str, &[&str], u8)] = &[
    ("guitar", &["E2", "A2", "D3", "G3", "B3", "E4"], 12),
    ("bass", &["E1", "A1", "D2", "G2"], 12),
    ("ukulele", &["G4", "C4", "E4", "A4"], 12),
    ("mandolin", &["G3", "D4", "A4", "E5"], 12),
    ("violin", &["G3", "D4", "A4", "E5"], 7),
    ("viola", &["C3", "G3", "D4", "A4"], 7),
    ("cello", &["C2", "G2", "D3", "A3"], 7),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    name: String,
    strings: Vec<Pitch>,
    fret_count: u8,
}

impl Instrument {
    pub fn new(name: impl Into<String>, strings: Vec<Pitch>, fret_count: u8) -> Self {
        Instrument {
            name: name.into(),
            strings,
            fret_count,
        }
    }

    /// Build an instrument from note names, e.g. `["E2", "A2", ...]`.
    pub fn from_tuning<S: AsRef<str>>(
        name: impl Into<String>,
        tuning: &[S],
        fret_count: u8,
    ) -> Result<Self, FretboardError> {
        let strings = tuning
            .iter()
            .map(|note| note.as_ref().parse::<Pitch>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Instrument::new(name, strings, fret_count))
    }

    /// Look up a built-in instrument by name (case-insensitive).
    pub fn preset(name: &str) -> Result<Self, FretboardError> {
        let (preset, tuning, frets) = PRESETS
            .iter()
            .find(|(preset, _, _)| preset.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| FretboardError::UnknownInstrument(name.to_string()))?;
        Instrument::from_tuning(*preset, tuning, *frets)
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(name, _, _)| *name)
    }

    /// Standard-tuned six-string guitar with twelve frets.
    pub fn guitar() -> Self {
        let strings = [40, 45, 50, 55, 59, 64].map(Pitch::from_midi).to_vec();
        Instrument::new("guitar", strings, 12)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strings(&self) -> &[Pitch] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn string_numbers(&self) -> Range<usize> {
        0..self.strings.len()
    }

    pub fn fret_count(&self) -> u8 {
        self.fret_count
    }

    /// The pitch sounded by `string` stopped at `fret`.
    ///
    /// # Panics
    /// Panics if `string` is not one of [`Instrument::string_numbers`].
    pub fn pitch_at(&self, string: usize, fret: u8) -> Pitch {
        self.strings[string].transpose(fret as i32)
    }

    /// Every `(string, fret)` pair on the neck, string-major.
    pub fn positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.string_numbers()
            .flat_map(move |string| (0..=self.fret_count).map(move |fret| (string, fret)))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
