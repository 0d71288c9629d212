//! # Pitches, Pitch Classes and Intervals
//!
//! Plain value types with structural equality. A [`Pitch`] is a concrete note
//! on the MIDI scale (C4 = 60); a [`PitchClass`] is a note reduced modulo one
//! octave; an [`Interval`] is a signed semitone distance.
//!
//! ## Note Names
//! - Letter `A`-`G` (upper case), then any number of accidentals
//!   (`#`, `♯` raise; `b`, `♭` lower)
//! - Pitches also carry an octave number from -1 to 9: `E2`, `Bb3`, `F#4`
//!
//! ## Example
//! ```rust
//! use fretboard::{Interval, Pitch, PitchClass};
//!
//! let e2: Pitch = "E2".parse()?;
//! assert_eq!(e2.midi(), 40);
//! assert_eq!(e2.transpose(3).name(), "G2");
//!
//! let c: PitchClass = "C".parse()?;
//! let e: PitchClass = "E".parse()?;
//! assert_eq!(Interval::between(c, e).semitones(), 4);
//! assert_eq!(Interval::between(e, c).semitones(), 8);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::FretboardError;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Octave numbers accepted in note names; `C-1` is MIDI 0.
const OCTAVES: RangeInclusive<i32> = -1..=9;

/// Letter name to semitone offset from C
fn letter_to_semitone(letter: char) -> Option<i32> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Split a note name into its semitone offset (unreduced) and the remaining
/// suffix, e.g. `"Bb3"` -> `(10, "3")`, `"C#m7"` -> `(1, "m7")`.
///
/// A `b` directly after the letter is always read as a flat, so `"Bb"` is B
/// flat and never B followed by something else.
pub(crate) fn split_note_name(name: &str) -> Option<(i32, &str)> {
    let mut chars = name.char_indices();
    let (_, letter) = chars.next()?;
    let mut semitone = letter_to_semitone(letter)?;
    let mut rest = &name[letter.len_utf8()..];

    for (idx, c) in chars {
        match c {
            '#' | '♯' => semitone += 1,
            'b' | '♭' => semitone -= 1,
            _ => {
                rest = &name[idx..];
                return Some((semitone, rest));
            }
        }
        rest = &name[idx + c.len_utf8()..];
    }
    Some((semitone, rest))
}

/// A note reduced modulo one octave, in `[0, 12)`. C = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    pub fn semitones(self) -> u8 {
        self.0
    }

    pub fn transpose_by(self, interval: Interval) -> Self {
        PitchClass::new(self.0 as i32 + interval.semitones() as i32)
    }

    /// Spell the pitch class with sharps, or with flats when `prefer_flat`.
    pub fn name(self, prefer_flat: bool) -> &'static str {
        if prefer_flat {
            FLAT_NAMES[self.0 as usize]
        } else {
            SHARP_NAMES[self.0 as usize]
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(false))
    }
}

impl FromStr for PitchClass {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_note_name(s.trim()) {
            Some((semitone, "")) => Ok(PitchClass::new(semitone)),
            _ => Err(FretboardError::InvalidPitch(s.to_string())),
        }
    }
}

impl From<Pitch> for PitchClass {
    fn from(pitch: Pitch) -> Self {
        pitch.class()
    }
}

/// A concrete note. Stored as a MIDI note number, so `C4` is 60 and `E2` is 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch {
    midi: i32,
}

impl Pitch {
    pub fn from_midi(midi: i32) -> Self {
        Pitch { midi }
    }

    pub fn midi(self) -> i32 {
        self.midi
    }

    pub fn class(self) -> PitchClass {
        PitchClass::new(self.midi)
    }

    pub fn octave(self) -> i32 {
        self.midi.div_euclid(12) - 1
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Pitch {
            midi: self.midi.saturating_add(semitones),
        }
    }

    pub fn transpose_by(self, interval: Interval) -> Self {
        self.transpose(interval.semitones() as i32)
    }

    /// Canonical name, spelled with sharps: `"E2"`, `"A#3"`.
    pub fn name(self) -> String {
        format!("{}{}", self.class().name(false), self.octave())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Pitch {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FretboardError::InvalidPitch(s.to_string());
        let (semitone, octave) = split_note_name(s.trim()).ok_or_else(invalid)?;
        let octave: i32 = octave.parse().map_err(|_| invalid())?;
        if !OCTAVES.contains(&octave) {
            return Err(invalid());
        }
        Ok(Pitch {
            midi: (octave + 1) * 12 + semitone,
        })
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// A signed semitone distance.
///
/// Chord tables may hold compound intervals (a major ninth is 14); everything
/// the fretting search compares goes through [`Interval::class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    semitones: i8,
}

impl Interval {
    pub const UNISON: Interval = Interval { semitones: 0 };

    pub const fn new(semitones: i8) -> Self {
        Interval { semitones }
    }

    /// The interval class from `a` up to `b`, in `[0, 12)`.
    ///
    /// Not symmetric: `between(C, E)` is 4, `between(E, C)` is 8.
    pub fn between(a: impl Into<PitchClass>, b: impl Into<PitchClass>) -> Self {
        let a = a.into().semitones() as i32;
        let b = b.into().semitones() as i32;
        Interval {
            semitones: (b - a).rem_euclid(12) as i8,
        }
    }

    pub fn semitones(self) -> i8 {
        self.semitones
    }

    /// The interval reduced to one octave.
    pub fn class(self) -> Interval {
        Interval {
            semitones: self.semitones.rem_euclid(12),
        }
    }

    /// Short name: `P1`, `m3`, `M3`, `P5`, `M9`, ...
    pub fn name(self) -> String {
        const NAMES: [&str; 12] = [
            "P1", "m2", "M2", "m3", "M3", "P4", "TT", "P5", "m6", "M6", "m7", "M7",
        ];
        match self.semitones {
            13 => "m9".to_string(),
            14 => "M9".to_string(),
            15 => "A9".to_string(),
            17 => "P11".to_string(),
            18 => "A11".to_string(),
            20 => "m13".to_string(),
            21 => "M13".to_string(),
            s if (0..12).contains(&s) => NAMES[s as usize].to_string(),
            s => format!("{}st", s),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}
