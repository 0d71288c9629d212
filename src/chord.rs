//! # Chords and Chord Qualities
//!
//! A [`Chord`] is a root pitch class plus the interval set of a
//! [`ChordQuality`]. Qualities come from a fixed table, each with a full name
//! and the abbreviations used in chord symbols.
//!
//! ## Chord Names
//! Either the root followed by a full quality name, or a chord symbol:
//! - `E Major`, `A Minor`, `G Dominant 7th`
//! - `E`, `Em`, `G7`, `Bbmaj7`, `F#m7b5`, `Cdim7`, `Dsus4`
//!
//! ## Example
//! ```rust
//! use fretboard::Chord;
//!
//! let chord: Chord = "G7".parse()?;
//! assert_eq!(chord.name(), "G Dominant 7th");
//! let names: Vec<String> = chord.pitch_classes().iter().map(|pc| pc.to_string()).collect();
//! assert_eq!(names, vec!["G", "B", "D", "F"]);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;
use crate::pitch::{split_note_name, Interval, PitchClass};

/// The interval set that gives a chord its character, independent of root.
#[derive(Debug, PartialEq, Eq)]
pub struct ChordQuality {
    pub name: &'static str,
    pub abbrs: &'static [&'static str],
    /// Unique by interval class; index 0 is always the unison.
    pub intervals: &'static [Interval],
}

const P1: Interval = Interval::new(0);
const M2: Interval = Interval::new(2);
const M3: Interval = Interval::new(4);
const MIN3: Interval = Interval::new(3);
const P4: Interval = Interval::new(5);
const D5: Interval = Interval::new(6);
const P5: Interval = Interval::new(7);
const A5: Interval = Interval::new(8);
const M6: Interval = Interval::new(9);
const MIN7: Interval = Interval::new(10);
const M7: Interval = Interval::new(11);
const M9: Interval = Interval::new(14);

#[rustfmt::skip]
pub static CHORD_QUALITIES: &[ChordQuality] = &[
    ChordQuality { name: "Major", abbrs: &["", "M", "maj"], intervals: &[P1, M3, P5] },
    ChordQuality { name: "Minor", abbrs: &["m", "min", "-"], intervals: &[P1, MIN3, P5] },
    ChordQuality { name: "Augmented", abbrs: &["+", "aug"], intervals: &[P1, M3, A5] },
    ChordQuality { name: "Diminished", abbrs: &["°", "dim"], intervals: &[P1, MIN3, D5] },
    ChordQuality { name: "Sus2", abbrs: &["sus2"], intervals: &[P1, M2, P5] },
    ChordQuality { name: "Sus4", abbrs: &["sus4", "sus"], intervals: &[P1, P4, P5] },
    ChordQuality { name: "Dominant 7th", abbrs: &["7", "dom7"], intervals: &[P1, M3, P5, MIN7] },
    ChordQuality { name: "Augmented 7th", abbrs: &["+7", "7aug", "aug7"], intervals: &[P1, M3, A5, MIN7] },
    // the diminished seventh is enharmonic with the major sixth
    ChordQuality { name: "Diminished 7th", abbrs: &["°7", "dim7"], intervals: &[P1, MIN3, D5, M6] },
    ChordQuality { name: "Major 7th", abbrs: &["maj7", "M7"], intervals: &[P1, M3, P5, M7] },
    ChordQuality { name: "Minor 7th", abbrs: &["m7", "min7", "-7"], intervals: &[P1, MIN3, P5, MIN7] },
    ChordQuality { name: "Dominant 7 b5", abbrs: &["7b5"], intervals: &[P1, M3, D5, MIN7] },
    ChordQuality { name: "Minor 7th b5", abbrs: &["ø", "m7b5"], intervals: &[P1, MIN3, D5, MIN7] },
    ChordQuality { name: "Diminished Maj 7th", abbrs: &["°maj7", "dimmaj7"], intervals: &[P1, MIN3, D5, M7] },
    ChordQuality { name: "Minor-Major 7th", abbrs: &["mmaj7", "min/maj7", "m(maj7)"], intervals: &[P1, MIN3, P5, M7] },
    ChordQuality { name: "6th", abbrs: &["6", "M6", "maj6"], intervals: &[P1, M3, P5, M6] },
    ChordQuality { name: "Minor 6th", abbrs: &["m6", "min6"], intervals: &[P1, MIN3, P5, M6] },
    ChordQuality { name: "Dominant 9th", abbrs: &["9"], intervals: &[P1, M3, P5, MIN7, M9] },
    ChordQuality { name: "Major 9th", abbrs: &["maj9", "M9"], intervals: &[P1, M3, P5, M7, M9] },
    ChordQuality { name: "Minor 9th", abbrs: &["m9", "min9"], intervals: &[P1, MIN3, P5, MIN7, M9] },
];

impl ChordQuality {
    /// Look up a quality by full name (case-insensitive) or abbreviation
    /// (case-sensitive, since `M` and `m` differ).
    pub fn find(name: &str) -> Option<&'static ChordQuality> {
        CHORD_QUALITIES.iter().find(|quality| {
            quality.name.eq_ignore_ascii_case(name)
                || quality.abbrs.iter().any(|abbr| *abbr == name)
        })
    }

    pub fn major() -> &'static ChordQuality {
        &CHORD_QUALITIES[0]
    }

    /// The shortest non-empty symbol, falling back to the full name.
    pub fn symbol(&self) -> &'static str {
        self.abbrs
            .iter()
            .find(|abbr| !abbr.is_empty())
            .copied()
            .unwrap_or(self.name)
    }
}

/// A root pitch class plus a chord quality.
///
/// Equality ignores spelling: `A#` and `Bb` chords compare equal.
#[derive(Debug, Clone)]
pub struct Chord {
    root: PitchClass,
    quality: &'static ChordQuality,
    prefer_flat: bool,
}

impl Chord {
    pub fn new(root: PitchClass, quality: &'static ChordQuality) -> Self {
        Chord {
            root,
            quality,
            prefer_flat: false,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> &'static ChordQuality {
        self.quality
    }

    pub fn intervals(&self) -> &'static [Interval] {
        self.quality.intervals
    }

    /// Pitch classes of the chord tones, in interval order.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.intervals()
            .iter()
            .map(|&interval| self.root.transpose_by(interval))
            .collect()
    }

    pub fn distinct_pitch_class_count(&self) -> usize {
        self.pitch_classes().into_iter().collect::<BTreeSet<_>>().len()
    }

    /// Index into [`Chord::intervals`] of the interval with the same class,
    /// if this interval is a chord tone.
    pub fn degree_of(&self, interval: Interval) -> Option<usize> {
        let class = interval.class();
        self.intervals().iter().position(|i| i.class() == class)
    }

    /// `"E Major"`, `"Bb Minor 7th"`
    pub fn name(&self) -> String {
        format!("{} {}", self.root.name(self.prefer_flat), self.quality.name)
    }

    /// `"E"`, `"Bbm7"`
    pub fn symbol(&self) -> String {
        let suffix = if std::ptr::eq(self.quality, ChordQuality::major()) {
            ""
        } else {
            self.quality.symbol()
        };
        format!("{}{}", self.root.name(self.prefer_flat), suffix)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.quality == other.quality
    }
}

impl Eq for Chord {}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Chord {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let invalid = || FretboardError::InvalidChord(s.to_string());

        let (semitone, rest) = split_note_name(name).ok_or_else(invalid)?;
        let root_spelling = &name[..name.len() - rest.len()];
        let quality = ChordQuality::find(rest.trim()).ok_or_else(invalid)?;

        Ok(Chord {
            root: PitchClass::new(semitone),
            quality,
            prefer_flat: root_spelling.contains(&['b', '♭'][..]),
        })
    }
}

impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}
