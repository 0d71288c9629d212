//! Fretting type definitions
//!
//! A [`Fretting`] is one concrete way to voice a chord: a fret (or mute) for
//! every string, plus the barres used to stop several strings with one finger.
//! Everything derived from it is computed once at construction.

use serde::Serialize;
use std::sync::Arc;

use crate::chord::Chord;
use crate::error::FretboardError;
use crate::instrument::Instrument;
use crate::pitch::Interval;

/// One whole-instrument candidate voicing: a fret per string, `None` = muted.
pub type FretArray = Vec<Option<u8>>;

/// One finger stopping `string_count` consecutive strings at `fret_number`.
///
/// # Fields
/// - `first_string`: lowest string covered by the bar
/// - `finger_replacement_count`: strings in the bar that are fretted exactly
///   at `fret_number`, i.e. notes that would otherwise each need a finger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret_number: u8,
    pub first_string: usize,
    pub string_count: usize,
    pub finger_replacement_count: usize,
}

impl Barre {
    /// Last string covered by the bar.
    pub fn last_string(&self) -> usize {
        self.first_string + self.string_count - 1
    }
}

/// A sounded string within a fretting.
///
/// `chord_degree` indexes [`Chord::intervals`]; 0 is the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    pub string_number: usize,
    pub fret_number: u8,
    pub interval_class: Interval,
    pub chord_degree: usize,
}

/// Derived properties used by the playability filters and ranking.
///
/// # Fields
/// - `bass_is_root`: the lowest sounded string plays the root
/// - `triad`: exactly three strings sound
/// - `muting`: at least one string is muted
/// - `skipped`: a muted string lies between two sounded strings
/// - `treble_muting`: the highest string is muted
/// - `open`: at least one string sounds open
/// - `position`: one less than the lowest stopped fret (0 near the nut)
/// - `strings`: number of sounded strings
/// - `inversion`: chord degree of the bass note, if any string sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrettingProperties {
    pub bass_is_root: bool,
    pub triad: bool,
    pub barre_count: usize,
    pub muting: bool,
    pub skipped: bool,
    pub treble_muting: bool,
    pub open: bool,
    pub position: u8,
    pub strings: usize,
    pub inversion: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fretting {
    chord: Chord,
    #[serde(skip)]
    instrument: Arc<Instrument>,
    fret_string: String,
    finger_count: usize,
    positions: Vec<FretPosition>,
    barres: Vec<Barre>,
    properties: FrettingProperties,
}

impl Fretting {
    /// Build a fretting from a fret array and the barres it uses.
    ///
    /// # Errors
    /// - [`FretboardError::StringCountMismatch`] if `frets` does not have one
    ///   entry per string
    /// - [`FretboardError::NotAChordTone`] if a sounded string plays a note
    ///   outside the chord
    ///
    /// # Example
    /// ```rust
    /// use fretboard::{Chord, Fretting, Instrument};
    ///
    /// let chord: Chord = "E Major".parse()?;
    /// let frets = [Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)];
    /// let fretting = Fretting::new(&chord, Instrument::guitar(), &frets, Vec::new())?;
    /// assert_eq!(fretting.fret_string(), "022100");
    /// assert_eq!(fretting.finger_count(), 3);
    /// # Ok::<(), fretboard::FretboardError>(())
    /// ```
    pub fn new(
        chord: &Chord,
        instrument: impl Into<Arc<Instrument>>,
        frets: &[Option<u8>],
        barres: Vec<Barre>,
    ) -> Result<Self, FretboardError> {
        let instrument = instrument.into();
        if frets.len() != instrument.string_count() {
            return Err(FretboardError::StringCountMismatch {
                expected: instrument.string_count(),
                actual: frets.len(),
            });
        }

        let mut positions = Vec::with_capacity(frets.len());
        for (string_number, fret) in frets.iter().enumerate() {
            let Some(fret_number) = *fret else { continue };
            let pitch = instrument.pitch_at(string_number, fret_number);
            let interval_class = Interval::between(chord.root(), pitch);
            let chord_degree = chord.degree_of(interval_class).ok_or(
                FretboardError::NotAChordTone {
                    string: string_number,
                    fret: fret_number,
                },
            )?;
            positions.push(FretPosition {
                string_number,
                fret_number,
                interval_class,
                chord_degree,
            });
        }
        positions.sort_by_key(|position| position.string_number);

        let fret_string = fret_string(&positions, instrument.string_count());
        let finger_count = finger_count(&positions, &barres);
        let properties = properties(&positions, &barres, &fret_string, instrument.string_count());

        Ok(Fretting {
            chord: chord.clone(),
            instrument,
            fret_string,
            finger_count,
            positions,
            barres,
            properties,
        })
    }

    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    /// Sounded strings, ascending by string number.
    pub fn positions(&self) -> &[FretPosition] {
        &self.positions
    }

    pub fn barres(&self) -> &[Barre] {
        &self.barres
    }

    /// Canonical serialization of the fret array, e.g. `"x32010"`.
    ///
    /// Independent of which barres are used.
    pub fn fret_string(&self) -> &str {
        &self.fret_string
    }

    pub fn finger_count(&self) -> usize {
        self.finger_count
    }

    pub fn note_count(&self) -> usize {
        self.positions.len()
    }

    pub fn properties(&self) -> &FrettingProperties {
        &self.properties
    }

    /// The fret array this fretting was built from.
    pub fn frets(&self) -> FretArray {
        let mut frets = vec![None; self.instrument.string_count()];
        for position in &self.positions {
            frets[position.string_number] = Some(position.fret_number);
        }
        frets
    }
}

pub(crate) fn fret_string(positions: &[FretPosition], string_count: usize) -> String {
    let mut entries = vec![None; string_count];
    for position in positions {
        entries[position.string_number] = Some(position.fret_number);
    }
    let separator = if positions.iter().any(|p| p.fret_number > 9) {
        "-"
    } else {
        ""
    };
    entries
        .iter()
        .map(|entry| match entry {
            Some(fret) => fret.to_string(),
            None => "x".to_string(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Stopped notes, less the fingers saved by each barre.
fn finger_count(positions: &[FretPosition], barres: &[Barre]) -> usize {
    let fretted = positions.iter().filter(|p| p.fret_number > 0).count();
    let saved: usize = barres
        .iter()
        .map(|barre| barre.finger_replacement_count.saturating_sub(1))
        .sum();
    fretted.saturating_sub(saved)
}

fn properties(
    positions: &[FretPosition],
    barres: &[Barre],
    fret_string: &str,
    string_count: usize,
) -> FrettingProperties {
    let bass = positions.first();
    let skipped = match (positions.first(), positions.last()) {
        (Some(low), Some(high)) => high.string_number - low.string_number + 1 > positions.len(),
        _ => false,
    };
    let treble_muting = string_count > 0
        && positions
            .last()
            .map_or(true, |high| high.string_number < string_count - 1);
    let lowest_stopped = positions
        .iter()
        .map(|p| p.fret_number)
        .filter(|&fret| fret > 0)
        .min();

    FrettingProperties {
        bass_is_root: bass.is_some_and(|p| p.chord_degree == 0),
        triad: positions.len() == 3,
        barre_count: barres.len(),
        muting: fret_string.contains('x'),
        skipped,
        treble_muting,
        open: positions.iter().any(|p| p.fret_number == 0),
        position: lowest_stopped.map_or(0, |fret| fret - 1),
        strings: positions.len(),
        inversion: bass.map(|p| p.chord_degree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guitar_fretting(chord: &str, frets: &[Option<u8>]) -> Fretting {
        let chord: Chord = chord.parse().unwrap();
        Fretting::new(&chord, Instrument::guitar(), frets, Vec::new()).unwrap()
    }

    #[test]
    fn test_positions_are_annotated() {
        let fretting =
            guitar_fretting("C Major", &[None, Some(3), Some(2), Some(0), Some(1), Some(0)]);
        assert_eq!(fretting.fret_string(), "x32010");
        let degrees: Vec<usize> = fretting.positions().iter().map(|p| p.chord_degree).collect();
        assert_eq!(degrees, vec![0, 1, 2, 0, 1]);
        assert_eq!(fretting.positions()[1].interval_class, Interval::new(4));
        assert_eq!(fretting.frets(), vec![None, Some(3), Some(2), Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn test_properties() {
        let c = guitar_fretting("C Major", &[None, Some(3), Some(2), Some(0), Some(1), Some(0)]);
        let props = c.properties();
        assert!(props.bass_is_root);
        assert!(props.muting);
        assert!(!props.skipped);
        assert!(!props.treble_muting);
        assert!(props.open);
        assert!(!props.triad);
        assert_eq!(props.position, 0);
        assert_eq!(props.strings, 5);
        assert_eq!(props.inversion, Some(0));

        let skipped = guitar_fretting("E Major", &[Some(0), None, Some(2), Some(1), Some(0), None]);
        assert!(skipped.properties().skipped);
        assert!(skipped.properties().treble_muting);

        let high =
            guitar_fretting("A Major", &[Some(5), Some(7), Some(7), Some(6), Some(5), Some(5)]);
        assert_eq!(high.properties().position, 4);
        assert!(!high.properties().open);
        assert!(!high.properties().muting);
    }

    #[test]
    fn test_first_inversion() {
        // C/E
        let fretting =
            guitar_fretting("C Major", &[Some(0), Some(3), Some(2), Some(0), Some(1), Some(0)]);
        assert!(!fretting.properties().bass_is_root);
        assert_eq!(fretting.properties().inversion, Some(1));
    }

    #[test]
    fn test_two_digit_frets_use_separator() {
        let fretting =
            guitar_fretting("D Major", &[None, Some(5), Some(12), Some(11), Some(10), Some(10)]);
        assert_eq!(fretting.fret_string(), "x-5-12-11-10-10");
    }

    #[test]
    fn test_construction_errors() {
        let chord: Chord = "E Major".parse().unwrap();
        assert!(matches!(
            Fretting::new(&chord, Instrument::guitar(), &[Some(0)], Vec::new()),
            Err(FretboardError::StringCountMismatch { expected: 6, actual: 1 })
        ));
        assert!(matches!(
            Fretting::new(
                &chord,
                Instrument::guitar(),
                &[Some(1), None, None, None, None, None],
                Vec::new()
            ),
            Err(FretboardError::NotAChordTone { string: 0, fret: 1 })
        ));
    }

    #[test]
    fn test_finger_count_with_barre() {
        let chord: Chord = "F Major".parse().unwrap();
        let frets = [Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)];
        let barre = Barre {
            fret_number: 1,
            first_string: 0,
            string_count: 6,
            finger_replacement_count: 3,
        };
        let fretting = Fretting::new(&chord, Instrument::guitar(), &frets, vec![barre]).unwrap();
        assert_eq!(fretting.finger_count(), 4);
        assert_eq!(fretting.properties().barre_count, 1);
        assert_eq!(fretting.fret_string(), "133211");
        assert_eq!(barre.last_string(), 5);
    }
}
