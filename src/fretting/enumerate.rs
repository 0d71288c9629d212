//! Candidate generation
//!
//! Finds which frets on each string sound a chord tone, then walks the
//! cartesian product of those candidates (plus muting) as an odometer so the
//! full product is never held in memory.

use std::collections::BTreeSet;

use crate::chord::Chord;
use crate::config::FrettingOptions;
use crate::instrument::Instrument;
use crate::pitch::{Interval, PitchClass};

use super::types::FretArray;

/// For each string, the ascending frets that sound a chord tone.
///
/// Frets above `max_fret_number` are skipped unless `all_positions` is set.
pub fn fret_candidates(
    chord: &Chord,
    instrument: &Instrument,
    options: &FrettingOptions,
) -> Vec<Vec<u8>> {
    let max_fret = if options.all_positions {
        instrument.fret_count()
    } else {
        options.max_fret_number.min(instrument.fret_count())
    };

    let mut candidates = vec![Vec::new(); instrument.string_count()];
    for (string, fret) in instrument.positions() {
        if fret > max_fret {
            continue;
        }
        let interval = Interval::between(chord.root(), instrument.pitch_at(string, fret));
        if chord.degree_of(interval).is_some() {
            candidates[string].push(fret);
        }
    }
    candidates
}

/// Number of fret arrays [`fret_arrays`] will yield for these candidates.
pub fn fret_array_count(candidates: &[Vec<u8>]) -> u128 {
    candidates
        .iter()
        .fold(1u128, |total, frets| total.saturating_mul(frets.len() as u128 + 1))
}

/// Iterate every combination of muted-or-candidate fret across strings.
///
/// String 0 is the most significant digit; on each string the muted choice
/// comes first, then frets in ascending order.
pub fn fret_arrays(candidates: &[Vec<u8>]) -> FretArrays {
    let choices = candidates
        .iter()
        .map(|frets| {
            std::iter::once(None)
                .chain(frets.iter().copied().map(Some))
                .collect()
        })
        .collect::<Vec<Vec<Option<u8>>>>();
    FretArrays {
        indices: vec![0; choices.len()],
        choices,
        done: false,
    }
}

/// Lazy cartesian product returned by [`fret_arrays`].
#[derive(Debug, Clone)]
pub struct FretArrays {
    choices: Vec<Vec<Option<u8>>>,
    indices: Vec<usize>,
    done: bool,
}

impl Iterator for FretArrays {
    type Item = FretArray;

    fn next(&mut self) -> Option<FretArray> {
        if self.done {
            return None;
        }

        let current = self
            .indices
            .iter()
            .zip(&self.choices)
            .map(|(&index, choices)| choices[index])
            .collect();

        // advance the odometer, last string fastest
        self.done = true;
        for string in (0..self.indices.len()).rev() {
            self.indices[string] += 1;
            if self.indices[string] < self.choices[string].len() {
                self.done = false;
                break;
            }
            self.indices[string] = 0;
        }

        Some(current)
    }
}

/// True if the sounded strings cover every distinct pitch class of the chord.
///
/// Doubled notes count once.
pub fn is_complete(chord: &Chord, instrument: &Instrument, frets: &[Option<u8>]) -> bool {
    let sounded: BTreeSet<PitchClass> = frets
        .iter()
        .enumerate()
        .filter_map(|(string, fret)| fret.map(|fret| instrument.pitch_at(string, fret).class()))
        .collect();
    sounded.len() == chord.distinct_pitch_class_count()
}

/// True if the stopped frets span at most `max_fret_spread` frets.
///
/// Open and muted strings are ignored.
pub fn within_spread(frets: &[Option<u8>], max_fret_spread: u8) -> bool {
    let stopped = frets.iter().flatten().copied().filter(|&fret| fret > 0);
    let (min, max) = stopped.fold((u8::MAX, 0), |(min, max), fret| (min.min(fret), max.max(fret)));
    min > max || max - min <= max_fret_spread
}
