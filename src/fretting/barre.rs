//! Barre detection
//!
//! For every stopped fret `F` in a fret array, each string is coded as one
//! character:
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | `=`  | fretted exactly at `F`                   |
//! | `>`  | fretted above `F` (another finger frets it) |
//! | `<`  | fretted below `F`, or open               |
//! | `x`  | muted                                    |
//!
//! A bar can lie across any run that starts at an `=` and continues through
//! `=` or `>` strings. It is only worth modeling if it replaces at least two
//! individually fretted notes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

use super::types::Barre;

static BARRE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("=[=>]+").expect("barre run pattern is valid"));

/// Voicings with fewer stopped strings than this never use a barre.
const BARRE_MIN_STOPPED: usize = 5;

fn barre_code(frets: &[Option<u8>], fret_number: u8) -> String {
    frets
        .iter()
        .map(|fret| match fret.map(|f| f.cmp(&fret_number)) {
            None => 'x',
            Some(Ordering::Equal) => '=',
            Some(Ordering::Greater) => '>',
            Some(Ordering::Less) => '<',
        })
        .collect()
}

/// Find every candidate barre, frets ascending and runs left to right.
///
/// # Example
/// ```rust
/// use fretboard::{detect_barres, Barre};
///
/// // F major, E shape
/// let barres = detect_barres(&[Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)]);
/// assert_eq!(
///     barres[0],
///     Barre { fret_number: 1, first_string: 0, string_count: 6, finger_replacement_count: 3 }
/// );
/// ```
pub fn detect_barres(frets: &[Option<u8>]) -> Vec<Barre> {
    let stopped: BTreeSet<u8> = frets.iter().flatten().copied().filter(|&f| f > 0).collect();

    let mut barres = Vec::new();
    for fret_number in stopped {
        let code = barre_code(frets, fret_number);
        for run in BARRE_RUN.find_iter(&code) {
            let finger_replacement_count = run.as_str().matches('=').count();
            if finger_replacement_count > 1 {
                barres.push(Barre {
                    fret_number,
                    first_string: run.start(),
                    string_count: run.len(),
                    finger_replacement_count,
                });
            }
        }
    }
    barres
}

/// Every subset of `barres` that a player might use together, empty set
/// first.
///
/// Voicings with four or fewer stopped strings only get the empty set. At
/// most `max_candidates` barres take part in the powerset.
pub fn barre_sets(
    frets: &[Option<u8>],
    mut barres: Vec<Barre>,
    max_candidates: usize,
) -> impl Iterator<Item = Vec<Barre>> {
    let stopped = frets.iter().flatten().filter(|&&f| f > 0).count();
    if stopped < BARRE_MIN_STOPPED {
        barres.clear();
    }
    if barres.len() > max_candidates {
        debug!(
            detected = barres.len(),
            max_candidates, "Too many barre candidates; keeping the first ones"
        );
        barres.truncate(max_candidates);
    }

    let subsets = 1u64 << barres.len();
    (0..subsets).map(move |mask| {
        barres
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, barre)| *barre)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barre(
        fret_number: u8,
        first_string: usize,
        string_count: usize,
        finger_replacement_count: usize,
    ) -> Barre {
        Barre {
            fret_number,
            first_string,
            string_count,
            finger_replacement_count,
        }
    }

    #[test]
    fn test_barre_code() {
        assert_eq!(barre_code(&[Some(1), Some(3), None, Some(0), Some(1)], 1), "=>x<=");
    }

    #[test]
    fn test_full_barre() {
        let barres = detect_barres(&[Some(2); 5]);
        assert_eq!(barres, vec![barre(2, 0, 5, 5)]);
    }

    #[test]
    fn test_e_shape_barres() {
        // 1 3 3 2 1 1: a bar at 1 across all six strings, and a two-string bar at 3
        let barres = detect_barres(&[Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)]);
        assert_eq!(barres, vec![barre(1, 0, 6, 3), barre(3, 1, 2, 2)]);
    }

    #[test]
    fn test_single_exact_match_is_not_a_barre() {
        // x 0 2 2 2 0: the run "===" at fret 2 is a barre; nothing else is
        let barres = detect_barres(&[None, Some(0), Some(2), Some(2), Some(2), Some(0)]);
        assert_eq!(barres, vec![barre(2, 2, 3, 3)]);

        // only one '=' in the run
        assert!(detect_barres(&[Some(1), Some(3), Some(3), None])
            .iter()
            .all(|b| b.fret_number != 1));
    }

    #[test]
    fn test_muted_and_lower_strings_break_runs() {
        let barres = detect_barres(&[Some(3), Some(3), None, Some(3), Some(3), Some(0), Some(3)]);
        assert_eq!(barres, vec![barre(3, 0, 2, 2), barre(3, 3, 2, 2)]);
    }

    #[test]
    fn test_barre_sets_powerset() {
        let frets = [Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)];
        let sets: Vec<Vec<Barre>> = barre_sets(&frets, detect_barres(&frets), 8).collect();
        assert_eq!(
            sets,
            vec![
                vec![],
                vec![barre(1, 0, 6, 3)],
                vec![barre(3, 1, 2, 2)],
                vec![barre(1, 0, 6, 3), barre(3, 1, 2, 2)],
            ]
        );
    }

    #[test]
    fn test_barre_sets_skip_small_voicings() {
        let frets = [None, Some(0), Some(2), Some(2), Some(2), Some(0)];
        let sets: Vec<Vec<Barre>> = barre_sets(&frets, detect_barres(&frets), 8).collect();
        assert_eq!(sets, vec![Vec::<Barre>::new()]);
    }

    #[test]
    fn test_barre_sets_cap() {
        let frets = [Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)];
        let sets: Vec<Vec<Barre>> = barre_sets(&frets, detect_barres(&frets), 1).collect();
        assert_eq!(sets, vec![vec![], vec![barre(1, 0, 6, 3)]]);
    }
}
