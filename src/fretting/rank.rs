//! Ranking
//!
//! Frettings are ordered by a fixed list of keys, most important first. The
//! sort is stable: frettings equal on every key keep their generation order.

use std::cmp::Ordering;

use super::types::Fretting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Higher,
    Lower,
}

/// One ranking criterion: a numeric key and which direction wins.
#[derive(Debug, Clone, Copy)]
pub struct RankingKey {
    pub name: &'static str,
    pub key: fn(&Fretting) -> usize,
    pub prefer: Preference,
}

fn root_position(fretting: &Fretting) -> usize {
    fretting.properties().bass_is_root as usize
}

fn note_count(fretting: &Fretting) -> usize {
    fretting.note_count()
}

fn barre_count(fretting: &Fretting) -> usize {
    fretting.properties().barre_count
}

fn finger_count(fretting: &Fretting) -> usize {
    fretting.finger_count()
}

/// 1. Root in the bass
/// 2. More sounded strings
/// 3. Fewer barres
/// 4. Fewer fingers
pub const RANKING_KEYS: &[RankingKey] = &[
    RankingKey {
        name: "root position",
        key: root_position,
        prefer: Preference::Higher,
    },
    RankingKey {
        name: "note count",
        key: note_count,
        prefer: Preference::Higher,
    },
    RankingKey {
        name: "barre count",
        key: barre_count,
        prefer: Preference::Lower,
    },
    RankingKey {
        name: "finger count",
        key: finger_count,
        prefer: Preference::Lower,
    },
];

/// Compare two frettings; `Less` means `a` ranks ahead of `b`.
pub fn compare_frettings(a: &Fretting, b: &Fretting) -> Ordering {
    RANKING_KEYS
        .iter()
        .map(|ranking| {
            let (ka, kb) = ((ranking.key)(a), (ranking.key)(b));
            match ranking.prefer {
                Preference::Higher => kb.cmp(&ka),
                Preference::Lower => ka.cmp(&kb),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sort best first.
pub fn rank_frettings(frettings: &mut [Fretting]) {
    frettings.sort_by(compare_frettings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::Chord;
    use crate::instrument::Instrument;
    use crate::fretting::types::Barre;

    fn fretting(frets: &[Option<u8>], barres: Vec<Barre>) -> Fretting {
        let chord: Chord = "E Major".parse().unwrap();
        Fretting::new(&chord, Instrument::guitar(), frets, barres).unwrap()
    }

    fn fret_strings(frettings: &[Fretting]) -> Vec<&str> {
        frettings.iter().map(|f| f.fret_string()).collect()
    }

    #[test]
    fn test_root_position_outranks_note_count() {
        let mut frettings = vec![
            // G# in the bass, six strings
            fretting(&[Some(4), Some(2), Some(2), Some(1), Some(0), Some(0)], vec![]),
            // E in the bass, five strings
            fretting(&[Some(0), Some(2), Some(2), Some(1), Some(0), None], vec![]),
        ];
        rank_frettings(&mut frettings);
        assert_eq!(fret_strings(&frettings), vec!["02210x", "422100"]);
    }

    #[test]
    fn test_fewer_fingers_win() {
        let mut frettings = vec![
            fretting(&[Some(0), Some(2), Some(2), Some(1), Some(0), Some(4)], vec![]),
            fretting(&[Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)], vec![]),
        ];
        rank_frettings(&mut frettings);
        assert_eq!(fret_strings(&frettings), vec!["022100", "022104"]);
    }

    #[test]
    fn test_fewer_barres_win_over_fewer_fingers() {
        let frets = [Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)];
        let barre = Barre {
            fret_number: 2,
            first_string: 1,
            string_count: 2,
            finger_replacement_count: 2,
        };
        let mut frettings = vec![fretting(&frets, vec![barre]), fretting(&frets, vec![])];
        assert_eq!(frettings[0].finger_count(), 2);
        rank_frettings(&mut frettings);
        assert!(frettings[0].barres().is_empty());
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let a = fretting(&[Some(0), Some(2), Some(2), Some(1), Some(0), Some(4)], vec![]);
        let b = fretting(&[Some(0), Some(2), Some(2), Some(4), Some(0), Some(4)], vec![]);
        assert_eq!(compare_frettings(&a, &b), Ordering::Equal);

        let mut frettings = vec![b, a];
        rank_frettings(&mut frettings);
        assert_eq!(fret_strings(&frettings), vec!["022404", "022104"]);
    }
}
