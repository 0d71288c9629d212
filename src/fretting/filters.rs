//! Playability filters
//!
//! Soft, aesthetic filters applied after the hard completeness and spread
//! checks. Stages run in order on whatever survived the previous stage. A stage
//! that would reject every remaining fretting is skipped, so these filters
//! never turn a non-empty result into an empty one.

use tracing::{debug, trace};

use crate::config::FrettingOptions;

use super::types::Fretting;

/// A named predicate; frettings for which `keep` returns false are dropped.
#[derive(Debug, Clone, Copy)]
pub struct FilterStage {
    pub name: &'static str,
    pub keep: fn(&Fretting) -> bool,
}

const MAX_FINGERS: usize = 4;

fn playable_finger_count(fretting: &Fretting) -> bool {
    fretting.finger_count() <= MAX_FINGERS
}

fn no_medial_muting(fretting: &Fretting) -> bool {
    !fretting.properties().skipped
}

fn no_treble_muting(fretting: &Fretting) -> bool {
    !fretting.properties().treble_muting
}

/// The stages enabled by `options`, in application order.
///
/// 1. At most four fingers (unless `filter` is off)
/// 2. No muted string between sounded strings (unless finger picking)
/// 3. No muted treble string (unless finger picking)
pub fn playability_stages(options: &FrettingOptions) -> Vec<FilterStage> {
    let mut stages = Vec::new();
    if options.filter {
        stages.push(FilterStage {
            name: "finger count",
            keep: playable_finger_count,
        });
    }
    if !options.finger_picking {
        stages.push(FilterStage {
            name: "medial muting",
            keep: no_medial_muting,
        });
        stages.push(FilterStage {
            name: "treble muting",
            keep: no_treble_muting,
        });
    }
    stages
}

/// Run `frettings` through the stages enabled by `options`.
pub fn apply_playability_filters(
    frettings: Vec<Fretting>,
    options: &FrettingOptions,
) -> Vec<Fretting> {
    playability_stages(options)
        .iter()
        .fold(frettings, |frettings, stage| apply_stage(frettings, stage))
}

fn apply_stage(frettings: Vec<Fretting>, stage: &FilterStage) -> Vec<Fretting> {
    let before = frettings.len();
    let (kept, rejected): (Vec<_>, Vec<_>) = frettings.into_iter().partition(|f| (stage.keep)(f));

    if kept.is_empty() {
        trace!(stage = stage.name, count = before, "Filter would reject everything; skipped");
        return rejected;
    }
    debug!(stage = stage.name, before, after = kept.len(), "Applied playability filter");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::Chord;
    use crate::instrument::Instrument;

    fn fretting(chord: &str, frets: &[Option<u8>]) -> Fretting {
        let chord: Chord = chord.parse().unwrap();
        Fretting::new(&chord, Instrument::guitar(), frets, Vec::new()).unwrap()
    }

    fn fret_strings(frettings: &[Fretting]) -> Vec<&str> {
        frettings.iter().map(|f| f.fret_string()).collect()
    }

    #[test]
    fn test_stages_follow_options() {
        let names = |options: &FrettingOptions| -> Vec<&'static str> {
            playability_stages(options).iter().map(|s| s.name).collect()
        };
        assert_eq!(
            names(&FrettingOptions::default()),
            vec!["finger count", "medial muting", "treble muting"]
        );
        let picking = FrettingOptions {
            filter: false,
            finger_picking: true,
            ..FrettingOptions::default()
        };
        assert!(names(&picking).is_empty());
    }

    #[test]
    fn test_filters_remove_muted_voicings() {
        let frettings = vec![
            fretting("E Major", &[Some(0), None, Some(2), Some(1), Some(0), Some(0)]),
            fretting("E Major", &[Some(0), Some(2), Some(2), Some(1), Some(0), None]),
            fretting("E Major", &[Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)]),
        ];
        let kept = apply_playability_filters(frettings, &FrettingOptions::default());
        assert_eq!(fret_strings(&kept), vec!["022100"]);
    }

    #[test]
    fn test_finger_picking_keeps_muted_voicings() {
        let frettings = vec![
            fretting("E Major", &[Some(0), None, Some(2), Some(1), Some(0), Some(0)]),
            fretting("E Major", &[Some(0), Some(2), Some(2), Some(1), Some(0), None]),
        ];
        let options = FrettingOptions {
            finger_picking: true,
            ..FrettingOptions::default()
        };
        let kept = apply_playability_filters(frettings, &options);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_stage_is_skipped_when_it_would_reject_everything() {
        // both have a muted treble string; the treble stage must not empty the set
        let frettings = vec![
            fretting("E Major", &[Some(0), Some(2), Some(2), Some(1), Some(0), None]),
            fretting("E Major", &[Some(0), Some(2), Some(2), Some(1), None, None]),
        ];
        let kept = apply_playability_filters(frettings, &FrettingOptions::default());
        assert_eq!(fret_strings(&kept), vec!["02210x", "0221xx"]);
    }

    #[test]
    fn test_finger_count_filter() {
        let frettings = vec![
            fretting("A Major", &[Some(5), Some(7), Some(7), Some(6), Some(5), Some(5)]),
            fretting("A Major", &[Some(0), Some(0), Some(2), Some(2), Some(2), Some(0)]),
        ];
        let kept = apply_playability_filters(frettings.clone(), &FrettingOptions::default());
        assert_eq!(fret_strings(&kept), vec!["002220"]);

        let unfiltered = FrettingOptions {
            filter: false,
            ..FrettingOptions::default()
        };
        assert_eq!(apply_playability_filters(frettings, &unfiltered).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(apply_playability_filters(Vec::new(), &FrettingOptions::default()).is_empty());
    }
}
