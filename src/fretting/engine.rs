//! Fretting search engine
//!
//! Ties the stages together: candidate frets per string, the lazy cartesian
//! product, the hard completeness and spread filters, barre detection and
//! barre subsets, the soft playability filters, and ranking.

use std::sync::Arc;
use tracing::debug;

use crate::chord::Chord;
use crate::config::FrettingOptions;
use crate::error::FretboardError;
use crate::instrument::Instrument;

use super::barre::{barre_sets, detect_barres};
use super::enumerate::{fret_array_count, fret_arrays, fret_candidates, is_complete, within_spread};
use super::filters::apply_playability_filters;
use super::rank::rank_frettings;
use super::types::Fretting;

/// Every way to play `chord` on `instrument`, best first.
///
/// An empty list means the instrument cannot sound every chord tone within
/// the fret and spread limits in `options`; that is not an error.
///
/// # Errors
/// [`FretboardError::SearchTooLarge`] if the candidate product exceeds
/// `options.max_fret_arrays`.
///
/// # Example
/// ```rust
/// use fretboard::{all_frettings, Chord, FrettingOptions, Instrument};
///
/// let chord: Chord = "A Minor".parse()?;
/// let frettings = all_frettings(&chord, &Instrument::guitar(), &FrettingOptions::default())?;
/// assert_eq!(frettings[0].fret_string(), "x02210");
/// # Ok::<(), fretboard::FretboardError>(())
/// ```
pub fn all_frettings(
    chord: &Chord,
    instrument: &Instrument,
    options: &FrettingOptions,
) -> Result<Vec<Fretting>, FretboardError> {
    let candidates = fret_candidates(chord, instrument, options);
    let fret_array_total = fret_array_count(&candidates);
    if fret_array_total > options.max_fret_arrays as u128 {
        return Err(FretboardError::SearchTooLarge {
            fret_arrays: fret_array_total,
            limit: options.max_fret_arrays,
        });
    }
    debug!(
        chord = %chord,
        instrument = %instrument,
        fret_arrays = fret_array_total as u64,
        "Searching frettings"
    );

    let instrument = Arc::new(instrument.clone());
    let mut frettings = Vec::new();
    let playable = fret_arrays(&candidates)
        .filter(|frets| is_complete(chord, &instrument, frets))
        .filter(|frets| within_spread(frets, options.max_fret_spread));

    for frets in playable {
        let barres = detect_barres(&frets);
        for barre_set in barre_sets(&frets, barres, options.max_barre_candidates) {
            frettings.push(Fretting::new(chord, Arc::clone(&instrument), &frets, barre_set)?);
        }
    }
    debug!(count = frettings.len(), "Complete frettings within spread");

    let mut frettings = apply_playability_filters(frettings, options);
    rank_frettings(&mut frettings);
    Ok(frettings)
}

/// The best fretting for `chord` on `instrument`.
///
/// # Errors
/// - [`FretboardError::NoFretting`] if [`all_frettings`] finds nothing
/// - anything [`all_frettings`] returns
///
/// # Example
/// ```rust
/// use fretboard::{fretting_for, Chord, FrettingOptions, Instrument};
///
/// let chord: Chord = "E Major".parse()?;
/// let fretting = fretting_for(&chord, &Instrument::guitar(), &FrettingOptions::default())?;
/// assert_eq!(fretting.fret_string(), "022100");
/// # Ok::<(), fretboard::FretboardError>(())
/// ```
pub fn fretting_for(
    chord: &Chord,
    instrument: &Instrument,
    options: &FrettingOptions,
) -> Result<Fretting, FretboardError> {
    all_frettings(chord, instrument, options)?
        .into_iter()
        .next()
        .ok_or_else(|| FretboardError::NoFretting {
            chord: chord.name(),
            instrument: instrument.name().to_string(),
        })
}

/// [`all_frettings`] for a chord name such as `"E Major"` or `"G7"`.
pub fn all_frettings_for_name(
    chord_name: &str,
    instrument: &Instrument,
    options: &FrettingOptions,
) -> Result<Vec<Fretting>, FretboardError> {
    let chord: Chord = chord_name.parse()?;
    all_frettings(&chord, instrument, options)
}

/// [`fretting_for`] for a chord name such as `"E Major"` or `"G7"`.
pub fn fretting_for_name(
    chord_name: &str,
    instrument: &Instrument,
    options: &FrettingOptions,
) -> Result<Fretting, FretboardError> {
    let chord: Chord = chord_name.parse()?;
    fretting_for(&chord, instrument, options)
}
