//! # Configuration
//!
//! Search options and user-defined instruments.
//!
//! [`FrettingOptions`] controls the search; every field has a default, so a
//! config file only lists what it changes. A YAML config file may also define
//! extra instruments by tuning.
//!
//! ## Config File
//! ```yaml
//! options:
//!   max-fret-number: 5
//!   finger-picking: true
//! instruments:
//!   - name: dadgad
//!     strings: [D2, A2, D3, G3, A3, D4]
//!     frets: 12
//! ```
//!
//! ## Example
//! ```rust
//! use fretboard::Config;
//!
//! let config = Config::from_yaml_str("options:\n  max-fret-spread: 4\n")?;
//! assert_eq!(config.options.max_fret_spread, 4);
//! assert_eq!(config.options.max_fret_number, 4);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::FretboardError;
use crate::instrument::Instrument;

/// Options for [`all_frettings`](crate::all_frettings).
///
/// # Fields
/// - `filter`: drop frettings that need more than four fingers
/// - `finger_picking`: allow muted strings between or above sounded strings
/// - `max_fret_number`: highest fret searched, unless `all_positions`
/// - `max_fret_spread`: widest stretch between stopped frets
/// - `all_positions`: search the whole neck
/// - `max_fret_arrays`: refuse searches with more candidate fret arrays
/// - `max_barre_candidates`: barres per fret array that enter the powerset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FrettingOptions {
    pub filter: bool,
    pub finger_picking: bool,
    pub max_fret_number: u8,
    pub max_fret_spread: u8,
    pub all_positions: bool,
    pub max_fret_arrays: u64,
    pub max_barre_candidates: usize,
}

impl Default for FrettingOptions {
    fn default() -> Self {
        Self {
            filter: true,
            finger_picking: false,
            max_fret_number: 4,
            max_fret_spread: 3,
            all_positions: false,
            max_fret_arrays: 1_000_000,
            max_barre_candidates: 8,
        }
    }
}

/// Raw instrument entry for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct RawInstrument {
    pub name: String,
    pub strings: Vec<String>,
    pub frets: Option<u8>,
}

/// Raw config file for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    #[serde(default)]
    pub options: FrettingOptions,
    #[serde(default)]
    pub instruments: Vec<RawInstrument>,
}

const DEFAULT_FRET_COUNT: u8 = 12;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub options: FrettingOptions,
    pub instruments: Vec<Instrument>,
}

impl Config {
    pub fn from_yaml_str(content: &str) -> Result<Self, FretboardError> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| FretboardError::Config(e.to_string()))?;

        let instruments = raw
            .instruments
            .iter()
            .map(|entry| {
                if entry.strings.is_empty() {
                    return Err(FretboardError::Config(format!(
                        "Instrument '{}' has no strings",
                        entry.name
                    )));
                }
                Instrument::from_tuning(
                    entry.name.clone(),
                    &entry.strings,
                    entry.frets.unwrap_or(DEFAULT_FRET_COUNT),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Config {
            options: raw.options,
            instruments,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FretboardError> {
        let content = fs::read_to_string(path)?;
        Config::from_yaml_str(&content)
    }

    /// An instrument from this config by name, falling back to the presets.
    pub fn instrument(&self, name: &str) -> Result<Instrument, FretboardError> {
        match self
            .instruments
            .iter()
            .find(|instrument| instrument.name().eq_ignore_ascii_case(name.trim()))
        {
            Some(instrument) => Ok(instrument.clone()),
            None => Instrument::preset(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config.options, FrettingOptions::default());
        assert!(config.instruments.is_empty());
    }

    #[test]
    fn test_options_override() {
        let config = Config::from_yaml_str(
            "options:\n  filter: false\n  all-positions: true\n  max-fret-arrays: 5000\n",
        )
        .unwrap();
        assert!(!config.options.filter);
        assert!(config.options.all_positions);
        assert_eq!(config.options.max_fret_arrays, 5000);
        assert_eq!(config.options.max_fret_spread, 3);
    }

    #[test]
    fn test_custom_instrument() {
        let config = Config::from_yaml_str(
            "instruments:\n  - name: dadgad\n    strings: [D2, A2, D3, G3, A3, D4]\n",
        )
        .unwrap();
        let dadgad = config.instrument("DADGAD").unwrap();
        assert_eq!(dadgad.string_count(), 6);
        assert_eq!(dadgad.fret_count(), 12);
        assert_eq!(dadgad.strings()[0].name(), "D2");

        // presets are still reachable
        assert_eq!(config.instrument("guitar").unwrap(), Instrument::guitar());
        assert!(config.instrument("sitar").is_err());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_yaml_str("options:\n  max-fret-number: lots\n"),
            Err(FretboardError::Config(_))
        ));
        assert!(matches!(
            Config::from_yaml_str("instruments:\n  - name: broken\n    strings: [E2, X9]\n"),
            Err(FretboardError::InvalidPitch(_))
        ));
        assert!(matches!(
            Config::from_yaml_str("instruments:\n  - name: deep\n    strings: [C999999999]\n"),
            Err(FretboardError::InvalidPitch(_))
        ));
        assert!(matches!(
            Config::from_yaml_str("instruments:\n  - name: empty\n    strings: []\n"),
            Err(FretboardError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "options:\n  finger-picking: true").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(config.options.finger_picking);

        assert!(matches!(
            Config::load("/nonexistent/fretboard.yaml"),
            Err(FretboardError::Io(_))
        ));
    }
}
