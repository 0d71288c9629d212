use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing::debug;

use fretboard::{all_frettings, Chord, Config, Fretting, CHORD_QUALITIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "fretboard")]
#[command(about = "Find playable frettings for a chord")]
#[command(version)]
struct Args {
    /// Chord name, e.g. "E Major", "Am", "G7"
    #[arg(required_unless_present_any = ["list_instruments", "list_chords"])]
    chord: Option<String>,

    /// Instrument preset or an instrument from the config file
    #[arg(short, long, default_value = "guitar")]
    instrument: String,

    /// YAML config file with options and custom instruments
    #[arg(short, long, env = "FRETBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Print every fretting, best first
    #[arg(short, long)]
    all: bool,

    /// Print at most this many frettings (with --all)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Search the whole neck, not just the first frets
    #[arg(long)]
    all_positions: bool,

    /// Allow muted strings between or above sounded strings
    #[arg(long)]
    finger_picking: bool,

    /// Keep frettings that need more than four fingers
    #[arg(long)]
    no_filter: bool,

    /// Highest fret to search
    #[arg(long)]
    max_fret: Option<u8>,

    /// Widest stretch between stopped frets
    #[arg(long)]
    max_spread: Option<u8>,

    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// List instrument names and exit
    #[arg(long)]
    list_instruments: bool,

    /// List chord qualities and exit
    #[arg(long)]
    list_chords: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error reading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    if args.list_instruments {
        for instrument in &config.instruments {
            println!("{}", instrument.name());
        }
        for name in fretboard::Instrument::preset_names() {
            println!("{}", name);
        }
        return;
    }
    if args.list_chords {
        for quality in CHORD_QUALITIES {
            println!("{:<20} {}", quality.name, quality.abbrs.join(" "));
        }
        return;
    }

    // Command-line flags override the config file
    let options = &mut config.options;
    options.all_positions |= args.all_positions;
    options.finger_picking |= args.finger_picking;
    if args.no_filter {
        options.filter = false;
    }
    if let Some(max_fret) = args.max_fret {
        options.max_fret_number = max_fret;
    }
    if let Some(max_spread) = args.max_spread {
        options.max_fret_spread = max_spread;
    }
    debug!(options = ?config.options, "Resolved options");

    let chord_name = args.chord.as_deref().unwrap_or_default();
    let chord: Chord = match chord_name.parse() {
        Ok(chord) => chord,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let instrument = match config.instrument(&args.instrument) {
        Ok(instrument) => instrument,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let frettings = match all_frettings(&chord, &instrument, &config.options) {
        Ok(frettings) => frettings,
        Err(e) => {
            eprintln!("Search failed: {}", e);
            process::exit(1);
        }
    };
    if frettings.is_empty() {
        eprintln!("No playable fretting for {} on {}", chord, instrument);
        process::exit(1);
    }

    let count = if args.all {
        args.limit.unwrap_or(frettings.len())
    } else {
        1
    };
    let shown = &frettings[..count.min(frettings.len())];

    match args.format {
        Format::Text => {
            for fretting in shown {
                println!("{}", describe(fretting));
            }
        }
        Format::Yaml => match serde_yaml::to_string(shown) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error writing YAML: {}", e);
                process::exit(1);
            }
        },
    }
}

/// One line per fretting: `022100  E Major  3 fingers`
fn describe(fretting: &Fretting) -> String {
    let mut line = format!(
        "{:<8} {}  {} finger{}",
        fretting.fret_string(),
        fretting.chord(),
        fretting.finger_count(),
        if fretting.finger_count() == 1 { "" } else { "s" }
    );
    for barre in fretting.barres() {
        line.push_str(&format!(
            "  barre {} @{}",
            barre.string_count, barre.fret_number
        ));
    }
    if !fretting.properties().bass_is_root {
        if let Some(bass) = fretting.positions().first() {
            let note = fretting
                .instrument()
                .pitch_at(bass.string_number, bass.fret_number)
                .class();
            line.push_str(&format!("  /{}", note));
        }
    }
    line
}
