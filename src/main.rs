// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use rad::music::names_to_midi;
use rad::engine::OCTAVE_RANGE;
use rad::{ChordSpec, Engine, RadConfig, ScaleChordOptions, ScaleSpec, SignType};
use tracing::Level;

fn print_usage() {
    println!("RAD - Chord and scale pitch calculator");
    println!();
    println!("Usage: rad [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  chord <SYMBOL> [DEGREE...]   Spell a chord (e.g. Am7, F#dim), optional extra degrees");
    println!("  scale <ROOT> <TYPE>          Spell one scale (e.g. D dorian)");
    println!("  scale-chords <ROOT> <TYPE>   Spell a chord on every scale degree");
    println!("  midi <PITCH>...              Convert pitch names (e.g. C4) to MIDI note numbers");
    println!("  chord-types                  List registered chord types");
    println!("  scale-types                  List registered scale types");
    println!();
    println!("Options:");
    println!("  --config <PATH>   Load defaults and custom types from a TOML or YAML file");
    println!("  --octave <N>      Octave of the first note (default 4)");
    println!("  --sign <SIGN>     Accidental preference: default, sharp or flat");
    println!("  --size <N>        Tones per chord for scale-chords (default 3)");
    println!("  -v, --verbose     Log debug output to stderr");
    println!("  -h, --help        Show this help message");
}

/// Flags that can appear anywhere on the command line
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    verbose: bool,
    help: bool,
    octave: Option<i32>,
    sign: Option<SignType>,
    size: Option<usize>,
}

fn parse_args(args: &[String]) -> Result<(Options, Vec<String>)> {
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };

        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--octave" => {
                let v = value("--octave")?;
                let octave: i32 = v.parse().map_err(|_| anyhow!("Invalid octave: {}", v))?;
                if !OCTAVE_RANGE.contains(&octave) {
                    bail!("Octave {} is outside {:?}", octave, OCTAVE_RANGE);
                }
                options.octave = Some(octave);
            }
            "--sign" => options.sign = Some(value("--sign")?.parse()?),
            "--size" => {
                let v = value("--size")?;
                options.size = Some(v.parse().map_err(|_| anyhow!("Invalid chord size: {}", v))?);
            }
            "-v" | "--verbose" => options.verbose = true,
            "-h" | "--help" => options.help = true,
            _ => positional.push(arg.clone()),
        }
    }

    Ok((options, positional))
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(options: &Options) -> Result<Engine> {
    match &options.config {
        Some(path) => RadConfig::load(path)?.build_engine(),
        None => Ok(Engine::new()),
    }
}

fn scale_spec(args: &[String], command: &str) -> Result<ScaleSpec> {
    match args {
        [root, scale_type] => Ok(ScaleSpec::new(root.as_str(), scale_type.as_str())),
        _ => bail!("{} requires a root and a scale type", command),
    }
}

/// Resolve the chord symbol; degrees given on the command line replace its extensions
fn chord_spec(engine: &Engine, args: &[String]) -> Result<ChordSpec> {
    let (symbol, degrees) = args
        .split_first()
        .ok_or_else(|| anyhow!("chord requires a chord symbol"))?;

    let mut spec = engine.resolve(symbol.as_str().into())?;
    if !degrees.is_empty() {
        spec.extensions = degrees
            .iter()
            .map(|d| d.parse::<u8>().map_err(|_| anyhow!("Invalid degree: {}", d)))
            .collect::<Result<Vec<_>>>()?;
    }
    Ok(spec)
}

fn run_chord(engine: &Engine, options: &Options, args: &[String]) -> Result<Vec<String>> {
    let spec = chord_spec(engine, args)?;
    let defaults = engine.defaults();
    let notes = engine.chord(
        spec,
        options.octave.unwrap_or(defaults.octave),
        options.sign.unwrap_or(defaults.sign),
    )?;
    Ok(vec![notes.join(" ")])
}

fn run_scale(engine: &Engine, options: &Options, args: &[String]) -> Result<Vec<String>> {
    let spec = scale_spec(args, "scale")?;
    let defaults = engine.defaults();
    let notes = engine.scale(
        &spec,
        options.octave.unwrap_or(defaults.octave),
        options.sign.unwrap_or(defaults.sign),
    )?;
    Ok(vec![notes.join(" ")])
}

fn run_scale_chords(engine: &Engine, options: &Options, args: &[String]) -> Result<Vec<String>> {
    let spec = scale_spec(args, "scale-chords")?;
    let defaults = engine.defaults();
    let chord_options = ScaleChordOptions {
        octave: options.octave.unwrap_or(defaults.octave),
        sign: options.sign.unwrap_or(defaults.sign),
        size: options.size.unwrap_or(defaults.size),
    };

    let chords = engine.scale_chords_with(&spec, chord_options)?;
    Ok(chords.iter().map(|notes| notes.join(" ")).collect())
}

fn run_midi(args: &[String]) -> Result<Vec<String>> {
    if args.is_empty() {
        bail!("midi requires at least one pitch name");
    }
    let numbers = names_to_midi(args).context("Failed to convert pitch names")?;
    let numbers: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    Ok(vec![numbers.join(" ")])
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (options, positional) = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }

    let Some((command, rest)) = positional.split_first() else {
        println!("RAD - Chord and scale pitch calculator");
        println!("Run with --help for usage information");
        return Ok(());
    };

    init_logging(options.verbose);
    let engine = build_engine(&options)?;

    let lines = match command.as_str() {
        "chord" => run_chord(&engine, &options, rest)?,
        "scale" => run_scale(&engine, &options, rest)?,
        "scale-chords" => run_scale_chords(&engine, &options, rest)?,
        "midi" => run_midi(rest)?,
        "chord-types" => vec![engine.registry().chord_type_names().join(" ")],
        "scale-types" => vec![engine.registry().scale_type_names().join(" ")],
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
