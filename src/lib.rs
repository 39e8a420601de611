//! Sgntrace: format recovery and decoding for SGN vector binaries.
//!
//! SGN files carry outline/path data (vector logos, glyph-like artwork)
//! in an undocumented binary layout: an unknown-length header followed
//! by `[opcode][operand]` drawing records. Sgntrace locates the command
//! stream inside a raw file, decodes it into typed drawing commands, and
//! serializes the result as an EPS path program. It also ships the
//! empirical tooling that made the format legible in the first place:
//! a bounds-validated offset scanner and a correlator that maps
//! known-good coordinates from a reference drawing back to raw byte
//! offsets.
//!
//! # Modules
//!
//! - [`format`]: Core types (Coord, Command, DecodeRun, FormatProfile)
//! - [`decode`]: Command-stream decoders (plain and bounds-validated)
//! - [`locate`]: Stream-start search strategies
//! - [`correlate`]: Ground-truth coordinate-to-offset correlation
//! - [`eps`]: EPS path output and reference-drawing coordinate extraction
//! - [`error`]: Error types for sgntrace operations

pub mod correlate;
pub mod decode;
pub mod eps;
pub mod error;
pub mod format;
pub mod locate;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::SgnError;

use eps::Canvas;
use format::{Bounds, Endian, FormatProfile};

/// The sgntrace CLI application.
#[derive(Parser)]
#[command(name = "sgntrace")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Locate and decode the command stream of an SGN file, writing EPS.
    Convert(ConvertArgs),
    /// Scan every offset for plausible stream starts.
    Scan(ScanArgs),
    /// Match reference-drawing coordinates back to raw byte offsets.
    Correlate(CorrelateArgs),
    /// Decode from a fixed offset and print the commands.
    Dump(DumpArgs),
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Input SGN file.
    input: PathBuf,

    /// Output EPS file.
    output: PathBuf,

    /// Decode from this byte offset instead of searching for one.
    #[arg(long)]
    offset: Option<usize>,

    /// Location strategy ('first-move-to' or 'longest-run').
    #[arg(long, default_value = "first-move-to")]
    strategy: String,

    /// Operand byte order ('little' or 'big').
    #[arg(long, default_value = "little")]
    endian: String,

    /// Output canvas as WIDTHxHEIGHT.
    #[arg(long, default_value = "600x600")]
    canvas: String,

    /// Plausible coordinate bounds as XMIN,XMAX,YMIN,YMAX.
    #[arg(long, default_value = "0,591,0,392")]
    bounds: String,

    /// Print the detected offset and a byte snippet around it.
    #[arg(long)]
    verbose: bool,
}

/// Arguments for the scan subcommand.
#[derive(clap::Args)]
struct ScanArgs {
    /// Input SGN file.
    input: PathBuf,

    /// Minimum consecutive validated commands for a candidate.
    #[arg(long, default_value_t = 5)]
    min_run: usize,

    /// Maximum number of candidates to report.
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Plausible coordinate bounds as XMIN,XMAX,YMIN,YMAX.
    #[arg(long, default_value = "0,591,0,392")]
    bounds: String,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the correlate subcommand.
#[derive(clap::Args)]
struct CorrelateArgs {
    /// Input SGN file.
    input: PathBuf,

    /// Reference drawing (EPS-vocabulary path program).
    reference: PathBuf,

    /// Operand byte order to encode lookup patterns with.
    #[arg(long, default_value = "little")]
    endian: String,

    /// Maximum example offsets listed per coordinate in text output.
    #[arg(long, default_value_t = 5)]
    max_examples: usize,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the dump subcommand.
#[derive(clap::Args)]
struct DumpArgs {
    /// Input SGN file.
    input: PathBuf,

    /// Bytes to skip before decoding.
    #[arg(long, default_value_t = 0)]
    header_size: usize,

    /// Operand byte order ('little' or 'big').
    #[arg(long, default_value = "little")]
    endian: String,

    /// Number of leading commands to print.
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

/// Run the sgntrace CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SgnError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Scan(args)) => run_scan(args),
        Some(Commands::Correlate(args)) => run_correlate(args),
        Some(Commands::Dump(args)) => run_dump(args),
        None => {
            // No subcommand: just print a usage hint and exit successfully
            println!("sgntrace {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("SGN vector stream recovery and EPS conversion.");
            println!();
            println!("Run 'sgntrace --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), SgnError> {
    let blob = fs::read(&args.input)?;
    let canvas: Canvas = args.canvas.parse()?;
    let bounds: Bounds = args.bounds.parse()?;
    let profile = FormatProfile::default().with_endian(parse_endian(&args.endian)?);

    let offset = match args.offset {
        Some(offset) => {
            if offset > blob.len() {
                return Err(SgnError::OutOfBounds {
                    offset,
                    len: blob.len(),
                });
            }
            offset
        }
        None => locate_stream(&blob, &profile, &bounds, &args.strategy)?
            .ok_or_else(|| SgnError::NoCandidateFound {
                path: args.input.clone(),
            })?,
    };

    if args.verbose {
        println!(
            "Detected stream start 0x{:02X} at byte offset {}",
            blob.get(offset).copied().unwrap_or(0),
            offset
        );
        println!("Byte snippet around start: {}", hex_snippet(&blob, offset));
    }

    let run = decode::decode_commands(&blob[offset..], &profile);
    if args.verbose {
        println!("Parsed {} command(s), stop: {:?}", run.len(), run.stop);
    }

    fs::write(&args.output, eps::write_eps(&run.commands, canvas))?;
    println!(
        "Wrote {} command(s) to {}",
        run.len(),
        args.output.display()
    );
    Ok(())
}

/// Execute the scan subcommand.
fn run_scan(args: ScanArgs) -> Result<(), SgnError> {
    let blob = fs::read(&args.input)?;
    let bounds: Bounds = args.bounds.parse()?;
    let opts = locate::ScanOptions {
        min_run: args.min_run,
        limit: args.limit,
    };

    let report = locate::scan_validated(&blob, &FormatProfile::default(), &bounds, &opts);

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print!("{}", report),
        other => {
            return Err(SgnError::Unsupported(format!(
                "output '{}' (supported: text, json)",
                other
            )));
        }
    }
    Ok(())
}

/// Execute the correlate subcommand.
fn run_correlate(args: CorrelateArgs) -> Result<(), SgnError> {
    let blob = fs::read(&args.input)?;
    let reference = fs::read_to_string(&args.reference)?;
    let endian = parse_endian(&args.endian)?;

    let coords = eps::parse_reference_coords(&reference);
    let report = correlate::correlate(&blob, &coords, endian);

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print!("{}", report.display_with(args.max_examples)),
        other => {
            return Err(SgnError::Unsupported(format!(
                "output '{}' (supported: text, json)",
                other
            )));
        }
    }
    Ok(())
}

/// Execute the dump subcommand.
fn run_dump(args: DumpArgs) -> Result<(), SgnError> {
    let blob = fs::read(&args.input)?;
    let profile = FormatProfile::default().with_endian(parse_endian(&args.endian)?);

    let stream = blob
        .get(args.header_size..)
        .ok_or(SgnError::OutOfBounds {
            offset: args.header_size,
            len: blob.len(),
        })?;
    let run = decode::decode_commands(stream, &profile);

    println!("Total commands parsed: {}", run.len());
    match decode::coord_ranges(&run.commands) {
        Some(ranges) => {
            println!("X range: {} ... {}", ranges.x_min, ranges.x_max);
            println!("Y range: {} ... {}", ranges.y_min, ranges.y_max);
        }
        None => println!("No move/line coordinates decoded"),
    }

    println!();
    println!("First {} command(s):", args.limit.min(run.len()));
    for command in run.commands.iter().take(args.limit) {
        println!("  {:?}", command);
    }
    Ok(())
}

/// Picks a stream offset with the named strategy, or reports the
/// strategy string as unsupported.
fn locate_stream(
    blob: &[u8],
    profile: &FormatProfile,
    bounds: &Bounds,
    strategy: &str,
) -> Result<Option<usize>, SgnError> {
    match strategy {
        // the cheap heuristic, falling back to the first recognized byte
        "first-move-to" => Ok(locate::first_move_to(blob, profile, bounds)
            .or_else(|| locate::first_opcode(blob, profile))),
        "longest-run" => Ok(locate::longest_run(blob, profile).map(|(offset, _)| offset)),
        other => Err(SgnError::Unsupported(format!(
            "strategy '{}' (supported: first-move-to, longest-run)",
            other
        ))),
    }
}

fn parse_endian(value: &str) -> Result<Endian, SgnError> {
    match value {
        "little" | "le" => Ok(Endian::Little),
        "big" | "be" => Ok(Endian::Big),
        other => Err(SgnError::Unsupported(format!(
            "endian '{}' (supported: little, big)",
            other
        ))),
    }
}

/// Hex dump of up to 24 bytes starting 8 before `offset`, matching the
/// window a human checks when confirming a detected stream start.
fn hex_snippet(blob: &[u8], offset: usize) -> String {
    let start = offset.saturating_sub(8);
    blob[start..]
        .iter()
        .take(24)
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}
