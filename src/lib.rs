//! Rollqr library crate
//!
//! This crate provides the core functionality for the `rollqr` CLI. It is
//! organized into small modules: `roster` (CSV ingestion and row validation),
//! `payload` (QR payload formatting), and `qr` (QR rendering and PNG
//! persistence). The binary `src/main.rs` calls `rollqr_lib::run()` to
//! execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `generate_batch()` — the full roster-to-images pipeline, usable without
//!   the CLI (integration tests drive this directly).
//!
//! See each module for detailed documentation on functions and behavior.

pub mod payload;
pub mod qr;
pub mod roster;

use std::fs;
use std::path::Path;

use clap::Parser;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV roster file with a header row
    #[arg(long = "input", default_value = "roll.csv")]
    input: String,

    /// Directory the PNG files are written to (created if missing)
    #[arg(long = "output-dir", default_value = "qr_codes")]
    output_dir: String,

    /// Header name of the roll number column
    #[arg(long = "roll-column", default_value = "roll_no")]
    roll_column: String,

    /// Header name of the student name column
    #[arg(long = "name-column", default_value = "name")]
    name_column: String,
}

/// Run the rollqr CLI.
///
/// This function is the high-level entrypoint used by the `rollqr` binary. It
/// parses CLI arguments and runs the batch pipeline. Every option defaults to
/// the conventional fixed path or column name, so a bare `rollqr` invocation
/// reads `roll.csv` and fills `qr_codes/`.
///
/// Errors are printed to stderr and cause the process to exit with a non-zero
/// code. Rows with a blank roll or name are skipped silently; everything else
/// that goes wrong (unreadable input, missing column, oversized payload,
/// write failure) is fatal.
pub fn run() {
    let cli = Cli::parse();

    generate_batch(&cli.input, &cli.output_dir, &cli.roll_column, &cli.name_column)
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    println!("All QR codes generated successfully.");
}

/// Generate one QR code image per valid roster row.
///
/// Parameters
/// - `input`: path of the CSV roster (header row required).
/// - `output_dir`: directory for the PNG files; created if absent.
/// - `roll_column` / `name_column`: header names of the two required columns.
///
/// Behavior
/// - Rows where either value is empty after trimming are skipped with no
///   output and no error.
/// - The file for a roll is `<output_dir>/<roll>.png`; a duplicate roll later
///   in the file overwrites the earlier image (last write wins).
/// - Prints one `Generated QR for <roll> - <name>` line per image written.
///
/// Returns
/// - `Ok(count)` with the number of images written.
/// - `Err(String)` on the first fatal error (unreadable input, missing
///   column, payload over the symbol capacity, filesystem write failure).
pub fn generate_batch(
    input: &str,
    output_dir: &str,
    roll_column: &str,
    name_column: &str,
) -> Result<usize, String> {
    let out_dir = Path::new(output_dir);
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("failed to create output directory {}: {}", output_dir, e))?;

    let entries = roster::load_roster(Path::new(input), roll_column, name_column)?;

    for entry in &entries {
        let data = payload::format_payload(&entry.roll, &entry.name);
        qr::write_code(out_dir, &entry.roll, &data)?;
        println!("Generated QR for {} - {}", entry.roll, entry.name);
    }

    Ok(entries.len())
}
