//! Main application orchestrator.
//!
//! Coordinates the whole run:
//! 1. Initializes logging (unless in quiet mode).
//! 2. Validates the trail file.
//! 3. Loads the rest-stop records.
//! 4. Initializes a writer for the mountain details log.
//! 5. Delegates to `processing::process_mountain`, which builds the tree,
//!    surveys every root-to-leaf trail against a fresh hiker, and returns the
//!    printable lines for the feasible descents.
//! 6. Prints the surviving trails to stdout; they are the program's output
//!    and appear in quiet mode too.
//! 7. Flushes logs before returning.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use std::io::Write;
use std::path::Path;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Arguments
/// * `cli` - The `Cli` struct containing parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if any unrecoverable error occurs, such as a missing or
/// unreadable trail file, a file with no rest stops, or critical I/O
/// failures. Feasibility failures are not errors; infeasible trails are
/// simply omitted from the output.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let trail_file_path = &cli.trail_file;
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode. This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("trailgen.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (trailgen.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to trailgen.log");
            if let Err(e) = logger::flush_global_logger() {
                verbose_eprintln!(
                    quiet_mode,
                    "[WARNING] Failed to flush trailgen.log after initialization: {}",
                    e
                );
            }
        }
    }

    // Validate the trail file. This is an early check.
    file_handler::validate_trail_file(trail_file_path, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(
        quiet_mode,
        "Processing File: {}",
        trail_file_path.display()
    );
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    // Load all rest-stop records from the trail file.
    let stops = processing::load_stops_from_file(trail_file_path, quiet_mode)?;

    // Initialize the mountain details log writer.
    let details_log_path = Path::new("mountain_details.log");
    let mut details_writer =
        file_handler::init_details_log_writer(details_log_path).map_err(|e| {
            verbose_eprintln!(
                quiet_mode,
                "[ERROR] Failed to open mountain details log (mountain_details.log): {}.",
                e
            );
            AppError::Io(e)
        })?;

    let trail_lines = processing::process_mountain(stops, quiet_mode, &mut details_writer)?;

    // Explicitly flush the details writer once processing is done.
    if let Err(e) = details_writer.flush() {
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] Failed to flush mountain details log (mountain_details.log): {}. Some data might be lost.",
            e
        );
    }

    // The surviving trails are the program's product; they always go to
    // stdout, one trail per line, in discovery order.
    for line in &trail_lines {
        println!("{}", line);
    }

    if !quiet_mode {
        if trail_lines.is_empty() {
            verbose_println!(
                quiet_mode,
                "\n[INFO] No feasible trails found in {}.",
                trail_file_path.display()
            );
        } else {
            verbose_println!(
                quiet_mode,
                "\n[INFO] {} feasible trail(s) printed.",
                trail_lines.len()
            );
        }
        // Final flush of trailgen.log before exiting successfully.
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of trailgen.log: {}",
                e
            );
        }
    }

    Ok(())
}
