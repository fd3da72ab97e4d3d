//! Core pipeline steps of the application.
//!
//! This module loads rest-stop records from the trail file, builds the
//! mountain, logs its layout to the details log, replays every trail against
//! a fresh hiker, and formats the feasible descents for output.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::hiker::Hiker;
use crate::mountain::{Mountain, Stop, TrailRun};
use crate::stop_loader;

/// Loads rest-stop records from the trail file.
///
/// # Arguments
/// * `trail_file_path` - Path to the trail file.
/// * `quiet_mode` - Suppresses verbose logging if true.
///
/// # Returns
/// A `Result` containing the parsed stops on success, or an `AppError` on
/// failure (invalid path, unreadable file, no stops present).
pub fn load_stops_from_file(
    trail_file_path: &PathBuf,
    quiet_mode: bool,
) -> Result<Vec<Stop>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading rest stops from file...");
    let trail_file_str = trail_file_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(trail_file_path.display().to_string()))?;

    let stops = stop_loader::load_stops_from_file(trail_file_str)?;
    verbose_println!(quiet_mode, "   => Found {} rest stop(s).", stops.len());
    Ok(stops)
}

/// Builds the mountain from the loaded stops and surveys every trail.
///
/// This involves:
/// 1. Inserting the stops in file order (the order decides the tree shape).
/// 2. Replaying each root-to-leaf trail against a fresh hiker ledger.
/// 3. Logging the layout and per-trail verdicts to the details log.
/// 4. Formatting the feasible trails as printable lines.
///
/// # Returns
/// The printable output lines, one per feasible trail, in discovery order.
pub fn process_mountain(
    stops: Vec<Stop>,
    quiet_mode: bool,
    details_writer: &mut BufWriter<File>,
) -> Result<Vec<String>, AppError> {
    verbose_println!(quiet_mode, "[STEP 2] Building the mountain...");
    let mountain = Mountain::new(stops);
    verbose_println!(
        quiet_mode,
        "   => {} stop(s), height counter {}.",
        mountain.len(),
        mountain.height()
    );

    verbose_println!(quiet_mode, "[STEP 3] Surveying trails...");
    let mut hiker = Hiker::new();
    let runs = mountain.survey(&mut hiker);
    verbose_println!(quiet_mode, "   => Found {} trail(s).", runs.len());
    print_survey_summary(&runs, quiet_mode);

    if !quiet_mode {
        verbose_println!(
            quiet_mode,
            "   => Logging mountain details to mountain_details.log..."
        );
        if let Err(e) = mountain.write_report(&runs, details_writer) {
            verbose_eprintln!(
                quiet_mode,
                "   [ERROR] Failed to write mountain details: {}",
                e
            );
            // Details logging is non-critical; the survey results stand.
        }
    }

    let lines = runs
        .iter()
        .filter(|run| run.feasible)
        .map(TrailRun::display_line)
        .collect();
    Ok(lines)
}

/// Prints a summary of the trail survey to the verbose log.
/// This function is only active if `quiet_mode` is false.
fn print_survey_summary(runs: &[TrailRun<'_>], quiet_mode: bool) {
    if quiet_mode {
        return;
    }

    verbose_println!(quiet_mode, "   Trail Survey Summary:");
    for run in runs {
        let status = if run.feasible {
            "✅ Feasible"
        } else {
            "❌ Infeasible"
        };
        verbose_println!(
            quiet_mode,
            "     Trail {}: {} -> {}",
            run.trail_index,
            run.display_line(),
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::file_handler;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn pipeline_prints_only_feasible_trails() {
        let mut trail_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(trail_file, "B food food").unwrap();
        writeln!(trail_file, "A").unwrap();
        writeln!(trail_file, "C").unwrap();
        writeln!(trail_file, "D").unwrap();
        trail_file.flush().unwrap();

        let stops = load_stops_from_file(&trail_file.path().to_path_buf(), true).unwrap();
        assert_eq!(stops.len(), 4);

        let details_file = tempfile::NamedTempFile::new().unwrap();
        let mut details_writer = file_handler::init_details_log_writer(details_file.path()).unwrap();
        let lines = process_mountain(stops, true, &mut details_writer).unwrap();

        // The trail over A stops two levels down a height-3 mountain and is
        // dropped; the full-depth trail over C and D survives.
        assert_eq!(lines, vec!["B C D".to_string()]);
    }

    #[test]
    fn pipeline_surfaces_loader_errors() {
        let missing = PathBuf::from("definitely/not/here.txt");
        let result = load_stops_from_file(&missing, true);
        assert!(matches!(result, Err(AppError::StopLoad(_))));
    }
}
