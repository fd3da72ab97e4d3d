//! File system helpers for the application.
//!
//! This covers validating the trail file before anything else runs and
//! initializing the writer for the mountain details log. It uses macros from
//! the parent `app` module for verbose logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::{Path, PathBuf};

use super::error::AppError;
use super::verbose_eprintln;

/// Validates that the trail file exists, is a regular file, and can be opened
/// for reading.
///
/// # Arguments
/// * `trail_file_path` - A `PathBuf` to the trail file.
/// * `quiet_mode` - A boolean indicating whether to suppress verbose logging.
///
/// # Errors
/// Returns `AppError::General` if the path is missing, not a file, or not
/// readable.
pub fn validate_trail_file(trail_file_path: &PathBuf, quiet_mode: bool) -> Result<(), AppError> {
    if !trail_file_path.exists() {
        let error_msg = format!("the file {} does not exist", trail_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !trail_file_path.is_file() {
        let error_msg = format!("the path {} is not a file", trail_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    // Readability probe so permission problems surface here rather than
    // halfway through processing.
    if let Err(e) = File::open(trail_file_path) {
        let error_msg = format!(
            "the file {} cannot be opened for reading: {}",
            trail_file_path.display(),
            e
        );
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    Ok(())
}

/// Initializes and returns a `BufWriter<File>` for the mountain details log.
///
/// The file is created if it doesn't exist and truncated if it does, so each
/// run's log contains only the current execution.
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened or created.
pub fn init_details_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    // The writer is flushed explicitly by the orchestrator once processing
    // is done.
    Ok(BufWriter::new(file))
}
