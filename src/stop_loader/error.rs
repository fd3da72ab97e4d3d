use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for trail-file loading operations.
#[derive(Error, Debug)]
pub enum StopLoaderError {
    /// Error when reading the trail file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the file contains no usable rest-stop rows.
    #[error("No rest stops found in file '{0}'")]
    NoStops(String),
}
