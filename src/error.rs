/*!
Errors surfaced by the histogram pipeline
*/

use thiserror::Error;

/// Anything that can stop a run. Malformed input is never an error; it is dropped while decoding.
#[derive(Debug, Error)]
pub enum LethistError {
    /// `run` was called before an input was set
    #[error("no input found")]
    NoInput,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write report: {0}")]
    Report(#[from] csv::Error),
}
