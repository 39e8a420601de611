use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sgntrace operations.
///
/// Decode-run terminations (unknown opcode, truncated record, bounds
/// rejection) are deliberately not represented here: they end a
/// [`DecodeRun`](crate::format::DecodeRun) via its
/// [`StopReason`](crate::format::StopReason) and never unwind past the
/// decoder.
#[derive(Debug, Error)]
pub enum SgnError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("read of 4 bytes at offset {offset} exceeds buffer length {len}")]
    OutOfBounds { offset: usize, len: usize },

    #[error("no candidate command stream found in {}", path.display())]
    NoCandidateFound { path: PathBuf },

    #[error("invalid bounds '{0}' (expected XMIN,XMAX,YMIN,YMAX)")]
    InvalidBounds(String),

    #[error("invalid canvas '{0}' (expected WIDTHxHEIGHT)")]
    InvalidCanvas(String),

    #[error("failed to render JSON report: {0}")]
    ReportJson(#[from] serde_json::Error),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}
