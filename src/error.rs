use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a cover-page run.
///
/// The batch does not isolate files: the first of these aborts the run.
#[derive(Error, Debug)]
pub enum CoverError {
    #[error("failed to open PDF {}: {reason}", path.display())]
    DocumentOpen { path: PathBuf, reason: String },

    #[error("PDF {} has no pages", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("failed to render first page of {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },

    #[error("failed to {action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no image encoder for extension {0:?}")]
    UnsupportedFormat(String),

    #[error("PDFium library not available: {0}")]
    LibraryUnavailable(String),
}

impl CoverError {
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}
