use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("quote file is empty: {}", .path.display())]
    Empty { path: PathBuf },

    #[error("failed to read quote file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl QuoteError {
    /// Expected failures get a short message; only `Io` carries a cause chain worth printing.
    pub fn is_expected(&self) -> bool {
        !matches!(self, QuoteError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
