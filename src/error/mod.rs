use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type PaletteResult<T> = std::result::Result<T, PaletteError>;

/// Fatal palette failures. Malformed individual role/swatch entries are
/// dropped during parsing and never surface here; only a missing or unusable
/// document does.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("missing palette file: {path}")]
    MissingFile { path: PathBuf },
    #[error("failed to read palette file: {path}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("invalid palette JSON: {path}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("palette JSON missing '{0}' array")]
    MissingArray(&'static str),
    #[error("no {0} defined in palette payload")]
    EmptySection(&'static str),
    #[error("{0} role missing from palette")]
    MissingRole(String),
    #[error("palette does not define any swatches")]
    NoSwatches,
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
}
