//! Error types for packing and unpacking trace samples.

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use thiserror::Error;

use crate::samples::SampleKind;
use crate::types::EncodingFormat;

#[derive(Debug, Error)]
pub enum SegyError {
    #[error("{encoding} encoding cannot take {found} samples")]
    WrongInputType {
        encoding: EncodingFormat,
        found: SampleKind,
    },

    #[error("unsupported encoding format: {0}")]
    Unsupported(EncodingFormat),

    #[error("malformed input: expected {expected} bytes, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    #[error("value {value} cannot be represented as an IBM float")]
    IbmOutOfRange { value: f32 },

    #[error("unknown data sample format code: {0}")]
    UnknownFormatCode(u16),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SegyError>;

/// Warning raised when a lazily decoded file changed after its headers were read.
///
/// Decoding still proceeds; the samples may come from stale offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleSource {
    pub path: PathBuf,
    pub captured: SystemTime,
    pub current: SystemTime,
}

impl fmt::Display for StaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file '{}' changed since reading headers; data may be read incorrectly (modification time = {:?})",
            self.path.display(),
            self.current,
        )
    }
}
