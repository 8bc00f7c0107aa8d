//! Error types for BSP header and lump decoding

use thiserror::Error;

/// Errors that can occur when decoding a BSP header or reading lump data
#[derive(Debug, Error)]
pub enum BspError {
    /// Identifier does not match the `VBSP` magic
    #[error("Invalid BSP identifier: expected 0x50534256 ('VBSP'), got {0:#010x}")]
    InvalidFormat(i32),

    /// Lump index outside of the directory
    #[error("Lump index {0} out of range: must be 0..=63")]
    OutOfRange(i64),

    /// The byte source ran out of data mid-read
    #[error("Truncated data: source ended while reading {field}")]
    Truncated {
        /// Field or record that could not be read in full
        field: &'static str,
    },

    /// Lump name not recognised
    #[error("Unknown lump name: {0}")]
    UnknownLump(String),

    /// Directory entry cannot address a byte range
    #[error("Invalid lump bounds: offset {offset}, length {length}")]
    InvalidLump {
        /// Entry file offset
        offset: i32,
        /// Entry file length
        length: i32,
    },

    /// Binary parsing error reported by binrw
    #[error("Binary parsing error: {0}")]
    BinRead(String),

    /// IO error from the underlying byte source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BspError {
    /// Whether this error means the source ended early
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }

    /// Whether this error means the identifier was wrong
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Map an IO error from a fixed-size read, turning end-of-data into `Truncated`
    pub(crate) fn from_read(err: std::io::Error, field: &'static str) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::Truncated { field }
        } else {
            Self::Io(err)
        }
    }
}

impl From<binrw::Error> for BspError {
    fn from(e: binrw::Error) -> Self {
        match e {
            binrw::Error::Custom { err, .. } => match err.downcast::<Self>() {
                Ok(inner) => *inner,
                Err(other) => Self::BinRead(other.to_string()),
            },
            binrw::Error::Io(io) => Self::from_read(io, "binary record"),
            binrw::Error::Backtrace(bt) => Self::from(*bt.error),
            other => Self::BinRead(other.to_string()),
        }
    }
}

/// Result type alias for BSP operations
pub type Result<T> = std::result::Result<T, BspError>;
