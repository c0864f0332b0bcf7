//! Decode failure taxonomy.
//!
//! Structural failures (the container itself cannot be parsed) surface as a
//! [`DecodeError`] and abort the whole decode. Anomalies inside an otherwise
//! valid archive (a bad octal size field, an unreadable zip entry) are
//! tolerated locally by the parsers and never reach this type.

use thiserror::Error;

/// Failure decoding a fetched source bundle.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload declared itself gzip but did not decompress.
    #[error("gzip decompression failed: {0}")]
    Gzip(#[source] std::io::Error),

    /// The zip reader rejected the archive structure.
    #[error("zip archive could not be read: {0}")]
    Zip(#[from] ::zip::result::ZipError),
}
