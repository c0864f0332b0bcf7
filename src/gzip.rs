//! Gzip envelope reader (RFC 1952 subset).
//!
//! The header is parsed just far enough to recover the optional original
//! file name; the DEFLATE payload itself is handed to `flate2`. Supported
//! header shape: the 10 fixed bytes plus an optional NUL-terminated FNAME
//! field. Headers carrying an FEXTRA field are outside the subset — the name
//! is reported absent for those and decompression proceeds normally.

use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::DecodeError;

/// Gzip magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
/// Fixed header length before any optional fields.
pub const HEADER_LEN: usize = 10;
/// Offset of the FLG byte.
pub const FLG_OFFSET: usize = 3;
/// FLG bit: extra field present (unsupported here).
pub const FLG_FEXTRA: u8 = 0x04;
/// FLG bit: original file name present.
pub const FLG_FNAME: u8 = 0x08;

/// Check the two magic bytes.
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == GZIP_MAGIC[0] && data[1] == GZIP_MAGIC[1]
}

/// Extract the original file name stored in the gzip header, if any.
///
/// When the FNAME flag is set, the name is the NUL-terminated latin1 string
/// starting right after the fixed header. A header with no terminating NUL
/// before the buffer ends is malformed; the name is reported absent rather
/// than read past the end. Callers fall back to a name of their own (for
/// arXiv bundles, `<id>.tex`).
pub fn original_file_name(data: &[u8]) -> Option<String> {
    if !is_gzip(data) || data.len() < HEADER_LEN {
        return None;
    }
    let flg = data[FLG_OFFSET];
    if flg & FLG_FEXTRA != 0 {
        // FNAME would start after the extra field; out of the supported subset.
        return None;
    }
    if flg & FLG_FNAME == 0 {
        return None;
    }
    let tail = &data[HEADER_LEN..];
    let end = tail.iter().position(|&b| b == 0)?;
    if end == 0 {
        return None;
    }
    // latin1: each byte maps to the code point of the same value.
    Some(tail[..end].iter().map(|&b| b as char).collect())
}

/// Inflate a complete gzip stream into a fresh buffer.
///
/// A stream that is not well-formed gzip surfaces as [`DecodeError::Gzip`];
/// nothing is recovered from a partially corrupt stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(DecodeError::Gzip)?;
    Ok(decompressed)
}
