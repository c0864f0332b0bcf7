//! Format dispatch for fetched source bundles.
//!
//! One decision per fetched resource: given the raw bytes and the declared
//! MIME content-type, pick the decode path. The declared type alone cannot
//! tell a gzip-wrapped tar bundle from a gzip-wrapped single TeX file —
//! arXiv serves both as `application/gzip` — so the `ustar` magic probe on
//! the decompressed buffer is mandatory, not an optimization.

use crate::error::DecodeError;
use crate::{gzip, tar, zip, ArchiveMap};

/// Content-type of a PDF-only paper: no source bundle exists.
pub const PDF_TYPE: &str = "application/pdf";
/// Content-type substring selecting the gzip path.
pub const GZIP_TYPE: &str = "application/gzip";
/// Content-type substring selecting the zip path.
pub const ZIP_TYPE: &str = "application/zip";

/// Display name for a bare text payload with no archive wrapping at all.
pub const PLAIN_TEXT_NAME: &str = "Main LaTeX File";

/// Message shown when the paper only exists as a PDF.
pub const SOURCE_UNAVAILABLE: &str =
    "The download is a PDF document. The LaTeX source is not available for this paper.";

/// Outcome of dispatching one fetched resource.
#[derive(Debug)]
pub enum DecodedSource {
    /// PDF payload: terminal state, no entries to show.
    Unavailable,
    /// A single source-text file, either gzip-unwrapped or taken verbatim.
    SingleFile { name: String, data: Vec<u8> },
    /// A tar or zip bundle of named entries.
    Bundle(ArchiveMap),
}

/// Decode a fetched byte buffer according to its declared content-type.
///
/// `fallback_name` names a gzip-wrapped single file whose header carries no
/// original file name (callers pass `"<id>.tex"`).
///
/// Structural failures (bad gzip stream, rejected zip) bubble up as
/// [`DecodeError`]; the PDF case is a state, not an error.
pub fn decode_source(
    data: &[u8],
    content_type: &str,
    fallback_name: &str,
) -> Result<DecodedSource, DecodeError> {
    if content_type == PDF_TYPE {
        log::debug!("detected PDF payload, no source available");
        return Ok(DecodedSource::Unavailable);
    }

    if content_type.contains(GZIP_TYPE) {
        // Read the header name before inflating; it is lost afterwards.
        let name = gzip::original_file_name(data)
            .unwrap_or_else(|| fallback_name.to_string());
        let decompressed = gzip::decompress(data)?;

        if tar::is_ustar(&decompressed) {
            log::debug!("detected tar archive inside gzip");
            return Ok(DecodedSource::Bundle(tar::read_tar(&decompressed)));
        }
        log::debug!("detected plain file inside gzip, named {name:?}");
        return Ok(DecodedSource::SingleFile {
            name,
            data: decompressed,
        });
    }

    if content_type.contains(ZIP_TYPE) {
        log::debug!("detected zip archive");
        return Ok(DecodedSource::Bundle(zip::read_zip(data)?));
    }

    log::debug!("no archive content-type, treating payload as plain text");
    Ok(DecodedSource::SingleFile {
        name: PLAIN_TEXT_NAME.to_string(),
        data: data.to_vec(),
    })
}
