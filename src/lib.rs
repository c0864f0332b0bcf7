//! Decode arXiv source bundles and extract LaTeX comment lines.
//!
//! An arXiv `e-print` download arrives as raw bytes plus a declared MIME
//! content-type, and may be a gzip-wrapped tar bundle, a gzip-wrapped single
//! TeX file, a zip archive, a bare text file, or a PDF (no source at all).
//! This crate dispatches on the declared type plus a `ustar` magic probe,
//! unpacks the archive with its own minimal tar reader (zip is delegated to
//! the `zip` crate, inflate to `flate2`), and pulls the `%`-prefixed comment
//! lines out of every TeX entry.
//!
//! # Usage
//!
//! ## Extracting comments from a fetched bundle
//!
//! ```rust
//! use texgleaner::{extract_comment_blocks, Extraction};
//!
//! // A bare TeX payload, as served without any archive wrapping.
//! let bytes = b"%% review notes\n\\documentclass{article}";
//! match extract_comment_blocks(bytes, "text/plain", "2312.08472.tex").unwrap() {
//!     Extraction::Blocks(blocks) => {
//!         assert_eq!(blocks[0].comments.as_deref(), Some("%% review notes"));
//!     }
//!     Extraction::Unavailable => unreachable!("not a PDF"),
//! }
//! ```
//!
//! ## Low-level archive access
//!
//! ```rust
//! use texgleaner::tar::read_tar;
//!
//! let entries = read_tar(&[0u8; 1024]); // empty archive
//! assert!(entries.is_empty());
//! ```

pub mod arxiv;
pub mod comments;
pub mod decode;
pub mod error;
mod field;
pub mod gzip;
pub mod tar;
#[cfg(test)]
mod testutil;
pub mod zip;

use std::collections::BTreeMap;

pub use comments::extract_comments;
pub use decode::{decode_source, DecodedSource, SOURCE_UNAVAILABLE};
pub use error::DecodeError;
pub use tar::read_tar;
pub use self::zip::read_zip;

/// Entry name to content bytes, one archive's worth.
///
/// Names are normalized (NUL padding stripped, trimmed); duplicates within
/// one archive overwrite, last seen wins. The ordered map keeps display
/// output deterministic.
pub type ArchiveMap = BTreeMap<String, Vec<u8>>;

/// Entry-name suffix selecting source-text files from a decoded bundle.
pub const TEX_SUFFIX: &str = ".tex";

/// Comment lines extracted from one named source file.
#[derive(Debug, PartialEq, Eq)]
pub struct CommentBlock {
    pub name: String,
    /// `None` means the file had no comment lines at all, which readers
    /// should report as such rather than show an empty block.
    pub comments: Option<String>,
}

/// Result of running the whole pipeline on one fetched resource.
#[derive(Debug)]
pub enum Extraction {
    /// The paper only exists as a PDF; see [`SOURCE_UNAVAILABLE`].
    Unavailable,
    /// Comment blocks for each matched source file. An empty list is a
    /// valid outcome (the bundle held no `.tex` entries), not a failure.
    Blocks(Vec<CommentBlock>),
}

/// Decode a fetched resource and extract comments from its TeX sources.
///
/// Bundles (tar or zip) are filtered to entries named `*.tex`; a single
/// decoded file is kept whatever its name, since arXiv serves lone TeX files
/// without a meaningful name to filter on. `fallback_name` is used when a
/// gzip header carries no original file name.
pub fn extract_comment_blocks(
    data: &[u8],
    content_type: &str,
    fallback_name: &str,
) -> Result<Extraction, DecodeError> {
    let blocks = match decode_source(data, content_type, fallback_name)? {
        DecodedSource::Unavailable => return Ok(Extraction::Unavailable),
        DecodedSource::SingleFile { name, data } => {
            let text = String::from_utf8_lossy(&data);
            vec![CommentBlock {
                name,
                comments: extract_comments(&text),
            }]
        }
        DecodedSource::Bundle(entries) => entries
            .iter()
            .filter(|(name, _)| name.ends_with(TEX_SUFFIX))
            .map(|(name, content)| {
                let text = String::from_utf8_lossy(content);
                CommentBlock {
                    name: name.clone(),
                    comments: extract_comments(&text),
                }
            })
            .collect(),
    };
    Ok(Extraction::Blocks(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{gzip_bytes, tar_archive, zip_bytes};

    fn blocks(extraction: Extraction) -> Vec<CommentBlock> {
        match extraction {
            Extraction::Blocks(b) => b,
            Extraction::Unavailable => panic!("expected blocks"),
        }
    }

    #[test]
    fn pdf_reports_source_unavailable() {
        let out = extract_comment_blocks(b"%PDF-1.5", "application/pdf", "x.tex").unwrap();
        assert!(matches!(out, Extraction::Unavailable));
    }

    #[test]
    fn zip_bundle_filters_to_tex_entries() {
        let data = zip_bytes(&[("paper.tex", b"%c1\ntext\n%c2"), ("readme.md", b"# no")]);
        let blocks = blocks(extract_comment_blocks(&data, "application/zip", "x.tex").unwrap());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "paper.tex");
        assert_eq!(blocks[0].comments.as_deref(), Some("%c1\n%c2"));
    }

    #[test]
    fn gzipped_tar_bundle_yields_one_block_per_tex_file() {
        let tar = tar_archive(&[
            ("main.tex", b"%intro\n\\section{A}"),
            ("appendix.tex", b"no comments"),
            ("plot.dat", b"%not tex, excluded"),
        ]);
        let data = gzip_bytes(&tar, None);
        let blocks = blocks(extract_comment_blocks(&data, "application/gzip", "f.tex").unwrap());
        assert_eq!(blocks.len(), 2);
        // BTreeMap order: appendix.tex before main.tex.
        assert_eq!(blocks[0].name, "appendix.tex");
        assert_eq!(blocks[0].comments, None);
        assert_eq!(blocks[1].name, "main.tex");
        assert_eq!(blocks[1].comments.as_deref(), Some("%intro"));
    }

    #[test]
    fn gzipped_single_file_keeps_header_name_without_filtering() {
        let data = gzip_bytes(b"%only\ntext", Some("notes.txt"));
        let blocks = blocks(extract_comment_blocks(&data, "application/gzip", "f.tex").unwrap());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "notes.txt");
        assert_eq!(blocks[0].comments.as_deref(), Some("%only"));
    }

    #[test]
    fn bundle_without_tex_entries_is_empty_not_an_error() {
        let data = zip_bytes(&[("readme.md", b"hello")]);
        let blocks = blocks(extract_comment_blocks(&data, "application/zip", "x.tex").unwrap());
        assert!(blocks.is_empty());
    }
}
