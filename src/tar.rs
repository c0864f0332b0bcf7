//! Minimal tar archive reader over an in-memory byte buffer.
//!
//! Only the two header fields the decode pipeline needs are parsed: the
//! entry name and the octal size. Mode, mtime, checksum, typeflag and the
//! rest of the USTAR layout are ignored; no checksum validation is performed,
//! so a corrupted header that still decodes to a plausible name and size is
//! accepted. The `ustar` magic is likewise not validated per header (a v7 tar
//! with the same field offsets parses identically) — the magic is read once
//! by the format dispatcher as a whole-buffer probe, see [`is_ustar`].
//!
//! # Usage
//!
//! ```rust
//! use texgleaner::tar::read_tar;
//!
//! let tar_data: &[u8] = &[0u8; 1024]; // two zero blocks: an empty archive
//! let entries = read_tar(tar_data);
//! assert!(entries.is_empty());
//! ```

use std::ops::Range;

use crate::field::{field_octal_u64, field_str};
use crate::ArchiveMap;

/// Tar records are aligned to 512-byte blocks.
pub const BLOCK_LEN: usize = 512;
/// Entry name: NUL-padded text.
pub const NAME_FIELD: Range<usize> = 0..100;
/// Entry size: octal ASCII.
pub const SIZE_FIELD: Range<usize> = 124..136;
/// `ustar` magic marker. Read by the dispatcher's format probe only.
pub const MAGIC_FIELD: Range<usize> = 257..262;

/// The header fields read while scanning an archive.
#[derive(Debug)]
pub struct TarHeader {
    pub name: String,
    pub size: u64,
}

impl TarHeader {
    /// Parse the name and size fields from a header block.
    pub fn from_block(block: &[u8]) -> Self {
        Self {
            name: field_str(block, NAME_FIELD),
            size: field_octal_u64(block, SIZE_FIELD),
        }
    }
}

/// Probe a buffer for the `ustar` magic at its fixed header offset.
///
/// This is how a gzip-wrapped tar bundle is told apart from a gzip-wrapped
/// single text file; the declared MIME type is the same for both.
pub fn is_ustar(data: &[u8]) -> bool {
    data.len() >= MAGIC_FIELD.end && &data[MAGIC_FIELD] == b"ustar"
}

/// Read a tar archive into a name-to-content map.
///
/// The cursor walks 512-byte header blocks from offset 0:
/// - an all-zero block ends the archive immediately, regardless of what
///   follows (one or two terminator blocks are both tolerated);
/// - an entry with a non-empty name and a positive size contributes its
///   content and advances past the padding to the next block boundary;
/// - anything else (directory markers, metadata records, headers whose size
///   field did not parse) advances by exactly one block.
///
/// Duplicate names overwrite: last seen wins. A header whose declared size
/// runs past the end of the buffer stops the scan; entries read so far are
/// kept.
pub fn read_tar(data: &[u8]) -> ArchiveMap {
    let mut entries = ArchiveMap::new();
    let mut offset = 0;
    while offset + BLOCK_LEN <= data.len() {
        let block = &data[offset..offset + BLOCK_LEN];

        if is_empty_block(block) {
            break;
        }

        let header = TarHeader::from_block(block);
        let size = header.size as usize;

        if !header.name.is_empty() && size > 0 {
            let content_start = offset + BLOCK_LEN;
            let content_end = match content_start.checked_add(size) {
                Some(end) if end <= data.len() => end,
                _ => break, // truncated archive
            };
            entries.insert(header.name, data[content_start..content_end].to_vec());

            // Advance past the content and its padding to the next block
            // boundary. A size that is already block-aligned pads nothing.
            let padding = if size % BLOCK_LEN == 0 {
                0
            } else {
                BLOCK_LEN - size % BLOCK_LEN
            };
            offset = content_end + padding;
        } else {
            offset += BLOCK_LEN;
        }
    }
    entries
}

fn is_empty_block(block: &[u8]) -> bool {
    block.iter().all(|&b| b == 0)
}
