//! Zip archive reading, delegated to the `zip` crate.
//!
//! The central-directory walk and entry decompression are the library's
//! business; this module only adapts its output into the same entry-map
//! shape the tar parser produces, applying the same name normalization.

use std::io::{Cursor, Read};

use crate::error::DecodeError;
use crate::field::normalize_name;
use crate::ArchiveMap;

/// Read a complete in-memory zip archive into a name-to-content map.
///
/// Directory entries and entries whose normalized name is empty are skipped.
/// A structurally broken archive surfaces as [`DecodeError::Zip`]; an entry
/// whose bytes cannot be read is skipped with a warning so one damaged
/// member does not lose the rest of the bundle. Duplicate names overwrite,
/// last seen wins, matching the tar path.
pub fn read_zip(data: &[u8]) -> Result<ArchiveMap, DecodeError> {
    let mut archive = ::zip::ZipArchive::new(Cursor::new(data))?;
    let mut entries = ArchiveMap::new();
    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }
        let name = normalize_name(file.name());
        if name.is_empty() {
            continue;
        }
        let mut content = Vec::with_capacity(file.size() as usize);
        if let Err(err) = file.read_to_end(&mut content) {
            log::warn!("skipping unreadable zip entry {name:?}: {err}");
            continue;
        }
        entries.insert(name, content);
    }
    Ok(entries)
}
