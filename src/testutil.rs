//! In-memory archive fixtures shared by the unit tests.

use std::io::{Cursor, Write};

use crate::tar::{BLOCK_LEN, SIZE_FIELD};

/// Build a tar header block with a valid checksum. The parser under test
/// ignores everything but the name and size; the other fields are filled in
/// so fixtures look like what a real tar writer emits.
pub(crate) fn tar_header(name: &str, size: usize) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    let name_bytes = name.as_bytes();
    let name_len = name_bytes.len().min(100);
    block[..name_len].copy_from_slice(&name_bytes[..name_len]);
    block[100..108].copy_from_slice(b"0000644\0");
    block[108..116].copy_from_slice(b"0000000\0");
    block[116..124].copy_from_slice(b"0000000\0");

    let mut size_field = [b'0'; 11];
    let mut v = size;
    for slot in size_field.iter_mut().rev() {
        *slot = b'0' + (v & 7) as u8;
        v >>= 3;
    }
    block[SIZE_FIELD.start..SIZE_FIELD.start + 11].copy_from_slice(&size_field);
    block[136..148].copy_from_slice(b"00000000000\0");
    for b in &mut block[148..156] {
        *b = b' ';
    }
    block[156] = if name.ends_with('/') { b'5' } else { b'0' };
    block[257..263].copy_from_slice(b"ustar\0");
    block[263..265].copy_from_slice(b"00");

    let sum: u32 = block.iter().map(|&b| b as u32).sum();
    let checksum = format!("{sum:06o}\0 ");
    block[148..156].copy_from_slice(checksum.as_bytes());
    block
}

/// Build a complete tar archive: entries, padding, two terminator blocks.
pub(crate) fn tar_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut data = Vec::new();
    for (name, content) in entries {
        data.extend_from_slice(&tar_header(name, content.len()));
        data.extend_from_slice(content);
        let padding = (BLOCK_LEN - content.len() % BLOCK_LEN) % BLOCK_LEN;
        data.extend_from_slice(&vec![0u8; padding]);
    }
    data.extend_from_slice(&[0u8; 2 * BLOCK_LEN]);
    data
}

/// Gzip a payload, optionally recording an original file name in the header.
pub(crate) fn gzip_bytes(payload: &[u8], name: Option<&str>) -> Vec<u8> {
    let mut builder = flate2::GzBuilder::new();
    if let Some(name) = name {
        builder = builder.filename(name);
    }
    let mut encoder = builder.write(Vec::new(), flate2::Compression::default());
    encoder.write_all(payload).unwrap();
    encoder.finish().unwrap()
}

/// Build a zip archive holding the given entries.
pub(crate) fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = ::zip::ZipWriter::new(&mut cursor);
        let opts = ::zip::write::FileOptions::default();
        for (name, content) in entries {
            writer.start_file(*name, opts).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
    }
    cursor.into_inner()
}
