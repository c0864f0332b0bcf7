//! Fixed-width header field decoding.
//!
//! Archive headers store text and numbers in fixed byte ranges, NUL padded.
//! These helpers clamp every range to the buffer length, so callers can pass
//! the layout constants without checking the buffer size first.

use std::ops::Range;

/// Clamp `range` to the buffer and return the sub-slice.
pub(crate) fn field_bytes(data: &[u8], range: Range<usize>) -> &[u8] {
    let start = range.start.min(data.len());
    let end = range.end.min(data.len());
    &data[start..end]
}

/// Decode a fixed-width text field: lossy UTF-8, NUL padding stripped,
/// surrounding whitespace trimmed.
pub(crate) fn field_str(data: &[u8], range: Range<usize>) -> String {
    normalize_name(&String::from_utf8_lossy(field_bytes(data, range)))
}

/// Decode a fixed-width octal ASCII field. Empty or malformed fields coerce
/// to zero so a damaged header skips one entry instead of aborting the scan.
pub(crate) fn field_octal_u64(data: &[u8], range: Range<usize>) -> u64 {
    let s = field_str(data, range);
    if s.is_empty() {
        return 0;
    }
    u64::from_str_radix(&s, 8).unwrap_or(0)
}

/// Normalize an entry name: drop NUL bytes, trim whitespace. Applied to both
/// tar and zip entry names so the two paths produce the same map keys.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.replace('\0', "").trim().to_string()
}
