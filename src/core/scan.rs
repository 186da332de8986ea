// src/core/scan.rs
//
// Byte-level marker scanning primitives. Everything here is total over
// arbitrary byte sequences; a marker that is absent or malformed is a
// normal negative result, never an error.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Find the first occurrence of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Whether `needle` occurs anywhere in `haystack` as a contiguous
/// subsequence. Exact bytes, no case folding.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}

/// Free-form duration scan: locate the first literal `duration` marker,
/// skip forward to the first ASCII digit after it, then consume a maximal
/// run of digits and decimal points.
///
/// The run is not a strict decimal grammar, so a capture like `3.5.2`
/// survives the scan but fails the float parse; that degrades to `None`
/// rather than aborting detection. Both scans are bounded by the region
/// length, so a marker sitting at the very end of the buffer also yields
/// `None`.
pub fn duration_after_marker(region: &[u8]) -> Option<f64> {
    let marker = b"duration";
    let mut pos = find(region, marker)? + marker.len();

    while pos < region.len() && !region[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == region.len() {
        return None;
    }

    let start = pos;
    let mut end = start;
    while end < region.len() && (region[end].is_ascii_digit() || region[end] == b'.') {
        end += 1;
    }

    parse_numeric_run(&region[start..end])
}

static DURATION_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"duration="([0-9.]+)""#).unwrap());

/// Quoted-attribute duration scan: first match of `duration="<digits-and-dots>"`.
/// Stricter than [`duration_after_marker`] since the value must be quoted.
pub fn duration_attribute(region: &[u8]) -> Option<f64> {
    let captures = DURATION_ATTR.captures(region)?;
    parse_numeric_run(&captures[1])
}

fn parse_numeric_run(run: &[u8]) -> Option<f64> {
    // The run is ASCII digits and dots by construction.
    std::str::from_utf8(run).ok()?.parse().ok()
}
