// src/core/extract.rs
//
// Timeline fragment extraction. The embedded metadata block is not a
// declared format, so extraction is marker scanning, not parsing: the
// structural path matches the first bounded `<root>...</root>` block
// following the timeline marker, and a block that never closes counts as
// no timeline at all.

use log::debug;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

use super::scan;

// Non-greedy through the first closing </root>; dot matches newlines
// because the block spans lines in real captures. Unicode mode is off:
// the gaps between markers hold raw image bytes, not UTF-8, and the
// classes must match any byte.
static TIMELINE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s-u)timeline.+?sceneInfo.*?(?P<data><root\b[^>]*?>.*?</root>)").unwrap()
});

static GUIDE_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?-u)guideObjectPath="([^"]+)""#).unwrap());

/// Extract the bounded timeline fragment from a payload, if any.
///
/// Returns a sub-slice view of `payload`; nothing is copied. A missing,
/// truncated, or never-closing block yields `None`.
pub fn timeline_fragment(payload: &[u8]) -> Option<&[u8]> {
    let captures = TIMELINE_BLOCK.captures(payload)?;
    let fragment = captures.name("data")?.as_bytes();
    debug!("extracted timeline fragment of {} bytes", fragment.len());
    Some(fragment)
}

/// Whether either case variant of the timeline marker occurs in `payload`.
pub fn timeline_marker_present(payload: &[u8]) -> bool {
    scan::contains(payload, b"timeline") || scan::contains(payload, b"Timeline")
}

/// Whether the capitalized `Timeline` tag occurs in `region`. Its absence
/// from an extracted fragment means the timeline animates nothing.
pub fn structured_tag_present(region: &[u8]) -> bool {
    scan::contains(region, b"Timeline")
}

/// Whether the fragment drives a guide object (non-empty quoted path).
pub fn guide_object_present(fragment: &[u8]) -> bool {
    GUIDE_OBJECT.is_match(fragment)
}
