// src/core/detector.rs
//
// Scene metadata detection over raw capture bytes. Pure functions: the
// payload is borrowed read-only, every absence condition is a normal
// result value, and identical input bytes always produce identical
// results.

use log::debug;

use crate::config::{DetectionConfig, ExtractionStrategy};
use crate::detection::{ContentKind, DetectionResult};

use super::{extract, scan};

/// Signature written into every capture by the producing scene tool.
pub const SCENE_SIGNATURE: &[u8] = b"KStudio";

/// Whether the payload was produced by the scene-capture tool at all.
/// Callers must check this before asking for a classification; a payload
/// without the signature is not scene data and is not classified.
pub fn is_scene_data(payload: &[u8]) -> bool {
    scan::contains(payload, SCENE_SIGNATURE)
}

/// Classify the time-based content of a scene-capture payload.
pub fn detect(payload: &[u8], config: &DetectionConfig) -> DetectionResult {
    match config.strategy {
        ExtractionStrategy::Presence => detect_presence(payload),
        ExtractionStrategy::Structural => detect_structural(payload),
    }
}

/// Presence path: the whole payload is the scan region and no fragment is
/// extracted, so the guide-object distinction is unavailable here.
fn detect_presence(payload: &[u8]) -> DetectionResult {
    if !extract::timeline_marker_present(payload) {
        return DetectionResult::NoTimeline;
    }
    if !extract::structured_tag_present(payload) {
        return DetectionResult::HasTimeline(ContentKind::Static);
    }
    DetectionResult::HasTimeline(ContentKind::Dynamic {
        duration_seconds: scan::duration_after_marker(payload),
    })
}

/// Structural path: classification happens inside the extracted fragment
/// only. Extraction failure means no timeline, never an error.
fn detect_structural(payload: &[u8]) -> DetectionResult {
    let Some(fragment) = extract::timeline_fragment(payload) else {
        debug!("no bounded timeline fragment in payload");
        return DetectionResult::NoTimeline;
    };
    if !extract::structured_tag_present(fragment) {
        return DetectionResult::HasTimeline(ContentKind::Static);
    }

    let duration = scan::duration_attribute(fragment);
    match duration {
        // A timeline driving a guide object is object animation, but only
        // a parsed duration makes that distinction meaningful.
        Some(duration_seconds) if extract::guide_object_present(fragment) => {
            DetectionResult::HasTimeline(ContentKind::Animation { duration_seconds })
        }
        duration_seconds => {
            DetectionResult::HasTimeline(ContentKind::Dynamic { duration_seconds })
        }
    }
}
