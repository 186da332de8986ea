//! Detection result types for scene-capture classification

/// Kind of time-based content a timeline block drives.
///
/// The variants carry their duration directly so that impossible
/// combinations cannot be constructed: a static timeline has no duration
/// slot at all, and an animation always has a parsed one. A guide-object
/// timeline whose duration failed to parse is reported as `Dynamic` with
/// `duration_seconds = None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentKind {
    /// Timeline block exists but animates nothing (no `Timeline` tag inside).
    Static,
    /// Camera movement, color/alpha changes or sound cues.
    Dynamic { duration_seconds: Option<f64> },
    /// Timeline drives a guide object, i.e. object animation.
    Animation { duration_seconds: f64 },
}

impl ContentKind {
    pub fn name(&self) -> &'static str {
        match self {
            ContentKind::Static => "static",
            ContentKind::Dynamic { .. } => "dynamic",
            ContentKind::Animation { .. } => "animation",
        }
    }

    /// Duration in seconds, if one was parsed out of the payload.
    pub fn duration_seconds(&self) -> Option<f64> {
        match self {
            ContentKind::Static => None,
            ContentKind::Dynamic { duration_seconds } => *duration_seconds,
            ContentKind::Animation { duration_seconds } => Some(*duration_seconds),
        }
    }
}

/// Outcome of one detection call over a payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionResult {
    /// No timeline block was found (or the block never closed).
    NoTimeline,
    /// A timeline block was found and classified.
    HasTimeline(ContentKind),
}

impl DetectionResult {
    pub fn has_timeline(&self) -> bool {
        matches!(self, DetectionResult::HasTimeline(_))
    }

    pub fn status_name(&self) -> &'static str {
        match self {
            DetectionResult::NoTimeline => "no_timeline",
            DetectionResult::HasTimeline(_) => "has_timeline",
        }
    }

    pub fn content_kind(&self) -> Option<ContentKind> {
        match self {
            DetectionResult::NoTimeline => None,
            DetectionResult::HasTimeline(kind) => Some(*kind),
        }
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        self.content_kind().and_then(|k| k.duration_seconds())
    }
}
