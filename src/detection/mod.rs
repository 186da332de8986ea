//! Detection result types for SceneCheckr

mod result;

pub use result::{ContentKind, DetectionResult};
