//! Core detection pipeline: marker check, fragment extraction, duration
//! scanning and classification.

pub mod analyzer;
pub mod detector;
pub mod extract;
pub mod scan;

pub use analyzer::{AnalyzeError, SceneAnalyzer};
pub use detector::{detect, is_scene_data, SCENE_SIGNATURE};
