// src/core/analyzer.rs
//
// File-level analysis API. Owns the one read of the capture file and the
// refusal of non-scene data; the detection itself stays a pure function
// over the borrowed payload.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::DetectionConfig;
use crate::detection::DetectionResult;

use super::detector;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file carries no scene signature; it is refused, not classified.
    #[error("{path} is not scene data (no KStudio signature)")]
    NotSceneData { path: PathBuf },
}

/// Analyzer for a single scene-capture file.
pub struct SceneAnalyzer {
    path: PathBuf,
    payload: Vec<u8>,
    config: DetectionConfig,
}

impl SceneAnalyzer {
    /// Read a capture file with the default configuration.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzeError> {
        Self::with_config(path, DetectionConfig::default())
    }

    /// Read a capture file with an explicit configuration.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: DetectionConfig,
    ) -> Result<Self, AnalyzeError> {
        let path = path.as_ref().to_path_buf();
        let payload = fs::read(&path).map_err(|source| AnalyzeError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            payload,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether the file carries the scene signature at all.
    pub fn is_scene_data(&self) -> bool {
        detector::is_scene_data(&self.payload)
    }

    /// Classify the capture's time-based content. Files without the scene
    /// signature are refused with [`AnalyzeError::NotSceneData`] before any
    /// further scanning.
    pub fn analyze(&self) -> Result<DetectionResult, AnalyzeError> {
        if !self.is_scene_data() {
            return Err(AnalyzeError::NotSceneData {
                path: self.path.clone(),
            });
        }
        Ok(detector::detect(&self.payload, &self.config))
    }
}
