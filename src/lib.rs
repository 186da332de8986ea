//! SceneCheckr - Detect embedded timeline metadata in scene captures
//!
//! Scene-capture PNGs exported by KStudio carry an appended metadata block
//! describing the scene. SceneCheckr scans the raw file bytes for that
//! block and classifies its time-based content: no timeline at all, a
//! static timeline, a dynamic one (camera, color/alpha, sound), or an
//! object animation with a duration.
//!
//! No binary format is declared for the block, so detection is pure
//! marker scanning: it is total over arbitrary bytes, and malformed or
//! truncated structure is a negative result, never an error.
//!
//! ## Module Structure
//!
//! - `core` - Marker scanning, fragment extraction and classification
//! - `cli` - Command-line interface
//! - `config` - Extraction strategy selection
//! - `detection` - Detection result types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scenecheckr::SceneAnalyzer;
//!
//! let analyzer = SceneAnalyzer::new("capture.png")?;
//! match analyzer.analyze()? {
//!     DetectionResult::NoTimeline => println!("no timeline"),
//!     DetectionResult::HasTimeline(kind) => println!("{}", kind.name()),
//! }
//! ```

// Core detection pipeline
pub mod core;

// Command-line interface
pub mod cli;

// Detection configuration
pub mod config;

// Detection result types
pub mod detection;

// Re-export commonly used types at crate root for convenience
pub use config::{DetectionConfig, ExtractionStrategy};
pub use core::{detect, is_scene_data, AnalyzeError, SceneAnalyzer, SCENE_SIGNATURE};
pub use detection::{ContentKind, DetectionResult};
