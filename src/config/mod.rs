//! Detection configuration

use clap::ValueEnum;

/// How the timeline block is located inside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExtractionStrategy {
    /// Substring checks over the whole payload. Cheap, but cannot tell
    /// animation apart from other dynamic content.
    Presence,
    /// Bounded `<root>...</root>` block match with quoted-attribute
    /// duration scanning. The stronger path and the default.
    #[default]
    Structural,
}

impl ExtractionStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ExtractionStrategy::Presence => "presence",
            ExtractionStrategy::Structural => "structural",
        }
    }
}

impl std::fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for one detection call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionConfig {
    pub strategy: ExtractionStrategy,
}

impl DetectionConfig {
    pub fn with_strategy(strategy: ExtractionStrategy) -> Self {
        Self { strategy }
    }
}
