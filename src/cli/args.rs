//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DetectionConfig, ExtractionStrategy};

#[derive(Parser, Debug)]
#[command(name = "scenecheckr")]
#[command(about = "Detect embedded timeline metadata in KStudio scene-capture PNG files")]
pub struct Args {
    /// Input capture file or directory
    #[arg(short, long)]
    pub input: PathBuf,

    /// Extraction strategy for the timeline block
    #[arg(long, value_enum, default_value_t = ExtractionStrategy::Structural)]
    pub strategy: ExtractionStrategy,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn detection_config(&self) -> DetectionConfig {
        DetectionConfig::with_strategy(self.strategy)
    }
}
