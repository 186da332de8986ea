// src/main.rs
use anyhow::Result;
use clap::Parser;
use colorful::Colorful;
use indicatif::{ParallelProgressIterator, ProgressBar};
use log::warn;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use scenecheckr::cli::{self, Args, FileReport};
use scenecheckr::{AnalyzeError, SceneAnalyzer};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let capture_files = collect_capture_files(&args.input);

    if capture_files.is_empty() {
        println!("{}", "No capture files found!".red());
        return Ok(());
    }

    let config = args.detection_config();
    let reports: Vec<FileReport> = if capture_files.len() > 1 {
        let bar = ProgressBar::new(capture_files.len() as u64);
        capture_files
            .par_iter()
            .progress_with(bar)
            .map(|path| check_file(path, &config))
            .collect()
    } else {
        capture_files
            .iter()
            .map(|path| check_file(path, &config))
            .collect()
    };

    if args.json {
        cli::print_json(&reports)?;
    } else {
        for report in &reports {
            cli::print_report(report, args.verbose);
            println!();
        }
        if reports.len() > 1 {
            cli::print_summary(&reports);
        }
    }

    Ok(())
}

/// Collect .png captures from a file path or a directory tree. Other file
/// types never reach the detector.
fn collect_capture_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if is_capture(path) {
            return vec![path.to_path_buf()];
        }
        warn!("skipping {}: not a .png capture", path.display());
        return Vec::new();
    }

    WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_capture(e.path()))
        .map(|e| e.into_path())
        .collect()
}

fn is_capture(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

fn check_file(path: &Path, config: &scenecheckr::DetectionConfig) -> FileReport {
    let analyzer = match SceneAnalyzer::with_config(path, *config) {
        Ok(analyzer) => analyzer,
        Err(err) => return FileReport::failed(path, err),
    };
    match analyzer.analyze() {
        Ok(result) => FileReport::detected(path, &result),
        Err(AnalyzeError::NotSceneData { .. }) => FileReport::refused(path),
        Err(err) => FileReport::failed(path, err),
    }
}
