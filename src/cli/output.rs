//! Output formatting for CLI results

use std::path::Path;

use colorful::Colorful;
use serde::Serialize;

use crate::detection::{ContentKind, DetectionResult};

/// One file's outcome, flattened for display and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub scene_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn detected(path: &Path, result: &DetectionResult) -> Self {
        Self {
            file: path.display().to_string(),
            scene_data: true,
            status: Some(result.status_name()),
            content_kind: result.content_kind().map(|k| k.name()),
            duration_seconds: result.duration_seconds(),
            label: content_label(result),
            error: None,
        }
    }

    pub fn refused(path: &Path) -> Self {
        Self {
            file: path.display().to_string(),
            scene_data: false,
            status: None,
            content_kind: None,
            duration_seconds: None,
            label: None,
            error: None,
        }
    }

    pub fn failed(path: &Path, error: impl ToString) -> Self {
        Self {
            file: path.display().to_string(),
            scene_data: false,
            status: None,
            content_kind: None,
            duration_seconds: None,
            label: None,
            error: Some(error.to_string()),
        }
    }
}

/// Human label for a classification. Owned by the presentation layer; the
/// detector never formats text.
pub fn content_label(result: &DetectionResult) -> Option<String> {
    let kind = result.content_kind()?;
    let label = match kind {
        ContentKind::Static => "static image".to_string(),
        ContentKind::Dynamic {
            duration_seconds: None,
        } => "dynamic image".to_string(),
        ContentKind::Dynamic {
            duration_seconds: Some(d),
        } => format!("dynamic scene (duration:{}s)", format_duration(d)),
        ContentKind::Animation { duration_seconds } => {
            // Inclusive boundary: exactly 10.0 seconds is still a GIF.
            let kind_text = if duration_seconds <= 10.0 { "GIF" } else { "movie" };
            format!(
                "{} (duration:{}s)",
                kind_text,
                format_duration(duration_seconds)
            )
        }
    };
    Some(label)
}

/// Keep one decimal on whole-number durations so 10 reads as "10.0".
fn format_duration(duration: f64) -> String {
    if duration.fract() == 0.0 {
        format!("{duration:.1}")
    } else {
        format!("{duration}")
    }
}

/// Print one report for terminal consumption.
pub fn print_report(report: &FileReport, verbose: bool) {
    println!("{}", report.file.as_str().cyan());

    if let Some(error) = &report.error {
        println!("  {}", format!("error: {error}").red());
        return;
    }
    if !report.scene_data {
        println!("  {}", "not scene data".red());
        return;
    }

    match report.status {
        Some("has_timeline") => println!("  {}", "has timeline".green()),
        _ => println!("  {}", "no timeline".red()),
    }
    if let Some(label) = &report.label {
        println!("  {label}");
    }
    if verbose {
        if let Some(kind) = report.content_kind {
            println!("    content kind: {kind}");
        }
        if let Some(duration) = report.duration_seconds {
            println!("    duration: {duration}s");
        }
    }
}

/// Print every report as one JSON array.
pub fn print_json(reports: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

/// Print a batch summary (counts per outcome).
pub fn print_summary(reports: &[FileReport]) {
    let with_timeline = reports
        .iter()
        .filter(|r| r.status == Some("has_timeline"))
        .count();
    let without_timeline = reports
        .iter()
        .filter(|r| r.status == Some("no_timeline"))
        .count();
    let refused = reports
        .iter()
        .filter(|r| !r.scene_data && r.error.is_none())
        .count();
    let failed = reports.iter().filter(|r| r.error.is_some()).count();

    println!("\nSummary:");
    println!("  {} file(s) checked", reports.len());
    if with_timeline > 0 {
        println!("  {}", format!("{with_timeline} with timeline").green());
    }
    if without_timeline > 0 {
        println!("  {}", format!("{without_timeline} without timeline").red());
    }
    if refused > 0 {
        println!("  {}", format!("{refused} not scene data").yellow());
    }
    if failed > 0 {
        println!("  {}", format!("{failed} failed to read").red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn static_label_has_no_duration_text() {
        let result = DetectionResult::HasTimeline(ContentKind::Static);
        assert_eq!(content_label(&result).as_deref(), Some("static image"));
    }

    #[test]
    fn dynamic_label_carries_duration() {
        let result = DetectionResult::HasTimeline(ContentKind::Dynamic {
            duration_seconds: Some(3.5),
        });
        assert_eq!(
            content_label(&result).as_deref(),
            Some("dynamic scene (duration:3.5s)")
        );
    }

    #[test]
    fn dynamic_without_duration_is_dynamic_image() {
        let result = DetectionResult::HasTimeline(ContentKind::Dynamic {
            duration_seconds: None,
        });
        assert_eq!(content_label(&result).as_deref(), Some("dynamic image"));
    }

    #[test]
    fn ten_seconds_is_still_a_gif() {
        let result = DetectionResult::HasTimeline(ContentKind::Animation {
            duration_seconds: 10.0,
        });
        assert_eq!(
            content_label(&result).as_deref(),
            Some("GIF (duration:10.0s)")
        );
    }

    #[test]
    fn over_ten_seconds_is_a_movie() {
        let result = DetectionResult::HasTimeline(ContentKind::Animation {
            duration_seconds: 12.0,
        });
        assert_eq!(
            content_label(&result).as_deref(),
            Some("movie (duration:12.0s)")
        );
    }

    #[test]
    fn no_timeline_has_no_label() {
        assert_eq!(content_label(&DetectionResult::NoTimeline), None);
    }

    #[test]
    fn report_json_skips_empty_fields() {
        let path = PathBuf::from("card.png");
        let report = FileReport::refused(&path);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"scene_data\":false"));
        assert!(!json.contains("duration_seconds"));
        assert!(!json.contains("label"));
    }

    #[test]
    fn detected_report_flattens_the_result() {
        let path = PathBuf::from("card.png");
        let result = DetectionResult::HasTimeline(ContentKind::Animation {
            duration_seconds: 2.0,
        });
        let report = FileReport::detected(&path, &result);
        assert_eq!(report.status, Some("has_timeline"));
        assert_eq!(report.content_kind, Some("animation"));
        assert_eq!(report.duration_seconds, Some(2.0));
        assert_eq!(report.label.as_deref(), Some("GIF (duration:2.0s)"));
    }
}
