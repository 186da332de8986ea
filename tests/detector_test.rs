// tests/detector_test.rs
//
// End-to-end detection over synthetic capture payloads, driven through
// the public API only.

use scenecheckr::cli::content_label;
use scenecheckr::{
    detect, is_scene_data, ContentKind, DetectionConfig, DetectionResult, ExtractionStrategy,
};

// A capture is image data with the metadata block appended; a PNG-ish
// header in front keeps the payloads honest about being binary-then-text.
const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn capture(metadata: &str) -> Vec<u8> {
    let mut payload = PNG_HEADER.to_vec();
    payload.extend_from_slice(&[0x00, 0x10, 0x20, 0x30]);
    payload.extend_from_slice(b"KStudio");
    payload.extend_from_slice(metadata.as_bytes());
    payload
}

fn timeline_capture(fragment_body: &str) -> Vec<u8> {
    capture(&format!(
        "version 1 timeline 0 sceneInfo flag\n<root>\n{fragment_body}\n</root>\ntrailer"
    ))
}

fn structural() -> DetectionConfig {
    DetectionConfig::default()
}

fn presence() -> DetectionConfig {
    DetectionConfig::with_strategy(ExtractionStrategy::Presence)
}

#[test]
fn payload_without_signature_is_not_scene_data() {
    assert!(!is_scene_data(PNG_HEADER));
    assert!(!is_scene_data(b"random bytes with timeline inside"));
    assert!(!is_scene_data(&[]));
}

#[test]
fn signature_without_timeline_token_is_no_timeline() {
    let payload = capture("just scene properties, nothing temporal");
    assert!(is_scene_data(&payload));
    assert_eq!(detect(&payload, &structural()), DetectionResult::NoTimeline);
    assert_eq!(detect(&payload, &presence()), DetectionResult::NoTimeline);
}

#[test]
fn fragment_without_timeline_tag_is_static() {
    let payload = timeline_capture("<camera pos=\"0,0,0\"/>");
    assert_eq!(
        detect(&payload, &structural()),
        DetectionResult::HasTimeline(ContentKind::Static)
    );
}

#[test]
fn dynamic_scene_with_duration() {
    let payload = timeline_capture("<Timeline duration=\"3.5\" interpolables=\"2\"/>");
    let result = detect(&payload, &structural());
    assert_eq!(
        result,
        DetectionResult::HasTimeline(ContentKind::Dynamic {
            duration_seconds: Some(3.5)
        })
    );
    assert_eq!(
        content_label(&result).as_deref(),
        Some("dynamic scene (duration:3.5s)")
    );
}

#[test]
fn guide_object_at_gif_boundary() {
    let payload =
        timeline_capture("<Timeline duration=\"10.0\" guideObjectPath=\"guide/cube\"/>");
    let result = detect(&payload, &structural());
    assert_eq!(
        result,
        DetectionResult::HasTimeline(ContentKind::Animation {
            duration_seconds: 10.0
        })
    );
    assert_eq!(
        content_label(&result).as_deref(),
        Some("GIF (duration:10.0s)")
    );
}

#[test]
fn long_animation_is_a_movie() {
    let payload =
        timeline_capture("<Timeline duration=\"12.0\" guideObjectPath=\"guide/cube\"/>");
    let result = detect(&payload, &structural());
    assert_eq!(
        content_label(&result).as_deref(),
        Some("movie (duration:12.0s)")
    );
}

#[test]
fn unclosed_fragment_reports_no_timeline() {
    let payload = capture("timeline 0 sceneInfo flag <root><Timeline duration=\"3.0\"");
    assert_eq!(detect(&payload, &structural()), DetectionResult::NoTimeline);
}

#[test]
fn duration_marker_at_buffer_end_yields_none() {
    let mut payload = capture("Timeline and timeline markers then duration");
    assert!(payload.ends_with(b"duration"));
    let result = detect(&payload, &presence());
    assert_eq!(
        result,
        DetectionResult::HasTimeline(ContentKind::Dynamic {
            duration_seconds: None
        })
    );
    // Appending digits afterwards is what makes the duration appear.
    payload.extend_from_slice(b"6.5");
    assert_eq!(
        detect(&payload, &presence()).duration_seconds(),
        Some(6.5)
    );
}

#[test]
fn malformed_numeric_run_keeps_timeline_present() {
    let payload = timeline_capture("<Timeline duration=\"3.5.2\"/>");
    let result = detect(&payload, &structural());
    assert!(result.has_timeline());
    assert_eq!(result.duration_seconds(), None);
}

#[test]
fn raw_bytes_between_markers_do_not_defeat_extraction() {
    // Real captures put arbitrary image bytes between the text markers.
    let mut payload = PNG_HEADER.to_vec();
    payload.extend_from_slice(b"KStudio timeline ");
    payload.push(0xff);
    payload.extend_from_slice(b" sceneInfo f <root><Timeline duration=\"3.5\"/></root>");
    assert_eq!(
        detect(&payload, &structural()),
        DetectionResult::HasTimeline(ContentKind::Dynamic {
            duration_seconds: Some(3.5)
        })
    );
}

#[test]
fn raw_bytes_inside_fragment_still_classify() {
    let mut payload = PNG_HEADER.to_vec();
    payload.extend_from_slice(b"KStudio timeline 0 sceneInfo f <root>");
    payload.push(0x89);
    payload.extend_from_slice(b"<Timeline duration=\"6.0\" guideObjectPath=\"g/");
    payload.push(0xfe);
    payload.extend_from_slice(b"\"/>");
    payload.push(0x00);
    payload.extend_from_slice(b"</root>");
    let result = detect(&payload, &structural());
    assert_eq!(
        result,
        DetectionResult::HasTimeline(ContentKind::Animation {
            duration_seconds: 6.0
        })
    );
}

#[test]
fn detection_is_referentially_transparent() {
    let payload = timeline_capture("<Timeline duration=\"8.25\" guideObjectPath=\"g/x\"/>");
    for config in [structural(), presence()] {
        let first = detect(&payload, &config);
        let second = detect(&payload, &config);
        assert_eq!(first, second);
    }
}

#[test]
fn empty_and_adversarial_inputs_do_not_panic() {
    let adversarial: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0xff; 512],
        b"KStudio".to_vec(),
        capture("duration duration duration"),
        capture("timeline sceneInfo <root"),
        capture(&"timeline ".repeat(200)),
    ];
    for payload in &adversarial {
        let _ = is_scene_data(payload);
        let _ = detect(payload, &structural());
        let _ = detect(payload, &presence());
    }
}
