// Host-side tests for loading timelines from JSON.

use glove_timeline::*;

const TWO_SCENES: &str = r#"{
  "segments": [
    {
      "id": "intro",
      "range": [0.0, 0.4],
      "cameraStart": { "position": [0, 0, 6], "fov": 45 },
      "cameraEnd": { "position": [0, 0.5, 4], "rotation": [-0.1, 0, 0], "fov": 40 },
      "easing": "power2.inOut"
    },
    {
      "id": "outro",
      "range": [0.4, 1.0],
      "cameraStart": { "position": [0, 0.5, 4], "rotation": [-0.1, 0, 0] },
      "cameraEnd": { "position": [2, 1, 8] }
    }
  ]
}"#;

#[test]
fn json_timeline_builds() {
    let timeline = Timeline::from_json(TWO_SCENES).unwrap();
    assert_eq!(timeline.len(), 2);

    let intro = timeline.segment(0).unwrap();
    assert_eq!(intro.easing, Easing::CubicInOut);
    assert_eq!(intro.camera_start.rotation.to_array(), [0.0, 0.0, 0.0]);
    assert_eq!(intro.camera_end.fov, Some(40.0));

    let outro = timeline.segment(1).unwrap();
    assert_eq!(outro.easing, Easing::Linear);
    assert_eq!(outro.camera_start.fov, None);
    assert_eq!(timeline.resolve(0.4), Some(1));
}

#[test]
fn json_with_unknown_easing_fails() {
    let json = TWO_SCENES.replace("power2.inOut", "elastic.out");
    assert_eq!(
        Timeline::from_json(&json).unwrap_err(),
        TimelineError::UnknownEasing("elastic.out".to_string())
    );
}

#[test]
fn json_with_gap_fails_validation() {
    let json = TWO_SCENES.replace("[0.4, 1.0]", "[0.45, 1.0]");
    assert!(matches!(
        Timeline::from_json(&json).unwrap_err(),
        TimelineError::Gap { .. }
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Timeline::from_json("{ \"segments\": [ }").unwrap_err(),
        TimelineError::Parse(_)
    ));
    assert!(matches!(
        Timeline::from_json("{}").unwrap_err(),
        TimelineError::Parse(_)
    ));
}

#[test]
fn shipped_timeline_survives_json_round_trip() {
    let shipped = shipped_timeline().unwrap();
    let json = TimelineConfig::from(&shipped).to_json_pretty().unwrap();
    assert!(json.contains("cameraStart"));

    let reloaded = Timeline::from_json(&json).unwrap();
    assert_eq!(reloaded.len(), shipped.len());
    for (a, b) in shipped.segments().iter().zip(reloaded.segments()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.easing, b.easing);
        assert!((a.start - b.start).abs() < 1e-6 && (a.end - b.end).abs() < 1e-6);
        assert!(a.camera_start.position.abs_diff_eq(b.camera_start.position, 1e-6));
        assert!(a.camera_end.rotation.abs_diff_eq(b.camera_end.rotation, 1e-6));
        assert_eq!(a.camera_start.fov.is_some(), b.camera_start.fov.is_some());
    }
}

#[test]
fn keyframes_without_fov_omit_the_field() {
    let key = KeyframeConfig::from(&CameraKeyframe::new([1.0, 2.0, 3.0], [0.0; 3], None));
    let json = serde_json::to_string(&key).unwrap();
    assert!(!json.contains("fov"));
}
