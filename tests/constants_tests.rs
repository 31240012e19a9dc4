// Host-side tests for the shipped timeline and tuning constants.

use glove_timeline::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn projection_constants_are_reasonable() {
    assert!(DEFAULT_FOV_DEGREES > 0.0 && DEFAULT_FOV_DEGREES < 180.0);
    assert!(ZNEAR > 0.0);
    assert!(ZFAR > ZNEAR);
}

#[test]
fn shipped_timeline_is_valid() {
    let timeline = shipped_timeline().expect("shipped timeline validates");
    assert_eq!(timeline.len(), SCENE_COUNT);
    assert_eq!(SCENE_COUNT, 5);
    let ranges: Vec<[f32; 2]> = timeline.segments().iter().map(|s| s.range()).collect();
    assert_eq!(
        ranges,
        vec![[0.0, 0.2], [0.2, 0.5], [0.5, 0.7], [0.7, 0.9], [0.9, 1.0]]
    );
}

#[test]
fn shipped_keyframes_match_at_shared_boundaries() {
    let timeline = shipped_timeline().unwrap();
    for pair in timeline.segments().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(a.camera_end.position, b.camera_start.position, "{} -> {}", a.id, b.id);
        assert_eq!(a.camera_end.rotation, b.camera_start.rotation, "{} -> {}", a.id, b.id);
        if let (Some(fa), Some(fb)) = (a.camera_end.fov, b.camera_start.fov) {
            assert_eq!(fa, fb, "{} -> {}", a.id, b.id);
        }
    }
}

#[test]
fn shipped_pose_is_continuous_across_boundaries() {
    let timeline = shipped_timeline().unwrap();
    for pair in timeline.segments().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let t = b.start;

        let at = timeline.sample(t).unwrap();
        assert_eq!(at.index, timeline.index_of(&b.id).unwrap());
        assert_eq!(at.pose.position, b.camera_start.position);
        assert_eq!(at.pose.rotation, b.camera_start.rotation);

        let before = timeline.sample(t - 1e-4).unwrap();
        assert_eq!(before.index, timeline.index_of(&a.id).unwrap());
        assert!(before.pose.position.abs_diff_eq(a.camera_end.position, 1e-2));
        assert!(before.pose.rotation.abs_diff_eq(a.camera_end.rotation, 1e-2));
    }
}

#[test]
fn shipped_gesture_segment_matches_design() {
    let timeline = shipped_timeline().unwrap();
    let seg = timeline.segment(1).unwrap();
    assert_eq!(seg.id, "gesture-tracking");
    assert_eq!(seg.range(), [0.2, 0.5]);
    assert_eq!(seg.camera_start.position.to_array(), [0.0, 0.0, 5.0]);
    assert_eq!(seg.camera_end.position.to_array(), [0.0, 0.2, 2.8]);
}

#[test]
fn scene_ids_are_unique() {
    let timeline = shipped_timeline().unwrap();
    for (i, def) in SCENES.iter().enumerate() {
        assert_eq!(timeline.index_of(def.id), Some(i));
    }
}

#[test]
fn accents_are_normalized_colors() {
    for rgb in SCENE_ACCENTS {
        for c in rgb {
            assert!((0.0..=1.0).contains(&c));
        }
    }
}

#[test]
fn scene_accent_clamps_index() {
    assert_eq!(scene_accent(1), SCENE_ACCENTS[0]);
    assert_eq!(scene_accent(0), SCENE_ACCENTS[0]);
    assert_eq!(scene_accent(SCENE_COUNT), SCENE_ACCENTS[SCENE_COUNT - 1]);
    assert_eq!(scene_accent(99), SCENE_ACCENTS[SCENE_COUNT - 1]);
}
