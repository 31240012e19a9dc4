use crate::easing::Easing;
use crate::error::TimelineError;
use crate::pose::CameraKeyframe;
use crate::timeline::{SceneSegment, Timeline};

// Shared camera and palette tuning for the web and native frontends.

// Projection
pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const ZNEAR: f32 = 0.1;
pub const ZFAR: f32 = 100.0;

/// Static description of one shipped scene.
#[derive(Clone, Copy, Debug)]
pub struct SceneDef {
    pub id: &'static str,
    pub range: [f32; 2],
    pub camera_start: CameraKeyframe,
    pub camera_end: CameraKeyframe,
    pub easing: Easing,
}

impl From<&SceneDef> for SceneSegment {
    fn from(def: &SceneDef) -> Self {
        SceneSegment::new(
            def.id,
            def.range,
            def.camera_start,
            def.camera_end,
            def.easing,
        )
    }
}

// Keyframes shared by adjacent scenes
const HERO_OPEN: CameraKeyframe =
    CameraKeyframe::new([0.0, 0.0, 6.0], [0.0, 0.0, 0.0], Some(45.0));
const HERO_CLOSE: CameraKeyframe =
    CameraKeyframe::new([0.0, 0.0, 5.0], [0.0, 0.0, 0.0], Some(42.0));
const PALM_CLOSEUP: CameraKeyframe =
    CameraKeyframe::new([0.0, 0.2, 2.8], [-0.08, 0.35, 0.0], Some(36.0));
const SENSOR_ORBIT: CameraKeyframe =
    CameraKeyframe::new([1.4, 0.5, 3.2], [-0.15, 0.7, 0.04], Some(36.0));
const HAPTIC_SWEEP: CameraKeyframe =
    CameraKeyframe::new([-1.2, 0.8, 3.6], [-0.2, -0.45, 0.0], Some(36.0));
const LAUNCH_WIDE: CameraKeyframe =
    CameraKeyframe::new([0.0, 0.4, 7.5], [0.0, 0.0, 0.0], Some(50.0));

// Field of view stays where the sensor scene left it during the haptic pass
const fn without_fov(key: CameraKeyframe) -> CameraKeyframe {
    CameraKeyframe {
        position: key.position,
        rotation: key.rotation,
        fov: None,
    }
}

pub const SCENES: [SceneDef; 5] = [
    SceneDef {
        id: "hero",
        range: [0.0, 0.2],
        camera_start: HERO_OPEN,
        camera_end: HERO_CLOSE,
        easing: Easing::CubicOut,
    },
    SceneDef {
        id: "gesture-tracking",
        range: [0.2, 0.5],
        camera_start: HERO_CLOSE,
        camera_end: PALM_CLOSEUP,
        easing: Easing::CubicInOut,
    },
    SceneDef {
        id: "sensor-array",
        range: [0.5, 0.7],
        camera_start: PALM_CLOSEUP,
        camera_end: SENSOR_ORBIT,
        easing: Easing::SineInOut,
    },
    SceneDef {
        id: "haptic-feedback",
        range: [0.7, 0.9],
        camera_start: without_fov(SENSOR_ORBIT),
        camera_end: without_fov(HAPTIC_SWEEP),
        easing: Easing::QuadInOut,
    },
    SceneDef {
        id: "launch",
        range: [0.9, 1.0],
        camera_start: HAPTIC_SWEEP,
        camera_end: LAUNCH_WIDE,
        easing: Easing::ExpoOut,
    },
];

pub const SCENE_COUNT: usize = SCENES.len();

// Accent colour per scene, consumed by page and material side effects
pub const SCENE_ACCENTS: [[f32; 3]; SCENE_COUNT] = [
    [0.42, 0.58, 1.0],  // cobalt
    [0.36, 0.9, 0.78],  // mint
    [0.98, 0.72, 0.3],  // amber
    [0.94, 0.38, 0.55], // rose
    [0.82, 0.86, 0.95], // frost
];

/// Build the timeline the site ships with.
pub fn shipped_timeline() -> Result<Timeline, TimelineError> {
    Timeline::new(SCENES.iter().map(SceneSegment::from))
}

/// Accent for a 1-based scene index; out-of-range indices clamp to the ends.
pub fn scene_accent(scene: usize) -> [f32; 3] {
    let i = scene.clamp(1, SCENE_COUNT) - 1;
    SCENE_ACCENTS[i]
}
