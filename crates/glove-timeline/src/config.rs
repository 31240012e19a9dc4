//! JSON form of a timeline, for overriding the shipped scenes at runtime.

use crate::easing::Easing;
use crate::error::TimelineError;
use crate::pose::CameraKeyframe;
use crate::timeline::{SceneSegment, Timeline};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeConfig {
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fov: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentConfig {
    pub id: String,
    pub range: [f32; 2],
    pub camera_start: KeyframeConfig,
    pub camera_end: KeyframeConfig,
    #[serde(default = "default_easing")]
    pub easing: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub segments: Vec<SegmentConfig>,
}

fn default_easing() -> String {
    Easing::Linear.as_str().to_string()
}

impl From<&KeyframeConfig> for CameraKeyframe {
    fn from(k: &KeyframeConfig) -> Self {
        CameraKeyframe::new(k.position, k.rotation, k.fov)
    }
}

impl From<&CameraKeyframe> for KeyframeConfig {
    fn from(k: &CameraKeyframe) -> Self {
        Self {
            position: k.position.to_array(),
            rotation: k.rotation.to_array(),
            fov: k.fov,
        }
    }
}

impl TryFrom<&SegmentConfig> for SceneSegment {
    type Error = TimelineError;

    fn try_from(c: &SegmentConfig) -> Result<Self, Self::Error> {
        Ok(SceneSegment::new(
            c.id.clone(),
            c.range,
            (&c.camera_start).into(),
            (&c.camera_end).into(),
            c.easing.parse()?,
        ))
    }
}

impl TimelineConfig {
    pub fn from_json(json: &str) -> Result<Self, TimelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, TimelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<Timeline, TimelineError> {
        let segments = self
            .segments
            .iter()
            .map(SceneSegment::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Timeline::new(segments)
    }
}

impl From<&Timeline> for TimelineConfig {
    fn from(timeline: &Timeline) -> Self {
        let segments = timeline
            .segments()
            .iter()
            .map(|s| SegmentConfig {
                id: s.id.clone(),
                range: s.range(),
                camera_start: (&s.camera_start).into(),
                camera_end: (&s.camera_end).into(),
                easing: s.easing.as_str().to_string(),
            })
            .collect();
        Self { segments }
    }
}

impl Timeline {
    /// Parse a [`TimelineConfig`] document and validate it.
    pub fn from_json(json: &str) -> Result<Timeline, TimelineError> {
        TimelineConfig::from_json(json)?.build()
    }
}
