//! Validated, immutable scene timeline and the pure progress → pose lookup.

use crate::easing::Easing;
use crate::error::TimelineError;
use crate::pose::{CameraKeyframe, CameraPose};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Largest mismatch tolerated between adjacent segment boundaries. Accepted
/// boundaries are snapped so coverage of `[0, 1]` is exact.
pub const BOUNDARY_EPSILON: f32 = 1e-6;

/// One leg of the cinematic timeline covering `[start, end)` of scroll
/// progress (the last leg is closed at 1).
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSegment {
    pub id: String,
    pub start: f32,
    pub end: f32,
    pub camera_start: CameraKeyframe,
    pub camera_end: CameraKeyframe,
    pub easing: Easing,
}

impl SceneSegment {
    pub fn new(
        id: impl Into<String>,
        range: [f32; 2],
        camera_start: CameraKeyframe,
        camera_end: CameraKeyframe,
        easing: Easing,
    ) -> Self {
        Self {
            id: id.into(),
            start: range[0],
            end: range[1],
            camera_start,
            camera_end,
            easing,
        }
    }

    #[inline]
    pub fn range(&self) -> [f32; 2] {
        [self.start, self.end]
    }

    /// Position of `progress` inside this segment, clamped to `[0, 1]`.
    #[inline]
    pub fn local_fraction(&self, progress: f32) -> f32 {
        let width = self.end - self.start;
        if width <= 0.0 {
            return 0.0;
        }
        ((progress - self.start) / width).clamp(0.0, 1.0)
    }

    fn validate(&self) -> Result<(), TimelineError> {
        if !(self.start.is_finite() && self.end.is_finite()) || self.start >= self.end {
            return Err(TimelineError::InvalidRange {
                id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        for key in [&self.camera_start, &self.camera_end] {
            if !key.is_finite() {
                return Err(TimelineError::NonFinite(self.id.clone()));
            }
            if let Some(fov) = key.fov {
                if fov <= 0.0 || fov >= 180.0 {
                    return Err(TimelineError::InvalidFov {
                        id: self.id.clone(),
                        fov,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Output of [`Timeline::sample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineSample {
    /// 0-based index of the resolved segment.
    pub index: usize,
    pub local: f32,
    pub eased: f32,
    pub pose: CameraPose,
}

impl TimelineSample {
    /// 1-based scene index as exposed to page logic.
    #[inline]
    pub fn scene(&self) -> usize {
        self.index + 1
    }
}

#[derive(Clone, Debug)]
pub struct Timeline {
    segments: SmallVec<[SceneSegment; 8]>,
    ids: FnvHashMap<String, usize>,
}

impl Timeline {
    /// Validate and freeze an ordered list of segments.
    pub fn new(segments: impl IntoIterator<Item = SceneSegment>) -> Result<Self, TimelineError> {
        let mut segments: SmallVec<[SceneSegment; 8]> = segments.into_iter().collect();
        if segments.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut ids = FnvHashMap::default();
        for (i, seg) in segments.iter().enumerate() {
            seg.validate()?;
            if ids.insert(seg.id.clone(), i).is_some() {
                return Err(TimelineError::DuplicateId(seg.id.clone()));
            }
        }

        let first = &segments[0];
        if first.start.abs() > BOUNDARY_EPSILON {
            return Err(TimelineError::StartNotZero {
                id: first.id.clone(),
                start: first.start,
            });
        }
        let last = &segments[segments.len() - 1];
        if (last.end - 1.0).abs() > BOUNDARY_EPSILON {
            return Err(TimelineError::EndNotOne {
                id: last.id.clone(),
                end: last.end,
            });
        }
        for pair in segments.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if (prev.end - next.start).abs() > BOUNDARY_EPSILON {
                return Err(TimelineError::Gap {
                    prev: prev.id.clone(),
                    next: next.id.clone(),
                    end: prev.end,
                    start: next.start,
                });
            }
        }

        // snap boundaries within tolerance
        segments[0].start = 0.0;
        for i in 1..segments.len() {
            segments[i].start = segments[i - 1].end;
        }
        let last = segments.len() - 1;
        segments[last].end = 1.0;
        if let Some(seg) = segments.iter().find(|s| s.start >= s.end) {
            return Err(TimelineError::InvalidRange {
                id: seg.id.clone(),
                start: seg.start,
                end: seg.end,
            });
        }

        Ok(Self { segments, ids })
    }

    #[inline]
    pub fn segments(&self) -> &[SceneSegment] {
        &self.segments
    }

    #[inline]
    pub fn segment(&self, index: usize) -> Option<&SceneSegment> {
        self.segments.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a validated timeline.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn scene_count(&self) -> usize {
        self.segments.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.get(id).copied()
    }

    /// Index of the segment containing `progress`.
    ///
    /// Out-of-range input is clamped; NaN resolves to nothing. Interior
    /// boundaries belong to the segment that starts there and `1.0` belongs
    /// to the last segment.
    pub fn resolve(&self, progress: f32) -> Option<usize> {
        if progress.is_nan() {
            return None;
        }
        let p = progress.clamp(0.0, 1.0);
        let last = self.segments.len().checked_sub(1)?;
        self.segments
            .iter()
            .position(|s| p >= s.start && p < s.end)
            .or_else(|| (p >= self.segments[last].end).then_some(last))
    }

    /// Pose at `progress`. Pure in `(self, progress)`.
    pub fn sample(&self, progress: f32) -> Option<TimelineSample> {
        let index = self.resolve(progress)?;
        let seg = &self.segments[index];
        let local = seg.local_fraction(progress.clamp(0.0, 1.0));
        let eased = seg.easing.apply(local);
        Some(TimelineSample {
            index,
            local,
            eased,
            pose: seg.camera_start.interpolate(&seg.camera_end, eased),
        })
    }
}
