use crate::error::TimelineError;
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Shaping curve applied to a segment's local progress before interpolation.
///
/// Every curve maps `[0, 1]` onto `[0, 1]`, is non-decreasing, and hits both
/// endpoints exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineInOut,
    ExpoOut,
}

impl Easing {
    pub const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineInOut,
        Easing::ExpoOut,
    ];

    /// Evaluate the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t).powi(2),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            // 2^-10 short of 1.0 at t = 1 without the special case
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadIn => "power1.in",
            Self::QuadOut => "power1.out",
            Self::QuadInOut => "power1.inOut",
            Self::CubicIn => "power2.in",
            Self::CubicOut => "power2.out",
            Self::CubicInOut => "power2.inOut",
            Self::SineInOut => "sine.inOut",
            Self::ExpoOut => "expo.out",
        }
    }
}

impl FromStr for Easing {
    type Err = TimelineError;

    /// Accepts tween-library style names (`power2.inOut`) as well as the
    /// CSS-ish spellings (`ease-in-out-cubic`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        let easing = match key.as_str() {
            "linear" | "none" => Self::Linear,
            "power1.in" | "quad.in" | "ease-in-quad" => Self::QuadIn,
            "power1.out" | "quad.out" | "ease-out-quad" | "ease-out" => Self::QuadOut,
            "power1.inout" | "quad.inout" | "ease-in-out-quad" => Self::QuadInOut,
            "power2.in" | "cubic.in" | "ease-in-cubic" | "ease-in" => Self::CubicIn,
            "power2.out" | "cubic.out" | "ease-out-cubic" => Self::CubicOut,
            "power2.inout" | "cubic.inout" | "ease-in-out-cubic" | "ease-in-out" => {
                Self::CubicInOut
            }
            "sine.inout" | "ease-in-out-sine" => Self::SineInOut,
            "expo.out" | "ease-out-expo" => Self::ExpoOut,
            _ => return Err(TimelineError::UnknownEasing(s.to_string())),
        };
        Ok(easing)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
