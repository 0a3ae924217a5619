use crate::foundation::error::{DriftError, DriftResult};
use crate::foundation::math::lerp;

/// One color stop of an overlay gradient. `rgba` is straight (not premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorStop {
    /// Position along the normalized radius, in `[0, 1]`.
    pub offset: f64,
    /// Straight RGBA8 color.
    pub rgba: [u8; 4],
}

impl ColorStop {
    /// Build a stop.
    pub const fn new(offset: f64, rgba: [u8; 4]) -> Self {
        Self { offset, rgba }
    }
}

/// Elliptical gradient mask laid over a section's pattern.
///
/// `center` and `radii` are fractions of the viewport (`[0, 1]` across width and height).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayMask {
    /// Gradient center as `[u, v]` viewport fractions.
    pub center: [f64; 2],
    /// Horizontal and vertical radii as viewport fractions.
    pub radii: [f64; 2],
    /// Stops ordered by offset.
    pub stops: Vec<ColorStop>,
}

impl Default for OverlayMask {
    fn default() -> Self {
        Self::vignette([0.5, 0.5])
    }
}

impl OverlayMask {
    /// Clear center fading to a dark rim, centered at `center`.
    pub fn vignette(center: [f64; 2]) -> Self {
        Self {
            center,
            radii: [0.75, 0.65],
            stops: vec![
                ColorStop::new(0.0, [0, 0, 0, 0]),
                ColorStop::new(0.55, [0, 0, 0, 48]),
                ColorStop::new(1.0, [0, 0, 0, 176]),
            ],
        }
    }

    /// Radii must be positive; stops non-empty, in `[0, 1]` and non-decreasing.
    pub fn validate(&self) -> DriftResult<()> {
        if self.center.iter().any(|v| !v.is_finite()) {
            return Err(DriftError::invalid_parameter("overlay center must be finite"));
        }
        if self.radii.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(DriftError::invalid_parameter(
                "overlay radii must be finite and > 0",
            ));
        }
        if self.stops.is_empty() {
            return Err(DriftError::invalid_parameter(
                "overlay needs at least one color stop",
            ));
        }
        let mut prev = 0.0;
        for s in &self.stops {
            if !(0.0..=1.0).contains(&s.offset) || s.offset < prev {
                return Err(DriftError::invalid_parameter(
                    "overlay stop offsets must be in [0, 1] and non-decreasing",
                ));
            }
            prev = s.offset;
        }
        Ok(())
    }

    /// Normalized elliptical distance of `(u, v)` from the center; `1.0` on the rim.
    pub fn distance(&self, u: f64, v: f64) -> f64 {
        let dx = (u - self.center[0]) / self.radii[0];
        let dy = (v - self.center[1]) / self.radii[1];
        (dx * dx + dy * dy).sqrt()
    }

    /// Straight RGBA at viewport fraction `(u, v)`, clamped to the end stops.
    pub fn sample(&self, u: f64, v: f64) -> [u8; 4] {
        let Some(first) = self.stops.first() else {
            return [0, 0, 0, 0];
        };
        let d = self.distance(u, v);
        if d <= first.offset {
            return first.rgba;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if d <= b.offset {
                let span = b.offset - a.offset;
                let t = if span > 0.0 { (d - a.offset) / span } else { 1.0 };
                let mut out = [0u8; 4];
                for (c, o) in out.iter_mut().enumerate() {
                    *o = lerp(f64::from(a.rgba[c]), f64::from(b.rgba[c]), t)
                        .round()
                        .clamp(0.0, 255.0) as u8;
                }
                return out;
            }
        }
        self.stops.last().map_or(first.rgba, |s| s.rgba)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/variant/overlay.rs"]
mod tests;
