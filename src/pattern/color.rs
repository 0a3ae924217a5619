use crate::foundation::core::Hsl;
use crate::foundation::error::{DriftError, DriftResult};
use crate::foundation::math::lerp;

/// Affine HSL gradient across a curve family.
///
/// Each channel is `start + span·p` where `p` is the curve's family position in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorRamp {
    /// Hue (degrees) of the first curve.
    pub hue_start: f64,
    /// Hue change from first to last curve.
    pub hue_span: f64,
    /// Saturation of the first curve.
    pub saturation_start: f64,
    /// Saturation change from first to last curve.
    pub saturation_span: f64,
    /// Lightness of the first curve.
    pub lightness_start: f64,
    /// Lightness change from first to last curve.
    pub lightness_span: f64,
}

impl Default for ColorRamp {
    /// Warm gold drifting towards bronze: hue rises slightly, lightness falls.
    fn default() -> Self {
        Self {
            hue_start: 32.0,
            hue_span: 10.0,
            saturation_start: 0.55,
            saturation_span: 0.2,
            lightness_start: 0.64,
            lightness_span: -0.3,
        }
    }
}

impl ColorRamp {
    /// Color at family position `p`.
    pub fn at(&self, p: f64) -> Hsl {
        Hsl {
            hue: lerp(self.hue_start, self.hue_start + self.hue_span, p),
            saturation: lerp(
                self.saturation_start,
                self.saturation_start + self.saturation_span,
                p,
            ),
            lightness: lerp(
                self.lightness_start,
                self.lightness_start + self.lightness_span,
                p,
            ),
        }
    }

    /// Saturation and lightness must stay inside `[0, 1]` over the whole ramp.
    pub fn validate(&self) -> DriftResult<()> {
        let values = [
            self.hue_start,
            self.hue_span,
            self.saturation_start,
            self.saturation_span,
            self.lightness_start,
            self.lightness_span,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(DriftError::invalid_parameter(
                "color ramp values must be finite",
            ));
        }
        for (name, start, span) in [
            ("saturation", self.saturation_start, self.saturation_span),
            ("lightness", self.lightness_start, self.lightness_span),
        ] {
            let end = start + span;
            if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
                return Err(DriftError::invalid_parameter(format!(
                    "color ramp {name} must stay within [0, 1] (got {start}..{end})"
                )));
            }
        }
        Ok(())
    }
}

/// Base opacity at family position `p`: `0.25 + 0.25·|2p − 1|`.
///
/// Edge curves reach `0.5`, the middle curve `0.25`.
pub fn base_opacity(p: f64) -> f64 {
    0.25 + 0.25 * (2.0 * p - 1.0).abs()
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/color.rs"]
mod tests;
