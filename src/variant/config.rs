use std::str::FromStr;

use crate::{
    foundation::core::Point3,
    foundation::error::{DriftError, DriftResult},
    pattern::family::FamilySpec,
    pattern::kind::GeometryFamilyKind,
    variant::overlay::OverlayMask,
};

/// Page sections that carry a decorative pattern.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VariantName {
    /// Landing section; also the fallback for unrecognized names.
    Hero,
    /// Biography section.
    About,
    /// Research and project listing.
    Portfolio,
    /// Contact section.
    Contact,
    /// Skills section.
    Skills,
}

impl VariantName {
    /// Every variant, in declaration order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Hero,
            Self::About,
            Self::Portfolio,
            Self::Contact,
            Self::Skills,
        ]
    }

    /// Stable lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
            Self::Skills => "skills",
        }
    }

    /// Lenient lookup: unrecognized names resolve to [`VariantName::Hero`].
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(variant = name, "unknown variant, falling back to hero");
            Self::Hero
        })
    }
}

impl FromStr for VariantName {
    type Err = DriftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DriftError::unknown_variant(s))
    }
}

impl std::fmt::Display for VariantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Speeds and offsets driving the per-frame transform.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionParams {
    /// Seconds added to the shared clock, so sections continue each other's motion.
    pub time_offset: f64,
    /// Radians of rotation per second.
    pub rotation_speed: f64,
    /// Angular speed of the horizontal sway.
    pub movement_speed: f64,
    /// Amplitude of the horizontal sway.
    pub movement_amount: f64,
    /// Angular speed of the vertical drift.
    pub drift_speed: f64,
    /// Amplitude of the vertical drift.
    pub drift_amount: f64,
}

impl MotionParams {
    /// Default motion with the given time offset.
    pub fn with_offset(time_offset: f64) -> Self {
        Self {
            time_offset,
            ..Self::default()
        }
    }

    fn is_finite(&self) -> bool {
        [
            self.time_offset,
            self.rotation_speed,
            self.movement_speed,
            self.movement_amount,
            self.drift_speed,
            self.drift_amount,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            time_offset: 0.0,
            rotation_speed: 0.05,
            movement_speed: 0.1,
            movement_amount: 0.3,
            drift_speed: 0.06,
            drift_amount: 0.2,
        }
    }
}

/// Everything a section needs to build and animate its pattern.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternParams {
    /// Family geometry.
    pub family: FamilySpec,
    /// Uniform scale applied at draw time.
    pub scale: f64,
    /// Instance-level opacity factor in `[0, 1]`.
    pub base_opacity: f64,
    /// Per-variant opacity factor.
    pub opacity_multiplier: f64,
    /// World-space origin of the pattern.
    pub position: Point3,
    /// Per-frame motion.
    pub motion: MotionParams,
    /// Gradient mask laid over the section.
    pub overlay: OverlayMask,
}

impl PatternParams {
    /// Built-in parameters for `variant`.
    pub fn builtin(variant: VariantName) -> Self {
        match variant {
            VariantName::Hero => Self {
                family: FamilySpec::new(GeometryFamilyKind::FigureEight, 200, 0.02, 301, 2.0),
                scale: 1.0,
                base_opacity: 0.9,
                opacity_multiplier: 1.0,
                position: Point3::new(0.0, 0.0, -2.0),
                motion: MotionParams::with_offset(0.0),
                overlay: OverlayMask::vignette([0.5, 0.5]),
            },
            VariantName::About => Self {
                family: FamilySpec::new(GeometryFamilyKind::ConcentricCircles, 60, 0.04, 181, 1.0),
                scale: 0.8,
                base_opacity: 0.8,
                opacity_multiplier: 0.85,
                position: Point3::new(2.0, 0.0, -2.0),
                motion: MotionParams::with_offset(50.0),
                overlay: OverlayMask::vignette([0.7, 0.5]),
            },
            VariantName::Portfolio => Self {
                family: FamilySpec::new(GeometryFamilyKind::Spiral, 40, 0.05, 241, 2.5),
                scale: 0.7,
                base_opacity: 0.8,
                opacity_multiplier: 0.75,
                position: Point3::new(-2.0, 0.0, -2.0),
                motion: MotionParams::with_offset(100.0),
                overlay: OverlayMask::vignette([0.3, 0.5]),
            },
            VariantName::Contact => Self {
                family: FamilySpec::new(GeometryFamilyKind::Spiral, 32, 0.05, 221, 2.2),
                scale: 0.9,
                base_opacity: 0.8,
                opacity_multiplier: 0.8,
                position: Point3::new(0.0, 0.0, -2.0),
                motion: MotionParams::with_offset(150.0),
                overlay: OverlayMask::vignette([0.5, 0.5]),
            },
            VariantName::Skills => Self {
                family: FamilySpec::new(GeometryFamilyKind::Spiral, 24, 0.05, 201, 2.0),
                scale: 0.6,
                base_opacity: 0.8,
                opacity_multiplier: 0.7,
                position: Point3::new(0.0, 0.0, -2.0),
                motion: MotionParams::with_offset(200.0),
                overlay: OverlayMask::vignette([0.5, 0.5]),
            },
        }
    }

    /// Check the family spec and every instance-level factor.
    pub fn validate(&self) -> DriftResult<()> {
        self.family.validate()?;
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(DriftError::invalid_parameter("scale must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.base_opacity) {
            return Err(DriftError::invalid_parameter(
                "base_opacity must be in [0, 1]",
            ));
        }
        if !self.opacity_multiplier.is_finite() || self.opacity_multiplier < 0.0 {
            return Err(DriftError::invalid_parameter(
                "opacity_multiplier must be finite and >= 0",
            ));
        }
        let p = self.position;
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(DriftError::invalid_parameter("position must be finite"));
        }
        if !self.motion.is_finite() {
            return Err(DriftError::invalid_parameter("motion values must be finite"));
        }
        self.overlay.validate()
    }

    /// Opacity multiplier applied on top of every curve's base opacity.
    pub fn opacity_scale(&self) -> f64 {
        self.base_opacity * self.opacity_multiplier
    }
}

/// Resolve a section name against the built-in table; unknown names get hero parameters.
pub fn resolve(variant_name: &str) -> PatternParams {
    PatternParams::builtin(VariantName::resolve(variant_name))
}

#[cfg(test)]
#[path = "../../tests/unit/variant/config.rs"]
mod tests;
