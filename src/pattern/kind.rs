use std::f64::consts::TAU;

use crate::foundation::core::Point3;
use crate::foundation::math::family_position;

/// Closed set of curve formulas a family can be built from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GeometryFamilyKind {
    /// Lemniscate-like swirl: `x = sin(a)·r`, `y = sin(2a)·(...)`.
    FigureEight,
    /// Circles alternating between two centers offset by `±circle_center_offset`.
    ConcentricCircles,
    /// Outward-growing spirals whose turn count increases across the family.
    Spiral,
}

impl GeometryFamilyKind {
    /// Every kind, in declaration order.
    pub fn all() -> &'static [Self] {
        &[Self::FigureEight, Self::ConcentricCircles, Self::Spiral]
    }

    /// Stable lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::FigureEight => "figure_eight",
            Self::ConcentricCircles => "concentric_circles",
            Self::Spiral => "spiral",
        }
    }

    /// Parse a kind identifier. Accepts a few spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "figure_eight" | "figure-eight" | "figureeight" | "eight" => Some(Self::FigureEight),
            "concentric_circles" | "concentric-circles" | "circles" | "rings" => {
                Some(Self::ConcentricCircles)
            }
            "spiral" => Some(Self::Spiral),
            _ => None,
        }
    }

    /// Evaluate the formula for one curve at sample fraction `t` in `[0, 1]`.
    pub(crate) fn point(self, shape: &ShapeConstants, curve: CurveSlot, t: f64) -> Point3 {
        let offset = curve.offset;
        match self {
            Self::FigureEight => {
                let angle = t * TAU * curve.turns;
                let radius = shape.base_radius
                    + offset * shape.radius_offset_factor
                    + (angle * 2.0).sin() * shape.radius_ripple;
                Point3::new(
                    angle.sin() * radius,
                    (angle * 2.0).sin() * (radius * shape.lobe_ratio + offset * shape.depth_factor),
                    (t - 0.5) * shape.depth_scale + offset * shape.depth_factor2,
                )
            }
            Self::ConcentricCircles => {
                let radius = shape.base_radius + offset * shape.radius_offset_factor;
                let cx = if curve.index % 2 == 0 {
                    -shape.circle_center_offset
                } else {
                    shape.circle_center_offset
                };
                let angle = TAU * t;
                Point3::new(
                    cx + radius * angle.cos(),
                    radius * angle.sin(),
                    offset * shape.circle_depth_factor,
                )
            }
            Self::Spiral => {
                let base = shape.base_radius + offset * shape.radius_offset_factor;
                let radius = base * (1.0 + shape.spiral_growth * t);
                let turns = curve.turns * (1.0 + family_position(curve.index, curve.count));
                let angle = TAU * t * turns;
                Point3::new(
                    radius * angle.cos(),
                    radius * angle.sin(),
                    (t - 0.5) * shape.depth_scale,
                )
            }
        }
    }
}

impl std::fmt::Display for GeometryFamilyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-curve inputs to a point formula.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CurveSlot {
    pub(crate) index: usize,
    pub(crate) count: usize,
    pub(crate) offset: f64,
    pub(crate) turns: f64,
}

/// Art-direction constants consumed by the point formulas.
///
/// None of these are load-bearing for the family structure; they only shape the curves.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeConstants {
    /// Radius of the curve at zero offset.
    pub base_radius: f64,
    /// How much a curve's offset widens its radius.
    pub radius_offset_factor: f64,
    /// Amplitude of the `sin(2·angle)` radius ripple (figure-eight only, `0` for the 3D form).
    pub radius_ripple: f64,
    /// Vertical lobe height relative to the radius (figure-eight only).
    pub lobe_ratio: f64,
    /// How much offset adds to the lobe height (figure-eight only).
    pub depth_factor: f64,
    /// Depth span swept from `t = 0` to `t = 1`.
    pub depth_scale: f64,
    /// Depth shift per unit of offset (figure-eight only).
    pub depth_factor2: f64,
    /// Horizontal distance of each circle center from the family origin.
    pub circle_center_offset: f64,
    /// Depth shift per unit of offset (concentric circles only).
    pub circle_depth_factor: f64,
    /// Radial growth over a spiral's length (`radius·(1 + growth·t)`).
    pub spiral_growth: f64,
}

impl Default for ShapeConstants {
    fn default() -> Self {
        Self {
            base_radius: 2.0,
            radius_offset_factor: 0.4,
            radius_ripple: 0.0,
            lobe_ratio: 0.6,
            depth_factor: 0.15,
            depth_scale: 0.5,
            depth_factor2: 0.1,
            circle_center_offset: 0.3,
            circle_depth_factor: 0.1,
            spiral_growth: 0.3,
        }
    }
}

impl ShapeConstants {
    /// Default constants tuned for `kind`.
    pub fn for_kind(kind: GeometryFamilyKind) -> Self {
        let base = Self::default();
        match kind {
            GeometryFamilyKind::FigureEight => base,
            GeometryFamilyKind::ConcentricCircles => Self {
                base_radius: 1.2,
                radius_offset_factor: 0.5,
                ..base
            },
            GeometryFamilyKind::Spiral => Self {
                base_radius: 1.0,
                radius_offset_factor: 0.3,
                depth_scale: 0.3,
                ..base
            },
        }
    }

    /// Constants reproducing the flat SVG swirl: no depth, rippled radius.
    pub fn legacy_flat() -> Self {
        Self {
            radius_ripple: 0.43,
            lobe_ratio: 0.55,
            depth_scale: 0.0,
            depth_factor2: 0.0,
            ..Self::default()
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        [
            self.base_radius,
            self.radius_offset_factor,
            self.radius_ripple,
            self.lobe_ratio,
            self.depth_factor,
            self.depth_scale,
            self.depth_factor2,
            self.circle_center_offset,
            self.circle_depth_factor,
            self.spiral_growth,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/kind.rs"]
mod tests;
