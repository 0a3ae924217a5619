use crate::{
    foundation::core::{Hsl, Point3},
    foundation::error::{DriftError, DriftResult},
    foundation::math::family_position,
    pattern::color::{ColorRamp, base_opacity},
    pattern::kind::{CurveSlot, GeometryFamilyKind, ShapeConstants},
};

/// Upper bound on `num_lines × samples_per_curve` for a single family.
pub const MAX_FAMILY_POINTS: usize = 1 << 22;

/// One immutable sampled curve of a family.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Curve {
    index: usize,
    offset: f64,
    points: Vec<Point3>,
    color: Hsl,
    base_opacity: f64,
}

impl Curve {
    /// Position among sibling curves, 0-based.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Linear offset parameter, `(index − count/2)·spacing`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Sampled points, first at `t = 0`, last at `t = 1`.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Gradient color for this curve.
    pub fn color(&self) -> Hsl {
        self.color
    }

    /// Position-derived opacity before instance and variant scaling.
    pub fn base_opacity(&self) -> f64 {
        self.base_opacity
    }
}

/// Full description of a family to build.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilySpec {
    /// Point formula.
    pub kind: GeometryFamilyKind,
    /// Number of curves, at least 1.
    pub num_lines: usize,
    /// Offset step between neighbouring curves. Zero is legal and collapses the family.
    pub line_spacing: f64,
    /// Points per curve including both endpoints, at least 2.
    pub samples_per_curve: usize,
    /// Parametric turn count.
    pub turns: f64,
    /// Shape constants for the point formula.
    #[serde(default)]
    pub shape: ShapeConstants,
    /// Color gradient across the family.
    #[serde(default)]
    pub colors: ColorRamp,
}

impl FamilySpec {
    /// Spec with the kind's default shape constants and the default color ramp.
    pub fn new(
        kind: GeometryFamilyKind,
        num_lines: usize,
        line_spacing: f64,
        samples_per_curve: usize,
        turns: f64,
    ) -> Self {
        Self {
            kind,
            num_lines,
            line_spacing,
            samples_per_curve,
            turns,
            shape: ShapeConstants::for_kind(kind),
            colors: ColorRamp::default(),
        }
    }

    /// Check every construction precondition.
    pub fn validate(&self) -> DriftResult<()> {
        if self.num_lines < 1 {
            return Err(DriftError::invalid_parameter("num_lines must be >= 1"));
        }
        if self.samples_per_curve < 2 {
            return Err(DriftError::invalid_parameter(
                "samples_per_curve must be >= 2",
            ));
        }
        let points = self.num_lines.checked_mul(self.samples_per_curve);
        if points.is_none_or(|n| n > MAX_FAMILY_POINTS) {
            return Err(DriftError::invalid_parameter(format!(
                "num_lines × samples_per_curve must be <= {MAX_FAMILY_POINTS}"
            )));
        }
        if !self.line_spacing.is_finite() {
            return Err(DriftError::invalid_parameter("line_spacing must be finite"));
        }
        if !self.turns.is_finite() {
            return Err(DriftError::invalid_parameter("turns must be finite"));
        }
        if !self.shape.is_finite() {
            return Err(DriftError::invalid_parameter(
                "shape constants must be finite",
            ));
        }
        self.colors.validate()
    }
}

/// Ordered, immutable set of curves sharing one formula.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CurveFamily {
    spec: FamilySpec,
    curves: Vec<Curve>,
}

impl CurveFamily {
    /// The spec this family was built from.
    pub fn spec(&self) -> &FamilySpec {
        &self.spec
    }

    /// Formula used by every curve.
    pub fn kind(&self) -> GeometryFamilyKind {
        self.spec.kind
    }

    /// Curves in index order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Number of curves, always `spec().num_lines`.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Always false for a successfully built family.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Total number of sampled points across all curves.
    pub fn point_count(&self) -> usize {
        self.curves.iter().map(|c| c.points.len()).sum()
    }
}

/// Build a family with the kind's default shape constants and color ramp.
pub fn build_family(
    kind: GeometryFamilyKind,
    num_lines: usize,
    line_spacing: f64,
    samples_per_curve: usize,
    turns: f64,
) -> DriftResult<CurveFamily> {
    build_family_with(&FamilySpec::new(
        kind,
        num_lines,
        line_spacing,
        samples_per_curve,
        turns,
    ))
}

/// Build a family from a full spec.
///
/// Pure: identical specs yield bit-identical points.
#[tracing::instrument(level = "debug", skip(spec), fields(kind = %spec.kind, num_lines = spec.num_lines))]
pub fn build_family_with(spec: &FamilySpec) -> DriftResult<CurveFamily> {
    spec.validate()?;

    let n = spec.num_lines;
    let half = n as f64 / 2.0;
    let last_sample = (spec.samples_per_curve - 1) as f64;

    let curves = (0..n)
        .map(|index| {
            let offset = (index as f64 - half) * spec.line_spacing;
            let slot = CurveSlot {
                index,
                count: n,
                offset,
                turns: spec.turns,
            };
            let points = (0..spec.samples_per_curve)
                .map(|k| spec.kind.point(&spec.shape, slot, k as f64 / last_sample))
                .collect();
            let p = family_position(index, n);
            Curve {
                index,
                offset,
                points,
                color: spec.colors.at(p),
                base_opacity: base_opacity(p),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(points = spec.samples_per_curve * n, "built curve family");
    Ok(CurveFamily {
        spec: *spec,
        curves,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/family.rs"]
mod tests;
