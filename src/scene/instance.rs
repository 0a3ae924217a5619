use std::sync::Arc;

use crate::{
    animation::motion::{FrameTransform, frame_transform},
    clock::shared::TimeSource,
    foundation::core::{Hsl, Point3},
    foundation::error::DriftResult,
    pattern::family::{CurveFamily, build_family_with},
    variant::config::{PatternParams, VariantName},
    variant::overlay::OverlayMask,
    variant::table::VariantTable,
};

/// Static world-space placement of a pattern: `origin + scale·p`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// World-space origin of the family.
    pub origin: Point3,
    /// Uniform scale.
    pub scale: f64,
}

impl Placement {
    /// Place a family-space point that has already been moved by `transform`.
    ///
    /// Scale applies first, then the frame rotation and translation, then the origin.
    pub fn to_world(self, transform: FrameTransform, p: Point3) -> Point3 {
        let scaled = Point3::new(p.x * self.scale, p.y * self.scale, p.z * self.scale);
        let moved = transform.apply(scaled);
        Point3::new(
            moved.x + self.origin.x,
            moved.y + self.origin.y,
            moved.z + self.origin.z,
        )
    }
}

/// One curve ready to draw: borrowed geometry plus final color and opacity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DrawCurve<'a> {
    /// Family-space points, untouched by the frame transform.
    pub points: &'a [Point3],
    /// Curve color.
    pub color: Hsl,
    /// Base opacity scaled by the instance and variant factors.
    pub opacity: f64,
}

/// Everything the renderer needs for one section in one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot<'a> {
    /// Section variant.
    pub variant: VariantName,
    /// Clock value the frame was sampled at.
    pub now: f64,
    /// Rigid transform for this frame.
    pub transform: FrameTransform,
    /// Static placement.
    pub placement: Placement,
    /// Curves in family order.
    pub curves: Vec<DrawCurve<'a>>,
    /// Section overlay parameters.
    pub overlay: &'a OverlayMask,
}

impl FrameSnapshot<'_> {
    /// World-space position of a family-space point in this frame.
    pub fn world_point(&self, p: Point3) -> Point3 {
        self.placement.to_world(self.transform, p)
    }
}

/// A mounted section's pattern: an immutable family plus a handle on the shared clock.
///
/// Geometry is built once at construction. Each frame only recomputes the rigid
/// transform from the clock, so nothing here can fail after `new` succeeds.
pub struct PatternInstance {
    variant: VariantName,
    params: PatternParams,
    family: Arc<CurveFamily>,
    clock: Arc<dyn TimeSource>,
}

impl std::fmt::Debug for PatternInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternInstance")
            .field("variant", &self.variant)
            .field("curves", &self.family.len())
            .field("now", &self.clock.now())
            .finish()
    }
}

impl PatternInstance {
    /// Validate `params` and build the family.
    pub fn new(
        variant: VariantName,
        params: PatternParams,
        clock: Arc<dyn TimeSource>,
    ) -> DriftResult<Self> {
        params.validate()?;
        let family = build_family_with(&params.family)?;
        Ok(Self {
            variant,
            params,
            family: Arc::new(family),
            clock,
        })
    }

    /// Resolve `variant_name` through `table` and build the instance.
    ///
    /// Unknown names get the hero parameters. A construction failure is logged and
    /// yields `None`, so the section simply draws no pattern.
    pub fn mount(
        variant_name: &str,
        table: &VariantTable,
        clock: Arc<dyn TimeSource>,
    ) -> Option<Self> {
        let variant = VariantName::resolve(variant_name);
        match Self::new(variant, table.get(variant), clock) {
            Ok(instance) => Some(instance),
            Err(err) => {
                tracing::warn!(variant = variant_name, error = %err, "pattern not mounted");
                None
            }
        }
    }

    /// Resolved variant.
    pub fn variant(&self) -> VariantName {
        self.variant
    }

    /// Parameters the instance was built from.
    pub fn params(&self) -> &PatternParams {
        &self.params
    }

    /// The immutable curve family.
    pub fn family(&self) -> &CurveFamily {
        &self.family
    }

    /// Static placement from the parameters.
    pub fn placement(&self) -> Placement {
        Placement {
            origin: self.params.position,
            scale: self.params.scale,
        }
    }

    /// Current clock value.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Rigid transform for the current clock value.
    pub fn frame_transform(&self) -> FrameTransform {
        frame_transform(&self.params.motion, self.clock.now())
    }

    /// Draw data for the current clock value.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        let now = self.clock.now();
        let scale = self.params.opacity_scale();
        FrameSnapshot {
            variant: self.variant,
            now,
            transform: frame_transform(&self.params.motion, now),
            placement: self.placement(),
            curves: self
                .family
                .curves()
                .iter()
                .map(|c| DrawCurve {
                    points: c.points(),
                    color: c.color(),
                    opacity: c.base_opacity() * scale,
                })
                .collect(),
            overlay: &self.params.overlay,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/instance.rs"]
mod tests;
