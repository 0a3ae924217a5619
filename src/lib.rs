//! Driftline generates the animated line-art patterns drawn behind page sections.
//!
//! A section names a variant; the variant selects a curve family (figure-eight,
//! concentric circles or spiral) and its visual parameters. The family is built once
//! and never mutated. Every frame a single process-wide clock advances by a fixed
//! step and each mounted section derives a rigid rotation and translation from it,
//! so all sections stay phase-locked.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `variant name -> PatternParams` through a [`VariantTable`]
//!    (unknown names fall back to hero)
//! 2. **Build**: `FamilySpec -> CurveFamily` via [`build_family_with`] (pure, deterministic)
//! 3. **Animate**: `SharedClock::now() + time_offset -> FrameTransform` each frame
//! 4. **Render** (optional): `FrameSnapshot -> FrameRGBA` with the CPU preview renderer
//!
//! Key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Immutable geometry**: only the per-frame transform changes after construction.
//! - **Fail silently at the edge**: a section whose pattern cannot be built draws nothing.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod clock;
mod foundation;
mod pattern;
mod render;
mod scene;
mod variant;

pub use animation::motion::{FrameTransform, frame_transform};
pub use clock::shared::{DEFAULT_TICK_SECS, FixedClock, SharedClock, TimeSource};
pub use foundation::core::{Affine, Canvas, FrameRGBA, Hsl, Point3, Vec2};
pub use foundation::error::{DriftError, DriftResult};
pub use pattern::color::{ColorRamp, base_opacity};
pub use pattern::family::{
    Curve, CurveFamily, FamilySpec, MAX_FAMILY_POINTS, build_family, build_family_with,
};
pub use pattern::fingerprint::{FamilyFingerprint, fingerprint_family};
pub use pattern::kind::{GeometryFamilyKind, ShapeConstants};
pub use render::camera::Camera;
pub use render::cpu::{CpuRenderer, RenderSettings};
pub use scene::driver::FrameDriver;
pub use scene::instance::{DrawCurve, FrameSnapshot, PatternInstance, Placement};
pub use variant::config::{MotionParams, PatternParams, VariantName, resolve};
pub use variant::overlay::{ColorStop, OverlayMask};
pub use variant::table::VariantTable;
