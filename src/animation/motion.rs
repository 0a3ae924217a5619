use crate::{
    foundation::core::{Affine, Point3, Vec2},
    variant::config::MotionParams,
};

/// Rigid transform applied to a whole family for one frame.
///
/// Derived from the clock every frame and never stored on the instance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameTransform {
    /// Effective time `now + time_offset` the transform was computed for.
    pub tau: f64,
    /// Rotation about the depth axis, radians.
    pub rotation: f64,
    /// Translation in the XY plane.
    pub translation: Vec2,
}

impl FrameTransform {
    /// No rotation, no translation.
    pub const IDENTITY: Self = Self {
        tau: 0.0,
        rotation: 0.0,
        translation: Vec2::ZERO,
    };

    /// The 2D part as an affine: rotate, then translate.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translation) * Affine::rotate(self.rotation)
    }

    /// Apply to a point; depth is unchanged.
    pub fn apply(self, p: Point3) -> Point3 {
        let (s, c) = self.rotation.sin_cos();
        Point3::new(
            p.x * c - p.y * s + self.translation.x,
            p.x * s + p.y * c + self.translation.y,
            p.z,
        )
    }
}

/// Compute the frame transform for clock time `now`.
///
/// With `τ = now + time_offset`: rotation is `τ·rotation_speed`, translation is
/// `(sin(τ·movement_speed)·movement_amount, cos(τ·drift_speed)·drift_amount)`.
pub fn frame_transform(motion: &MotionParams, now: f64) -> FrameTransform {
    let tau = now + motion.time_offset;
    FrameTransform {
        tau,
        rotation: tau * motion.rotation_speed,
        translation: Vec2::new(
            (tau * motion.movement_speed).sin() * motion.movement_amount,
            (tau * motion.drift_speed).cos() * motion.drift_amount,
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
