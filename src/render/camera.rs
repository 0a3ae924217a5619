use crate::{
    foundation::core::{Canvas, Point3},
    foundation::error::{DriftError, DriftResult},
};

/// Perspective camera on the depth axis, looking towards negative `z`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Camera position on the depth axis.
    pub z: f64,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
    /// Points closer than this to the camera plane are culled.
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            z: 5.0,
            fov_y_deg: 50.0,
            near: 0.1,
        }
    }
}

impl Camera {
    /// Field of view must be in `(0, 180)` and `near` positive.
    pub fn validate(&self) -> DriftResult<()> {
        if !self.z.is_finite() {
            return Err(DriftError::invalid_parameter("camera z must be finite"));
        }
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(DriftError::invalid_parameter(
                "camera fov must be in (0, 180) degrees",
            ));
        }
        if !self.near.is_finite() || self.near <= 0.0 {
            return Err(DriftError::invalid_parameter("camera near must be > 0"));
        }
        Ok(())
    }

    /// Pixels per world unit at unit distance for `canvas`.
    pub fn focal_px(&self, canvas: Canvas) -> f64 {
        let half = self.fov_y_deg.to_radians() / 2.0;
        f64::from(canvas.height) / 2.0 / half.tan()
    }

    /// Project a world point to pixel coordinates, `y` down. `None` when behind `near`.
    pub fn project(&self, canvas: Canvas, p: Point3) -> Option<kurbo::Point> {
        let depth = self.z - p.z;
        if depth < self.near {
            return None;
        }
        let f = self.focal_px(canvas) / depth;
        Some(kurbo::Point::new(
            f64::from(canvas.width) / 2.0 + p.x * f,
            f64::from(canvas.height) / 2.0 - p.y * f,
        ))
    }
}
