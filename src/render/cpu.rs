use crate::{
    foundation::core::{Canvas, FrameRGBA, Point3},
    foundation::error::{DriftError, DriftResult},
    render::camera::Camera,
    render::overlay::composite_mask,
    scene::instance::{DrawCurve, FrameSnapshot, PatternInstance},
};

/// Rasterization options for [`CpuRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Straight RGBA background.
    pub background: [u8; 4],
    /// Stroke width in pixels.
    pub line_width: f64,
    /// Composite each section's overlay mask after the curves.
    pub draw_overlay: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: [18, 20, 28, 255],
            line_width: 1.0,
            draw_overlay: true,
        }
    }
}

/// Preview renderer: projects snapshots through a [`Camera`] and strokes every curve
/// as a polyline with `vello_cpu`.
#[derive(Clone, Debug)]
pub struct CpuRenderer {
    canvas: Canvas,
    camera: Camera,
    settings: RenderSettings,
    width: u16,
    height: u16,
}

impl CpuRenderer {
    /// Build a renderer for `canvas`. Dimensions must fit the CPU backend's `u16` limit.
    pub fn new(canvas: Canvas, camera: Camera, settings: RenderSettings) -> DriftResult<Self> {
        camera.validate()?;
        if !settings.line_width.is_finite() || settings.line_width <= 0.0 {
            return Err(DriftError::invalid_parameter("line_width must be > 0"));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| DriftError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| DriftError::render("canvas height exceeds u16"))?;
        Ok(Self {
            canvas,
            camera,
            settings,
            width,
            height,
        })
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Projection camera.
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Render one instance at its clock's current time.
    pub fn render_instance(&self, instance: &PatternInstance) -> DriftResult<FrameRGBA> {
        self.render(&[instance.snapshot()])
    }

    /// Render snapshots back to front, in slice order. Output is premultiplied RGBA8.
    #[tracing::instrument(level = "debug", skip_all, fields(sections = frames.len()))]
    pub fn render(&self, frames: &[FrameSnapshot<'_>]) -> DriftResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        let [r, g, b, a] = self.settings.background;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(self.settings.line_width));

        let mut stroked = 0usize;
        for snap in frames {
            for curve in &snap.curves {
                let alpha = (curve.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
                if alpha == 0 {
                    continue;
                }
                let path = self.curve_path(snap, curve);
                if path.elements().len() < 2 {
                    continue;
                }
                let [r, g, b] = curve.color.to_rgb8();
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, alpha));
                ctx.stroke_path(&path);
                stroked += 1;
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        let mut data = pixmap.data_as_u8_slice().to_vec();

        let (width, height) = (u32::from(self.width), u32::from(self.height));
        if self.settings.draw_overlay {
            for snap in frames {
                composite_mask(&mut data, width, height, snap.overlay)?;
            }
        }

        tracing::debug!(stroked, "rendered frame");
        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: true,
        })
    }

    /// World-space polyline for one curve, split wherever a point falls behind the camera.
    fn curve_path(
        &self,
        snap: &FrameSnapshot<'_>,
        curve: &DrawCurve<'_>,
    ) -> vello_cpu::kurbo::BezPath {
        let mut path = vello_cpu::kurbo::BezPath::new();
        let mut pen_down = false;
        for &p in curve.points {
            match self.project(snap.world_point(p)) {
                Some(px) if pen_down => path.line_to(px),
                Some(px) => {
                    path.move_to(px);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        path
    }

    fn project(&self, p: Point3) -> Option<vello_cpu::kurbo::Point> {
        self.camera
            .project(self.canvas, p)
            .map(|q| vello_cpu::kurbo::Point::new(q.x, q.y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
