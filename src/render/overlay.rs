use crate::{
    foundation::error::{DriftError, DriftResult},
    foundation::math::mul_div255_u8,
    variant::overlay::OverlayMask,
};

type PremulRgba8 = [u8; 4];

fn premultiply(rgba: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(rgba[3]);
    [
        mul_div255_u8(u16::from(rgba[0]), a),
        mul_div255_u8(u16::from(rgba[1]), a),
        mul_div255_u8(u16::from(rgba[2]), a),
        rgba[3],
    ]
}

/// Source-over of premultiplied `src` onto premultiplied `dst`.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `mask` over a premultiplied RGBA8 buffer of `width × height`.
///
/// The mask is sampled at pixel centers, as fractions of the buffer size.
pub(crate) fn composite_mask(
    data: &mut [u8],
    width: u32,
    height: u32,
    mask: &OverlayMask,
) -> DriftResult<()> {
    if data.len() != width as usize * height as usize * 4 {
        return Err(DriftError::render("overlay buffer size mismatch"));
    }
    let (w, h) = (f64::from(width), f64::from(height));
    for (row_idx, row) in data.chunks_exact_mut(width as usize * 4).enumerate() {
        let v = (row_idx as f64 + 0.5) / h;
        for (col, px) in row.chunks_exact_mut(4).enumerate() {
            let u = (col as f64 + 0.5) / w;
            let src = premultiply(mask.sample(u, v));
            let out = over([px[0], px[1], px[2], px[3]], src);
            px.copy_from_slice(&out);
        }
    }
    Ok(())
}
