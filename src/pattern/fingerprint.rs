use crate::foundation::math::Fnv1a64;
use crate::pattern::family::CurveFamily;

/// Stable digest of a built family, for visual-regression checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FamilyFingerprint(pub u64);

impl std::fmt::Display for FamilyFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Hash every point coordinate, color channel and base opacity by bit pattern.
pub fn fingerprint_family(family: &CurveFamily) -> FamilyFingerprint {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(family.kind().name().as_bytes());
    h.write_u64(family.len() as u64);
    for curve in family.curves() {
        h.write_u64(curve.index() as u64);
        h.write_f64(curve.offset());
        let c = curve.color();
        h.write_f64(c.hue);
        h.write_f64(c.saturation);
        h.write_f64(c.lightness);
        h.write_f64(curve.base_opacity());
        h.write_u64(curve.points().len() as u64);
        for p in curve.points() {
            h.write_f64(p.x);
            h.write_f64(p.y);
            h.write_f64(p.z);
        }
    }
    FamilyFingerprint(h.finish())
}
