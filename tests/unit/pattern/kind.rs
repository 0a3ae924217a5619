use super::*;

fn slot(index: usize, count: usize, offset: f64, turns: f64) -> CurveSlot {
    CurveSlot {
        index,
        count,
        offset,
        turns,
    }
}

#[test]
fn names_roundtrip() {
    for &k in GeometryFamilyKind::all() {
        assert_eq!(GeometryFamilyKind::from_name(k.name()), Some(k));
        assert_eq!(k.to_string(), k.name());
    }
    assert_eq!(
        GeometryFamilyKind::from_name(" Figure-Eight "),
        Some(GeometryFamilyKind::FigureEight)
    );
    assert_eq!(GeometryFamilyKind::from_name("lissajous"), None);
}

#[test]
fn figure_eight_starts_on_the_depth_axis() {
    let shape = ShapeConstants::default();
    let p = GeometryFamilyKind::FigureEight.point(&shape, slot(0, 10, -1.0, 2.0), 0.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 0.0);
    let expected_z = -0.5 * shape.depth_scale + -1.0 * shape.depth_factor2;
    assert!((p.z - expected_z).abs() < 1e-12);
}

#[test]
fn figure_eight_quarter_turn_reaches_full_radius() {
    let shape = ShapeConstants::default();
    // one turn: angle = pi/2 at t = 0.25
    let p = GeometryFamilyKind::FigureEight.point(&shape, slot(0, 1, 0.0, 1.0), 0.25);
    assert!((p.x - shape.base_radius).abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);
}

#[test]
fn ripple_only_changes_radius() {
    let flat = ShapeConstants::default();
    let rippled = ShapeConstants {
        radius_ripple: 0.5,
        ..flat
    };
    let s = slot(3, 10, 0.2, 2.0);
    // sin(2·angle) = 0 at angle = pi/2 (t = 1/8 for two turns)
    let a = GeometryFamilyKind::FigureEight.point(&flat, s, 0.125);
    let b = GeometryFamilyKind::FigureEight.point(&rippled, s, 0.125);
    assert!((a.x - b.x).abs() < 1e-12);
    let c = GeometryFamilyKind::FigureEight.point(&flat, s, 0.0625);
    let d = GeometryFamilyKind::FigureEight.point(&rippled, s, 0.0625);
    assert!(d.x > c.x);
}

#[test]
fn circles_alternate_centers_and_keep_radius() {
    let shape = ShapeConstants::for_kind(GeometryFamilyKind::ConcentricCircles);
    let even = slot(0, 4, 0.0, 1.0);
    let odd = slot(1, 4, 0.0, 1.0);
    for t in [0.0, 0.1, 0.37, 0.5, 0.9] {
        let p = GeometryFamilyKind::ConcentricCircles.point(&shape, even, t);
        let q = GeometryFamilyKind::ConcentricCircles.point(&shape, odd, t);
        let rp = ((p.x + shape.circle_center_offset).powi(2) + p.y.powi(2)).sqrt();
        let rq = ((q.x - shape.circle_center_offset).powi(2) + q.y.powi(2)).sqrt();
        assert!((rp - shape.base_radius).abs() < 1e-12);
        assert!((rq - shape.base_radius).abs() < 1e-12);
        assert_eq!(p.z, 0.0);
    }
}

#[test]
fn circles_close_on_themselves() {
    let shape = ShapeConstants::for_kind(GeometryFamilyKind::ConcentricCircles);
    let s = slot(2, 5, 0.3, 1.0);
    let a = GeometryFamilyKind::ConcentricCircles.point(&shape, s, 0.0);
    let b = GeometryFamilyKind::ConcentricCircles.point(&shape, s, 1.0);
    assert!(a.distance(b) < 1e-12);
}

#[test]
fn spiral_grows_outward() {
    let shape = ShapeConstants::for_kind(GeometryFamilyKind::Spiral);
    let s = slot(0, 3, 0.0, 2.0);
    let start = GeometryFamilyKind::Spiral.point(&shape, s, 0.0);
    let end = GeometryFamilyKind::Spiral.point(&shape, s, 1.0);
    let r0 = start.xy().hypot();
    let r1 = end.xy().hypot();
    assert!((r0 - shape.base_radius).abs() < 1e-12);
    assert!((r1 - shape.base_radius * (1.0 + shape.spiral_growth)).abs() < 1e-12);
}

#[test]
fn spiral_turns_increase_with_index() {
    let shape = ShapeConstants::for_kind(GeometryFamilyKind::Spiral);
    // first curve makes `turns` revolutions, last makes twice as many: at t = 1/4 with
    // turns = 1 the first curve is at angle pi/2, the last at angle pi.
    let first = GeometryFamilyKind::Spiral.point(&shape, slot(0, 3, 0.0, 1.0), 0.25);
    let last = GeometryFamilyKind::Spiral.point(&shape, slot(2, 3, 0.0, 1.0), 0.25);
    assert!(first.x.abs() < 1e-9 && first.y > 0.0);
    assert!(last.y.abs() < 1e-9 && last.x < 0.0);
}

#[test]
fn legacy_flat_has_no_depth() {
    let shape = ShapeConstants::legacy_flat();
    for t in [0.0, 0.3, 1.0] {
        let p = GeometryFamilyKind::FigureEight.point(&shape, slot(1, 4, 0.5, 2.0), t);
        assert_eq!(p.z, 0.0);
    }
    assert!(shape.is_finite());
    let bad = ShapeConstants {
        base_radius: f64::NAN,
        ..shape
    };
    assert!(!bad.is_finite());
}
