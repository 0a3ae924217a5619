use super::*;
use crate::clock::shared::{FixedClock, SharedClock};
use crate::foundation::error::DriftError;

fn fixed(now: f64) -> Arc<dyn TimeSource> {
    Arc::new(FixedClock(now))
}

fn small(variant: VariantName) -> PatternParams {
    let mut p = PatternParams::builtin(variant);
    p.family.num_lines = 6;
    p.family.samples_per_curve = 9;
    p
}

#[test]
fn builds_family_from_params() {
    let inst = PatternInstance::new(VariantName::About, small(VariantName::About), fixed(0.0))
        .unwrap();
    assert_eq!(inst.variant(), VariantName::About);
    assert_eq!(inst.family().len(), 6);
    assert_eq!(inst.family().point_count(), 54);
}

#[test]
fn invalid_params_fail_construction() {
    let mut p = small(VariantName::Hero);
    p.family.samples_per_curve = 1;
    let err = PatternInstance::new(VariantName::Hero, p, fixed(0.0)).unwrap_err();
    assert!(matches!(err, DriftError::InvalidParameter(_)));
}

#[test]
fn mount_falls_back_to_hero() {
    let inst =
        PatternInstance::mount("nonexistent-variant-xyz", &VariantTable::builtin(), fixed(0.0))
            .unwrap();
    assert_eq!(inst.variant(), VariantName::Hero);
    assert_eq!(inst.params(), &PatternParams::builtin(VariantName::Hero));
}

#[test]
fn mount_returns_none_when_construction_fails() {
    let mut bad = PatternParams::builtin(VariantName::Skills);
    bad.family.num_lines = 0;
    let mut table = VariantTable::builtin();
    table.overrides.insert(VariantName::Skills, bad);

    assert!(PatternInstance::mount("skills", &table, fixed(0.0)).is_none());
    assert!(PatternInstance::mount("about", &table, fixed(0.0)).is_some());
}

#[test]
fn snapshot_scales_opacity_and_borrows_geometry() {
    let params = small(VariantName::Portfolio);
    let scale = params.opacity_scale();
    let inst = PatternInstance::new(VariantName::Portfolio, params, fixed(3.0)).unwrap();
    let snap = inst.snapshot();

    assert_eq!(snap.now, 3.0);
    assert_eq!(snap.curves.len(), inst.family().len());
    for (d, c) in snap.curves.iter().zip(inst.family().curves()) {
        assert!(std::ptr::eq(d.points, c.points()));
        assert_eq!(d.color, c.color());
        assert!((d.opacity - c.base_opacity() * scale).abs() < 1e-12);
    }
    assert_eq!(snap.transform, inst.frame_transform());
    assert_eq!(snap.overlay, &inst.params().overlay);
}

#[test]
fn geometry_is_unchanged_across_frames() {
    let clock = Arc::new(SharedClock::new());
    let inst =
        PatternInstance::new(VariantName::Hero, small(VariantName::Hero), clock.clone()).unwrap();
    let before = inst.family().clone();
    let t0 = inst.frame_transform();
    for _ in 0..30 {
        clock.tick();
    }
    let t1 = inst.frame_transform();
    assert_ne!(t0.rotation, t1.rotation);
    assert_eq!(inst.family(), &before);
}

#[test]
fn placement_scales_then_moves_then_offsets() {
    let placement = Placement {
        origin: Point3::new(2.0, 0.0, -2.0),
        scale: 0.5,
    };
    let p = Point3::new(1.0, 0.0, 0.4);
    assert_eq!(
        placement.to_world(FrameTransform::IDENTITY, p),
        Point3::new(2.5, 0.0, -1.8)
    );

    let quarter = FrameTransform {
        tau: 0.0,
        rotation: std::f64::consts::FRAC_PI_2,
        translation: kurbo::Vec2::new(0.1, 0.0),
    };
    let w = placement.to_world(quarter, p);
    assert!((w.x - 2.1).abs() < 1e-12);
    assert!((w.y - 0.5).abs() < 1e-12);
}
