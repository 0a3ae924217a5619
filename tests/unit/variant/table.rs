use super::*;
use crate::pattern::kind::GeometryFamilyKind;

#[test]
fn builtin_table_matches_free_resolve() {
    let t = VariantTable::builtin();
    for &v in VariantName::all() {
        assert_eq!(t.resolve(v.name()), crate::variant::config::resolve(v.name()));
        assert!(!t.is_overridden(v));
    }
    assert_eq!(t.resolve("unknown-section"), t.resolve("hero"));
}

#[test]
fn partial_override_merges_onto_same_named_builtin() {
    let json = r#"{
        "variants": {
            "about": { "scale": 0.5, "motion": { "time_offset": 75.0 } },
            "portfolio": { "family": { "num_lines": 12, "kind": "figure_eight" } }
        }
    }"#;
    let t = VariantTable::from_json_str(json).unwrap();

    let about = t.get(VariantName::About);
    let builtin_about = PatternParams::builtin(VariantName::About);
    assert_eq!(about.scale, 0.5);
    assert_eq!(about.motion.time_offset, 75.0);
    assert_eq!(about.motion.rotation_speed, builtin_about.motion.rotation_speed);
    assert_eq!(about.family, builtin_about.family);

    let portfolio = t.get(VariantName::Portfolio);
    assert_eq!(portfolio.family.num_lines, 12);
    assert_eq!(portfolio.family.kind, GeometryFamilyKind::FigureEight);
    assert!(t.is_overridden(VariantName::Portfolio));
    assert!(!t.is_overridden(VariantName::Hero));
}

#[test]
fn unknown_names_still_fall_back_through_an_overridden_hero() {
    let t = VariantTable::from_json_str(r#"{"variants": {"hero": {"scale": 2.0}}}"#).unwrap();
    assert_eq!(t.resolve("does-not-exist").scale, 2.0);
}

#[test]
fn invalid_override_is_rejected_with_variant_name() {
    let err = VariantTable::from_json_str(r#"{"variants": {"skills": {"scale": -1.0}}}"#)
        .unwrap_err();
    match err {
        DriftError::InvalidParameter(msg) => assert!(msg.contains("skills")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_section_or_field_in_file_is_a_serde_error() {
    let err = VariantTable::from_json_str(r#"{"variants": {"blog": {}}}"#).unwrap_err();
    assert!(matches!(err, DriftError::Serde(_)));

    let err = VariantTable::from_json_str(r#"{"variants": {"hero": {"scal": 1.0}}}"#)
        .unwrap_err();
    assert!(matches!(err, DriftError::Serde(_)));

    let err = VariantTable::from_json_str("not json").unwrap_err();
    assert!(matches!(err, DriftError::Serde(_)));

    for nested in [
        r#"{"variants": {"hero": {"family": {"shape": {"base_radus": 3.0}}}}}"#,
        r#"{"variants": {"hero": {"family": {"colors": {"hue_strat": 1.0}}}}}"#,
        r#"{"variants": {"hero": {"overlay": {"centre": [0.1, 0.1]}}}}"#,
        r#"{"variants": {"hero": {"overlay": {"stops": [{"offset": 0.0, "rgb": [0, 0, 0]}]}}}}"#,
    ] {
        let err = VariantTable::from_json_str(nested).unwrap_err();
        assert!(matches!(err, DriftError::Serde(_)), "accepted {nested}");
    }
}

#[test]
fn huge_family_override_is_an_invalid_parameter() {
    let err = VariantTable::from_json_str(
        r#"{"variants": {"hero": {"family": {"num_lines": 1000000000000000000}}}}"#,
    )
    .unwrap_err();
    match err {
        DriftError::InvalidParameter(msg) => assert!(msg.contains("hero")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn switching_kind_starts_from_that_kinds_shape() {
    let t = VariantTable::from_json_str(r#"{"variants": {"hero": {"family": {"kind": "spiral"}}}}"#)
        .unwrap();
    let hero = t.get(VariantName::Hero);
    assert_eq!(hero.family.kind, GeometryFamilyKind::Spiral);
    assert_eq!(
        hero.family.shape,
        crate::pattern::kind::ShapeConstants::for_kind(GeometryFamilyKind::Spiral)
    );

    let t = VariantTable::from_json_str(
        r#"{"variants": {"hero": {"family": {"kind": "spiral", "shape": {"spiral_growth": 0.5}}}}}"#,
    )
    .unwrap();
    let shape = t.get(VariantName::Hero).family.shape;
    assert_eq!(shape.spiral_growth, 0.5);
    assert_eq!(shape.base_radius, 2.0);
}

#[test]
fn missing_file_is_wrapped_io_error() {
    let err = VariantTable::from_json_path(std::path::Path::new("does/not/exist.json"))
        .unwrap_err();
    assert!(matches!(err, DriftError::Other(_)));
}

#[test]
fn with_override_replaces_whole_entry() {
    let mut p = PatternParams::builtin(VariantName::Hero);
    p.base_opacity = 0.1;
    let t = VariantTable::builtin()
        .with_override(VariantName::Contact, p.clone())
        .unwrap();
    assert_eq!(t.get(VariantName::Contact), p);
}
