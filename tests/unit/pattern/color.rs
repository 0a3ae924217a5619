use super::*;

#[test]
fn ramp_endpoints_match_start_and_span() {
    let ramp = ColorRamp::default();
    let first = ramp.at(0.0);
    let last = ramp.at(1.0);
    assert_eq!(first.hue, ramp.hue_start);
    assert!((last.hue - (ramp.hue_start + ramp.hue_span)).abs() < 1e-12);
    assert!((last.lightness - (ramp.lightness_start + ramp.lightness_span)).abs() < 1e-12);
}

#[test]
fn default_ramp_hue_rises_and_lightness_falls() {
    let ramp = ColorRamp::default();
    let mut prev = ramp.at(0.0);
    for k in 1..=100 {
        let c = ramp.at(f64::from(k) / 100.0);
        assert!(c.hue > prev.hue);
        assert!(c.lightness < prev.lightness);
        prev = c;
    }
}

#[test]
fn validate_rejects_out_of_range_lightness() {
    assert!(ColorRamp::default().validate().is_ok());
    let bad = ColorRamp {
        lightness_start: 0.9,
        lightness_span: 0.3,
        ..ColorRamp::default()
    };
    assert!(bad.validate().is_err());
    let nan = ColorRamp {
        hue_span: f64::NAN,
        ..ColorRamp::default()
    };
    assert!(nan.validate().is_err());
}

#[test]
fn base_opacity_edges_and_middle() {
    assert_eq!(base_opacity(0.0), 0.5);
    assert_eq!(base_opacity(1.0), 0.5);
    assert_eq!(base_opacity(0.5), 0.25);
    assert!((base_opacity(0.2) - base_opacity(0.8)).abs() < 1e-12);
}
