use super::*;

fn two_stop() -> OverlayMask {
    OverlayMask {
        center: [0.5, 0.5],
        radii: [0.5, 0.5],
        stops: vec![
            ColorStop::new(0.0, [0, 0, 0, 0]),
            ColorStop::new(1.0, [200, 100, 0, 200]),
        ],
    }
}

#[test]
fn center_and_rim_hit_end_stops() {
    let m = two_stop();
    assert_eq!(m.sample(0.5, 0.5), [0, 0, 0, 0]);
    assert_eq!(m.sample(1.0, 0.5), [200, 100, 0, 200]);
    // beyond the rim clamps to the last stop
    assert_eq!(m.sample(0.0, 0.0), [200, 100, 0, 200]);
}

#[test]
fn halfway_interpolates_channels() {
    let m = two_stop();
    assert_eq!(m.sample(0.75, 0.5), [100, 50, 0, 100]);
}

#[test]
fn distance_is_elliptical() {
    let m = OverlayMask {
        radii: [0.5, 0.25],
        ..two_stop()
    };
    assert!((m.distance(1.0, 0.5) - 1.0).abs() < 1e-12);
    assert!((m.distance(0.5, 0.75) - 1.0).abs() < 1e-12);
}

#[test]
fn validate_catches_bad_masks() {
    assert!(OverlayMask::default().validate().is_ok());

    let mut m = two_stop();
    m.radii = [0.0, 1.0];
    assert!(m.validate().is_err());

    let mut m = two_stop();
    m.stops.clear();
    assert!(m.validate().is_err());
    assert_eq!(m.sample(0.5, 0.5), [0, 0, 0, 0]);

    let mut m = two_stop();
    m.stops.reverse();
    assert!(m.validate().is_err());
}

#[test]
fn vignette_darkens_outward() {
    let m = OverlayMask::vignette([0.3, 0.5]);
    assert_eq!(m.center, [0.3, 0.5]);
    let inner = m.sample(0.3, 0.5)[3];
    let outer = m.sample(1.0, 1.0)[3];
    assert!(inner < outer);
}
