// Host-side tests for the easing curves.

use glove_timeline::{Easing, TimelineError};

const EPS: f32 = 1e-6;

#[test]
fn every_easing_hits_both_endpoints() {
    for easing in Easing::ALL {
        assert!(easing.apply(0.0).abs() < EPS, "{easing} at 0");
        assert!((easing.apply(1.0) - 1.0).abs() < EPS, "{easing} at 1");
    }
}

#[test]
fn every_easing_is_monotonic() {
    for easing in Easing::ALL {
        let mut prev = easing.apply(0.0);
        for i in 1..=1000 {
            let v = easing.apply(i as f32 / 1000.0);
            assert!(v >= prev - EPS, "{easing} decreases at step {i}");
            prev = v;
        }
    }
}

#[test]
fn easing_clamps_out_of_range_input() {
    for easing in Easing::ALL {
        assert_eq!(easing.apply(-0.5), easing.apply(0.0));
        assert_eq!(easing.apply(2.0), easing.apply(1.0));
    }
}

#[test]
fn easing_shapes_differ_where_expected() {
    assert!((Easing::Linear.apply(0.25) - 0.25).abs() < EPS);
    assert!(Easing::CubicIn.apply(0.5) < 0.5);
    assert!(Easing::CubicOut.apply(0.5) > 0.5);
    assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < EPS);
    assert!((Easing::SineInOut.apply(0.5) - 0.5).abs() < 1e-5);
    assert!(Easing::ExpoOut.apply(0.3) > Easing::QuadOut.apply(0.3));
}

#[test]
fn in_out_curves_are_symmetric() {
    for easing in [Easing::QuadInOut, Easing::CubicInOut, Easing::SineInOut] {
        for i in 0..=50 {
            let x = i as f32 / 100.0;
            let left = easing.apply(0.5 - x);
            let right = easing.apply(0.5 + x);
            assert!((left + right - 1.0).abs() < 1e-5, "{easing} at {x}");
        }
    }
}

#[test]
fn easing_names_round_trip() {
    for easing in Easing::ALL {
        assert_eq!(easing.as_str().parse::<Easing>(), Ok(easing));
    }
}

#[test]
fn easing_accepts_common_aliases() {
    assert_eq!("none".parse::<Easing>(), Ok(Easing::Linear));
    assert_eq!("power2.inOut".parse::<Easing>(), Ok(Easing::CubicInOut));
    assert_eq!("ease-in-out-cubic".parse::<Easing>(), Ok(Easing::CubicInOut));
    assert_eq!("ease_out_quad".parse::<Easing>(), Ok(Easing::QuadOut));
    assert_eq!(" Sine.InOut ".parse::<Easing>(), Ok(Easing::SineInOut));
}

#[test]
fn unknown_easing_is_rejected() {
    assert_eq!(
        "bounce".parse::<Easing>(),
        Err(TimelineError::UnknownEasing("bounce".to_string()))
    );
}
