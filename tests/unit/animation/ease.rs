use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::AppleOut];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.5), 1.0);
    }
}

#[test]
fn monotonic_sweep() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=200 {
            let v = ease.apply(f64::from(i) / 200.0);
            assert!(v >= prev, "{ease:?} dipped at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_curves_decelerate() {
    for ease in [Ease::OutQuad, Ease::OutCubic, Ease::AppleOut] {
        let early = ease.apply(0.25) - ease.apply(0.0);
        let late = ease.apply(1.0) - ease.apply(0.75);
        assert!(early > late, "{ease:?} does not decelerate");
        assert!(ease.apply(0.5) > 0.5);
    }
}

#[test]
fn apple_out_matches_reference_midpoint() {
    // cubic-bezier(0, 0, 0.58, 1) at x = 0.5 is ~0.6846.
    let v = Ease::AppleOut.apply(0.5);
    assert!((v - 0.6846).abs() < 1e-3, "got {v}");
}

#[test]
fn default_is_apple_out() {
    assert_eq!(Ease::default(), Ease::AppleOut);
}
