use super::*;
use rand::{SeedableRng, rngs::StdRng};

fn t(secs: f64) -> MediaTime {
    MediaTime::from_secs(secs)
}

fn params(zoom_intensity: f64, duration: Option<(f64, f64)>, pans_across: bool) -> PanZoomParams {
    PanZoomParams {
        zoom_intensity,
        duration: duration.map(|(min, max)| DurationRange::new(min, max).unwrap()),
        pans_across,
        ease: Ease::AppleOut,
    }
}

fn fixed(duration: f64) -> PanZoom {
    let mut rng = StdRng::seed_from_u64(1);
    PanZoom::new(
        SlotId::First,
        &params(1.0, Some((duration, duration)), false),
        t(0.0),
        &mut rng,
    )
}

#[test]
fn zoom_stays_in_intensity_window() {
    let mut rng = StdRng::seed_from_u64(7);
    for intensity in [0.0, 0.25, 1.0, 2.5] {
        for _ in 0..200 {
            let a = PanZoom::new(
                SlotId::First,
                &params(intensity, Some((10.0, 20.0)), false),
                t(0.0),
                &mut rng,
            );
            assert!(a.zoom() >= 1.0 + 0.3 * intensity - 1e-12);
            assert!(a.zoom() <= 1.0 + 1.4 * intensity + 1e-12);
            assert!((10.0..=20.0).contains(&a.duration()));
        }
    }
}

#[test]
fn offsets_never_expose_edges() {
    let mut rng = StdRng::seed_from_u64(8);
    for pans_across in [false, true] {
        for _ in 0..300 {
            let a = PanZoom::new(
                SlotId::Second,
                &params(1.0, Some((5.0, 6.0)), pans_across),
                t(0.0),
                &mut rng,
            );
            let travel = 1.0 - a.zoom();
            for v in [a.offset().x, a.offset().y] {
                assert!(v <= 0.0);
                assert!(v >= travel - 1e-12);
            }
            if pans_across {
                assert_eq!(a.offset().x, travel);
                assert!(a.offset().y <= 0.3 * travel + 1e-12);
                assert!(a.offset().y >= 0.7 * travel - 1e-12);
            }
        }
    }
}

#[test]
fn zero_intensity_is_static() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = PanZoom::new(
        SlotId::First,
        &params(0.0, Some((5.0, 5.0)), false),
        t(0.0),
        &mut rng,
    );
    assert_eq!(a.zoom(), 1.0);
    assert_eq!(a.offset(), Vec2::ZERO);
    assert_eq!(a.duration(), 5.0);
    assert_eq!(a.current_zoom(t(2.5)), 1.0);
    assert_eq!(
        a.current_position(t(2.5), Size::new(800.0, 600.0)),
        Point::ZERO
    );
}

#[test]
fn progress_runs_from_zero_to_one() {
    let a = fixed(5.0);
    assert_eq!(a.progress(t(0.0)), 0.0);
    assert_eq!(a.progress(t(5.0)), 1.0);
    assert_eq!(a.progress(t(50.0)), 1.0);
    let mut prev = 0.0;
    for i in 0..=50 {
        let p = a.progress(t(f64::from(i) * 0.1));
        assert!(p >= prev);
        prev = p;
    }
    assert_eq!(a.eased_progress(t(0.0)), 0.0);
    assert_eq!(a.eased_progress(t(5.0)), 1.0);
}

#[test]
fn missing_range_is_already_complete() {
    let mut rng = StdRng::seed_from_u64(2);
    let a = PanZoom::new(SlotId::First, &params(1.0, None, false), t(3.0), &mut rng);
    assert_eq!(a.duration(), 0.0);
    assert_eq!(a.progress(t(3.0)), 1.0);
    assert_eq!(a.time_remaining(t(3.0)), 0.0);
    assert_eq!(a.current_alpha(t(3.0)), 0.0);
}

#[test]
fn alpha_holds_then_fades_linearly() {
    let a = fixed(4.0);
    assert_eq!(a.current_alpha(t(0.0)), 1.0);
    assert_eq!(a.current_alpha(t(2.9)), 1.0);
    assert!((a.current_alpha(t(3.5)) - 0.5).abs() < 1e-9);
    assert!((a.current_alpha(t(3.75)) - 0.25).abs() < 1e-9);
    assert_eq!(a.current_alpha(t(4.0)), 0.0);
}

#[test]
fn zoom_and_position_reach_targets_at_end() {
    let a = fixed(2.0);
    let size = Size::new(200.0, 100.0);
    assert_eq!(a.current_zoom(t(0.0)), 1.0);
    assert_eq!(a.current_position(t(0.0), size), Point::ZERO);
    assert!((a.current_zoom(t(2.0)) - a.zoom()).abs() < 1e-12);
    let end = a.current_position(t(2.0), size);
    assert!((end.x - 200.0 * a.offset().x).abs() < 1e-9);
    assert!((end.y - 100.0 * a.offset().y).abs() < 1e-9);
}

#[test]
fn update_writes_pose_into_slot() {
    let mut a = fixed(10.0);
    let mut slot: Slot<()> = Slot::default();
    let size = Size::new(640.0, 480.0);
    a.update(t(4.0), size, &mut slot);
    assert_eq!(slot.pose(), a.pose(t(4.0), size));
    assert_eq!(slot.opacity(), 1.0);
    assert_eq!(slot.transform(), Affine::scale(a.current_zoom(t(4.0))));
}

#[test]
fn notifications_fire_exactly_once() {
    let mut a = fixed(3.0);
    let mut slot: Slot<()> = Slot::default();
    let size = Size::new(10.0, 10.0);

    let mut fades = 0;
    let mut completions = 0;
    for i in 0..=60 {
        let ev = a.update(t(f64::from(i) * 0.1), size, &mut slot);
        fades += usize::from(ev.will_fade_out);
        completions += usize::from(ev.completed);
    }
    assert_eq!(fades, 1);
    assert_eq!(completions, 1);

    let ev = a.update(t(100.0), size, &mut slot);
    assert_eq!(ev, PanZoomEvents::default());
}

#[test]
fn fade_notification_fires_on_entering_window() {
    let mut a = fixed(3.0);
    let mut slot: Slot<()> = Slot::default();
    let size = Size::new(10.0, 10.0);
    assert!(!a.update(t(1.5), size, &mut slot).will_fade_out);
    let ev = a.update(t(2.1), size, &mut slot);
    assert!(ev.will_fade_out);
    assert!(!ev.completed);
    let ev = a.update(t(3.0), size, &mut slot);
    assert!(!ev.will_fade_out);
    assert!(ev.completed);
}

#[test]
fn zero_duration_fires_both_on_first_update() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut a = PanZoom::new(SlotId::First, &params(1.0, None, false), t(0.0), &mut rng);
    let mut slot: Slot<()> = Slot::default();
    let ev = a.update(t(0.0), Size::new(1.0, 1.0), &mut slot);
    assert!(ev.will_fade_out);
    assert!(ev.completed);
}

#[test]
fn force_fade_out_leaves_one_second() {
    let mut a = fixed(20.0);
    a.force_fade_out(t(4.0));
    assert_eq!(a.duration(), 5.0);
    assert!((a.time_remaining(t(4.0)) - FADE_OUT_DURATION).abs() < 1e-9);
    assert!((a.current_alpha(t(4.0)) - 1.0).abs() < 1e-9);
    assert!((a.current_alpha(t(4.5)) - 0.5).abs() < 1e-9);
}

#[test]
fn shifting_start_preserves_progress() {
    let mut a = fixed(10.0);
    let before = a.progress(t(4.0));
    a.shift_start(2.5);
    assert!((a.progress(t(6.5)) - before).abs() < 1e-12);
    assert_eq!(a.start_time(), t(2.5));
}
