use super::*;

#[test]
fn manual_clock_only_moves_forward() {
    let clock = ManualClock::new(MediaTime::from_secs(2.0));
    assert_eq!(clock.now(), MediaTime::from_secs(2.0));
    assert_eq!(clock.advance(0.5), MediaTime::from_secs(2.5));
    assert_eq!(clock.advance(-10.0), MediaTime::from_secs(2.5));
}

#[test]
fn manual_clock_steps_frames() {
    let clock = ManualClock::default();
    let fps = Fps::new(4, 1).unwrap();
    clock.step_frame(fps);
    clock.step_frame(fps);
    assert_eq!(clock.now(), MediaTime::from_secs(0.5));
}

#[test]
fn monotonic_clock_is_non_decreasing() {
    let clock = MonotonicClock::new();
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
    assert!(a.secs() >= 0.0);
}
