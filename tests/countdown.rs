use upgradehour::countdown::{Countdown, CountdownState, REGISTRATION_DEADLINE_MS};

const TARGET: u64 = REGISTRATION_DEADLINE_MS;

#[test]
fn one_of_each_unit_remaining() {
    // 1 day, 1 hour, 1 minute, 1 second and a bit of slack below a second.
    let countdown = Countdown::new(TARGET);
    let state = countdown.remaining(TARGET - 90_061_000);
    assert_eq!(
        state,
        CountdownState {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1
        }
    );
}

#[test]
fn pinned_at_zero_after_deadline() {
    let countdown = Countdown::new(TARGET);
    for late in [0, 1, 999, 86_400_000, u64::MAX - TARGET] {
        let state = countdown.remaining(TARGET + late);
        assert_eq!(state, CountdownState::default(), "late by {late}ms");
        assert!(state.is_all_zero());
        assert!(countdown.is_expired(TARGET + late));
    }
}

#[test]
fn exactly_at_deadline_is_zero() {
    let state = Countdown::new(TARGET).remaining(TARGET);
    assert!(state.is_all_zero());
}

#[test]
fn fields_stay_in_display_range() {
    let countdown = Countdown::new(TARGET);
    // Sweep a spread of instants before the deadline.
    for step in 0..10_000u64 {
        let now = TARGET - step * 7_919; // prime stride, sub-deadline
        let state = countdown.remaining(now);
        assert!(state.seconds < 60);
        assert!(state.minutes < 60);
        assert!(state.hours < 24);
    }
}

#[test]
fn sub_second_remainder_floors_to_zero() {
    let countdown = Countdown::new(TARGET);
    let state = countdown.remaining(TARGET - 999);
    // The display shows all zeros for the final sliver, but the deadline
    // has not actually passed yet.
    assert!(state.is_all_zero());
    assert!(!countdown.is_expired(TARGET - 999));
    assert!(countdown.is_expired(TARGET));
}

#[test]
fn recomputed_wholesale_from_now() {
    // Two queries at the same instant agree; the state carries no history.
    let countdown = Countdown::new(TARGET);
    let now = TARGET - 123_456_789;
    assert_eq!(countdown.remaining(now), countdown.remaining(now));
}
