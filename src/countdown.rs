//! Countdown arithmetic for the registration deadline.
//!
//! Pure wall-clock math so it can be unit tested on the host; the wasm side
//! feeds it `js_sys::Date::now()` once per second and writes the result into
//! the DOM.

/// Registration closes at 2025-11-01T23:59:59Z, as epoch milliseconds.
pub const REGISTRATION_DEADLINE_MS: u64 = 1_762_041_599_000;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Time left until the deadline, broken into display fields.
///
/// Recomputed wholesale every tick; fields are never mutated independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    /// Split a non-negative remaining duration (ms) into d/h/m/s, floored.
    pub fn at(remaining_ms: u64) -> Self {
        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: (remaining_ms / MS_PER_HOUR) % 24,
            minutes: (remaining_ms / MS_PER_MINUTE) % 60,
            seconds: (remaining_ms / MS_PER_SECOND) % 60,
        }
    }

    /// All fields floored to zero. True once the deadline has passed, but
    /// also for the final sub-second sliver before it; deadline checks
    /// belong on [`Countdown::is_expired`].
    pub fn is_all_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// A fixed target instant plus the clamp-at-zero rule.
///
/// The deadline is a constant of this site, but the target is injected here
/// so tests (or a future edition of the event) can supply their own.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    target_ms: u64,
}

impl Countdown {
    pub fn new(target_ms: u64) -> Self {
        Self { target_ms }
    }

    pub fn to_registration_deadline() -> Self {
        Self::new(REGISTRATION_DEADLINE_MS)
    }

    /// State at wall-clock `now_ms`. Once the deadline passes this stays
    /// pinned at all-zeros; it never goes negative and never rolls over.
    pub fn remaining(&self, now_ms: u64) -> CountdownState {
        CountdownState::at(self.target_ms.saturating_sub(now_ms))
    }

    /// Whether the deadline itself has been reached, independent of how the
    /// remaining time displays.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.target_ms
    }
}
