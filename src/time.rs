//! Time abstraction traits for platform-agnostic timing.
//!
//! Millisecond tick counters wrap (a `u32` counter after ~49.7 days), so
//! elapsed time is always measured with [`TimeInstant::duration_since`] and
//! never by adding a period to a stored instant and comparing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Counter-based instants must use wrapping subtraction
    /// (`self.0.wrapping_sub(earlier.0)`) so the result stays correct when the
    /// counter rolls over between `earlier` and `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
