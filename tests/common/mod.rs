//! Shared test infrastructure for analog-buttons integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use analog_buttons::{AnalogInput, TimeDuration, TimeInstant, TimeSource};
use core::cell::{Cell, RefCell};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u32);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis as u32)
    }
}

/// Mock instant type for testing, a wrapping 32-bit millisecond counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u32);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn millis(&self) -> u32 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock ADC
// ============================================================================

/// Mock converter that returns a settable sample and records configured channels.
///
/// `AnalogInput` is implemented for `&MockAdc` so a test keeps a handle to
/// move the reading while the reader owns the reference.
pub struct MockAdc<const MAX: u16> {
    sample: Cell<u16>,
    reads: Cell<u32>,
    configured: RefCell<heapless::Vec<u8, 8>>,
}

pub type Adc10 = MockAdc<1023>;
pub type Adc12 = MockAdc<4095>;

impl<const MAX: u16> MockAdc<MAX> {
    /// Creates a converter reading full scale (no button pressed)
    pub fn new() -> Self {
        Self {
            sample: Cell::new(MAX),
            reads: Cell::new(0),
            configured: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn set(&self, sample: u16) {
        self.sample.set(sample);
    }

    /// Let go of all buttons
    pub fn release_all(&self) {
        self.sample.set(MAX);
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn configured_channels(&self) -> heapless::Vec<u8, 8> {
        self.configured.borrow().clone()
    }
}

impl<const MAX: u16> AnalogInput for &MockAdc<MAX> {
    type Channel = u8;

    const MAX_SAMPLE: u16 = MAX;

    fn configure(&mut self, channel: u8) {
        let _ = self.configured.borrow_mut().push(channel);
    }

    fn sample(&mut self, _channel: u8) -> u16 {
        self.reads.set(self.reads.get() + 1);
        self.sample.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Polls once per millisecond for `millis` milliseconds, returning every
/// button reported along with the time it was reported at.
pub fn poll_for<I, A, T>(
    buttons: &mut analog_buttons::AnalogButtons<'_, I, A, T>,
    timer: &MockTimeSource,
    millis: u32,
) -> heapless::Vec<(u32, u8), 64>
where
    I: TimeInstant,
    A: AnalogInput,
    T: TimeSource<I>,
{
    let mut reported = heapless::Vec::new();
    for _ in 0..millis {
        timer.advance(1);
        if let Some(button) = buttons.poll() {
            let _ = reported.push((timer.millis(), button));
        }
    }
    reported
}
