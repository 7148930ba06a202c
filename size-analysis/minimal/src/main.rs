#![no_std]
#![no_main]

use analog_buttons::{AnalogButtons, AnalogInput, TimeDuration, TimeInstant, TimeSource};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Minimal ADC Implementation
// ============================================================================

/// Zero-size converter for measuring library overhead
pub struct MinimalAdc;

impl AnalogInput for MinimalAdc {
    type Channel = u8;

    const MAX_SAMPLE: u16 = 4095;

    fn configure(&mut self, channel: u8) {
        core::hint::black_box(channel);
    }

    fn sample(&mut self, channel: u8) -> u16 {
        core::hint::black_box(channel as u16)
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn poll_buttons() {
    let time_source = MinimalTimeSource;

    if let Ok(mut buttons) = AnalogButtons::new(MinimalAdc, 0, 5, &time_source) {
        buttons.set_repeat(Duration32(250));
        core::hint::black_box(buttons.poll());
        core::hint::black_box(buttons.poll_event());
        core::hint::black_box(buttons);
    }
}

#[entry]
fn main() -> ! {
    poll_buttons();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
