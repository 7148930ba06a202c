//! Debounced analog button reader.
//!
//! Provides [`AnalogButtons`] which samples a resistor ladder once per poll,
//! filters contact bounce and optionally repeats held buttons. Also defines
//! the [`AnalogInput`] trait for hardware abstraction.

use crate::ladder::Ladder;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ButtonEvent, ConfigError, DEFAULT_DEBOUNCE_MS, DEFAULT_REPEAT_MS};

/// Trait for abstracting the analog converter a ladder is wired to.
///
/// Implement this for your ADC (or for a single channel of it) to let
/// [`AnalogButtons`] sample the ladder.
pub trait AnalogInput {
    /// Identifies the pin or channel the ladder is connected to.
    type Channel: Copy;

    /// Highest value [`sample`](AnalogInput::sample) returns. Defaults to a
    /// 10-bit converter.
    const MAX_SAMPLE: u16 = 1023;

    /// Configures `channel` as an analog input. Called once on construction.
    fn configure(&mut self, channel: Self::Channel);

    /// Returns the latest sample of `channel` in `0..=MAX_SAMPLE`.
    ///
    /// Must not block. Handle any hardware errors internally - this method
    /// cannot fail.
    fn sample(&mut self, channel: Self::Channel) -> u16;
}

/// The debounce state of an analog keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadState {
    /// The last accepted reading is stable.
    Idle,
    /// The reading changed and is waiting out the debounce period.
    Debouncing,
}

/// Reads N buttons sharing one analog input through a resistor ladder.
///
/// Each call to [`poll`](Self::poll) performs exactly one analog read. A
/// change in the decoded button is only reported once it has been seen for
/// the debounce period; with a non-zero repeat period a held button is
/// reported again every period.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `A` - Analog input implementation type
/// * `T` - Time source implementation type
pub struct AnalogButtons<'t, I: TimeInstant, A: AnalogInput, T: TimeSource<I>> {
    adc: A,
    channel: A::Channel,
    ladder: Ladder,
    time_source: &'t T,
    debounce: I::Duration,
    repeat: I::Duration,
    state: KeypadState,
    last_key: Option<u8>,
    debounce_start: I,
    repeat_start: I,
}

impl<'t, I: TimeInstant, A: AnalogInput, T: TimeSource<I>> AnalogButtons<'t, I, A, T> {
    /// Creates an idle reader for `button_count` buttons on `channel`.
    ///
    /// Configures the channel as an analog input. Debounce defaults to 50 ms
    /// and repeat is disabled.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the ladder cannot be decoded with
    /// `A::MAX_SAMPLE`; the channel is left untouched in that case.
    pub fn new(
        mut adc: A,
        channel: A::Channel,
        button_count: u8,
        time_source: &'t T,
    ) -> Result<Self, ConfigError> {
        let ladder = Ladder::new(button_count, A::MAX_SAMPLE)?;
        adc.configure(channel);

        let now = time_source.now();

        Ok(Self {
            adc,
            channel,
            ladder,
            time_source,
            debounce: I::Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            repeat: I::Duration::from_millis(DEFAULT_REPEAT_MS),
            state: KeypadState::Idle,
            last_key: None,
            debounce_start: now,
            repeat_start: now,
        })
    }

    /// Sets how long a changed reading must persist before it is accepted.
    ///
    /// Takes effect on the next poll.
    pub fn set_debounce(&mut self, debounce: I::Duration) {
        self.debounce = debounce;
    }

    /// Sets the interval at which a held button is reported again.
    ///
    /// [`TimeDuration::ZERO`] disables repeat. Takes effect on the next poll.
    pub fn set_repeat(&mut self, repeat: I::Duration) {
        self.repeat = repeat;
    }

    /// Returns the debounce period.
    pub fn debounce(&self) -> I::Duration {
        self.debounce
    }

    /// Returns the repeat period. Zero means repeat is disabled.
    pub fn repeat(&self) -> I::Duration {
        self.repeat
    }

    /// Samples the ladder and returns the pressed button, if any.
    ///
    /// # Returns
    /// * `Some(button)` - a freshly debounced press or a repeat of a held button
    /// * `None` - nothing new to report
    pub fn poll(&mut self) -> Option<u8> {
        self.poll_event()
            .filter(ButtonEvent::is_press)
            .map(|event| event.button())
    }

    /// Samples the ladder and returns what happened since the last poll.
    ///
    /// Runs the same state machine as [`poll`](Self::poll) but also tells
    /// presses, repeats and releases apart.
    pub fn poll_event(&mut self) -> Option<ButtonEvent> {
        let key = self.ladder.decode(self.adc.sample(self.channel));
        let now = self.time_source.now();

        let event = match self.state {
            KeypadState::Debouncing => {
                if !Self::has_elapsed(now, self.debounce_start, self.debounce) {
                    return None;
                }

                let previous = self.last_key;
                self.last_key = key;
                self.repeat_start = now;
                self.state = KeypadState::Idle;

                match (key, previous) {
                    (Some(button), _) => Some(ButtonEvent::Pressed(button)),
                    (None, Some(button)) => Some(ButtonEvent::Released(button)),
                    (None, None) => None,
                }
            }
            KeypadState::Idle if key != self.last_key => {
                self.debounce_start = now;
                self.state = KeypadState::Debouncing;

                #[cfg(feature = "defmt")]
                defmt::trace!("ladder changed to {}, debouncing", key);

                None
            }
            KeypadState::Idle => {
                if self.repeat.as_millis() == 0
                    || !Self::has_elapsed(now, self.repeat_start, self.repeat)
                {
                    return None;
                }

                self.repeat_start = now;
                key.map(ButtonEvent::Repeated)
            }
        };

        #[cfg(feature = "defmt")]
        if let Some(event) = event {
            defmt::debug!("button event: {}", event);
        }

        event
    }

    fn has_elapsed(now: I, since: I, period: I::Duration) -> bool {
        now.duration_since(since).as_millis() >= period.as_millis()
    }

    /// Returns the current debounce state.
    pub fn state(&self) -> KeypadState {
        self.state
    }

    /// Returns the last accepted button, or `None` if the ladder last settled
    /// with nothing pressed.
    pub fn last_key(&self) -> Option<u8> {
        self.last_key
    }

    /// Returns the number of buttons on the ladder.
    pub fn button_count(&self) -> u8 {
        self.ladder.button_count()
    }

    /// Returns the channel the ladder is sampled on.
    pub fn channel(&self) -> A::Channel {
        self.channel
    }

    /// Returns the ladder decoder.
    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Consumes the reader and returns the analog input.
    pub fn release(self) -> A {
        self.adc
    }
}
