//! Resistor ladder decoding.
//!
//! Buttons share one analog input through a chain of equal resistors:
//!
//! ```text
//!    VCC ----+
//!            R
//!    ADC ----+---- (button N) ---- GND
//!            R
//!            +---- (button 1) ---- GND
//!            R
//!            +---- (button 2) ---- GND
//!           ...
//!            +---- (button N-1) -- GND
//!            R
//!    GND ----+
//! ```
//!
//! The top button shorts the input straight to ground and the remaining
//! buttons count up going down the chain. Under the ideal linear model the
//! ladder produces `N + 1` evenly spaced levels: button `n` reads at the
//! ratio `(N - n) / N` of full scale and an untouched ladder reads full
//! scale. The resistor value itself does not matter as long as all resistors
//! are equal.

use crate::types::ConfigError;

/// Maps raw analog samples to button numbers for one resistor ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ladder {
    button_count: u8,
    max_sample: u16,
}

impl Ladder {
    /// Creates a ladder of `button_count` buttons read by a converter whose
    /// samples range over `0..=max_sample`.
    ///
    /// # Errors
    /// * [`ConfigError::NoButtons`] - `button_count` is zero
    /// * [`ConfigError::TooManyButtons`] - fewer sample steps than buttons
    pub fn new(button_count: u8, max_sample: u16) -> Result<Self, ConfigError> {
        if button_count == 0 {
            return Err(ConfigError::NoButtons);
        }

        if u16::from(button_count) > max_sample {
            return Err(ConfigError::TooManyButtons {
                buttons: button_count,
                max_sample,
            });
        }

        Ok(Self {
            button_count,
            max_sample,
        })
    }

    /// Returns the number of buttons on the ladder.
    #[inline]
    pub fn button_count(&self) -> u8 {
        self.button_count
    }

    /// Returns the highest sample the converter produces.
    #[inline]
    pub fn max_sample(&self) -> u16 {
        self.max_sample
    }

    /// Decodes a raw sample into a button number in `1..=button_count`.
    ///
    /// Inverts the divider with `n = (1 - v) * N` where `v = sample / max`,
    /// rounding to the nearest button (ties away from zero). A result of zero
    /// means the input sits at full supply and nothing is pressed. Samples
    /// above `max_sample` are treated as full scale.
    ///
    /// # Returns
    /// * `Some(button)` - the nearest button level
    /// * `None` - no button is pressed
    pub fn decode(&self, sample: u16) -> Option<u8> {
        let max = u32::from(self.max_sample);
        let sample = u32::from(sample.min(self.max_sample));
        let buttons = u32::from(self.button_count);

        // floor((max - sample) * N / max + 1/2), kept in integers
        let position = ((max - sample) * 2 * buttons + max) / (2 * max);

        u8::try_from(position)
            .ok()
            .filter(|button| (1..=self.button_count).contains(button))
    }

    /// Returns the ideal sample for `button`, or `None` if the ladder has no
    /// such button.
    pub fn level(&self, button: u8) -> Option<u16> {
        if button == 0 || button > self.button_count {
            return None;
        }

        let max = u32::from(self.max_sample);
        let buttons = u32::from(self.button_count);
        let steps = buttons - u32::from(button);

        let level = (2 * max * steps + buttons) / (2 * buttons);
        u16::try_from(level).ok()
    }

    /// Returns the sample read when no button is pressed.
    #[inline]
    pub fn idle_level(&self) -> u16 {
        self.max_sample
    }
}
