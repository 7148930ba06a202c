//! Shared event and error types.

/// Default debounce period in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Default repeat period in milliseconds. Zero disables repeat.
pub const DEFAULT_REPEAT_MS: u64 = 0;

/// A debounced button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// A button was accepted after the debounce period.
    Pressed(u8),

    /// A held button fired again after the repeat period.
    Repeated(u8),

    /// The ladder settled back to "no button" after this button was held.
    Released(u8),
}

impl ButtonEvent {
    /// Returns the button this event refers to.
    #[inline]
    pub fn button(&self) -> u8 {
        match *self {
            ButtonEvent::Pressed(button)
            | ButtonEvent::Repeated(button)
            | ButtonEvent::Released(button) => button,
        }
    }

    /// Returns true for events that report a button as pressed.
    #[inline]
    pub fn is_press(&self) -> bool {
        matches!(self, ButtonEvent::Pressed(_) | ButtonEvent::Repeated(_))
    }
}

/// Ladder configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A ladder needs at least one button.
    NoButtons,

    /// The converter cannot resolve a distinct level for every button.
    TooManyButtons {
        /// Requested number of buttons.
        buttons: u8,
        /// Highest sample value the converter produces.
        max_sample: u16,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoButtons => {
                write!(f, "ladder must have at least one button")
            }
            ConfigError::TooManyButtons {
                buttons,
                max_sample,
            } => {
                write!(
                    f,
                    "{} buttons cannot be resolved by a converter with maximum sample {}",
                    buttons, max_sample
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
