#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AnalogButtons`**: Debounces a resistor ladder and reports presses, repeats and releases
//! - **`Ladder`**: Decodes a raw analog sample into a button number
//! - **`ButtonEvent`**: What a poll observed (`Pressed`, `Repeated` or `Released`)
//! - **`KeypadState`**: Whether the reader is idle or waiting out a bounce
//! - **`AnalogInput`**: Trait to implement for your ADC
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Buttons are numbered `1..=N`. "No button" is `None`, never an error.

pub mod time;
pub mod types;
pub mod ladder;
pub mod buttons;

pub use buttons::{AnalogButtons, AnalogInput, KeypadState};
pub use ladder::Ladder;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonEvent, ConfigError, DEFAULT_DEBOUNCE_MS, DEFAULT_REPEAT_MS};
