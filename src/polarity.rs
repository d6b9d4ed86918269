//! Mapping between logical brightness and raw duty cycle values.
//!
//! An RGB LED wired common-cathode lights up when its PWM output is high, so a
//! larger duty cycle means a brighter channel. A common-anode LED sinks current
//! into the PWM pin instead, which inverts the relationship. [`Polarity`]
//! captures that choice once and applies it uniformly to all three channels.

use crate::types::{MAX_DUTY, MIN_DUTY, RgbDuty};

/// Brightness encoding of the PWM outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Raw duty equals logical brightness (common-cathode LED).
    ActiveHigh,
    /// Raw duty is the complement of logical brightness (common-anode LED).
    #[default]
    ActiveLow,
}

impl Polarity {
    /// Selects the polarity from the LED wiring.
    #[inline]
    pub const fn from_common_anode(common_anode: bool) -> Self {
        if common_anode {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }

    /// Returns the polarity with the opposite encoding.
    #[inline]
    pub const fn inverted(self) -> Self {
        match self {
            Polarity::ActiveHigh => Polarity::ActiveLow,
            Polarity::ActiveLow => Polarity::ActiveHigh,
        }
    }

    /// Converts a logical brightness into the raw value for the register.
    ///
    /// Values above [`MAX_DUTY`] are clamped first.
    #[inline]
    pub const fn apply(self, logical: u16) -> u16 {
        let logical = if logical > MAX_DUTY { MAX_DUTY } else { logical };
        match self {
            Polarity::ActiveHigh => logical,
            Polarity::ActiveLow => complement(logical),
        }
    }

    /// Applies the polarity to every channel of a logical triple.
    #[inline]
    pub fn apply_rgb(self, logical: RgbDuty) -> RgbDuty {
        logical.map(|value| self.apply(value))
    }

    /// Raw value that turns a channel fully off.
    #[inline]
    pub const fn min_brightness(self) -> u16 {
        self.apply(MIN_DUTY)
    }

    /// Raw value that drives a channel at full brightness.
    #[inline]
    pub const fn max_brightness(self) -> u16 {
        self.apply(MAX_DUTY)
    }
}

/// Complement of a 10-bit duty value. Applying it twice yields the input.
#[inline]
pub const fn complement(duty: u16) -> u16 {
    MAX_DUTY - if duty > MAX_DUTY { MAX_DUTY } else { duty }
}
