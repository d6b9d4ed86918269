//! Periodic tick source: interrupt dispatch and timer arithmetic.
//!
//! The tick is a hardware timer whose period also clocks the PWM outputs. A
//! postscaler divides the PWM period down to the much slower tick interrupt
//! that drives the engine.

use crate::types::{CYCLE_LENGTH, MAX_DUTY};

/// Trait for abstracting the enable and pending flags of the tick interrupt.
pub trait TickInterrupt {
    /// Returns true if the tick interrupt is enabled.
    fn is_enabled(&self) -> bool;

    /// Returns true if a tick is pending.
    fn is_pending(&self) -> bool;

    /// Acknowledges the pending tick.
    fn clear_pending(&mut self);
}

/// Outcome of dispatching an interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// The tick was acknowledged and the handler ran.
    Serviced,
    /// The cause was not an enabled, pending tick. Nothing ran.
    Ignored,
}

/// Runs `handler` if `source` has an enabled, pending tick.
///
/// The pending flag is cleared before the handler runs. Any other interrupt
/// cause is ignored.
pub fn dispatch<I, F>(source: &mut I, handler: F) -> Dispatch
where
    I: TickInterrupt + ?Sized,
    F: FnOnce(),
{
    if source.is_enabled() && source.is_pending() {
        source.clear_pending();
        handler();
        Dispatch::Serviced
    } else {
        Dispatch::Ignored
    }
}

/// Timer configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerConfigError {
    /// Input clock is zero.
    ZeroClock,

    /// Prescaler or postscaler is zero.
    ZeroDivider,

    /// Period is too short for the full duty range.
    PeriodTooShort {
        /// Minimum number of counts.
        min: u16,
        /// Configured number of counts.
        actual: u16,
    },

    /// Tick rate rounds to zero Hz or to a zero microsecond period.
    TickOutOfRange,
}

impl core::fmt::Display for TimerConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimerConfigError::ZeroClock => write!(f, "timer input clock must be non-zero"),
            TimerConfigError::ZeroDivider => {
                write!(f, "prescaler and postscaler must be non-zero")
            }
            TimerConfigError::PeriodTooShort { min, actual } => {
                write!(
                    f,
                    "timer period of {} counts cannot resolve 10-bit duty cycles (need at least {})",
                    actual, min
                )
            }
            TimerConfigError::TickOutOfRange => {
                write!(f, "tick must fire between once per second and once per microsecond")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerConfigError {}

/// Timer that clocks the PWM period and raises the tick interrupt.
///
/// The PWM period is `prescaler * period` input clocks. The tick fires once
/// every `postscaler` PWM periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickTimerConfig {
    input_clock_hz: u32,
    prescaler: u16,
    period: u16,
    postscaler: u16,
}

impl TickTimerConfig {
    /// Shortest period in counts. The two low duty bits come from the
    /// prescaler stage, so the counter itself needs `MAX_DUTY >> 2` steps.
    pub const MIN_PERIOD: u16 = (MAX_DUTY >> 2) + 1;

    /// PIC18F47Q10 Curiosity Nano: 64 MHz FOSC, timer on FOSC/4, prescaler 1:8,
    /// 256 counts, postscaler 1:16.
    pub const PIC18F47Q10: Self = Self {
        input_clock_hz: 16_000_000,
        prescaler: 8,
        period: 256,
        postscaler: 16,
    };

    /// Creates a validated configuration.
    pub const fn new(
        input_clock_hz: u32,
        prescaler: u16,
        period: u16,
        postscaler: u16,
    ) -> Result<Self, TimerConfigError> {
        if input_clock_hz == 0 {
            return Err(TimerConfigError::ZeroClock);
        }
        if prescaler == 0 || postscaler == 0 {
            return Err(TimerConfigError::ZeroDivider);
        }
        if period < Self::MIN_PERIOD {
            return Err(TimerConfigError::PeriodTooShort {
                min: Self::MIN_PERIOD,
                actual: period,
            });
        }

        let config = Self {
            input_clock_hz,
            prescaler,
            period,
            postscaler,
        };
        if config.tick_frequency_hz() == 0 || config.tick_period_us() == 0 {
            return Err(TimerConfigError::TickOutOfRange);
        }

        Ok(config)
    }

    /// Timer input clock in Hz.
    #[inline]
    pub const fn input_clock_hz(&self) -> u32 {
        self.input_clock_hz
    }

    /// Prescaler divider.
    #[inline]
    pub const fn prescaler(&self) -> u16 {
        self.prescaler
    }

    /// Counts per PWM period.
    #[inline]
    pub const fn period(&self) -> u16 {
        self.period
    }

    /// PWM periods per tick.
    #[inline]
    pub const fn postscaler(&self) -> u16 {
        self.postscaler
    }

    const fn clocks_per_pwm_period(&self) -> u64 {
        self.prescaler as u64 * self.period as u64
    }

    const fn clocks_per_tick(&self) -> u64 {
        self.clocks_per_pwm_period() * self.postscaler as u64
    }

    /// PWM switching frequency, rounded down.
    pub const fn pwm_frequency_hz(&self) -> u32 {
        (self.input_clock_hz as u64 / self.clocks_per_pwm_period()) as u32
    }

    /// Tick interrupt frequency, rounded down.
    pub const fn tick_frequency_hz(&self) -> u32 {
        (self.input_clock_hz as u64 / self.clocks_per_tick()) as u32
    }

    /// Time between ticks in microseconds, rounded down.
    pub const fn tick_period_us(&self) -> u32 {
        (self.clocks_per_tick() * 1_000_000 / self.input_clock_hz as u64) as u32
    }

    /// Duration of one full hue rotation in milliseconds, rounded down.
    pub const fn full_cycle_ms(&self) -> u32 {
        (self.clocks_per_tick() * CYCLE_LENGTH as u64 * 1_000 / self.input_clock_hz as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_board_timing() {
        let config = TickTimerConfig::PIC18F47Q10;
        assert_eq!(config.pwm_frequency_hz(), 7_812);
        assert_eq!(config.tick_frequency_hz(), 488);
        assert_eq!(config.tick_period_us(), 2_048);
        assert_eq!(config.full_cycle_ms(), 6_291);
    }

    #[test]
    fn reference_board_config_passes_validation() {
        let config = TickTimerConfig::new(16_000_000, 8, 256, 16);
        assert_eq!(config, Ok(TickTimerConfig::PIC18F47Q10));
    }
}
