use embedded_hal::timer::CountDown;
use rgb_hue_cycle::{TickInterrupt, TickTimerConfig};
use stm32f0xx_hal::{
    pac,
    rcc::Rcc,
    time::Hertz,
    timers::{Event, Timer},
};

/// TIM2 configured as the periodic tick source
///
/// Runs at the tick frequency of the given configuration with its update
/// interrupt enabled at the timer. Unmasking it in the NVIC is left to the
/// caller.
pub struct TickTimer {
    timer: Timer<pac::TIM2>,
    listening: bool,
}

impl TickTimer {
    /// Configure and start TIM2
    ///
    /// The HAL derives prescaler and reload from the timer kernel clock,
    /// including the doubled clock when the APB prescaler is not 1.
    ///
    /// # Arguments
    /// * `tim` - TIM2 peripheral
    /// * `rcc` - Reference to RCC for clock configuration
    /// * `config` - Tick timing to reproduce
    pub fn tim2(tim: pac::TIM2, rcc: &mut Rcc, config: &TickTimerConfig) -> Self {
        let mut timer = Timer::tim2(tim, Hertz(config.tick_frequency_hz()), rcc);
        timer.listen(Event::TimeOut);

        Self {
            timer,
            listening: true,
        }
    }
}

impl TickInterrupt for TickTimer {
    fn is_enabled(&self) -> bool {
        self.listening
    }

    fn is_pending(&self) -> bool {
        // SAFETY: read-only access to the status register
        let tim = unsafe { &*pac::TIM2::ptr() };
        tim.sr.read().uif().bit_is_set()
    }

    fn clear_pending(&mut self) {
        // Clears UIF when it is set
        let _ = self.timer.wait();
    }
}
