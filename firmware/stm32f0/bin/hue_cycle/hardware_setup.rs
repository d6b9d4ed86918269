use rgb_hue_cycle::TickTimerConfig;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{gpioa, gpiob, Floating, Input},
    pac,
    prelude::*,
    pwm,
    time::Hertz,
};

use stm32f0_hue_cycle::pwm_output::PwmDutyOutput;
use stm32f0_hue_cycle::tick_timer::TickTimer;

/// Type alias for the LED output
pub type Led = PwmDutyOutput<
    pwm::PwmChannels<pac::TIM3, pwm::C1>,
    pwm::PwmChannels<pac::TIM3, pwm::C2>,
    pwm::PwmChannels<pac::TIM3, pwm::C3>,
>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub led: Led,
    pub tick_timer: TickTimer,
}

/// Initialize all hardware peripherals
///
/// This function handles all hardware initialization in one place:
/// - System clock configuration
/// - PWM configuration for the RGB LED
/// - TIM2 periodic tick with its update interrupt enabled at the timer
///
/// The TIM2 interrupt stays masked in the NVIC until the caller unmasks it.
pub fn init_hardware(config: &TickTimerConfig) -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);

    let led = setup_led_pwm(gpioa.pa6, gpioa.pa7, gpiob.pb0, dp.TIM3, &mut rcc, config);
    let tick_timer = setup_tick_timer(dp.TIM2, &mut rcc, config);

    HardwareContext { led, tick_timer }
}

/// Configure the system clock
///
/// # Returns
/// The configured RCC (Reset and Clock Control) peripheral
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure PWM for the LED using TIM3
///
/// Sets up TIM3 with PWM channels for RGB control:
/// - Red: PA6 (TIM3_CH1)
/// - Green: PA7 (TIM3_CH2)
/// - Blue: PB0 (TIM3_CH3)
fn setup_led_pwm(
    pa6: gpioa::PA6<Input<Floating>>,
    pa7: gpioa::PA7<Input<Floating>>,
    pb0: gpiob::PB0<Input<Floating>>,
    tim3: pac::TIM3,
    rcc: &mut stm32f0xx_hal::rcc::Rcc,
    config: &TickTimerConfig,
) -> Led {
    let pins = cortex_m::interrupt::free(|cs| {
        (
            pa6.into_alternate_af1(cs),
            pa7.into_alternate_af1(cs),
            pb0.into_alternate_af1(cs),
        )
    });

    let pwm_freq = Hertz(config.pwm_frequency_hz());
    let (red, green, blue) = pwm::tim3(tim3, pins, rcc, pwm_freq);
    let led = PwmDutyOutput::new(red, green, blue);

    rprintln!(
        "LED configured on TIM3 (PA6, PA7, PB0) at {} Hz, max duty {}",
        pwm_freq.0,
        led.max_duty()
    );

    led
}

/// Configure TIM2 as the periodic tick source
fn setup_tick_timer(
    tim2: pac::TIM2,
    rcc: &mut stm32f0xx_hal::rcc::Rcc,
    config: &TickTimerConfig,
) -> TickTimer {
    let tick_timer = TickTimer::tim2(tim2, rcc, config);

    rprintln!(
        "TIM2 tick configured: every {} us ({} Hz)",
        config.tick_period_us(),
        config.tick_frequency_hz()
    );

    tick_timer
}
