#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use critical_section::Mutex;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::{self, interrupt};

use rgb_hue_cycle::{ColorCycle, Polarity, TickTimerConfig};
use stm32f0_hue_cycle::tick_timer::TickTimer;

mod hardware_setup;

use hardware_setup::{init_hardware, Led};

/// LED wiring. Common-anode unless built with `--features common-cathode`.
const LED_POLARITY: Polarity = Polarity::from_common_anode(!cfg!(feature = "common-cathode"));

/// Same PWM and tick rates as the PIC18F47Q10 Curiosity Nano board
const TICK_CONFIG: TickTimerConfig = TickTimerConfig::PIC18F47Q10;

type Engine = ColorCycle<Led>;

/// Hands the engine from `main` to the TIM2 handler, which then owns it
static HANDOFF: Mutex<RefCell<Option<(Engine, TickTimer)>>> = Mutex::new(RefCell::new(None));

/// TIM2 update interrupt - one hue step per call
#[interrupt]
fn TIM2() {
    static mut OWNED: Option<(Engine, TickTimer)> = None;

    if OWNED.is_none() {
        *OWNED = critical_section::with(|cs| HANDOFF.borrow(cs).take());
    }

    if let Some((engine, tick_timer)) = OWNED.as_mut() {
        engine.service_interrupt(tick_timer);
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RGB Hue Cycle ===");
    rprintln!("Starting initialization...");

    let hw = init_hardware(&TICK_CONFIG);
    let engine = ColorCycle::new(hw.led, LED_POLARITY);

    rprintln!(
        "Polarity: {:?}, full rotation every {} ms",
        LED_POLARITY,
        TICK_CONFIG.full_cycle_ms()
    );

    critical_section::with(|cs| {
        HANDOFF.borrow(cs).replace(Some((engine, hw.tick_timer)));
    });

    // SAFETY: the handler only touches state handed over above
    unsafe { NVIC::unmask(pac::Interrupt::TIM2) };

    rprintln!("=== System Ready ===");

    loop {
        cortex_m::asm::wfi();
    }
}
