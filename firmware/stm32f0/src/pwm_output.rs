use embedded_hal::PwmPin;
use rgb_hue_cycle::register::scale_to;
use rgb_hue_cycle::{Channel, DutyCycleOutput};

/// Three timer PWM channels driving one RGB LED
///
/// This wrapper implements the DutyCycleOutput trait required by the engine,
/// rescaling the 10-bit duty values onto the timer's own duty range.
/// Polarity is already applied by the engine.
pub struct PwmDutyOutput<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    red: R,
    green: G,
    blue: B,
    max_duty: u16,
}

impl<R, G, B> PwmDutyOutput<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    /// Create the output and enable all channels
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    pub fn new(mut red: R, mut green: G, mut blue: B) -> Self {
        // All three channels share one timer, so one max duty covers them
        let max_duty = red.get_max_duty();

        red.enable();
        green.enable();
        blue.enable();

        Self {
            red,
            green,
            blue,
            max_duty,
        }
    }

    /// Timer duty value that corresponds to a 100% duty cycle
    pub fn max_duty(&self) -> u16 {
        self.max_duty
    }
}

impl<R, G, B> DutyCycleOutput for PwmDutyOutput<R, G, B>
where
    R: PwmPin<Duty = u16>,
    G: PwmPin<Duty = u16>,
    B: PwmPin<Duty = u16>,
{
    fn set_duty(&mut self, channel: Channel, duty: u16) {
        let duty = scale_to(duty, self.max_duty);
        match channel {
            Channel::Red => self.red.set_duty(duty),
            Channel::Green => self.green.set_duty(duty),
            Channel::Blue => self.blue.set_duty(duty),
        }
    }
}
