//! The color cycle state machine and its output seam.
//!
//! Provides [`ColorCycleState`], the complete mutable state of the hue
//! rotation, and [`ColorCycle`], which binds a state to a [`DutyCycleOutput`]
//! and a [`Polarity`]. Each tick pushes the triple computed on the previous
//! tick, then computes the next one and advances the ramp.

use crate::polarity::Polarity;
use crate::tick::{Dispatch, TickInterrupt, dispatch};
use crate::types::{Channel, MAX_DUTY, MIN_DUTY, RgbDuty, Sector};
use palette::Srgb;

/// Trait for abstracting the three PWM duty cycle registers.
///
/// Implement this for your PWM hardware. Values are raw 10-bit duty cycles in
/// `0..=MAX_DUTY` with polarity already applied; any shifting or rescaling to
/// fit a wider hardware register belongs to the implementation. Writes cannot
/// fail and must take effect before the next PWM period boundary.
pub trait DutyCycleOutput {
    /// Writes the duty cycle for one channel.
    fn set_duty(&mut self, channel: Channel, duty: u16);

    /// Writes all three channels in red, green, blue order.
    fn write_all(&mut self, duty: RgbDuty) {
        for channel in Channel::ALL {
            self.set_duty(channel, duty.get(channel));
        }
    }
}

impl<T: DutyCycleOutput + ?Sized> DutyCycleOutput for &mut T {
    fn set_duty(&mut self, channel: Channel, duty: u16) {
        (**self).set_duty(channel, duty);
    }
}

/// Complete state of the hue rotation.
///
/// `duty` holds the raw triple that the next tick will push, so the hardware
/// always runs one tick behind the `(sector, counter)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorCycleState {
    sector: Sector,
    counter: u16,
    duty: RgbDuty,
}

impl ColorCycleState {
    /// Power-on state: all channels off, first sector, counter at zero.
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            sector: Sector::RedToGreen,
            counter: MIN_DUTY,
            duty: RgbDuty::splat(polarity.min_brightness()),
        }
    }

    /// Current sector.
    #[inline]
    pub fn sector(&self) -> Sector {
        self.sector
    }

    /// Position within the current sector's ramp, in `0..=MAX_DUTY`.
    #[inline]
    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Raw triple the next tick will push.
    #[inline]
    pub fn pending_duty(&self) -> RgbDuty {
        self.duty
    }

    /// Logical brightness for the current sector and counter, before polarity.
    pub fn logical_target(&self) -> RgbDuty {
        let mut target = RgbDuty::splat(MIN_DUTY);
        target.set(self.sector.falling(), MAX_DUTY - self.counter);
        target.set(self.sector.rising(), self.counter);
        target
    }

    /// Computes the next raw triple and steps the ramp, without any output.
    pub fn advance(&mut self, polarity: Polarity) {
        self.duty = polarity.apply_rgb(self.logical_target());

        self.counter += 1;
        if self.counter > MAX_DUTY {
            self.counter = MIN_DUTY;
            self.sector = self.sector.next();
        }
    }

    /// Runs one engine invocation: push the pending triple, then advance.
    pub fn tick<O: DutyCycleOutput + ?Sized>(&mut self, polarity: Polarity, output: &mut O) {
        output.write_all(self.duty);
        self.advance(polarity);
    }

    /// The pending triple as perceived brightness (0.0-1.0 per channel).
    pub fn visible_color(&self, polarity: Polarity) -> Srgb {
        // The polarity mapping is its own inverse.
        let logical = polarity.apply_rgb(self.duty);
        let scale = |value: u16| value as f32 / MAX_DUTY as f32;
        Srgb::new(scale(logical.red), scale(logical.green), scale(logical.blue))
    }

    /// Returns the raw triples that the next `N` ticks would push.
    ///
    /// The state itself is not modified.
    pub fn preview<const N: usize>(&self, polarity: Polarity) -> heapless::Vec<RgbDuty, N> {
        let mut state = *self;
        let mut pushed = heapless::Vec::new();
        while !pushed.is_full() {
            let _ = pushed.push(state.duty);
            state.advance(polarity);
        }
        pushed
    }
}

/// Drives a single RGB LED through the hue rotation.
///
/// Owns the LED output and the rotation state. Meant to be owned by the tick
/// interrupt handler and nothing else.
///
/// # Type Parameters
/// * `O` - Duty cycle output implementation type
pub struct ColorCycle<O: DutyCycleOutput> {
    output: O,
    polarity: Polarity,
    state: ColorCycleState,
}

impl<O: DutyCycleOutput> ColorCycle<O> {
    /// Creates an engine in the power-on state and preloads all channels off.
    pub fn new(mut output: O, polarity: Polarity) -> Self {
        let state = ColorCycleState::new(polarity);
        output.write_all(state.pending_duty());

        Self {
            output,
            polarity,
            state,
        }
    }

    /// Runs one engine invocation.
    #[inline]
    pub fn tick(&mut self) {
        self.state.tick(self.polarity, &mut self.output);
    }

    /// Handles an interrupt: ticks if `source` has a pending, enabled tick.
    ///
    /// Unrecognized causes are ignored and leave the state untouched.
    pub fn service_interrupt<I: TickInterrupt>(&mut self, source: &mut I) -> Dispatch {
        let Self {
            output,
            polarity,
            state,
        } = self;
        dispatch(source, || state.tick(*polarity, output))
    }

    /// Current rotation state.
    #[inline]
    pub fn state(&self) -> &ColorCycleState {
        &self.state
    }

    /// Configured polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Shared access to the output.
    #[inline]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Exclusive access to the output.
    #[inline]
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Consumes the engine and returns the output.
    pub fn into_output(self) -> O {
        self.output
    }
}
