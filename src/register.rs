//! Encoding of 10-bit duty values into hardware registers.

use crate::engine::DutyCycleOutput;
use crate::types::{Channel, MAX_DUTY, RgbDuty};

/// Shift that left-justifies a 10-bit value in a 16-bit register.
pub const LEFT_JUSTIFY_SHIFT: u32 = 16 - 10;

/// Left-justifies a 10-bit duty value in a 16-bit register.
///
/// Bits above the 10-bit range are discarded.
#[inline]
pub const fn left_justified(duty: u16) -> u16 {
    (duty & MAX_DUTY) << LEFT_JUSTIFY_SHIFT
}

/// Recovers the 10-bit duty value from a left-justified register.
#[inline]
pub const fn from_left_justified(register: u16) -> u16 {
    register >> LEFT_JUSTIFY_SHIFT
}

/// Rescales a 10-bit duty value onto a channel whose maximum duty is `hw_max`.
///
/// `0` maps to `0` and [`MAX_DUTY`] maps to `hw_max`. Inputs above
/// [`MAX_DUTY`] are clamped.
#[inline]
pub const fn scale_to(duty: u16, hw_max: u16) -> u16 {
    let duty = if duty > MAX_DUTY { MAX_DUTY } else { duty };
    (duty as u32 * hw_max as u32 / MAX_DUTY as u32) as u16
}

/// In-memory image of three left-justified 16-bit duty registers.
///
/// Mirrors the CCP/PWM duty registers of parts that store a 10-bit duty in
/// the upper bits of a 16-bit register. Useful as a host-side output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyRegisters {
    registers: [u16; 3],
}

impl DutyRegisters {
    /// Creates a register image with every register cleared.
    pub const fn new() -> Self {
        Self { registers: [0; 3] }
    }

    /// Raw register contents for one channel.
    #[inline]
    pub const fn register(&self, channel: Channel) -> u16 {
        self.registers[channel as usize]
    }

    /// Decoded 10-bit duty values of all three registers.
    pub fn duty(&self) -> RgbDuty {
        RgbDuty::new(
            from_left_justified(self.register(Channel::Red)),
            from_left_justified(self.register(Channel::Green)),
            from_left_justified(self.register(Channel::Blue)),
        )
    }
}

impl DutyCycleOutput for DutyRegisters {
    fn set_duty(&mut self, channel: Channel, duty: u16) {
        self.registers[channel as usize] = left_justified(duty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_fills_top_bits() {
        assert_eq!(left_justified(MAX_DUTY), 0xFFC0);
        assert_eq!(left_justified(1), 0x0040);
        assert_eq!(from_left_justified(0xFFC0), MAX_DUTY);
    }

    #[test]
    fn scale_maps_endpoints() {
        assert_eq!(scale_to(0, 47_999), 0);
        assert_eq!(scale_to(MAX_DUTY, 47_999), 47_999);
        assert_eq!(scale_to(MAX_DUTY, MAX_DUTY), MAX_DUTY);
    }
}
