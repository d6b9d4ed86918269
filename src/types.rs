//! Core types shared by the color cycle engine and its hardware seams.

/// Lowest duty cycle value.
pub const MIN_DUTY: u16 = 0;

/// Highest duty cycle value (10-bit resolution).
pub const MAX_DUTY: u16 = 1023;

/// Engine invocations spent in each sector.
pub const STEPS_PER_SECTOR: u32 = MAX_DUTY as u32 + 1;

/// Engine invocations in one full hue rotation.
pub const CYCLE_LENGTH: u32 = STEPS_PER_SECTOR * Sector::COUNT as u32;

/// One of the three PWM output channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in write order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// Which pair of channels is cross-fading.
///
/// Sectors advance strictly in declaration order and wrap after [`Sector::BlueToRed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sector {
    /// Red fades out while green fades in. Blue is off.
    RedToGreen,
    /// Green fades out while blue fades in. Red is off.
    GreenToBlue,
    /// Blue fades out while red fades in. Green is off.
    BlueToRed,
}

impl Sector {
    /// Number of sectors in a rotation.
    pub const COUNT: usize = 3;

    /// Returns the sector index (0, 1 or 2).
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            Sector::RedToGreen => 0,
            Sector::GreenToBlue => 1,
            Sector::BlueToRed => 2,
        }
    }

    /// Returns the sector that follows this one.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Sector::RedToGreen => Sector::GreenToBlue,
            Sector::GreenToBlue => Sector::BlueToRed,
            Sector::BlueToRed => Sector::RedToGreen,
        }
    }

    /// The channel that is ramping down in this sector.
    pub const fn falling(self) -> Channel {
        match self {
            Sector::RedToGreen => Channel::Red,
            Sector::GreenToBlue => Channel::Green,
            Sector::BlueToRed => Channel::Blue,
        }
    }

    /// The channel that is ramping up in this sector.
    pub const fn rising(self) -> Channel {
        match self {
            Sector::RedToGreen => Channel::Green,
            Sector::GreenToBlue => Channel::Blue,
            Sector::BlueToRed => Channel::Red,
        }
    }

    /// The channel held at minimum brightness in this sector.
    pub const fn idle(self) -> Channel {
        match self {
            Sector::RedToGreen => Channel::Blue,
            Sector::GreenToBlue => Channel::Red,
            Sector::BlueToRed => Channel::Green,
        }
    }
}

/// A duty cycle value for each of the three channels.
///
/// Depending on context the values are either logical brightness (0 is off)
/// or raw register values after polarity mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbDuty {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl RgbDuty {
    /// Creates a duty triple.
    #[inline]
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Creates a triple with the same value on every channel.
    #[inline]
    pub const fn splat(value: u16) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the value for one channel.
    #[inline]
    pub const fn get(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Sets the value for one channel.
    #[inline]
    pub fn set(&mut self, channel: Channel, value: u16) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
    }

    /// Applies `f` to every channel.
    #[inline]
    pub fn map(self, mut f: impl FnMut(u16) -> u16) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sectors_wrap_after_three_steps() {
        let start = Sector::RedToGreen;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.next().index(), 1);
        assert_eq!(start.next().next().index(), 2);
    }

    #[test]
    fn each_sector_assigns_every_channel_a_distinct_role() {
        for sector in [Sector::RedToGreen, Sector::GreenToBlue, Sector::BlueToRed] {
            assert_ne!(sector.falling(), sector.rising());
            assert_ne!(sector.rising(), sector.idle());
            assert_ne!(sector.idle(), sector.falling());
        }
    }

    #[test]
    fn cycle_length_covers_three_full_ramps() {
        assert_eq!(CYCLE_LENGTH, 3072);
    }
}
