//! Integration tests for polarity mapping and register encoding

mod common;
use common::*;

use rgb_hue_cycle::polarity::complement;
use rgb_hue_cycle::register::{from_left_justified, left_justified, scale_to};
use rgb_hue_cycle::{
    Channel, ColorCycle, DutyCycleOutput, DutyRegisters, MAX_DUTY, Polarity, RgbDuty,
};

#[test]
fn complement_is_involutive() {
    for duty in 0..=MAX_DUTY {
        assert_eq!(complement(complement(duty)), duty);
    }
}

#[test]
fn polarity_applied_twice_is_identity() {
    for polarity in [Polarity::ActiveHigh, Polarity::ActiveLow] {
        for duty in [0, 1, 511, 512, 1022, MAX_DUTY] {
            assert_eq!(polarity.apply(polarity.apply(duty)), duty);
        }
    }
}

#[test]
fn polarity_follows_led_wiring() {
    assert_eq!(Polarity::from_common_anode(true), Polarity::ActiveLow);
    assert_eq!(Polarity::from_common_anode(false), Polarity::ActiveHigh);
    assert_eq!(Polarity::default(), Polarity::ActiveLow);
    assert_eq!(Polarity::ActiveLow.inverted(), Polarity::ActiveHigh);
}

#[test]
fn polarity_is_uniform_across_channels() {
    let logical = RgbDuty::new(1023, 300, 0);
    assert_eq!(
        Polarity::ActiveLow.apply_rgb(logical),
        RgbDuty::new(0, 723, 1023)
    );
    assert_eq!(Polarity::ActiveHigh.apply_rgb(logical), logical);
}

#[test]
fn left_justified_encoding_round_trips_full_range() {
    for duty in 0..=MAX_DUTY {
        let register = left_justified(duty);
        assert_eq!(register & 0x003F, 0);
        assert_eq!(from_left_justified(register), duty);
    }
}

#[test]
fn left_justified_masks_out_of_range_bits() {
    assert_eq!(left_justified(0x0400), 0);
    assert_eq!(left_justified(0x0401), 0x0040);
}

#[test]
fn scale_is_monotonic_and_clamped() {
    let hw_max = 48_000;
    let mut previous = 0;
    for duty in 0..=MAX_DUTY {
        let scaled = scale_to(duty, hw_max);
        assert!(scaled >= previous);
        previous = scaled;
    }
    assert_eq!(scale_to(MAX_DUTY + 1, hw_max), hw_max);
    assert_eq!(scale_to(512, 0), 0);
}

#[test]
fn register_image_preloads_off_for_common_anode() {
    let cycle = ColorCycle::new(DutyRegisters::new(), Polarity::ActiveLow);

    for channel in Channel::ALL {
        assert_eq!(cycle.output().register(channel), 0xFFC0);
    }
}

#[test]
fn register_image_tracks_engine_output() {
    let mut cycle = ColorCycle::new(DutyRegisters::new(), Polarity::ActiveLow);
    let mut pwm = MockPwm::new();

    for _ in 0..10 {
        cycle.tick();
        pwm.write_all(cycle.output().duty());
    }

    assert_eq!(cycle.output().duty(), RgbDuty::new(8, 1015, 1023));
    assert_eq!(pwm.current(), cycle.output().duty());
    assert_eq!(cycle.output().register(Channel::Red), 8 << 6);
}
