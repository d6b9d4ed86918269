#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorCycleState`**: Sector, ramp counter and the pending duty triple of the hue rotation
//! - **`ColorCycle`**: Owns a PWM output and a state, advances one step per tick
//! - **`DutyCycleOutput`**: Trait to implement for your three PWM channels
//! - **`TickInterrupt`**: Trait to implement for the enable/pending flags of your tick timer
//! - **`Polarity`**: Active-high (common-cathode) or active-low (common-anode) duty encoding
//! - **`TickTimerConfig`**: Timer arithmetic linking PWM frequency, tick rate and rotation period
//!
//! Duty values are raw 10-bit integers (`0..=1023`). Implementations of
//! `DutyCycleOutput` convert them to their register width.

pub use palette::Srgb;

pub mod types;
pub mod polarity;
pub mod engine;
pub mod register;
pub mod tick;

pub use types::{CYCLE_LENGTH, Channel, MAX_DUTY, MIN_DUTY, RgbDuty, STEPS_PER_SECTOR, Sector};
pub use polarity::Polarity;
pub use engine::{ColorCycle, ColorCycleState, DutyCycleOutput};
pub use register::{DutyRegisters, left_justified, scale_to};
pub use tick::{Dispatch, TickInterrupt, TickTimerConfig, TimerConfigError, dispatch};
