#![no_std]

pub mod pwm_output;
pub mod tick_timer;
