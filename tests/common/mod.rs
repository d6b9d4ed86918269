//! Shared test infrastructure for rgb-hue-cycle integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rgb_hue_cycle::{Channel, DutyCycleOutput, RgbDuty, TickInterrupt};

// ============================================================================
// Mock PWM Output
// ============================================================================

/// Frames MockPwm can record before it panics; clear_history() to reuse
pub const HISTORY_CAPACITY: usize = 64;

/// Mock PWM output that records every pushed triple
pub struct MockPwm {
    current: RgbDuty,
    writes: usize,
    history: heapless::Vec<RgbDuty, HISTORY_CAPACITY>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            current: RgbDuty::default(),
            writes: 0,
            history: heapless::Vec::new(),
        }
    }

    pub fn current(&self) -> RgbDuty {
        self.current
    }

    /// Number of individual channel writes
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Triples recorded each time the blue channel was written (end of a frame)
    ///
    /// Holds at most HISTORY_CAPACITY frames; recording one more panics.
    pub fn history(&self) -> &[RgbDuty] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl DutyCycleOutput for MockPwm {
    fn set_duty(&mut self, channel: Channel, duty: u16) {
        self.current.set(channel, duty);
        self.writes += 1;
        if channel == Channel::Blue {
            self.history
                .push(self.current)
                .expect("MockPwm history full, call clear_history()");
        }
    }
}

// ============================================================================
// Mock Tick Interrupt
// ============================================================================

/// Mock timer interrupt flags
pub struct MockTickIrq {
    pub enabled: bool,
    pub pending: bool,
    pub clears: u32,
}

impl MockTickIrq {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pending: false,
            clears: 0,
        }
    }

    /// Simulate the timer raising its flag
    pub fn fire(&mut self) {
        self.pending = true;
    }
}

impl TickInterrupt for MockTickIrq {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_pending(&self) -> bool {
        self.pending
    }

    fn clear_pending(&mut self) {
        self.pending = false;
        self.clears += 1;
    }
}

// ============================================================================
// Manual Tick Driver
// ============================================================================

/// Hosted replacement for the hardware timer: drives callbacks on demand
pub struct ManualTicker {
    elapsed: u32,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self { elapsed: 0 }
    }

    /// Invoke `on_tick` `count` times
    pub fn run(&mut self, count: u32, mut on_tick: impl FnMut()) {
        for _ in 0..count {
            on_tick();
            self.elapsed += 1;
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
