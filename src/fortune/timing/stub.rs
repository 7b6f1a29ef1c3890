use std::time::Duration;

/// Dummy lap timer when `timing` is disabled (zero-sized).
pub struct LapTimer;

impl LapTimer {
    #[inline(always)]
    pub fn start() -> Self {
        Self
    }

    #[inline(always)]
    pub fn lap(&mut self) -> Duration {
        Duration::ZERO
    }
}

/// Dummy timings when `timing` is disabled (zero-sized).
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimings;

impl PhaseTimings {
    #[inline(always)]
    pub fn report(&self, _n: usize) {}
}

/// Dummy builder when `timing` is disabled.
pub struct TimingBuilder;

impl TimingBuilder {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }

    #[inline(always)]
    pub fn set_seed(&mut self, _d: Duration) {}

    #[inline(always)]
    pub fn set_sweep(&mut self, _d: Duration) {}

    #[inline(always)]
    pub fn set_completion(&mut self, _d: Duration) {}

    #[inline(always)]
    pub fn set_assemble(&mut self, _d: Duration) {}

    #[inline(always)]
    pub fn finish(self) -> PhaseTimings {
        PhaseTimings
    }
}
