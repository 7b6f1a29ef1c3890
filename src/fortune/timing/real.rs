use std::time::{Duration, Instant};

/// Timer optimized for sequential phase timing: each `lap()` uses a single `Instant::now()`.
pub struct LapTimer(Instant);

impl LapTimer {
    #[inline]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let d = now.duration_since(self.0);
        self.0 = now;
        d
    }
}

/// Wall-clock time spent in each phase of one computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTimings {
    pub seed: Duration,
    pub sweep: Duration,
    pub completion: Duration,
    pub assemble: Duration,
}

impl PhaseTimings {
    pub fn total(&self) -> Duration {
        self.seed + self.sweep + self.completion + self.assemble
    }

    pub fn report(&self, n: usize) {
        let total = self.total();
        let ms = |d: Duration| d.as_secs_f64() * 1000.0;
        let pct = |d: Duration| {
            if total.is_zero() {
                0.0
            } else {
                d.as_secs_f64() / total.as_secs_f64() * 100.0
            }
        };

        log::info!("timing n={}", n);
        log::info!("  seed:       {:7.2}ms ({:4.1}%)", ms(self.seed), pct(self.seed));
        log::info!("  sweep:      {:7.2}ms ({:4.1}%)", ms(self.sweep), pct(self.sweep));
        log::info!("  completion: {:7.2}ms ({:4.1}%)", ms(self.completion), pct(self.completion));
        log::info!("  assemble:   {:7.2}ms ({:4.1}%)", ms(self.assemble), pct(self.assemble));
        log::info!("  total:      {:7.2}ms", ms(total));
    }
}

pub struct TimingBuilder {
    timings: PhaseTimings,
}

impl TimingBuilder {
    pub fn new() -> Self {
        Self {
            timings: PhaseTimings::default(),
        }
    }

    pub fn set_seed(&mut self, d: Duration) {
        self.timings.seed = d;
    }

    pub fn set_sweep(&mut self, d: Duration) {
        self.timings.sweep = d;
    }

    pub fn set_completion(&mut self, d: Duration) {
        self.timings.completion = d;
    }

    pub fn set_assemble(&mut self, d: Duration) {
        self.timings.assemble = d;
    }

    pub fn finish(self) -> PhaseTimings {
        self.timings
    }
}
