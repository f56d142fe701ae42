//! Rolling timestamp simulation for the emitted sensor clock.
//!
//! Host drivers integrate gyro samples assuming the device ticks at its
//! nominal report interval. The capture side samples the IMU at whatever
//! rate the hardware and scheduler allow, so wall-clock deltas between
//! motion samples are rescaled into the device's expected cadence before
//! being published in the input report.

/// Observed inter-sample deltas are averaged over this many slots.
const DELTA_WINDOW: usize = 30;

/// Deltas of one second or more are treated as discontinuities (suspend,
/// capture stall) and kept out of the average.
const DELTA_OUTLIER_US: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct TimestampSimulator {
    deltas: [u64; DELTA_WINDOW],
    deltas_sum: u64,
    next_slot: usize,
    /// Accumulated simulated clock, in device timestamp units.
    sim_clock: f64,
    /// Polling cycles since the last fresh motion sample.
    empty_reports: u64,
    last_time_us: u64,
    /// Nominal device units per report interval (188 for DualShock 4,
    /// 4096 for DualSense).
    nominal_interval: f64,
}

impl TimestampSimulator {
    pub fn new(nominal_interval: u64) -> Self {
        Self {
            deltas: [0; DELTA_WINDOW],
            deltas_sum: 0,
            next_slot: 0,
            sim_clock: 0.0,
            empty_reports: 0,
            last_time_us: 0,
            nominal_interval: nominal_interval as f64,
        }
    }

    /// Advance the simulation with the timestamp of the newest motion sample
    /// (microseconds) and return the timestamp to publish, in device units.
    /// Callers truncate to the protocol's field width.
    pub fn advance(&mut self, now_us: u64) -> u64 {
        let delta = now_us.saturating_sub(self.last_time_us);
        self.last_time_us = now_us;

        if delta == 0 {
            // Same motion sample as last cycle.
            self.empty_reports += 1;
        } else {
            if delta < DELTA_OUTLIER_US {
                self.deltas_sum -= self.deltas[self.next_slot];
                self.deltas[self.next_slot] = delta;
                self.deltas_sum += delta;
                self.next_slot = (self.next_slot + 1) % DELTA_WINDOW;
            }
            let correction = if self.deltas_sum == 0 {
                1.0
            } else {
                self.nominal_interval / (self.deltas_sum as f64 / DELTA_WINDOW as f64)
            };
            self.sim_clock += delta as f64 * correction;
            self.empty_reports = 0;
        }

        self.sim_clock as u64 + self.empty_reports * self.nominal_interval as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_clock_is_monotonic() {
        let mut sim = TimestampSimulator::new(188);
        let mut now = 0u64;
        let mut last = 0.0f64;
        // Irregular but plausible sampling: bursts, stalls, and an outlier.
        let deltas = [1250u64, 1250, 0, 900, 2000, 0, 0, 1250, 5_000_000, 1100];
        for _ in 0..20 {
            for delta in deltas {
                now += delta;
                sim.advance(now);
                assert!(
                    sim.sim_clock >= last,
                    "clock went backwards: {} < {last}",
                    sim.sim_clock
                );
                last = sim.sim_clock;
            }
        }
    }

    #[test]
    fn empty_cycles_pad_with_nominal_interval() {
        let mut sim = TimestampSimulator::new(4096);
        // Fill the window with a steady cadence first.
        let mut now = 0u64;
        for _ in 0..DELTA_WINDOW {
            now += 1250;
            sim.advance(now);
        }
        let base = sim.advance(now + 1250);
        // Stalled sampling: each empty cycle advances by one nominal tick.
        let first_empty = sim.advance(now + 1250);
        let second_empty = sim.advance(now + 1250);
        assert_eq!(first_empty - base, 4096);
        assert_eq!(second_empty - first_empty, 4096);
    }

    #[test]
    fn steady_sampling_converges_to_nominal_rate() {
        let mut sim = TimestampSimulator::new(188);
        let mut now = 0u64;
        for _ in 0..(DELTA_WINDOW * 4) {
            now += 1250;
            sim.advance(now);
        }
        let a = sim.advance(now + 1250);
        let b = sim.advance(now + 2500);
        // Once the window holds the real cadence, every real delta is
        // rescaled to one nominal interval per report (within truncation).
        let step = b - a;
        assert!((187..=189).contains(&step), "unexpected step {step}");
    }

    #[test]
    fn outliers_do_not_enter_the_window() {
        let mut steady = TimestampSimulator::new(188);
        let mut with_outlier = TimestampSimulator::new(188);
        let mut now = 0u64;
        for _ in 0..DELTA_WINDOW {
            now += 1000;
            steady.advance(now);
            with_outlier.advance(now);
        }
        // A multi-second stall must leave the averaging window unchanged.
        with_outlier.advance(now + 10_000_000);
        assert_eq!(steady.deltas_sum, with_outlier.deltas_sum);
    }
}
