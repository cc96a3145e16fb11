//! Simulated start-up progress shown before the city appears.

use std::time::Duration;

use rand::Rng;

/// Status lines, in the order progress reaches them.
pub const STEPS: [&str; 7] = [
    "Initializing Neural Network...",
    "Connecting to AI Core...",
    "Loading Cityscape Data...",
    "Calibrating 3D Engines...",
    "Establishing Quantum Links...",
    "Activating Holographic Interface...",
    "System Ready!",
];

/// Subsystems and the progress, in percent, above which each comes online.
const SUBSYSTEMS: [(&str, f64, &str); 4] = [
    ("NEURAL CORE", 20.0, "INITIALIZING"),
    ("QUANTUM PROCESSOR", 40.0, "STANDBY"),
    ("HOLOGRAPHIC ENGINE", 60.0, "STANDBY"),
    ("AI INTERFACE", 80.0, "STANDBY"),
];

/// Progress simulation driven by an injected random source.
#[derive(Debug, Clone)]
pub struct LoadingSequence<R> {
    rng: R,
    max_increment: f64,
    progress: f64,
    step: usize,
    ticks: u64,
}

impl<R: Rng> LoadingSequence<R> {
    pub fn new(rng: R, max_increment: f64) -> Self {
        Self {
            rng,
            max_increment,
            progress: 0.0,
            step: 0,
            ticks: 0,
        }
    }

    /// Add one random increment, capped at 100%.
    pub fn tick(&mut self) {
        let next = self.progress + self.rng.random::<f64>() * self.max_increment;
        let step = ((next / 100.0) * STEPS.len() as f64).floor() as usize;
        if step < STEPS.len() {
            self.step = step;
        }
        self.progress = next.min(100.0);
        self.ticks += 1;
    }

    /// Run every tick that is due by `elapsed`, one per `interval`.
    pub fn advance_to(&mut self, elapsed: Duration, interval: Duration) {
        let due = elapsed.as_nanos() / interval.as_nanos().max(1);
        while u128::from(self.ticks) < due {
            self.tick();
        }
    }

    /// Progress in percent, 0..=100.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn status(&self) -> &'static str {
        STEPS[self.step]
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Each subsystem with its current state label.
    pub fn subsystems(&self) -> Vec<(&'static str, &'static str)> {
        SUBSYSTEMS
            .iter()
            .map(|&(name, threshold, idle)| {
                let state = if self.progress > threshold { "ONLINE" } else { idle };
                (name, state)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn sequence(seed: u64) -> LoadingSequence<StdRng> {
        LoadingSequence::new(StdRng::seed_from_u64(seed), 15.0)
    }

    #[test]
    fn test_starts_empty() {
        let seq = sequence(1);
        assert_eq!(seq.progress(), 0.0);
        assert_eq!(seq.status(), STEPS[0]);
        assert!(seq.subsystems().iter().all(|(_, state)| *state != "ONLINE"));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = sequence(42);
        let mut b = sequence(42);
        for _ in 0..30 {
            a.tick();
            b.tick();
            assert_eq!(a.progress(), b.progress());
            assert_eq!(a.status(), b.status());
        }
    }

    #[test]
    fn test_progress_is_monotone_and_capped() {
        let mut seq = sequence(7);
        let mut last = 0.0;
        for _ in 0..200 {
            seq.tick();
            assert!(seq.progress() >= last);
            assert!(seq.progress() <= 100.0);
            last = seq.progress();
        }
        // 200 increments averaging 7.5% always saturate.
        assert_eq!(seq.progress(), 100.0);
        assert!(seq.subsystems().iter().all(|(_, state)| *state == "ONLINE"));
    }

    #[test]
    fn test_status_follows_progress() {
        let mut seq = sequence(3);
        for _ in 0..50 {
            seq.tick();
            if seq.progress() < 100.0 {
                let expected = ((seq.progress() / 100.0) * STEPS.len() as f64).floor() as usize;
                assert_eq!(seq.status(), STEPS[expected]);
            }
        }
    }

    #[test]
    fn test_advance_to_runs_due_ticks() {
        let mut seq = sequence(9);
        let interval = Duration::from_millis(200);
        seq.advance_to(Duration::from_millis(199), interval);
        assert_eq!(seq.ticks(), 0);
        seq.advance_to(Duration::from_millis(1000), interval);
        assert_eq!(seq.ticks(), 5);
        seq.advance_to(Duration::from_millis(1000), interval);
        assert_eq!(seq.ticks(), 5);
    }
}
