//! Network-status observers.
//!
//! The app only ever asks "are we offline?". Where the answer comes from is
//! behind [`NetworkStatus`] so the demo flapping and the tests' fixed answers
//! plug into the same simulation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait NetworkStatus {
    fn is_offline(&self) -> bool;

    /// Re-evaluate the status on a periodic check and return the new value.
    fn check(&mut self) -> bool;
}

/// Demo network: on every check, goes offline with a fixed probability
/// (and back online otherwise).
#[derive(Debug, Clone)]
pub struct SimulatedNetwork {
    offline: bool,
    probability: f64,
    rng: SmallRng,
}

impl SimulatedNetwork {
    pub fn new(probability: f64, rng: SmallRng) -> Self {
        SimulatedNetwork {
            offline: false,
            probability: crate::config::clamp_probability(probability),
            rng,
        }
    }

    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self::new(probability, SmallRng::seed_from_u64(seed))
    }
}

impl NetworkStatus for SimulatedNetwork {
    fn is_offline(&self) -> bool {
        self.offline
    }

    fn check(&mut self) -> bool {
        self.offline = self.rng.random_bool(self.probability);
        self.offline
    }
}

/// Always reports whatever it was last told.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedNetwork {
    offline: bool,
}

impl FixedNetwork {
    pub fn online() -> Self {
        FixedNetwork { offline: false }
    }

    pub fn offline() -> Self {
        FixedNetwork { offline: true }
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }
}

impl NetworkStatus for FixedNetwork {
    fn is_offline(&self) -> bool {
        self.offline
    }

    fn check(&mut self) -> bool {
        self.offline
    }
}

/// Plays back a fixed sequence of states, one per check, then holds the last.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNetwork {
    offline: bool,
    script: VecDeque<bool>,
}

impl ScriptedNetwork {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        ScriptedNetwork {
            offline: false,
            script: script.into_iter().collect(),
        }
    }
}

impl NetworkStatus for ScriptedNetwork {
    fn is_offline(&self) -> bool {
        self.offline
    }

    fn check(&mut self) -> bool {
        if let Some(next) = self.script.pop_front() {
            self.offline = next;
        }
        self.offline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_network_starts_online() {
        let net = SimulatedNetwork::seeded(0.1, 7);
        assert!(!net.is_offline());
    }

    #[test]
    fn simulated_network_respects_extremes() {
        let mut never = SimulatedNetwork::seeded(0.0, 1);
        let mut always = SimulatedNetwork::seeded(1.0, 1);
        for _ in 0..50 {
            assert!(!never.check());
            assert!(always.check());
        }
    }

    #[test]
    fn simulated_network_is_mostly_online_at_ten_percent() {
        let mut net = SimulatedNetwork::seeded(0.1, 42);
        let offline = (0..1_000).filter(|_| net.check()).count();
        assert!((40..=180).contains(&offline), "offline {offline} of 1000");
    }

    #[test]
    fn simulated_network_is_deterministic_per_seed() {
        let run = |seed| {
            let mut net = SimulatedNetwork::seeded(0.5, seed);
            (0..32).map(|_| net.check()).collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn fixed_network_only_changes_when_told() {
        let mut net = FixedNetwork::online();
        assert!(!net.check());
        net.set_offline(true);
        assert!(net.check());
        assert!(FixedNetwork::offline().is_offline());
    }

    #[test]
    fn scripted_network_holds_last_state() {
        let mut net = ScriptedNetwork::new([true, false, true]);
        assert_eq!(
            (0..5).map(|_| net.check()).collect::<Vec<_>>(),
            vec![true, false, true, true, true]
        );
    }
}
