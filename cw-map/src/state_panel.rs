//! Placeholder statistics for the selected-state panel.

use rand::Rng;
use serde::Serialize;

/// Numbers shown when a state is clicked. Drawn fresh for every render and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateStats {
    /// 1..=8
    pub active_reports: u32,
    /// 1..=30
    pub last_update_minutes: u32,
    /// 40..=79
    pub average_urgency: u32,
}

impl StateStats {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StateStats {
            active_reports: rng.random_range(1..=8),
            last_update_minutes: rng.random_range(1..=30),
            average_urgency: rng.random_range(40..80),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let s = StateStats::sample(&mut rng);
            assert!((1..=8).contains(&s.active_reports));
            assert!((1..=30).contains(&s.last_update_minutes));
            assert!((40..=79).contains(&s.average_urgency));
        }
    }

    #[test]
    fn same_seed_same_numbers() {
        let a = StateStats::sample(&mut SmallRng::seed_from_u64(42));
        let b = StateStats::sample(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
