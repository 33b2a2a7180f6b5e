//! A single virtual clock for every recurring and one-shot timer.
//!
//! Nothing here sleeps. The host moves time forward with
//! [`Scheduler::advance_to`] (or pops timers one at a time with
//! [`Scheduler::pop_due`]) and reacts to whatever fired.

pub type TimerId = u64;

#[derive(Debug, Clone)]
struct Timer<K> {
    id: TimerId,
    due_ms: u64,
    period_ms: Option<u64>,
    key: K,
}

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K> {
    pub id: TimerId,
    pub at_ms: u64,
    pub key: K,
}

#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    now_ms: u64,
    next_id: TimerId,
    timers: Vec<Timer<K>>,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Scheduler {
            now_ms: 0,
            next_id: 1,
            timers: Vec::new(),
        }
    }
}

impl<K: Clone> Scheduler<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Fire `key` every `period_ms`, first at `now + period_ms`.
    ///
    /// A zero period is treated as 1 ms so the clock always makes progress.
    pub fn every(&mut self, period_ms: u64, key: K) -> TimerId {
        let period_ms = period_ms.max(1);
        self.insert(self.now_ms + period_ms, Some(period_ms), key)
    }

    /// Fire `key` once, `delay_ms` from now.
    pub fn after(&mut self, delay_ms: u64, key: K) -> TimerId {
        self.insert(self.now_ms + delay_ms, None, key)
    }

    fn insert(&mut self, due_ms: u64, period_ms: Option<u64>, key: K) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_ms,
            period_ms,
            key,
        });
        id
    }

    /// Returns false if the timer already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_ms).min()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock
    /// to its due time. Ties go to the timer registered first.
    ///
    /// Timers registered while handling a popped timer are relative to that
    /// timer's due time, so chained one-shots land where they should.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired<K>> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id))
            .map(|(i, _)| i)?;

        let at_ms = self.timers[idx].due_ms;
        self.now_ms = self.now_ms.max(at_ms);
        let fired = match self.timers[idx].period_ms {
            Some(period) => {
                let timer = &mut self.timers[idx];
                timer.due_ms += period;
                Fired {
                    id: timer.id,
                    at_ms,
                    key: timer.key.clone(),
                }
            }
            None => {
                let timer = self.timers.swap_remove(idx);
                Fired {
                    id: timer.id,
                    at_ms,
                    key: timer.key,
                }
            }
        };
        Some(fired)
    }

    /// Move the clock to `now_ms`, returning everything that fired in time
    /// order. The clock never runs backwards.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<Fired<K>> {
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(now_ms) {
            fired.push(f);
        }
        self.now_ms = self.now_ms.max(now_ms);
        fired
    }

    pub fn advance_by(&mut self, delta_ms: u64) -> Vec<Fired<K>> {
        self.advance_to(self.now_ms + delta_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(fired: &[Fired<&'static str>]) -> Vec<(u64, &'static str)> {
        fired.iter().map(|f| (f.at_ms, f.key)).collect()
    }

    #[test]
    fn interval_fires_every_period() {
        let mut s = Scheduler::new();
        s.every(10_000, "net");
        assert!(s.advance_to(9_999).is_empty());
        let fired = s.advance_to(30_000);
        assert_eq!(keys(&fired), vec![(10_000, "net"), (20_000, "net"), (30_000, "net")]);
        assert_eq!(s.now_ms(), 30_000);
    }

    #[test]
    fn one_shot_fires_once() {
        let mut s = Scheduler::new();
        let id = s.after(3_000, "upload");
        assert!(s.is_scheduled(id));
        assert_eq!(keys(&s.advance_to(5_000)), vec![(3_000, "upload")]);
        assert!(!s.is_scheduled(id));
        assert!(s.advance_to(60_000).is_empty());
    }

    #[test]
    fn mixed_timers_fire_in_time_order() {
        let mut s = Scheduler::new();
        s.every(15_000, "report");
        s.every(10_000, "net");
        s.after(2_000, "alerts");
        let fired = s.advance_to(30_000);
        assert_eq!(
            keys(&fired),
            vec![
                (2_000, "alerts"),
                (10_000, "net"),
                (15_000, "report"),
                (20_000, "net"),
                (30_000, "report"),
                (30_000, "net"),
            ],
            "ties go to the earlier registration"
        );
    }

    #[test]
    fn cancel_stops_a_timer() {
        let mut s = Scheduler::new();
        let id = s.every(1_000, "tick");
        s.advance_to(2_500);
        assert!(s.cancel(id));
        assert!(!s.cancel(id), "second cancel is a no-op");
        assert!(s.advance_to(10_000).is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn timers_registered_mid_advance_are_relative_to_the_fired_timer() {
        let mut s = Scheduler::new();
        s.after(1_000, "submit");
        let first = s.pop_due(10_000).unwrap();
        assert_eq!(first.at_ms, 1_000);
        s.after(3_000, "synced");
        let rest = s.advance_to(10_000);
        assert_eq!(keys(&rest), vec![(4_000, "synced")]);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut s: Scheduler<&str> = Scheduler::new();
        s.advance_to(5_000);
        s.advance_to(1_000);
        assert_eq!(s.now_ms(), 5_000);
        s.after(100, "late");
        assert_eq!(s.next_due_ms(), Some(5_100));
    }

    #[test]
    fn zero_period_still_progresses() {
        let mut s = Scheduler::new();
        s.every(0, "spin");
        assert_eq!(s.advance_to(3).len(), 3);
    }
}
