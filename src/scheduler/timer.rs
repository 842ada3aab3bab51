//! Keyed one-shot timers
//!
//! A min-heap of deadlines, each tagged with the id of the entity it belongs
//! to. Cancelling is done by key; cancelled entries stay in the heap and are
//! dropped when they reach the top.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::time::Instant;

/// A timer that reached its deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K, E> {
    pub key: K,
    /// The deadline the timer was armed for, not the time it was polled
    pub due: Instant,
    pub payload: E,
}

#[derive(Debug)]
struct TimerEntry<K, E> {
    due: Instant,
    seq: u64,
    key: K,
    payload: E,
}

impl<K, E> PartialEq for TimerEntry<K, E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<K, E> Eq for TimerEntry<K, E> {}

impl<K, E> PartialOrd for TimerEntry<K, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, E> Ord for TimerEntry<K, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; earliest deadline, then earliest arming, wins.
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// One-shot timers keyed by entity id
#[derive(Debug)]
pub struct TimerQueue<K, E> {
    heap: BinaryHeap<TimerEntry<K, E>>,
    live: HashMap<u64, K>,
    seq: u64,
}

impl<K, E> Default for TimerQueue<K, E> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            seq: 0,
        }
    }
}

impl<K: Copy + Eq + Hash, E> TimerQueue<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer for `key` that fires at `due`
    pub fn arm(&mut self, key: K, due: Instant, payload: E) {
        self.seq += 1;
        let seq = self.seq;
        self.heap.push(TimerEntry {
            due,
            seq,
            key,
            payload,
        });
        self.live.insert(seq, key);
    }

    /// Cancel every armed timer for `key`; returns how many were cancelled
    pub fn cancel_key(&mut self, key: K) -> usize {
        let before = self.live.len();
        self.live.retain(|_, k| *k != key);
        before - self.live.len()
    }

    /// Remove and return the earliest armed timer due at or before `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<K, E>> {
        while let Some(top) = self.heap.peek() {
            if !self.live.contains_key(&top.seq) {
                self.heap.pop();
                continue;
            }
            if top.due > now {
                return None;
            }
            let entry = self.heap.pop()?;
            self.live.remove(&entry.seq);
            return Some(Fired {
                key: entry.key,
                due: entry.due,
                payload: entry.payload,
            });
        }
        None
    }

    /// Earliest deadline among armed timers
    pub fn next_due(&self) -> Option<Instant> {
        self.heap
            .iter()
            .filter(|e| self.live.contains_key(&e.seq))
            .map(|e| e.due)
            .min()
    }

    /// Number of armed timers
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.arm(1, t0 + ms(300), "c");
        timers.arm(2, t0 + ms(100), "a");
        timers.arm(3, t0 + ms(200), "b");

        assert!(timers.pop_due(t0).is_none());

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(t0 + ms(1000)))
            .map(|f| f.payload)
            .collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_ties_fire_in_arming_order() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.arm(1, t0, "first");
        timers.arm(2, t0, "second");

        assert_eq!(timers.pop_due(t0).unwrap().payload, "first");
        assert_eq!(timers.pop_due(t0).unwrap().payload, "second");
    }

    #[test]
    fn test_cancel_by_key() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.arm(7, t0 + ms(500), "notify");
        timers.arm(7, t0 + ms(5500), "delete");
        timers.arm(8, t0 + ms(500), "other");

        assert_eq!(timers.len(), 3);
        assert_eq!(timers.cancel_key(7), 2);
        assert_eq!(timers.cancel_key(7), 0);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_due(), Some(t0 + ms(500)));

        let fired = timers.pop_due(t0 + ms(10_000)).unwrap();
        assert_eq!(fired.key, 8);
        assert!(timers.pop_due(t0 + ms(10_000)).is_none());
    }

    #[test]
    fn test_fired_reports_deadline() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.arm(1, t0 + ms(500), ());
        let fired = timers.pop_due(t0 + ms(2000)).unwrap();
        assert_eq!(fired.due, t0 + ms(500));
    }
}
