//! Virtual-clock timer queue.
//!
//! All simulation timing goes through a `Scheduler`. Time is a `Duration`
//! measured from mount, so tests drive it manually and the TUI feeds it
//! wall-clock elapsed time. Timers carry a payload that is handed back when
//! they fire, which keeps the queue free of closures and fully inspectable.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled timer, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    /// Instant the timer was due (the clock is moved here before returning)
    pub at: Duration,
    pub payload: T,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    period: Option<Duration>,
    payload: T,
}

/// Ordered queue of one-shot and repeating timers over a virtual clock.
///
/// Ordering key is `(due, sequence)`, so timers due at the same instant
/// fire in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a one-shot timer `delay` after the current time.
    pub fn schedule_after(&mut self, delay: Duration, payload: T) -> TimerId {
        self.insert(self.now + delay, None, payload)
    }

    /// Schedule a repeating timer that first fires one `period` from now.
    ///
    /// A zero period would never let the clock advance, so it is raised
    /// to one millisecond.
    pub fn schedule_every(&mut self, period: Duration, payload: T) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(self.now + period, Some(period), payload)
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self
            .queue
            .iter()
            .find(|(_, entry)| entry.id == id)
            .map(|(key, _)| *key);
        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Cancel every outstanding timer.
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    /// Whether the timer is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.values().any(|entry| entry.id == id)
    }

    /// Number of outstanding timers.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest outstanding timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Moves the clock to the timer's due time. Repeating timers are
    /// re-armed one period later under the same id.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<T>>
    where
        T: Clone,
    {
        let key = *self.queue.keys().next()?;
        if key.0 > until {
            return None;
        }
        let entry = self.queue.remove(&key)?;
        let (due, _) = key;
        self.now = self.now.max(due);

        if let Some(period) = entry.period {
            let seq = self.bump_seq();
            self.queue.insert(
                (due + period, seq),
                Entry {
                    id: entry.id,
                    period: entry.period,
                    payload: entry.payload.clone(),
                },
            );
        }

        Some(Fired {
            id: entry.id,
            at: due,
            payload: entry.payload,
        })
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, payload: T) -> TimerId {
        let seq = self.bump_seq();
        let id = TimerId(seq);
        self.queue.insert((due, seq), Entry { id, period, payload });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
