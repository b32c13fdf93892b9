// Virtual-time timer queue driving the minigame.
//
// Timers fire earliest first; timers due at the same instant fire in the
// order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

struct Timer<T> {
    at: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Timer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl<T> Eq for Timer<T> {}

impl<T> PartialOrd for Timer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Timer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.at, self.seq).cmp(&(other.at, other.seq))
    }
}

pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    timers: BinaryHeap<Reverse<Timer<T>>>,
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
            timers: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    // Schedules `task` to fire `delay` after the current time.
    pub fn schedule_in(&mut self, delay: Duration, task: T) {
        self.schedule(self.now + delay, task);
    }

    // Timers in the past are clamped to now so the clock never rewinds.
    pub fn schedule(&mut self, at: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.timers.push(Reverse(Timer {
            at: at.max(self.now),
            seq,
            task,
        }));
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Returns `None` once nothing else is due, after moving the
    /// clock to `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<(Duration, T)> {
        let due = self
            .timers
            .peek()
            .is_some_and(|Reverse(timer)| timer.at <= until);
        if !due {
            self.now = self.now.max(until);
            return None;
        }

        let Reverse(timer) = self.timers.pop()?;
        self.now = timer.at;
        Some((timer.at, timer.task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_timers_are_due_then_they_pop_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_secs(3), "c");
        scheduler.schedule(Duration::from_secs(1), "a");
        scheduler.schedule(Duration::from_secs(2), "b");

        let mut fired = Vec::new();
        while let Some((_, task)) = scheduler.pop_due(Duration::from_secs(10)) {
            fired.push(task);
        }

        assert_eq!(fired, vec!["a", "b", "c"]);
        assert_eq!(scheduler.now(), Duration::from_secs(10));
    }

    #[test]
    fn when_timers_share_a_deadline_then_insertion_order_wins() {
        let mut scheduler = Scheduler::new();
        for label in ["first", "second", "third"] {
            scheduler.schedule(Duration::from_secs(1), label);
        }

        let mut fired = Vec::new();
        while let Some((_, task)) = scheduler.pop_due(Duration::from_secs(1)) {
            fired.push(task);
        }

        assert_eq!(fired, vec!["first", "second", "third"]);
    }

    #[test]
    fn when_timer_is_not_yet_due_then_it_stays_queued() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_in(Duration::from_secs(2), ());

        assert!(scheduler.pop_due(Duration::from_secs(1)).is_none());
        assert_eq!(scheduler.now(), Duration::from_secs(1));
        assert_eq!(scheduler.len(), 1);

        let (at, ()) = scheduler
            .pop_due(Duration::from_secs(2))
            .expect("timer due at 2s");
        assert_eq!(at, Duration::from_secs(2));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn when_scheduling_in_the_past_then_deadline_is_clamped_to_now() {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.pop_due(Duration::from_secs(5)).is_none());

        scheduler.schedule(Duration::from_secs(1), ());

        let (at, ()) = scheduler
            .pop_due(Duration::from_secs(5))
            .expect("clamped timer is due");
        assert_eq!(at, Duration::from_secs(5));
    }
}
