use std::time::Instant;

/// Handle returned by [`Scheduler::schedule`], used to cancel a pending task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due: Instant,
    task: T,
}

/// One-shot deferred tasks, fired by polling with the current time.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, due: Instant, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending { id, due, task });
        id
    }

    /// Returns false if the task already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        // stable, so equal deadlines fire in scheduling order
        due.sort_by_key(|p| p.due);
        due.into_iter().map(|p| p.task).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn nothing_fires_early() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(t0 + Duration::from_millis(100), "a");
        assert!(s.take_due(t0 + Duration::from_millis(99)).is_empty());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn fires_at_deadline_once() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(t0 + Duration::from_millis(100), "a");
        assert_eq!(s.take_due(t0 + Duration::from_millis(100)), vec!["a"]);
        assert!(s.take_due(t0 + Duration::from_secs(10)).is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn fires_in_due_order() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(t0 + Duration::from_millis(30), 3);
        s.schedule(t0 + Duration::from_millis(10), 1);
        s.schedule(t0 + Duration::from_millis(20), 2);
        s.schedule(t0 + Duration::from_millis(50), 5);
        assert_eq!(s.take_due(t0 + Duration::from_millis(40)), vec![1, 2, 3]);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        let a = s.schedule(t0, "a");
        s.schedule(t0, "b");
        assert!(s.cancel(a));
        assert!(!s.cancel(a));
        assert_eq!(s.take_due(t0), vec!["b"]);
    }

    #[test]
    fn cancel_all_empties_the_queue() {
        let t0 = Instant::now();
        let mut s = Scheduler::new();
        s.schedule(t0, 1);
        s.schedule(t0, 2);
        assert_eq!(s.cancel_all(), 2);
        assert!(s.take_due(t0).is_empty());
        assert!(s.is_empty());
    }
}
