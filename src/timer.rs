//! Timer abstraction shared by every widget controller.
//!
//! Controllers never touch `setTimeout`/`setInterval` directly. They ask a
//! [`Scheduler`] to deliver a message later and get a [`TaskId`] back that
//! they can cancel. In the browser the scheduler is backed by `gloo-timers`
//! (see `driver.rs`); test builds get a `VirtualScheduler` that advances a
//! fake clock.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        TaskId(raw)
    }
}

pub trait Scheduler<M> {
    /// Deliver `msg` once, `delay_ms` from now.
    fn after(&mut self, delay_ms: u32, msg: M) -> TaskId;

    /// Deliver `msg` every `period_ms` until cancelled.
    fn every(&mut self, period_ms: u32, msg: M) -> TaskId;

    /// Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TaskId);
}

#[cfg(test)]
struct VirtualTask<M> {
    id: TaskId,
    due: u64,
    period: Option<u64>,
    msg: M,
}

/// Deterministic scheduler driven by [`VirtualScheduler::advance`].
#[cfg(test)]
pub struct VirtualScheduler<M> {
    now: u64,
    next_id: u64,
    tasks: Vec<VirtualTask<M>>,
}

#[cfg(test)]
impl<M> Default for VirtualScheduler<M> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

#[cfg(test)]
impl<M: Clone> VirtualScheduler<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Move the clock forward and collect everything that fired.
    pub fn advance(&mut self, ms: u64) -> Vec<M> {
        let mut fired = Vec::new();
        self.advance_with(ms, |msg, _| fired.push(msg));
        fired
    }

    /// Move the clock forward, handing each firing to `deliver` as it
    /// happens. Tasks scheduled from inside `deliver` are honoured within
    /// the same window.
    pub fn advance_with(&mut self, ms: u64, mut deliver: impl FnMut(M, &mut Self)) {
        let target = self.now + ms;
        while let Some(pos) = self.next_due(target) {
            self.now = self.tasks[pos].due;
            let msg = match self.tasks[pos].period {
                Some(period) => {
                    let task = &mut self.tasks[pos];
                    task.due += period;
                    task.msg.clone()
                }
                None => self.tasks.remove(pos).msg,
            };
            deliver(msg, self);
        }
        self.now = target;
    }

    fn next_due(&self, target: u64) -> Option<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(pos, _)| pos)
    }

    fn push(&mut self, delay: u64, period: Option<u64>, msg: M) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(VirtualTask {
            id,
            due: self.now + delay,
            period,
            msg,
        });
        id
    }
}

#[cfg(test)]
impl<M: Clone> Scheduler<M> for VirtualScheduler<M> {
    fn after(&mut self, delay_ms: u32, msg: M) -> TaskId {
        self.push(u64::from(delay_ms), None, msg)
    }

    fn every(&mut self, period_ms: u32, msg: M) -> TaskId {
        let period = u64::from(period_ms.max(1));
        self.push(period, Some(period), msg)
    }

    fn cancel(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_at_its_deadline() {
        let mut sched = VirtualScheduler::new();
        sched.after(100, "done");

        assert!(sched.advance(99).is_empty());
        assert_eq!(sched.advance(1), vec!["done"]);
        assert!(sched.advance(1000).is_empty());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn recurring_task_fires_once_per_period() {
        let mut sched = VirtualScheduler::new();
        sched.every(50, 'x');

        assert_eq!(sched.advance(175).len(), 3);
        assert_eq!(sched.now(), 175);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut sched = VirtualScheduler::new();
        let a = sched.after(10, 1);
        let b = sched.every(10, 2);
        sched.cancel(a);
        sched.cancel(b);
        sched.cancel(b);

        assert!(sched.advance(100).is_empty());
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut sched = VirtualScheduler::new();
        sched.after(20, "first");
        sched.after(10, "early");
        sched.after(20, "second");

        assert_eq!(sched.advance(20), vec!["early", "first", "second"]);
    }

    #[test]
    fn tasks_scheduled_while_delivering_fire_in_the_same_window() {
        let mut sched = VirtualScheduler::new();
        sched.after(10, 0u32);

        let mut seen = Vec::new();
        sched.advance_with(100, |n, s| {
            seen.push(n);
            if n < 3 {
                s.after(10, n + 1);
            }
        });

        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
