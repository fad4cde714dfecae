//! Tick-based deferred execution with cancellable handles.
//!
//! The event loop calls [`TimerQueue::advance`] once per tick. Work scheduled
//! during a tick never runs in that same tick, which is what lets a widget arm
//! a listener "after the current event has finished propagating".

use log::trace;

/// Handle returned by [`TimerQueue::schedule`], used to cancel the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: TimerHandle,
    due: u64,
    task: T,
}

/// Queue of tasks due after a number of ticks.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: u64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due `ticks` ticks from now.
    ///
    /// A delay of zero is treated as one: the task is returned by the next
    /// call to [`advance`](Self::advance), never by the current one.
    pub fn schedule(&mut self, task: T, ticks: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let due = self.now + ticks.max(1);
        trace!("TimerQueue::schedule {:?} due={}", handle, due);
        self.pending.push(Pending { handle, due, task });
        handle
    }

    /// Cancel a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        before != self.pending.len()
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move to the next tick and return the tasks that became due, in the
    /// order they were scheduled.
    pub fn advance(&mut self) -> Vec<(TimerHandle, T)> {
        self.now += 1;
        let now = self.now;
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due <= now);
        self.pending = waiting;
        due.into_iter().map(|p| (p.handle, p.task)).collect()
    }
}
