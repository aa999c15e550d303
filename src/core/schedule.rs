//! Deferred tasks on a virtual millisecond clock.
//!
//! The gallery is event driven: the host feeds it timestamps and it returns
//! whatever tasks came due. Every scheduled task gets a [`TaskHandle`] so the
//! owner can cancel it when a newer task supersedes it.
//!
//! ```
//! use flipcard_gallery::core::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let spawn = timers.schedule_at(300, "spawn");
//! timers.schedule_at(3800, "clear");
//!
//! assert!(timers.pop_due(100).is_empty());
//! assert_eq!(timers.pop_due(300), vec![(spawn, "spawn")]);
//!
//! // Cancelling an already fired task is a no-op
//! assert_eq!(timers.cancel(spawn), None);
//! ```

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl TaskHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Queue of tasks ordered by due time, then by scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    /// Keyed by (due_ms, sequence) so equal due times fire FIFO.
    queue: BTreeMap<(u64, u64), T>,

    /// Handle -> queue key, for cancellation.
    index: FxHashMap<TaskHandle, (u64, u64)>,

    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            index: FxHashMap::default(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire at `due_ms`.
    pub fn schedule_at(&mut self, due_ms: u64, task: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;

        let handle = TaskHandle(seq);
        self.queue.insert((due_ms, seq), task);
        self.index.insert(handle, (due_ms, seq));
        handle
    }

    /// Schedule `task` to fire `delay_ms` after `now_ms`.
    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, task: T) -> TaskHandle {
        self.schedule_at(now_ms.saturating_add(delay_ms), task)
    }

    /// Cancel a pending task, returning its payload.
    ///
    /// Returns `None` if the task already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let key = self.index.remove(&handle)?;
        self.queue.remove(&key)
    }

    /// Is this task still waiting to fire?
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.index.contains_key(&handle)
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Remove and return every task due at or before `now_ms`, in firing order.
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<(TaskHandle, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            if entry.key().0 > now_ms {
                break;
            }
            let (key, task) = entry.remove_entry();
            let handle = TaskHandle(key.1);
            self.index.remove(&handle);
            due.push((handle, task));
        }
        due
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.index.clear();
    }
}
