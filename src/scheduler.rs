//! Cooperative per-frame task list.
//!
//! The host calls into the coordinator once per animation frame; the
//! coordinator asks this scheduler which repeating tasks are live and runs
//! them in the order they were spawned. Tasks never run concurrently and
//! never suspend mid-frame.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use crate::card::CardId;

/// Work the coordinator performs on each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Ease and restyle every registered card.
    CardsTick,
    /// Advance and draw one card's particle pool.
    Particles(CardId),
}

/// Cancellation handle for a spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Default)]
pub struct FrameScheduler {
    tasks: Vec<(TaskHandle, Task)>,
    next_id: u64,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start repeating `task` every frame until cancelled.
    pub fn spawn(&mut self, task: Task) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push((handle, task));
        handle
    }

    /// Stop a task. Returns `false` if it was already gone, so repeated
    /// cancellation is harmless.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(h, _)| *h != handle);
        self.tasks.len() != before
    }

    #[must_use]
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|(h, _)| *h == handle)
    }

    /// Snapshot of the tasks due this frame, in spawn order.
    #[must_use]
    pub fn due(&self) -> Vec<(TaskHandle, Task)> {
        self.tasks.clone()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }
}
