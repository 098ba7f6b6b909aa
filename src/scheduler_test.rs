use uuid::Uuid;

use super::*;

#[test]
fn new_scheduler_is_idle() {
    let s = FrameScheduler::new();
    assert!(s.is_idle());
    assert_eq!(s.len(), 0);
}

#[test]
fn spawn_returns_distinct_handles() {
    let mut s = FrameScheduler::new();
    let a = s.spawn(Task::CardsTick);
    let b = s.spawn(Task::CardsTick);
    assert_ne!(a, b);
    assert_eq!(s.len(), 2);
}

#[test]
fn due_preserves_spawn_order() {
    let mut s = FrameScheduler::new();
    let id = Uuid::new_v4();
    let a = s.spawn(Task::CardsTick);
    let b = s.spawn(Task::Particles(id));
    assert_eq!(s.due(), vec![(a, Task::CardsTick), (b, Task::Particles(id))]);
}

#[test]
fn cancel_removes_task() {
    let mut s = FrameScheduler::new();
    let a = s.spawn(Task::CardsTick);
    assert!(s.cancel(a));
    assert!(!s.is_scheduled(a));
    assert!(s.is_idle());
}

#[test]
fn cancel_is_idempotent() {
    let mut s = FrameScheduler::new();
    let a = s.spawn(Task::CardsTick);
    assert!(s.cancel(a));
    assert!(!s.cancel(a));
    assert!(!s.cancel(a));
}

#[test]
fn cancel_leaves_other_tasks_running() {
    let mut s = FrameScheduler::new();
    let a = s.spawn(Task::CardsTick);
    let b = s.spawn(Task::Particles(Uuid::new_v4()));
    s.cancel(a);
    assert!(s.is_scheduled(b));
    assert_eq!(s.len(), 1);
}

#[test]
fn handles_are_not_reused_after_cancel() {
    let mut s = FrameScheduler::new();
    let a = s.spawn(Task::CardsTick);
    s.cancel(a);
    let b = s.spawn(Task::CardsTick);
    assert_ne!(a, b);
    assert!(!s.cancel(a));
    assert!(s.is_scheduled(b));
}
