//! Manually driven frame loop and clock.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::time::{Duration, Instant};

use super::{Task, TimerId, Timing};

struct Timer {
    id: TimerId,
    deadline: Instant,
    task: Task,
}

/// A [`Timing`] implementation driven by the host.
///
/// The clock only moves when [`advance`](Self::advance) or
/// [`advance_to`](Self::advance_to) is called, which makes transitions
/// fully deterministic in tests. A real render loop calls
/// `advance_to(Instant::now())` and `run_frame()` once per tick.
pub struct FrameLoop {
    now: Cell<Instant>,
    frames: RefCell<Vec<Task>>,
    timers: RefCell<Vec<Timer>>,
    next_timer: Cell<u64>,
}

impl FrameLoop {
    /// Create a loop whose clock starts at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            now: Cell::new(now),
            frames: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
            next_timer: Cell::new(0),
        }
    }

    /// Run the frame tasks queued so far.
    ///
    /// Tasks queued while this frame runs wait for the next one. Returns the
    /// number of tasks run.
    pub fn run_frame(&self) -> usize {
        let tasks = std::mem::take(&mut *self.frames.borrow_mut());
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }

    /// Run frames until none is queued, at most `max_frames` of them.
    ///
    /// Returns the number of frames that ran at least one task.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.pending_frames() > 0 {
            self.run_frame();
            frames += 1;
        }
        frames
    }

    /// Move the clock forward and fire every timer that became due.
    pub fn advance(&self, by: Duration) -> usize {
        self.advance_to(self.now.get() + by)
    }

    /// Move the clock to `target` and fire due timers in deadline order.
    ///
    /// The clock never moves backwards. Timers scheduled by a firing timer
    /// also fire if they fall due before `target`. Returns the number of
    /// timers fired.
    pub fn advance_to(&self, target: Instant) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.take_due(target) {
            if timer.deadline > self.now.get() {
                self.now.set(timer.deadline);
            }
            (timer.task)();
            fired += 1;
        }
        if target > self.now.get() {
            self.now.set(target);
        }
        fired
    }

    fn take_due(&self, target: Instant) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= target)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(index, _)| index)?;
        Some(timers.remove(index))
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameLoop")
            .field("now", &self.now.get())
            .field("pending_frames", &self.pending_frames())
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}

impl Timing for FrameLoop {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn request_frame(&self, task: Task) {
        self.frames.borrow_mut().push(task);
    }

    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_timer.get());
        self.next_timer.set(id.0 + 1);
        self.timers.borrow_mut().push(Timer {
            id,
            deadline: self.now.get() + delay,
            task,
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.timers.borrow_mut().retain(|t| t.id != id);
    }
}
