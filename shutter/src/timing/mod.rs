//! Timing source consumed by panels.
//!
//! A panel suspends at two points only: it waits for the next rendered frame
//! before starting a transition, and it waits for the render layer's
//! completion signal, bounded by a safety timeout. Both waits go through
//! [`Timing`] so hosts can plug in their own render loop.

mod frame_loop;

pub use frame_loop::FrameLoop;

use std::time::{Duration, Instant};

/// Deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Identifier of a pending timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub(crate) u64);

/// Scheduling primitives a host render loop provides.
pub trait Timing {
    /// Current time on this source's clock.
    fn now(&self) -> Instant;

    /// Run `task` after the next layout pass has been produced.
    fn request_frame(&self, task: Task);

    /// Run `task` once `delay` has elapsed.
    fn set_timeout(&self, delay: Duration, task: Task) -> TimerId;

    /// Cancel a pending timeout. Unknown or fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}
