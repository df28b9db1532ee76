//! Local events a panel reports to its embedder.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::Direction;

/// Notification delivered to panel observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// Entered `Opening`.
    BeforeShow,
    /// Settled `Open` after having been announced `Closed`.
    Shown,
    /// Entered `Closing`.
    BeforeHide,
    /// Settled `Closed` after having been announced `Open`.
    Hidden,
    /// Fired on every settle broadcast, including the mount one.
    VisibleChanged(bool),
    /// The frame step passed; the render layer should animate now and report
    /// completion by passing the token back to `transition_end`.
    TransitionStart(Direction, TransitionToken),
}

/// Identifies one running transition.
///
/// A completion signal carrying the token of a superseded transition is
/// ignored, so a late end of a cancelled animation cannot settle its
/// replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(pub(crate) u64);

/// Identifier of a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(&PanelEvent)>;

/// Observer registry with the same snapshot delivery rule as the bus.
#[derive(Default)]
pub(crate) struct Observers {
    entries: RefCell<Vec<(ObserverId, Observer)>>,
    next_id: Cell<u64>,
}

impl Observers {
    pub fn add(&self, observer: impl Fn(&PanelEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub fn remove(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry, _)| *entry != id);
        entries.len() != before
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn emit(&self, event: PanelEvent) {
        let snapshot: Vec<Observer> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in snapshot {
            observer(&event);
        }
    }
}
