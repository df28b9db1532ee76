//! Toggler: the element that opens and closes panels by id.
//!
//! A toggler never holds a reference to its panels. It publishes
//! `toggle-request` for each target and tracks their state from
//! `state-changed` and `state-sync-reply` broadcasts. On creation it asks
//! each target for its current state, so it is correct even when mounted
//! after the panels settled.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::bus::{Bus, Message, SubscriptionToken, Topic};

#[derive(Default)]
struct TogglerState {
    /// Last known visibility per target.
    known: HashMap<String, bool>,
}

/// Publishes toggle requests for a fixed set of panel ids.
pub struct Toggler {
    bus: Bus,
    targets: Vec<String>,
    state: Rc<RefCell<TogglerState>>,
    tokens: Vec<SubscriptionToken>,
}

impl Toggler {
    /// Attach to `bus` and sync with every target.
    ///
    /// Duplicate and empty targets are dropped.
    pub fn new<I, S>(bus: &Bus, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for target in targets.into_iter().map(Into::into) {
            if !target.is_empty() && !unique.contains(&target) {
                unique.push(target);
            }
        }

        let state = Rc::new(RefCell::new(TogglerState::default()));
        let tokens = [Topic::StateChanged, Topic::StateSyncReply]
            .into_iter()
            .map(|topic| {
                let state = Rc::clone(&state);
                let targets = unique.clone();
                bus.subscribe(topic, move |message| match message {
                    Message::StateChanged { id, visible }
                    | Message::StateSyncReply { id, visible } => {
                        if targets.contains(id) {
                            state.borrow_mut().known.insert(id.clone(), *visible);
                        }
                    }
                    _ => {}
                })
            })
            .collect();

        let toggler = Self {
            bus: bus.clone(),
            targets: unique,
            state,
            tokens,
        };
        for target in &toggler.targets {
            toggler
                .bus
                .publish(Message::state_sync_request(target.as_str()));
        }
        toggler
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Request every target to toggle. Targets with no mounted panel are
    /// silently ignored by the bus.
    pub fn click(&self) {
        if self.targets.is_empty() {
            warn!("toggler clicked with no targets");
            return;
        }
        for target in &self.targets {
            debug!("toggler: toggle-request '{}'", target);
            self.bus.publish(Message::toggle_request(target.as_str()));
        }
    }

    /// Any target is known to be visible.
    pub fn is_expanded(&self) -> bool {
        self.state.borrow().known.values().any(|visible| *visible)
    }

    /// Last known state of one target; `None` if it never answered.
    pub fn target_state(&self, id: &str) -> Option<bool> {
        self.state.borrow().known.get(id).copied()
    }
}

impl Drop for Toggler {
    fn drop(&mut self) {
        for token in self.tokens.drain(..) {
            self.bus.unsubscribe(token);
        }
    }
}

impl fmt::Debug for Toggler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggler")
            .field("targets", &self.targets)
            .field("expanded", &self.is_expanded())
            .finish()
    }
}
