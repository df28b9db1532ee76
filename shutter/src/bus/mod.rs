//! Addressed broadcast bus.
//!
//! The bus is an explicitly constructed, explicitly injected publish/subscribe
//! channel. Panels and togglers attach to it for their lifetime; nothing owns
//! it exclusively.
//!
//! Delivery rules:
//! - Synchronous: `publish` returns after every handler ran.
//! - Subscription order: handlers run in the order they subscribed.
//! - Snapshot: the handler list is captured when dispatch starts. Handlers
//!   added during a dispatch miss the message being dispatched, handlers
//!   removed during a dispatch still receive it.
//! - Re-entrant: a handler may publish. The nested message is fully
//!   delivered before the outer dispatch continues.
//!
//! No internal borrow is held while a handler runs, so re-entrant publish,
//! subscribe and unsubscribe never panic.

mod message;

pub use message::{Message, Topic};

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use log::trace;

use crate::error::PanelError;

type Handler = Rc<dyn Fn(&Message)>;

/// Token returned by [`Bus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

struct Subscriber {
    token: SubscriptionToken,
    /// `None` receives every topic.
    topic: Option<Topic>,
    handler: Handler,
}

impl Subscriber {
    fn accepts(&self, topic: Topic) -> bool {
        self.topic.is_none_or(|t| t == topic)
    }
}

#[derive(Default)]
struct BusInner {
    subscribers: RefCell<Vec<Subscriber>>,
    next_token: Cell<u64>,
    /// Ids of the panels currently mounted on this bus.
    claimed: RefCell<HashSet<String>>,
}

impl BusInner {
    fn remove(&self, token: SubscriptionToken) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        match subscribers.iter().position(|s| s.token == token) {
            Some(index) => {
                subscribers.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Cloneable handle to a broadcast bus.
///
/// Clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct Bus {
    inner: Rc<BusInner>,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one topic.
    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl Fn(&Message) + 'static,
    ) -> SubscriptionToken {
        self.insert(Some(topic), Rc::new(handler))
    }

    /// Subscribe a handler to every topic.
    pub fn subscribe_all(&self, handler: impl Fn(&Message) + 'static) -> SubscriptionToken {
        self.insert(None, Rc::new(handler))
    }

    /// Subscribe with a guard that unsubscribes when dropped.
    pub fn subscribe_scoped(
        &self,
        topic: Topic,
        handler: impl Fn(&Message) + 'static,
    ) -> Subscription {
        let token = self.subscribe(topic, handler);
        Subscription {
            bus: Rc::downgrade(&self.inner),
            token,
        }
    }

    fn insert(&self, topic: Option<Topic>, handler: Handler) -> SubscriptionToken {
        let token = SubscriptionToken(self.inner.next_token.get());
        self.inner.next_token.set(token.0 + 1);
        self.inner.subscribers.borrow_mut().push(Subscriber {
            token,
            topic,
            handler,
        });
        token
    }

    /// Remove a subscription.
    ///
    /// Returns `false` if the token was already removed.
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        self.inner.remove(token)
    }

    /// Deliver a message to every current subscriber of its topic.
    pub fn publish(&self, message: Message) {
        let topic = message.topic();
        let snapshot: Vec<Handler> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.accepts(topic))
            .map(|s| Rc::clone(&s.handler))
            .collect();

        trace!(
            "bus: {} '{}' -> {} subscriber(s)",
            topic,
            message.id(),
            snapshot.len()
        );

        for handler in snapshot {
            handler(&message);
        }
    }

    /// Number of handlers that would receive a message on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.accepts(topic))
            .count()
    }

    /// Whether a mounted panel currently uses this id.
    pub fn is_claimed(&self, id: &str) -> bool {
        self.inner.claimed.borrow().contains(id)
    }

    /// Whether two handles refer to the same bus.
    pub fn same_bus(&self, other: &Bus) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn claim_id(&self, id: &str) -> Result<(), PanelError> {
        if id.is_empty() {
            return Err(PanelError::EmptyId);
        }
        if !self.inner.claimed.borrow_mut().insert(id.to_string()) {
            return Err(PanelError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    pub(crate) fn release_id(&self, id: &str) {
        self.inner.claimed.borrow_mut().remove(id);
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .field("claimed", &self.inner.claimed.borrow().len())
            .finish()
    }
}

/// Subscription guard that unsubscribes on drop.
///
/// Holds the bus weakly, so a guard outliving its bus is harmless.
#[derive(Debug)]
pub struct Subscription {
    bus: Weak<BusInner>,
    token: SubscriptionToken,
}

impl Subscription {
    pub fn token(&self) -> SubscriptionToken {
        self.token
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.remove(self.token);
        }
    }
}
