//! One-shot state queries over the bus.

use std::cell::Cell;
use std::rc::Rc;

use crate::bus::{Bus, Message, Topic};

/// Ask the panel `id` for its current visibility.
///
/// Delivery is synchronous, so the reply (if any) has arrived by the time
/// the request publish returns. Returns `None` when no panel answers.
pub fn query_visibility(bus: &Bus, id: &str) -> Option<bool> {
    let reply = Rc::new(Cell::new(None));

    let slot = Rc::clone(&reply);
    let target = id.to_string();
    let subscription = bus.subscribe_scoped(Topic::StateSyncReply, move |message| {
        if let Message::StateSyncReply { id, visible } = message {
            if *id == target {
                slot.set(Some(*visible));
            }
        }
    });

    bus.publish(Message::state_sync_request(id));
    drop(subscription);

    reply.get()
}
