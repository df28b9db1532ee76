//! Accordion coordination rule.
//!
//! There is no accordion object. Every grouped panel applies the same local
//! rule to every `group-opened` broadcast it observes, and mutual exclusion
//! emerges from that:
//!
//! - broadcast from another member of my group while I am open or opening:
//!   close;
//! - broadcast naming me while I am closed or closing: open;
//! - anything else: ignore.
//!
//! A member reacts at most once per broadcast and a closing member never
//! reopens because of a sibling, so cascades terminate.

/// Reaction of one panel to a `group-opened` broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupReaction {
    Ignore,
    Open,
    Close,
}

/// Apply the rule for a panel (`own_id`, `own_group`, currently `visible`)
/// observing `group-opened(opened_id, opened_group)`.
pub fn reaction(
    own_id: &str,
    own_group: Option<&str>,
    visible: bool,
    opened_id: &str,
    opened_group: &str,
) -> GroupReaction {
    if own_group != Some(opened_group) {
        return GroupReaction::Ignore;
    }
    let is_self = own_id == opened_id;
    match (is_self, visible) {
        (true, false) => GroupReaction::Open,
        (false, true) => GroupReaction::Close,
        _ => GroupReaction::Ignore,
    }
}
