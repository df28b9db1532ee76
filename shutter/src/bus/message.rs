//! Topics and messages carried by the bus.
//!
//! The topic literals are part of the wire contract and never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopicError;

/// Bus topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    /// A toggler asks the panel with this id to invert its visibility.
    ToggleRequest,
    /// A panel settled on a new visible state.
    StateChanged,
    /// Someone asks the panel with this id for its current state.
    StateSyncRequest,
    /// Answer to a sync request.
    StateSyncReply,
    /// A grouped panel started opening; siblings should close.
    GroupOpened,
}

impl Topic {
    /// All topics in declaration order.
    pub const ALL: [Topic; 5] = [
        Topic::ToggleRequest,
        Topic::StateChanged,
        Topic::StateSyncRequest,
        Topic::StateSyncReply,
        Topic::GroupOpened,
    ];

    /// The topic literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::ToggleRequest => "toggle-request",
            Topic::StateChanged => "state-changed",
            Topic::StateSyncRequest => "state-sync-request",
            Topic::StateSyncReply => "state-sync-reply",
            Topic::GroupOpened => "group-opened",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| TopicError::Unknown(s.to_string()))
    }
}

/// A message published on the bus.
///
/// Every message is addressed by the panel id it concerns. Serialized form
/// carries the topic literal in a `topic` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "topic", rename_all = "kebab-case")]
pub enum Message {
    ToggleRequest { id: String },
    StateChanged { id: String, visible: bool },
    StateSyncRequest { id: String },
    StateSyncReply { id: String, visible: bool },
    GroupOpened { id: String, group: String },
}

impl Message {
    pub fn toggle_request(id: impl Into<String>) -> Self {
        Message::ToggleRequest { id: id.into() }
    }

    pub fn state_changed(id: impl Into<String>, visible: bool) -> Self {
        Message::StateChanged {
            id: id.into(),
            visible,
        }
    }

    pub fn state_sync_request(id: impl Into<String>) -> Self {
        Message::StateSyncRequest { id: id.into() }
    }

    pub fn state_sync_reply(id: impl Into<String>, visible: bool) -> Self {
        Message::StateSyncReply {
            id: id.into(),
            visible,
        }
    }

    pub fn group_opened(id: impl Into<String>, group: impl Into<String>) -> Self {
        Message::GroupOpened {
            id: id.into(),
            group: group.into(),
        }
    }

    /// Topic this message is delivered on.
    pub fn topic(&self) -> Topic {
        match self {
            Message::ToggleRequest { .. } => Topic::ToggleRequest,
            Message::StateChanged { .. } => Topic::StateChanged,
            Message::StateSyncRequest { .. } => Topic::StateSyncRequest,
            Message::StateSyncReply { .. } => Topic::StateSyncReply,
            Message::GroupOpened { .. } => Topic::GroupOpened,
        }
    }

    /// Panel id the message is addressed to or about.
    pub fn id(&self) -> &str {
        match self {
            Message::ToggleRequest { id }
            | Message::StateChanged { id, .. }
            | Message::StateSyncRequest { id }
            | Message::StateSyncReply { id, .. }
            | Message::GroupOpened { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_round_trips_through_literal() {
        for topic in Topic::ALL {
            assert_eq!(topic.as_str().parse::<Topic>(), Ok(topic));
        }
    }

    #[test]
    fn test_unknown_topic() {
        assert_eq!(
            "toggle_request".parse::<Topic>(),
            Err(TopicError::Unknown("toggle_request".to_string()))
        );
    }
}
