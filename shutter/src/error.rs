//! Error types for panel construction and topic parsing.

use thiserror::Error;

/// Errors that can occur when mounting a panel on a bus.
///
/// Both variants are configuration errors and are raised before the panel
/// subscribes to or publishes anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The panel id is empty and cannot be used as a bus address.
    #[error("panel id must not be empty")]
    EmptyId,

    /// Another live panel on the same bus already uses this id.
    #[error("duplicate panel id '{0}' on this bus")]
    DuplicateId(String),
}

/// Error returned when parsing a topic literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    /// The string is not one of the topic literals.
    #[error("unknown topic '{0}'")]
    Unknown(String),
}
