//! Collapsible panel visibility protocol.
//!
//! Independently mounted [`Panel`]s run their own open/close state machine,
//! coordinate accordion exclusivity through `group-opened` broadcasts and
//! answer state queries, all over an explicitly injected [`Bus`]. Decoupled
//! components such as a [`Toggler`] address panels by id only.
//!
//! Everything is single-threaded: delivery is synchronous and the only
//! suspension points go through the host's [`Timing`] source.

pub mod accordion;
pub mod bus;
pub mod error;
pub mod panel;
pub mod sync;
pub mod timing;
pub mod toggler;

pub use bus::{Bus, Message, Subscription, SubscriptionToken, Topic};
pub use error::{PanelError, TopicError};
pub use panel::{
    ClickTarget, Direction, NavClick, ObserverId, Panel, PanelConfig, PanelEvent, PanelHandle,
    Phase, RenderProbe, TransitionConfig, TransitionToken,
};
pub use sync::query_visibility;
pub use timing::{FrameLoop, TimerId, Timing};
pub use toggler::Toggler;

pub mod prelude {
    pub use crate::bus::{Bus, Message, Topic};
    pub use crate::panel::{Panel, PanelConfig, PanelEvent, Phase, TransitionConfig};
    pub use crate::timing::{FrameLoop, Timing};
    pub use crate::toggler::Toggler;
}
