//! Collapsible panel.
//!
//! A [`Panel`] is one visibility state machine (`Closed`, `Opening`, `Open`,
//! `Closing`) attached to a [`Bus`] under its id. It reacts to
//! `toggle-request`, `state-sync-request` and, when grouped,
//! `group-opened`. It pushes a `state-sync-reply` whenever its target
//! changes and announces every settle with `state-changed`.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use shutter::{Bus, FrameLoop, Panel, PanelConfig, Phase};
//!
//! let bus = Bus::new();
//! let frames = Rc::new(FrameLoop::new());
//! let panel = Panel::mount(PanelConfig::new("details"), &bus, frames.clone()).unwrap();
//!
//! panel.set_visible(true);
//! assert_eq!(panel.phase(), Phase::Opening);
//!
//! frames.run_frame();
//! let token = panel.transition_token().unwrap();
//! panel.transition_end(token);
//! assert_eq!(panel.phase(), Phase::Open);
//! ```

mod config;
mod events;
mod nav;
mod phase;

pub use config::{DEFAULT_SAFETY_TIMEOUT, PanelConfig, TransitionConfig};
pub use events::{ObserverId, PanelEvent, TransitionToken};
pub use nav::{ClickTarget, NavClick, RenderProbe};
pub use phase::{Direction, Phase};

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::accordion::{self, GroupReaction};
use crate::bus::{Bus, Message, SubscriptionToken, Topic};
use crate::error::PanelError;
use crate::timing::{TimerId, Timing};
use events::Observers;
use phase::{Machine, Settlement};

struct PanelState {
    machine: Machine,
    /// Safety timer of the transition in flight.
    timer: Option<TimerId>,
    torn_down: bool,
}

struct PanelCore {
    id: String,
    group: Option<String>,
    is_nav: bool,
    transition: TransitionConfig,
    bus: Bus,
    timing: Rc<dyn Timing>,
    state: RefCell<PanelState>,
    observers: Observers,
    tokens: RefCell<Vec<SubscriptionToken>>,
}

// No `state` borrow is held across a publish, an observer call or a timing
// call: all of those may re-enter the panel.
impl PanelCore {
    fn visible(&self) -> bool {
        self.state.borrow().machine.visible()
    }

    fn phase(&self) -> Phase {
        self.state.borrow().machine.phase()
    }

    fn is_live(&self) -> bool {
        !self.state.borrow().torn_down
    }

    fn is_current(&self, generation: u64) -> bool {
        let state = self.state.borrow();
        !state.torn_down && state.machine.generation() == generation
    }

    fn request(self: &Rc<Self>, visible: bool) {
        let (generation, stale_timer, phase) = {
            let mut state = self.state.borrow_mut();
            if state.torn_down {
                return;
            }
            let Some(generation) = state.machine.request(visible) else {
                return;
            };
            (generation, state.timer.take(), state.machine.phase())
        };
        if let Some(timer) = stale_timer {
            self.timing.clear_timeout(timer);
        }
        debug!("panel '{}': {:?} (generation {})", self.id, phase, generation);

        // Togglers track the target, not the settled state.
        self.bus
            .publish(Message::state_sync_reply(&self.id, visible));
        if !self.is_current(generation) {
            return;
        }

        if visible {
            if let Some(group) = &self.group {
                self.bus.publish(Message::group_opened(&self.id, group));
            }
            if self.is_current(generation) {
                self.observers.emit(PanelEvent::BeforeShow);
            }
        } else {
            self.observers.emit(PanelEvent::BeforeHide);
        }

        if self.is_current(generation) {
            self.schedule_frame(generation);
        }
    }

    fn schedule_frame(self: &Rc<Self>, generation: u64) {
        let weak = Rc::downgrade(self);
        self.timing.request_frame(Box::new(move || {
            if let Some(core) = weak.upgrade() {
                core.on_frame(generation);
            }
        }));
    }

    fn on_frame(self: &Rc<Self>, generation: u64) {
        let direction = {
            let mut state = self.state.borrow_mut();
            if state.torn_down || !state.machine.frame(generation) {
                return;
            }
            state.machine.phase().direction()
        };
        let Some(direction) = direction else {
            return;
        };

        let token = TransitionToken(generation);
        if self.transition.reduced_motion {
            self.observers
                .emit(PanelEvent::TransitionStart(direction, token));
            self.finish(generation);
            return;
        }

        let weak = Rc::downgrade(self);
        let timer = self.timing.set_timeout(
            self.transition.safety_timeout,
            Box::new(move || {
                if let Some(core) = weak.upgrade() {
                    core.on_safety_timeout(generation);
                }
            }),
        );
        self.state.borrow_mut().timer = Some(timer);
        self.observers
            .emit(PanelEvent::TransitionStart(direction, token));
    }

    fn on_safety_timeout(self: &Rc<Self>, generation: u64) {
        {
            let mut state = self.state.borrow_mut();
            if state.torn_down
                || state.machine.generation() != generation
                || !state.machine.is_animating()
            {
                return;
            }
            state.timer = None;
        }
        warn!(
            "panel '{}': no transition end within {:?}, promoting",
            self.id, self.transition.safety_timeout
        );
        self.finish(generation);
    }

    fn transition_end(self: &Rc<Self>, token: TransitionToken) {
        if !self.is_current(token.0) {
            debug!("panel '{}': stale transition end ignored", self.id);
            return;
        }
        self.finish(token.0);
    }

    fn transition_token(&self) -> Option<TransitionToken> {
        let state = self.state.borrow();
        (!state.torn_down && state.machine.is_animating())
            .then(|| TransitionToken(state.machine.generation()))
    }

    fn finish(self: &Rc<Self>, generation: u64) {
        let (settlement, timer, phase) = {
            let mut state = self.state.borrow_mut();
            if state.torn_down || !state.machine.complete(generation) {
                return;
            }
            (
                state.machine.settle(),
                state.timer.take(),
                state.machine.phase(),
            )
        };
        if let Some(timer) = timer {
            self.timing.clear_timeout(timer);
        }
        debug!("panel '{}': {:?}", self.id, phase);
        if let Some(settlement) = settlement {
            self.announce(settlement);
        }
    }

    fn announce(&self, settlement: Settlement) {
        if settlement.transitioned {
            self.observers.emit(if settlement.visible {
                PanelEvent::Shown
            } else {
                PanelEvent::Hidden
            });
        }
        self.observers
            .emit(PanelEvent::VisibleChanged(settlement.visible));
        if self.is_live() {
            self.bus
                .publish(Message::state_changed(&self.id, settlement.visible));
        }
    }

    fn on_message(self: &Rc<Self>, message: &Message) {
        if !self.is_live() {
            return;
        }
        match message {
            Message::ToggleRequest { id } if *id == self.id => {
                let visible = self.visible();
                self.request(!visible);
            }
            Message::StateSyncRequest { id } if *id == self.id => {
                let visible = self.visible();
                self.bus
                    .publish(Message::state_sync_reply(&self.id, visible));
            }
            Message::GroupOpened { id, group } => {
                let reaction = accordion::reaction(
                    &self.id,
                    self.group.as_deref(),
                    self.visible(),
                    id,
                    group,
                );
                match reaction {
                    GroupReaction::Open => self.request(true),
                    GroupReaction::Close => self.request(false),
                    GroupReaction::Ignore => {}
                }
            }
            _ => {}
        }
    }

    fn teardown(&self) {
        let timer = {
            let mut state = self.state.borrow_mut();
            if state.torn_down {
                return;
            }
            state.torn_down = true;
            state.timer.take()
        };
        if let Some(timer) = timer {
            self.timing.clear_timeout(timer);
        }
        for token in self.tokens.borrow_mut().drain(..) {
            self.bus.unsubscribe(token);
        }
        self.bus.release_id(&self.id);
        self.observers.clear();
        debug!("panel '{}': torn down", self.id);
    }
}

/// A mounted collapsible panel.
///
/// Dropping the panel (or calling [`destroy`](Self::destroy)) unsubscribes
/// it from the bus, cancels its pending callbacks and frees its id.
pub struct Panel {
    core: Rc<PanelCore>,
}

impl Panel {
    /// Mount a panel on `bus`.
    ///
    /// Fails with [`PanelError`] before touching the bus if the id is empty
    /// or already in use. On success the panel has subscribed and published
    /// its initial `state-changed`.
    pub fn mount(
        config: PanelConfig,
        bus: &Bus,
        timing: Rc<dyn Timing>,
    ) -> Result<Self, PanelError> {
        Self::mount_inner(config, bus, timing, None)
    }

    /// Mount with an observer attached before the initial settle, so it sees
    /// the mount `VisibleChanged`.
    pub fn mount_observed(
        config: PanelConfig,
        bus: &Bus,
        timing: Rc<dyn Timing>,
        observer: impl Fn(&PanelEvent) + 'static,
    ) -> Result<Self, PanelError> {
        Self::mount_inner(config, bus, timing, Some(Box::new(observer)))
    }

    fn mount_inner(
        config: PanelConfig,
        bus: &Bus,
        timing: Rc<dyn Timing>,
        observer: Option<Box<dyn Fn(&PanelEvent)>>,
    ) -> Result<Self, PanelError> {
        bus.claim_id(&config.id)?;

        let group = config.group.filter(|g| !g.is_empty());
        let core = Rc::new(PanelCore {
            id: config.id,
            group,
            is_nav: config.is_nav,
            transition: config.transition,
            bus: bus.clone(),
            timing,
            state: RefCell::new(PanelState {
                machine: Machine::new(config.visible),
                timer: None,
                torn_down: false,
            }),
            observers: Observers::default(),
            tokens: RefCell::new(Vec::new()),
        });
        if let Some(observer) = observer {
            core.observers.add(observer);
        }

        let mut topics = vec![Topic::ToggleRequest, Topic::StateSyncRequest];
        if core.group.is_some() {
            topics.push(Topic::GroupOpened);
        }
        for topic in topics {
            let weak = Rc::downgrade(&core);
            let token = bus.subscribe(topic, move |message| {
                if let Some(core) = weak.upgrade() {
                    core.on_message(message);
                }
            });
            core.tokens.borrow_mut().push(token);
        }

        debug!(
            "panel '{}': mounted {:?} (group {:?}, nav {})",
            core.id,
            core.phase(),
            core.group,
            core.is_nav
        );

        if config.visible {
            if let Some(group) = &core.group {
                bus.publish(Message::group_opened(&core.id, group));
            }
        }
        let settlement = core.state.borrow_mut().machine.settle();
        if let Some(settlement) = settlement {
            core.announce(settlement);
        }

        Ok(Self { core })
    }

    pub fn id(&self) -> &str {
        &self.core.id
    }

    pub fn group(&self) -> Option<&str> {
        self.core.group.as_deref()
    }

    pub fn is_nav(&self) -> bool {
        self.core.is_nav
    }

    /// Settled state or pending target.
    pub fn is_visible(&self) -> bool {
        self.core.visible()
    }

    pub fn phase(&self) -> Phase {
        self.core.phase()
    }

    /// Drive the panel towards `visible`.
    pub fn set_visible(&self, visible: bool) {
        self.core.request(visible);
    }

    /// Invert the current target.
    pub fn toggle(&self) {
        let visible = self.core.visible();
        self.core.request(!visible);
    }

    pub fn open(&self) {
        self.core.request(true);
    }

    pub fn close(&self) {
        self.core.request(false);
    }

    /// Completion signal from the render layer for the transition started
    /// with `token`.
    ///
    /// Ignored when that transition was superseded or is not animating.
    pub fn transition_end(&self, token: TransitionToken) {
        self.core.transition_end(token);
    }

    /// Token of the transition currently animating, if any.
    pub fn transition_token(&self) -> Option<TransitionToken> {
        self.core.transition_token()
    }

    /// Apply the close-on-navigate policy to a click inside the panel.
    pub fn handle_click(&self, target: &ClickTarget, probe: &dyn RenderProbe) -> NavClick {
        if !self.core.is_nav
            || !self.core.visible()
            || !probe.is_displayed()
            || !target.is_navigational()
        {
            return NavClick::Ignored;
        }
        if probe.forced_visible() {
            debug!(
                "panel '{}': nav click ignored, element is forced visible",
                self.core.id
            );
            return NavClick::Suppressed;
        }
        self.core.request(false);
        NavClick::Closed
    }

    /// Register a local observer.
    pub fn observe(&self, observer: impl Fn(&PanelEvent) + 'static) -> ObserverId {
        self.core.observers.add(observer)
    }

    /// Remove a local observer. Returns `false` if it was not registered.
    pub fn unobserve(&self, id: ObserverId) -> bool {
        self.core.observers.remove(id)
    }

    /// Weak handle for the render layer.
    pub fn handle(&self) -> PanelHandle {
        PanelHandle {
            core: Rc::downgrade(&self.core),
        }
    }

    /// Tear the panel down.
    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.core.teardown();
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.core.id)
            .field("group", &self.core.group)
            .field("is_nav", &self.core.is_nav)
            .field("phase", &self.core.phase())
            .finish()
    }
}

/// Non-owning handle to a panel.
///
/// Every operation is a no-op once the panel has been torn down.
#[derive(Debug, Clone)]
pub struct PanelHandle {
    core: Weak<PanelCore>,
}

impl PanelHandle {
    fn live(&self) -> Option<Rc<PanelCore>> {
        self.core.upgrade().filter(|core| core.is_live())
    }

    pub fn is_alive(&self) -> bool {
        self.live().is_some()
    }

    pub fn id(&self) -> Option<String> {
        self.live().map(|core| core.id.clone())
    }

    pub fn is_visible(&self) -> Option<bool> {
        self.live().map(|core| core.visible())
    }

    pub fn phase(&self) -> Option<Phase> {
        self.live().map(|core| core.phase())
    }

    pub fn set_visible(&self, visible: bool) {
        if let Some(core) = self.live() {
            core.request(visible);
        }
    }

    pub fn toggle(&self) {
        if let Some(core) = self.live() {
            let visible = core.visible();
            core.request(!visible);
        }
    }

    pub fn transition_end(&self, token: TransitionToken) {
        if let Some(core) = self.live() {
            core.transition_end(token);
        }
    }

    pub fn transition_token(&self) -> Option<TransitionToken> {
        self.live().and_then(|core| core.transition_token())
    }
}
