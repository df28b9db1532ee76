//! Panel configuration types.

use std::time::Duration;

use uuid::Uuid;

/// Default bound on how long a transition may wait for its completion signal.
pub const DEFAULT_SAFETY_TIMEOUT: Duration = Duration::from_millis(1000);

/// Prefix for generated panel ids.
const ANONYMOUS_PREFIX: &str = "collapse";

/// Per-panel configuration.
///
/// # Example
///
/// ```
/// use shutter::PanelConfig;
///
/// let config = PanelConfig::new("faq-1").group("faq").visible(true);
/// assert_eq!(config.group.as_deref(), Some("faq"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Bus address of the panel. Must be unique on its bus.
    pub id: String,

    /// Accordion group. Panels sharing a group are mutually exclusive.
    pub group: Option<String>,

    /// Initial visibility. Applied without animation.
    pub visible: bool,

    /// Close when a navigational link inside the panel is clicked.
    pub is_nav: bool,

    /// Transition timing.
    pub transition: TransitionConfig,
}

impl PanelConfig {
    /// Create a closed, ungrouped config with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: None,
            visible: false,
            is_nav: false,
            transition: TransitionConfig::default(),
        }
    }

    /// Create a config with a generated id.
    pub fn anonymous() -> Self {
        Self::new(format!("{}-{}", ANONYMOUS_PREFIX, Uuid::new_v4().simple()))
    }

    /// Join an accordion group. An empty name means no group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.group = if group.is_empty() { None } else { Some(group) };
        self
    }

    /// Set the initial visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Mark as a navigation panel.
    pub fn nav(mut self) -> Self {
        self.is_nav = true;
        self
    }

    /// Set the transition timing.
    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }
}

/// Timing knobs for open/close transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    /// How long to wait for the completion signal before promoting the
    /// transition anyway.
    pub safety_timeout: Duration,

    /// Complete transitions at the frame step without waiting for the
    /// render layer.
    pub reduced_motion: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            safety_timeout: DEFAULT_SAFETY_TIMEOUT,
            reduced_motion: false,
        }
    }
}

impl TransitionConfig {
    pub fn new(safety_timeout: Duration) -> Self {
        Self {
            safety_timeout,
            ..Default::default()
        }
    }

    /// Transitions that finish on the next frame.
    pub fn instant() -> Self {
        Self {
            reduced_motion: true,
            ..Default::default()
        }
    }

    pub fn safety_timeout(mut self, timeout: Duration) -> Self {
        self.safety_timeout = timeout;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }
}
