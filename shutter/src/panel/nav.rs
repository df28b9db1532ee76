//! Close-on-navigate policy for navigation panels.

/// Classes that mark an element as navigational.
const NAV_CLASSES: [&str; 2] = ["nav-link", "dropdown-item"];

/// A click inside a panel, described by the classes of the clicked element.
///
/// Only the element itself counts: a click on an icon nested in a nav link
/// is not navigational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    classes: Vec<String>,
}

impl ClickTarget {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// True when the clicked element is a nav link or a dropdown item.
    pub fn is_navigational(&self) -> bool {
        self.classes
            .iter()
            .any(|class| NAV_CLASSES.contains(&class.as_str()))
    }
}

/// Read-only view of how the render layer currently displays a panel.
///
/// Queried at click time so style overrides applied after mount are seen.
pub trait RenderProbe {
    /// The panel element is currently displayed as a block.
    fn is_displayed(&self) -> bool;

    /// The panel element would remain displayed even with its shown state
    /// removed, e.g. because of an overriding `display: block !important`.
    fn forced_visible(&self) -> bool;
}

/// Outcome of [`Panel::handle_click`](super::Panel::handle_click).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    /// Not a nav panel, not displayed, or not a navigational target.
    Ignored,
    /// The element is forced visible, so the close was skipped.
    Suppressed,
    /// The panel started closing.
    Closed,
}
