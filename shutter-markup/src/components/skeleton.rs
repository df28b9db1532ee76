use crate::markup::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonProps {
    /// Placeholder shape: `text`, `button`, `avatar`, `input`, ...
    pub kind: String,
    /// `None` or empty disables the animation class.
    pub animation: Option<String>,
    pub variant: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Sets both width and height, overriding them.
    pub size: Option<String>,
}

impl Default for SkeletonProps {
    fn default() -> Self {
        Self {
            kind: "text".into(),
            animation: Some("wave".into()),
            variant: None,
            width: None,
            height: None,
            size: None,
        }
    }
}

/// Loading placeholder.
pub fn skeleton(props: &SkeletonProps) -> Markup {
    let width = props.size.as_ref().or(props.width.as_ref());
    let height = props.size.as_ref().or(props.height.as_ref());

    let mut node = Markup::div()
        .class("b-skeleton")
        .variant("b-skeleton", Some(props.kind.as_str()))
        .variant("b-skeleton-animate", props.animation.as_deref())
        .variant("bg", props.variant.as_deref());
    if let Some(width) = width {
        node = node.style("width", width.as_str());
    }
    if let Some(height) = height {
        node = node.style("height", height.as_str());
    }
    node
}
