use crate::markup::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbLinkProps {
    pub text: Option<String>,
    /// Trusted markup; wins over `text`.
    pub html: Option<String>,
    pub active: bool,
    pub aria_current: String,
    pub href: Option<String>,
}

impl Default for BreadcrumbLinkProps {
    fn default() -> Self {
        Self {
            text: None,
            html: None,
            active: false,
            aria_current: "location".into(),
            href: None,
        }
    }
}

/// Render one breadcrumb entry.
///
/// The active entry is a plain `span` marked with `aria-current`; the others
/// link to `href` (default `#`). Without children the entry shows `html` or
/// `text`.
pub fn breadcrumb_link(props: &BreadcrumbLinkProps, children: Vec<Markup>) -> Markup {
    let node = if props.active {
        Markup::span().attr("aria-current", props.aria_current.as_str())
    } else {
        Markup::new("a").attr("href", props.href.as_deref().unwrap_or("#"))
    };

    if !children.is_empty() {
        return node.children(children);
    }
    match (&props.html, &props.text) {
        (Some(html), _) => node.html(html.as_str()),
        (None, Some(text)) => node.text(text.as_str()),
        (None, None) => node,
    }
}
