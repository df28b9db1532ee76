use crate::markup::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarBrandProps {
    pub tag: String,
    /// Render as a link instead of `tag`.
    pub href: Option<String>,
}

impl Default for NavbarBrandProps {
    fn default() -> Self {
        Self {
            tag: "div".into(),
            href: None,
        }
    }
}

pub fn navbar_brand(props: &NavbarBrandProps, children: Vec<Markup>) -> Markup {
    let node = match &props.href {
        Some(href) => Markup::new("a").attr("href", href.as_str()),
        None => Markup::new(props.tag.as_str()),
    };
    node.class("navbar-brand").children(children)
}
