use crate::markup::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputGroupAddonProps {
    pub id: Option<String>,
    pub tag: String,
    /// Wrap the children in `span.input-group-text`.
    pub is_text: bool,
}

impl Default for InputGroupAddonProps {
    fn default() -> Self {
        Self {
            id: None,
            tag: "div".into(),
            is_text: false,
        }
    }
}

fn input_group_addon(props: &InputGroupAddonProps, append: bool, children: Vec<Markup>) -> Markup {
    let children = if props.is_text {
        vec![Markup::span().class("input-group-text").children(children)]
    } else {
        children
    };
    Markup::new(props.tag.as_str())
        .maybe_id(props.id.clone())
        .class(if append {
            "input-group-append"
        } else {
            "input-group-prepend"
        })
        .children(children)
}

pub fn input_group_append(props: &InputGroupAddonProps, children: Vec<Markup>) -> Markup {
    input_group_addon(props, true, children)
}

pub fn input_group_prepend(props: &InputGroupAddonProps, children: Vec<Markup>) -> Markup {
    input_group_addon(props, false, children)
}
