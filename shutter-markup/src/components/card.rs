use crate::markup::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBodyProps {
    pub tag: String,
    pub title: Option<String>,
    pub title_tag: String,
    pub sub_title: Option<String>,
    pub sub_title_tag: String,
    pub sub_title_text_variant: Option<String>,
    /// Lay the body over a card image.
    pub overlay: bool,
    pub bg_variant: Option<String>,
    pub border_variant: Option<String>,
    pub text_variant: Option<String>,
    pub body_classes: Vec<String>,
}

impl Default for CardBodyProps {
    fn default() -> Self {
        Self {
            tag: "div".into(),
            title: None,
            title_tag: "h4".into(),
            sub_title: None,
            sub_title_tag: "h6".into(),
            sub_title_text_variant: Some("muted".into()),
            overlay: false,
            bg_variant: None,
            border_variant: None,
            text_variant: None,
            body_classes: Vec::new(),
        }
    }
}

pub fn card_title(tag: &str, title: &str) -> Markup {
    Markup::new(tag).class("card-title").text(title)
}

pub fn card_sub_title(tag: &str, sub_title: &str, text_variant: Option<&str>) -> Markup {
    Markup::new(tag)
        .class("card-subtitle")
        .variant("text", text_variant)
        .text(sub_title)
}

/// Render a card body. Title and subtitle, when set, precede the children.
pub fn card_body(props: &CardBodyProps, children: Vec<Markup>) -> Markup {
    let mut content = Vec::with_capacity(children.len() + 2);
    if let Some(title) = props.title.as_deref().filter(|t| !t.is_empty()) {
        content.push(card_title(&props.title_tag, title));
    }
    if let Some(sub_title) = props.sub_title.as_deref().filter(|t| !t.is_empty()) {
        content.push(
            card_sub_title(
                &props.sub_title_tag,
                sub_title,
                props.sub_title_text_variant.as_deref(),
            )
            .class("mb-2"),
        );
    }
    content.extend(children);

    Markup::new(props.tag.as_str())
        .class("card-body")
        .class_if(props.overlay, "card-img-overlay")
        .variant("bg", props.bg_variant.as_deref())
        .variant("border", props.border_variant.as_deref())
        .variant("text", props.text_variant.as_deref())
        .classes(props.body_classes.iter().map(String::as_str))
        .children(content)
}
