use crate::markup::Markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTextProps {
    pub id: Option<String>,
    pub tag: String,
    pub text_variant: Option<String>,
    /// Drop the block `form-text` class.
    pub inline: bool,
}

impl Default for FormTextProps {
    fn default() -> Self {
        Self {
            id: None,
            tag: "small".into(),
            text_variant: Some("muted".into()),
            inline: false,
        }
    }
}

/// Help text under a form control.
pub fn form_text(props: &FormTextProps, children: Vec<Markup>) -> Markup {
    Markup::new(props.tag.as_str())
        .maybe_id(props.id.clone())
        .class_if(!props.inline, "form-text")
        .variant("text", props.text_variant.as_deref())
        .children(children)
}
