use crate::components::Block;
use crate::engine::Props;
use crate::session::Error;
use crate::theme::PropValue;
use crate::utils::escape_attr;

/// A bulletproof email button: a full-width outer table, a block-display
/// link, and an inner auto-width table carrying the caller's props.
#[derive(Debug, Clone, Default)]
pub struct Button {
    href: String,
    title: Option<String>,
    props: Props,
    children: Vec<String>,
}

impl Button {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn render(&self) -> Result<String, Error> {
        let mut inner = Block::new().prop("w", "auto");
        for (name, value) in &self.props {
            inner = inner.prop(name.clone(), value.clone());
        }
        for child in &self.children {
            inner = inner.child(child.clone());
        }

        let title = self
            .title
            .as_ref()
            .map(|title| format!(" title=\"{}\"", escape_attr(title)))
            .unwrap_or_default();
        let anchor = format!(
            "<a href=\"{}\"{title} target=\"_blank\" style=\"display:block;width:auto;text-decoration:none\">{}</a>",
            escape_attr(&self.href),
            inner.render()?,
        );

        Block::new().prop("w", "100%").child(anchor).render()
    }
}
