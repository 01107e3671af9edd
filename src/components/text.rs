use indexmap::IndexMap;

use crate::components::{Align, Block};
use crate::engine::Props;
use crate::session::Error;
use crate::theme::{PropValue, Value};

/// Themed typography. Sets email-safe text defaults and delegates the markup
/// to [`Block`].
#[derive(Debug, Clone, Default)]
pub struct Text {
    align: Align,
    italic: bool,
    bold: bool,
    props: Props,
    children: Vec<String>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
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
        let mut props = Props::new();
        props.insert("w".into(), "100%".into());
        props.insert("c".into(), "inherit".into());
        props.insert("ff".into(), "sans".into());
        props.insert("fs".into(), 5.into());
        props.insert(
            "fw".into(),
            if self.bold { "bold" } else { "normal" }.into(),
        );

        let mut style: IndexMap<String, Value> = IndexMap::new();
        style.insert("textAlign".into(), self.align.as_str().into());
        style.insert("msoLineHeightRule".into(), "exactly".into());
        style.insert(
            "fontStyle".into(),
            if self.italic { "italic" } else { "normal" }.into(),
        );
        if let Some(PropValue::Style(user)) = self.props.get("style") {
            style.extend(user.clone());
        }

        for (name, value) in &self.props {
            if name != "style" {
                props.insert(name.clone(), value.clone());
            }
        }
        props.insert("style".into(), PropValue::Style(style));

        let mut block = Block::new().align(self.align);
        for (name, value) in props {
            block = block.prop(name, value);
        }
        for child in &self.children {
            block = block.child(child.clone());
        }
        block.render()
    }
}
