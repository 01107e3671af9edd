use indexmap::IndexMap;

use crate::engine::Props;
use crate::session::{self, Error};
use crate::theme::{PropValue, Value};
use crate::utils::{attr_string, class_attr, style_attr};

/// Horizontal alignment for block-level components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// The base building block: a fixed-layout single-cell table.
///
/// Fills its container unless centered or explicitly sized; the resolved
/// background is mirrored onto the inner cell's `bgcolor` for clients that
/// ignore CSS backgrounds.
#[derive(Debug, Clone, Default)]
pub struct Block {
    align: Align,
    props: Props,
    children: Vec<String>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets a shorthand, canonical, or passthrough attribute prop.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Adds an explicit inline style declaration; always wins over computed
    /// styles for the same property.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        match self.props.get_mut("style") {
            Some(PropValue::Style(entries)) => {
                entries.insert(property.into(), value.into());
            }
            _ => {
                let mut entries = IndexMap::new();
                entries.insert(property.into(), value.into());
                self.props.insert("style".into(), PropValue::Style(entries));
            }
        }
        self
    }

    /// Appends pre-rendered child markup.
    pub fn child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn render(&self) -> Result<String, Error> {
        let session = session::active()?;
        let mut props = self.props.clone();

        // fill the container unless centered or explicitly sized
        if !props.contains_key("w") && !props.contains_key("width") {
            let width = match self.align {
                Align::Center => "auto",
                _ => "100%",
            };
            props.insert("w".into(), width.into());
        }

        let decomposed = session.decompose(&props);
        let bg = decomposed
            .styles
            .get("background")
            .map(Value::render)
            .unwrap_or_else(|| "transparent".into());

        let mut styles: IndexMap<String, Value> = IndexMap::new();
        styles.insert("tableLayout".into(), "fixed".into());
        let margin = match self.align {
            Align::Center => "0 auto",
            _ => "0",
        };
        styles.insert("margin".into(), margin.into());
        styles.insert("background".into(), Value::Str(bg.clone()));
        styles.extend(decomposed.styles.clone());

        let mut html = format!(
            "<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\" align=\"{}\"{}{}{}>",
            self.align.as_str(),
            attr_string(&decomposed.attributes),
            class_attr(&decomposed.classnames),
            style_attr(&styles),
        );
        html.push_str(&format!("<tr><td bgcolor=\"{bg}\">"));
        for child in &self.children {
            html.push_str(child);
        }
        html.push_str("</td></tr></table>");
        Ok(html)
    }
}
