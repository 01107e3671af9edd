use crate::components::Block;
use crate::engine::Props;
use crate::session::{self, Error};
use crate::theme::PropValue;
use crate::utils::{attr_string, class_attr, style_attr};

/// A row of [`Column`] cells inside an auto-layout table.
///
/// With `wrap(true)` every column renders as `d: ["table-cell", "block"]`,
/// so cells sit side by side on desktop and stack under the mobile
/// breakpoint.
#[derive(Debug, Clone, Default)]
pub struct Columns {
    wrap: bool,
    props: Props,
    columns: Vec<Column>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn render(&self) -> Result<String, Error> {
        let mut row = String::new();
        for column in &self.columns {
            row.push_str(&column.render_with_wrap(self.wrap)?);
        }

        // auto layout and full width override the Block defaults so cells
        // divide the container
        let inner = format!(
            "<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"table-layout:auto\" width=\"100%\"><tr>{row}</tr></table>"
        );

        let mut block = Block::new().child(inner);
        for (name, value) in &self.props {
            block = block.prop(name.clone(), value.clone());
        }
        block.render()
    }
}

/// One cell of a [`Columns`] row. Vertical alignment defaults to `top`.
#[derive(Debug, Clone, Default)]
pub struct Column {
    props: Props,
    children: Vec<String>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Renders a standalone cell, without mobile stacking.
    pub fn render(&self) -> Result<String, Error> {
        self.render_with_wrap(false)
    }

    pub(crate) fn render_with_wrap(&self, wrap: bool) -> Result<String, Error> {
        let session = session::active()?;

        let mut props = Props::new();
        props.insert("va".into(), "top".into());
        props.extend(self.props.clone());
        if wrap {
            props.insert("d".into(), PropValue::responsive("table-cell", "block"));
        }

        let decomposed = session.decompose(&props);

        let mut html = format!(
            "<td{}{}{}>",
            attr_string(&decomposed.attributes),
            class_attr(&decomposed.classnames),
            style_attr(&decomposed.styles),
        );
        for child in &self.children {
            html.push_str(child);
        }
        html.push_str("</td>");
        Ok(html)
    }
}
