use crate::engine::Props;
use crate::session::{self, Error};
use crate::theme::PropValue;
use crate::utils::{attr_string, class_attr, escape_attr, style_attr};

/// An `<img>` sized through the theme, optionally wrapped in a link.
///
/// Height defaults to `auto`; display is forced to `block` so gaps under
/// images disappear in table layouts.
#[derive(Debug, Clone, Default)]
pub struct Image {
    src: String,
    alt: Option<String>,
    href: Option<String>,
    props: Props,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Wraps the image in an `<a>` pointing at `href`.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn render(&self) -> Result<String, Error> {
        let session = session::active()?;

        let mut props = Props::new();
        props.insert("h".into(), "auto".into());
        props.extend(self.props.clone());

        let decomposed = session.decompose(&props);

        let mut styles = indexmap::IndexMap::new();
        styles.insert("display".to_string(), "block".into());
        styles.insert("outline".to_string(), "none".into());
        styles.insert("border".to_string(), "none".into());
        styles.insert("textDecoration".to_string(), "none".into());
        styles.extend(decomposed.styles.clone());

        let alt = self
            .alt
            .as_ref()
            .map(|alt| format!(" alt=\"{}\"", escape_attr(alt)))
            .unwrap_or_default();
        let img = format!(
            "<img{}{}{} src=\"{}\"{} />",
            attr_string(&decomposed.attributes),
            class_attr(&decomposed.classnames),
            alt,
            escape_attr(&self.src),
            style_attr(&styles),
        );

        Ok(match &self.href {
            Some(href) => format!(
                "<a href=\"{}\"{}>{img}</a>",
                escape_attr(href),
                self.alt
                    .as_ref()
                    .map(|alt| format!(" title=\"{}\"", escape_attr(alt)))
                    .unwrap_or_default(),
            ),
            None => img,
        })
    }
}
