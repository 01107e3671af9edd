use crate::utils::escape_attr;

/// Builder for the XHTML email document shell.
///
/// CSS passed through [`css`](Document::css) is emitted in both the head and
/// the body, since email clients disagree on which `<style>` block survives
/// their sanitizers. The flushed mobile stylesheet is the expected input.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lang: Option<String>,
    title: String,
    css: Option<String>,
    head: Option<String>,
    head_css: Option<String>,
    body_css: Option<String>,
    body: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Document language, `en` by default.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// CSS emitted in both head and body.
    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Extra markup appended to the head.
    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    /// CSS emitted in the head only.
    pub fn head_css(mut self, head_css: impl Into<String>) -> Self {
        self.head_css = Some(head_css.into());
        self
    }

    /// CSS emitted at the top of the body only.
    pub fn body_css(mut self, body_css: impl Into<String>) -> Self {
        self.body_css = Some(body_css.into());
        self
    }

    pub fn build(&self) -> String {
        let lang = self.lang.as_deref().unwrap_or("en");
        let style_block =
            |css: &Option<String>| match css {
                Some(css) => format!("<style type=\"text/css\">{css}</style>"),
                None => String::new(),
            };

        format!(
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" lang="{lang}" xml:lang="{lang}">
  <head>
    <meta charset="UTF-8" />
    <meta http-equiv="Content-Type" content="text/html; charset=utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />

    <title>{title}</title>

    {head}
    {css}
    {head_css}
  </head>

  <body style="width:100%; margin:0; padding:0; -webkit-text-size-adjust: 100%; -ms-text-size-adjust:100%;">
    {body_top_css}
    {body_css}

    {body}
  </body>
</html>
"#,
            lang = escape_attr(lang),
            title = self.title,
            head = self.head.as_deref().unwrap_or(""),
            css = style_block(&self.css),
            head_css = style_block(&self.head_css),
            body_top_css = style_block(&self.css),
            body_css = style_block(&self.body_css),
            body = self.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Block, Text};
    use crate::session::{Session, provide};

    #[test]
    fn renders_the_shell() {
        let html = Document::new("Welcome", "<p>Hi</p>").build();
        assert!(html.starts_with("<!DOCTYPE html PUBLIC"));
        assert!(html.contains("<title>Welcome</title>"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains("<p>Hi</p>"));
        assert!(!html.contains("<style"), "no CSS blocks without CSS input");
    }

    #[test]
    fn css_lands_in_head_and_body() {
        let css = "@media (max-width: 600px) {._0{color:blue !important}}";
        let html = Document::new("t", "b").css(css).build();
        assert_eq!(html.matches(css).count(), 2, "once in head, once in body");
    }

    #[test]
    fn lang_is_configurable() {
        let html = Document::new("t", "b").lang("sv").build();
        assert!(html.contains(r#"lang="sv" xml:lang="sv""#));
    }

    #[test]
    fn full_render_pass() {
        let session = Session::default();
        let body = provide(&session, || {
            Block::new()
                .prop("p", (4, 2))
                .prop("c", "black")
                .child(Text::new().bold(true).child("Hello").render().unwrap())
                .render()
                .unwrap()
        });

        let css = session.flush_mobile_css();
        let html = Document::new("Welcome", body).css(&css).build();

        assert!(html.contains("padding-top:16px"), "desktop spacing renders inline");
        assert!(html.contains("color:#333"), "the color token resolves");
        assert!(
            html.contains("padding-top:8px !important"),
            "the mobile override rides along in the flushed stylesheet"
        );
        assert!(html.contains("@media (max-width: 600px)"));
        assert!(html.contains("font-weight:bold"));
    }
}
