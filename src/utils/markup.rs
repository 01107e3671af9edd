use indexmap::IndexMap;

use crate::theme::{PropValue, Value};
use crate::utils::kebab_case;

/// Escapes a string for use inside a double-quoted attribute value.
pub(crate) fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Renders decomposed attributes as ` name="value"` pairs, in map order.
pub(crate) fn attr_string(attributes: &IndexMap<String, PropValue>) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        let Some(value) = value.first() else { continue };
        out.push_str(&format!(" {}=\"{}\"", name, escape_attr(&value.render())));
    }
    out
}

/// Renders a ` style="…"` attribute: `property:value` declarations joined by
/// `;`, property names kebab-cased. Empty maps render nothing.
pub(crate) fn style_attr(styles: &IndexMap<String, Value>) -> String {
    if styles.is_empty() {
        return String::new();
    }
    let declarations = styles
        .iter()
        .map(|(property, value)| format!("{}:{}", kebab_case(property), value.render()))
        .collect::<Vec<_>>()
        .join(";");
    format!(" style=\"{}\"", escape_attr(&declarations))
}

/// Renders a ` class="…"` attribute, or nothing when no classnames exist.
pub(crate) fn class_attr(classnames: &[String]) -> String {
    if classnames.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", classnames.join(" "))
    }
}
