use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::engine::Props;
use crate::theme::{PropValue, Theme, Value, units};
use crate::utils::kebab_case;

/// Allocates `_`-prefixed hexadecimal classnames from a monotonic counter.
///
/// The counter is owned by the session and is never reset, so classnames are
/// unique for the session's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassnameCounter(u64);

impl ClassnameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next classname and advances the counter.
    pub fn allocate(&mut self) -> String {
        let id = self.0;
        self.0 += 1;
        format!("_{id:x}")
    }
}

/// The output of one decomposition: plain HTML attributes, inline styles for
/// the primary value of each styleable prop, and the classnames plus CSS text
/// for every mobile override.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Decomposition {
    pub attributes: IndexMap<String, PropValue>,
    pub styles: IndexMap<String, Value>,
    pub classnames: SmallVec<[String; 1]>,
    pub css: String,
}

/// Resolves every styleable prop in `props` against the theme and splits the
/// result into attributes, inline styles, and mobile CSS.
///
/// Props are styleable when the theme knows them through its macro, variant,
/// shorthand, or property tables; everything else copies verbatim into
/// `attributes`. Each styleable value is an ordered slot list: slot 0 lands
/// in `styles` (width and height additionally mirror into numeric
/// attributes), slot 1 becomes one classname plus one `!important` rule in
/// `css`. Token misses fall back to the raw value; a unit policy yielding no
/// value drops that slot silently. An inline `style` object layers over the
/// computed styles last, explicit declarations winning per property.
pub fn decompose_props(props: &Props, theme: &Theme, ids: &mut ClassnameCounter) -> Decomposition {
    let mut out = Decomposition::default();
    let mut pending: Vec<(&String, &PropValue)> = Vec::new();
    let mut explicit_style: Option<&IndexMap<String, Value>> = None;

    // pick out styleable props vs plain attributes
    for (prop, value) in props {
        if prop == "style" {
            if let PropValue::Style(entries) = value {
                explicit_style = Some(entries);
            }
            continue;
        }
        if theme.is_styleable(prop) {
            pending.push((prop, value));
        } else {
            out.attributes.insert(prop.clone(), value.clone());
        }
    }

    for (prop, value) in pending {
        let rule = theme.rule(prop);
        let scale = rule.and_then(|rule| theme.scale_for(rule));

        // slot 0 is the desktop value, slot 1 the mobile override
        for (slot, raw) in value.slots().iter().enumerate() {
            let resolved = scale.and_then(|scale| scale.get(raw)).unwrap_or(raw);
            let resolved = if rule.is_some_and(|rule| rule.sanitize) {
                units::sanitize_size_units(resolved)
            } else {
                resolved.clone()
            };
            let computed = match rule.and_then(|rule| rule.unit) {
                Some(unit) => unit.apply(&resolved),
                None => Some(resolved),
            };
            let Some(computed) = computed else {
                continue; // dropped slot: no style, no rule
            };

            if slot == 0 {
                if prop == "width" || prop == "height" {
                    out.attributes.insert(prop.clone(), attribute_mirror(&computed));
                }
                out.styles.insert(prop.clone(), computed);
            } else {
                let classname = ids.allocate();
                out.css.push_str(&to_css(&classname, prop, &computed));
                out.classnames.push(classname);
            }
        }
    }

    // explicit style declarations override every computed value
    if let Some(entries) = explicit_style {
        for (property, value) in entries {
            out.styles.insert(property.clone(), value.clone());
        }
    }

    out
}

// Width and height mirror into the numeric attribute form email clients
// expect: pixel-shaped values lose their suffix, everything else ("100%",
// "auto") is kept verbatim. Mirrors are always string-typed.
fn attribute_mirror(computed: &Value) -> PropValue {
    PropValue::Value(Value::Str(units::sanitize_size_units(computed).render()))
}

fn to_css(classname: &str, property: &str, value: &Value) -> String {
    format!(".{classname}{{{}:{} !important}}", kebab_case(property), value.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, create_theme};

    fn props(json: &str) -> Props {
        serde_json::from_str(json).unwrap()
    }

    fn preset() -> Theme {
        create_theme(Theme::default())
    }

    fn decompose(json: &str) -> Decomposition {
        decompose_props(&props(json), &preset(), &mut ClassnameCounter::new())
    }

    #[test]
    fn splits_styles_attributes_and_mobile_css() {
        let result = decompose(r#"{"width": 1, "marginTop": [1, 2], "src": "", "charset": ""}"#);

        assert_eq!(result.css, "._0{margin-top:8px !important}");
        assert_eq!(result.classnames.to_vec(), vec!["_0".to_string()]);
        assert_eq!(result.styles["width"], Value::Str("100%".into()));
        assert_eq!(result.styles["marginTop"], Value::Str("4px".into()));
        assert_eq!(result.attributes["width"], PropValue::from("100%"));
        assert!(result.attributes.contains_key("src"));
        assert!(result.attributes.contains_key("charset"));
    }

    #[test]
    fn values_in_theme_resolve_through_tokens() {
        let exploded = crate::engine::explode(&props(r#"{"c": "black", "p": 2}"#), &preset());
        let result = decompose_props(&exploded, &preset(), &mut ClassnameCounter::new());

        assert_eq!(result.styles["color"], Value::Str("#333".into()));
        assert_eq!(result.styles["paddingTop"], Value::Str("8px".into()));
    }

    #[test]
    fn values_not_in_theme_fall_back_to_raw() {
        let exploded = crate::engine::explode(&props(r#"{"c": "blue", "p": 20}"#), &preset());
        let result = decompose_props(&exploded, &preset(), &mut ClassnameCounter::new());

        assert_eq!(result.styles["color"], Value::Str("blue".into()));
        assert_eq!(result.styles["paddingTop"], Value::Str("20px".into()));
    }

    #[test]
    fn unitless_scales_stay_numeric() {
        let result = decompose(r#"{"lineHeight": "1"}"#);
        assert_eq!(result.styles["lineHeight"], Value::Num(1.1));
    }

    #[test]
    fn str_unit_renders_token_numbers() {
        let result = decompose(r#"{"fontWeight": 9}"#);
        assert_eq!(result.styles["fontWeight"], Value::Str("900".into()));
    }

    #[test]
    fn width_int_mirrors_as_bare_integer() {
        let result = decompose(r#"{"width": 200}"#);
        assert_eq!(result.styles["width"], Value::Str("200px".into()));
        assert_eq!(result.attributes["width"], PropValue::from("200"));
    }

    #[test]
    fn width_unitless_string_mirrors_as_bare_integer() {
        let result = decompose(r#"{"width": "200"}"#);
        assert_eq!(result.styles["width"], Value::Str("200px".into()));
        assert_eq!(result.attributes["width"], PropValue::from("200"));
    }

    #[test]
    fn width_pixel_string_mirrors_as_bare_integer() {
        let result = decompose(r#"{"width": "200px"}"#);
        assert_eq!(result.styles["width"], Value::Str("200px".into()));
        assert_eq!(result.attributes["width"], PropValue::from("200"));
    }

    #[test]
    fn width_percent_is_never_coerced() {
        let result = decompose(r#"{"width": "100%"}"#);
        assert_eq!(result.styles["width"], Value::Str("100%".into()));
        assert_eq!(result.attributes["width"], PropValue::from("100%"));
    }

    #[test]
    fn mobile_slots_emit_one_rule_each() {
        let exploded =
            crate::engine::explode(&props(r#"{"c": ["black", "blue"], "p": [4, 2]}"#), &preset());
        let result = decompose_props(&exploded, &preset(), &mut ClassnameCounter::new());

        assert_eq!(result.styles["color"], Value::Str("#333".into()));
        assert_eq!(result.styles["paddingTop"], Value::Str("16px".into()));
        assert!(result.css.contains("color:blue !important"), "blue is not a token, stays literal");
        assert!(result.css.contains("padding-top:8px !important"));
        assert_eq!(
            result.classnames.len(),
            5,
            "one classname per mobile slot: color plus four padding sides"
        );
    }

    #[test]
    fn explicit_style_overrides_computed() {
        let result = decompose(
            r#"{"width": 200, "style": {"width": "50%", "border": "1px solid black"}}"#,
        );
        assert_eq!(result.styles["width"], Value::Str("50%".into()));
        assert_eq!(result.styles["border"], Value::Str("1px solid black".into()));
        assert_eq!(
            result.attributes["width"],
            PropValue::from("200"),
            "the mirror reflects the computed value, not the explicit override"
        );
    }

    #[test]
    fn sanitize_rule_normalizes_before_unit() {
        let theme = create_theme(
            Theme::from_json(r#"{"properties": {"maxWidth": {"unit": "px", "sanitize": true}}}"#)
                .unwrap(),
        );
        let result =
            decompose_props(&props(r#"{"maxWidth": "480px"}"#), &theme, &mut ClassnameCounter::new());
        assert_eq!(
            result.styles["maxWidth"],
            Value::Str("480px".into()),
            "the pixel string parses to a number first, then the px policy re-applies the unit"
        );
    }

    #[test]
    fn counter_is_monotonic_across_calls() {
        let mut ids = ClassnameCounter::new();
        let theme = preset();

        let first = decompose_props(&props(r#"{"color": ["black", "blue"]}"#), &theme, &mut ids);
        let second = decompose_props(&props(r#"{"color": ["black", "red"]}"#), &theme, &mut ids);

        assert_eq!(first.classnames.to_vec(), vec!["_0".to_string()]);
        assert_eq!(second.classnames.to_vec(), vec!["_1".to_string()]);
    }
}
