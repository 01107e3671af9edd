use crate::engine::Props;
use crate::theme::{PropBundle, PropValue, Theme, Value};

/// Expands macros and variants, then resolves all shorthand aliases to
/// canonical property names.
///
/// Macros fire only on a boolean `true`; `false` consumes the prop and
/// contributes nothing, and a non-boolean value on a macro-named prop falls
/// through as an ordinary prop. Variants select by the prop's value; an
/// unknown selector contributes nothing. Shorthand-derived values never
/// clobber an explicitly set canonical property. Unknown props pass through
/// untouched.
pub fn explode(props: &Props, theme: &Theme) -> Props {
    let mut expanded = Props::new();

    // expand macros and variants, copy other props
    for (prop, value) in props {
        if theme.macros.contains_key(prop.as_str()) {
            if let PropValue::Value(Value::Bool(enabled)) = value {
                if *enabled {
                    merge_bundle(&mut expanded, &theme.macros[prop.as_str()]);
                }
                continue;
            }
        }
        if let Some(table) = theme.variants.get(prop.as_str()) {
            let selected = value.first().and_then(|v| table.get(v.render().as_str()));
            if let Some(bundle) = selected {
                merge_bundle(&mut expanded, bundle);
            }
            continue;
        }
        expanded.insert(prop.clone(), value.clone());
    }

    // expand shorthands; explicit canonical values win over shorthand-derived
    let keys: Vec<String> = expanded.keys().cloned().collect();
    for prop in keys {
        let Some(targets) = theme.shorthands.get(prop.as_str()) else {
            continue;
        };
        let Some(value) = expanded.shift_remove(&prop) else {
            continue;
        };
        for target in targets {
            if !expanded.contains_key(target.as_str()) {
                expanded.insert(target.clone(), value.clone());
            }
        }
    }

    expanded
}

// leaf scalars overwrite on key collision, last applied wins
fn merge_bundle(expanded: &mut Props, bundle: &PropBundle) {
    for (prop, value) in bundle {
        expanded.insert(prop.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, create_theme};

    fn props(json: &str) -> Props {
        serde_json::from_str(json).unwrap()
    }

    fn theme() -> Theme {
        create_theme(
            Theme::from_json(
                r#"{
                    "shorthands": {"c": "color", "w": ["width"], "mt": ["marginTop"]},
                    "macros": {"ac": {"align": "center", "textAlign": "center"}},
                    "variants": {"theme": {"blue": {"c": "blue"}}}
                }"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn expands_macros_variants_and_shorthands() {
        let exploded = explode(
            &props(
                r#"{
                    "w": "500px",
                    "width": 1,
                    "mt": [1, 2],
                    "theme": "blue",
                    "ac": true,
                    "charset": "utf8"
                }"#,
            ),
            &theme(),
        );

        let expected = props(
            r#"{
                "width": 1,
                "marginTop": [1, 2],
                "charset": "utf8",
                "align": "center",
                "textAlign": "center",
                "color": "blue"
            }"#,
        );
        assert_eq!(exploded, expected, "explicit width wins over the w shorthand");
    }

    #[test]
    fn false_macro_contributes_nothing() {
        let exploded = explode(&props(r#"{"ac": false}"#), &theme());
        assert!(exploded.is_empty());
    }

    #[test]
    fn non_bool_macro_value_passes_through() {
        let exploded = explode(&props(r#"{"ac": "sure"}"#), &theme());
        assert_eq!(exploded, props(r#"{"ac": "sure"}"#));
    }

    #[test]
    fn unknown_variant_selector_contributes_nothing() {
        let exploded = explode(&props(r#"{"theme": "crimson"}"#), &theme());
        assert!(exploded.is_empty());
    }

    #[test]
    fn later_bundles_overwrite_earlier_scalars() {
        let theme = create_theme(
            Theme::from_json(
                r#"{
                    "macros": {
                        "first": {"textAlign": "left"},
                        "second": {"textAlign": "right"}
                    }
                }"#,
            )
            .unwrap(),
        );
        let exploded = explode(&props(r#"{"first": true, "second": true}"#), &theme);
        assert_eq!(exploded, props(r#"{"textAlign": "right"}"#));
    }
}
