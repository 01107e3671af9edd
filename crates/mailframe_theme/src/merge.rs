use crate::{Theme, TokenScale};

/// Builds a complete theme by layering `partial` over the built-in preset.
///
/// `tokens`, `shorthands`, `macros`, and `variants` merge per key; map-valued
/// token scales merge entry-wise while list scales replace wholesale.
/// `properties` rules override or extend the preset per property. The preset
/// itself is never mutated.
pub fn create_theme(partial: Theme) -> Theme {
    let mut theme = Theme::preset().clone();

    for (name, scale) in partial.tokens {
        let merged = match (theme.tokens.shift_remove(&name), scale) {
            (Some(TokenScale::Map(mut existing)), TokenScale::Map(entries)) => {
                existing.extend(entries);
                TokenScale::Map(existing)
            }
            (_, scale) => scale,
        };
        theme.tokens.insert(name, merged);
    }

    theme.shorthands.extend(partial.shorthands);

    for (name, bundle) in partial.macros {
        theme.macros.entry(name).or_default().extend(bundle);
    }

    for (name, table) in partial.variants {
        let slot = theme.variants.entry(name).or_default();
        for (selector, bundle) in table {
            slot.entry(selector).or_default().extend(bundle);
        }
    }

    theme.properties.extend(partial.properties);

    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PropValue, PropertyRule, Unit, Value};
    use indexmap::IndexMap;

    #[test]
    fn empty_partial_yields_preset() {
        let theme = create_theme(Theme::default());
        assert_eq!(&theme, Theme::preset());
    }

    #[test]
    fn map_scales_merge_entry_wise() {
        let partial = Theme::from_json(r##"{"tokens": {"color": {"brand": "#f40"}}}"##).unwrap();
        let theme = create_theme(partial);

        let colors = theme.tokens.get("color").unwrap();
        assert_eq!(colors.get(&Value::Str("brand".into())), Some(&Value::Str("#f40".into())));
        assert_eq!(
            colors.get(&Value::Str("black".into())),
            Some(&Value::Str("#333".into())),
            "preset entries survive a partial map override"
        );
    }

    #[test]
    fn list_scales_replace() {
        let partial = Theme::from_json(r#"{"tokens": {"space": [0, 10, 20]}}"#).unwrap();
        let theme = create_theme(partial);
        assert_eq!(
            theme.tokens.get("space").unwrap().get(&Value::Num(1.0)),
            Some(&Value::Num(10.0))
        );
    }

    #[test]
    fn properties_union_per_key() {
        let mut properties = IndexMap::new();
        properties.insert(
            "width".to_string(),
            PropertyRule { token: None, unit: Some(Unit::Px), sanitize: false },
        );
        properties.insert("opacity".to_string(), PropertyRule::default());
        let theme = create_theme(Theme { properties, ..Theme::default() });

        assert_eq!(theme.rule("width").unwrap().unit, Some(Unit::Px), "user rules win per key");
        assert!(theme.rule("opacity").is_some(), "new rules extend the table");
        assert!(theme.rule("paddingTop").is_some(), "untouched preset rules remain");
    }

    #[test]
    fn macros_and_variants_merge() {
        let partial = Theme::from_json(
            r#"{
                "macros": {"ac": {"align": "center", "textAlign": "center"}},
                "variants": {"theme": {"blue": {"c": "blue"}}}
            }"#,
        )
        .unwrap();
        let theme = create_theme(partial);

        assert_eq!(
            theme.macros["ac"]["align"],
            PropValue::Value(Value::Str("center".into()))
        );
        assert_eq!(
            theme.variants["theme"]["blue"]["c"],
            PropValue::Value(Value::Str("blue".into()))
        );
    }

    #[test]
    fn preset_is_never_mutated() {
        let before = Theme::preset().clone();
        let partial = Theme::from_json(r##"{"tokens": {"color": {"black": "#000"}}}"##).unwrap();
        let _ = create_theme(partial);
        assert_eq!(&before, Theme::preset());
    }
}
