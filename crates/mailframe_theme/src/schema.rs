use std::sync::LazyLock;

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::deserializers::de_shorthands;
use crate::{PropValue, TokenScale, Value, units};

/// A bundle of prop/value pairs, as stored in macros and variants.
pub type PropBundle = IndexMap<String, PropValue>;

/// Named unit policies for rendering resolved values as CSS-ready text.
///
/// Each variant resolves to a pure function of the token-resolved value; a
/// policy that yields no value drops that slot from the decomposition.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[func(pub fn apply(&self, value: &Value) -> Option<Value>)]
#[serde(rename_all = "camelCase")]
pub enum Unit {
    /// Bare numbers become `{n}px`; strings pass through.
    #[assoc(apply = units::px(value))]
    Px,
    /// Numbers at or below 1 are fractions, larger numbers are pixels;
    /// pixel-shaped strings are parsed first.
    #[assoc(apply = units::perc_or_px(value))]
    PercOrPx,
    /// Any value rendered as a plain string.
    #[assoc(apply = units::str(value))]
    Str,
}

/// How one canonical CSS property resolves against the theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRule {
    /// Token scale consulted before the unit policy, if any.
    pub token: Option<String>,
    /// Unit policy applied to the resolved value, if any.
    pub unit: Option<Unit>,
    /// Normalize pixel-shaped values before the unit policy runs. Off by
    /// default; the width/height attribute mirror normalizes regardless.
    pub sanitize: bool,
}

/// The immutable theme registry: token scales, shorthand aliases, macros,
/// variants, and per-property resolution rules.
///
/// Themes are plain data and deserialize from JSON; see `themes/default.json`
/// for the built-in tables. All tables are read-only after construction:
/// layering a partial theme over the preset goes through
/// [`create_theme`](crate::create_theme), which clones rather than mutates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Token scales addressable by index or name.
    pub tokens: IndexMap<String, TokenScale>,
    /// Alias props expanding to one or more canonical property names.
    #[serde(deserialize_with = "de_shorthands")]
    pub shorthands: IndexMap<String, SmallVec<[String; 4]>>,
    /// Boolean-flag props expanding to fixed prop bundles when `true`.
    pub macros: IndexMap<String, PropBundle>,
    /// Props whose value selects among named bundles.
    pub variants: IndexMap<String, IndexMap<String, PropBundle>>,
    /// Per-property resolution rules.
    pub properties: IndexMap<String, PropertyRule>,
}

static PRESET: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_json(include_str!("../themes/default.json")).unwrap()
});

impl Theme {
    /// Parses a theme from its JSON form.
    pub fn from_json(json: &str) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in default theme.
    pub fn preset() -> &'static Theme {
        &PRESET
    }

    /// `true` if `prop` is themeable: known to the macro, variant, shorthand,
    /// or property tables. Anything else is a plain HTML attribute.
    pub fn is_styleable(&self, prop: &str) -> bool {
        self.macros.contains_key(prop)
            || self.variants.contains_key(prop)
            || self.shorthands.contains_key(prop)
            || self.properties.contains_key(prop)
    }

    /// The resolution rule for a canonical property, if declared.
    pub fn rule(&self, property: &str) -> Option<&PropertyRule> {
        self.properties.get(property)
    }

    /// The token scale backing `rule`, if it declares one.
    pub fn scale_for(&self, rule: &PropertyRule) -> Option<&TokenScale> {
        rule.token.as_deref().and_then(|token| self.tokens.get(token))
    }
}
