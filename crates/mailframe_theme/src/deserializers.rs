use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use smallvec::SmallVec;

/// Shorthand targets accept a single property name or a list of them.
pub fn de_shorthands<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, SmallVec<[String; 4]>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(SmallVec<[String; 4]>),
    }

    let raw = IndexMap::<String, OneOrMany>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .map(|(shorthand, targets)| {
            let targets = match targets {
                OneOrMany::One(property) => SmallVec::from_iter([property]),
                OneOrMany::Many(properties) => properties,
            };
            (shorthand, targets)
        })
        .collect())
}
