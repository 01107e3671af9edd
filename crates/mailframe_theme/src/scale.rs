use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// A theme token scale: an ordered ladder addressed by numeric index, or a
/// named map addressed by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenScale {
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl TokenScale {
    /// Best-effort lookup of `raw` in this scale.
    ///
    /// List scales accept whole numbers and numeric strings as indices; map
    /// scales are keyed by the rendered form of `raw`. A miss returns `None`
    /// and callers fall back to the raw value; it is never an error.
    pub fn get(&self, raw: &Value) -> Option<&Value> {
        match self {
            TokenScale::List(values) => index_of(raw).and_then(|index| values.get(index)),
            TokenScale::Map(entries) => entries.get(raw.render().as_str()),
        }
    }
}

fn index_of(raw: &Value) -> Option<usize> {
    match raw {
        Value::Num(num) if num.fract() == 0.0 && *num >= 0.0 => Some(*num as usize),
        Value::Str(string) => string.parse().ok(),
        _ => None,
    }
}
