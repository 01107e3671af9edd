use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A scalar theme or prop value: a flag, a number, or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(num) => Some(*num),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(string) => Some(string),
            _ => None,
        }
    }

    /// Renders the value the way it appears in CSS text and HTML attributes.
    ///
    /// Whole numbers render without a fractional part (`4` → `"4"`).
    pub fn render(&self) -> String {
        match self {
            Value::Bool(flag) => flag.to_string(),
            Value::Num(num) => fmt_number(*num),
            Value::Str(string) => string.clone(),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(num: f64) -> Self {
        Value::Num(num)
    }
}

impl From<i32> for Value {
    fn from(num: i32) -> Self {
        Value::Num(num.into())
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Value::Str(string.into())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Value::Str(string)
    }
}

pub(crate) fn fmt_number(num: f64) -> String {
    if num.fract() == 0.0 && num.abs() < 1e15 {
        format!("{}", num as i64)
    } else {
        format!("{num}")
    }
}

/// The value of one author-facing prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// One value, applied at every breakpoint.
    Value(Value),
    /// `[desktop, mobile]`: slot 0 renders inline, slot 1 is collected into
    /// the mobile stylesheet. Extra slots are carried but have no meaning.
    Responsive(SmallVec<[Value; 2]>),
    /// An inline style object; only meaningful for the `style` prop.
    Style(IndexMap<String, Value>),
}

impl PropValue {
    /// A `[desktop, mobile]` responsive pair.
    pub fn responsive(desktop: impl Into<Value>, mobile: impl Into<Value>) -> Self {
        PropValue::Responsive(SmallVec::from_iter([desktop.into(), mobile.into()]))
    }

    /// The value slots in breakpoint order. Style objects have none.
    pub fn slots(&self) -> &[Value] {
        match self {
            PropValue::Value(value) => std::slice::from_ref(value),
            PropValue::Responsive(values) => values,
            PropValue::Style(_) => &[],
        }
    }

    pub fn first(&self) -> Option<&Value> {
        self.slots().first()
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        PropValue::Value(value)
    }
}

impl From<bool> for PropValue {
    fn from(flag: bool) -> Self {
        PropValue::Value(flag.into())
    }
}

impl From<f64> for PropValue {
    fn from(num: f64) -> Self {
        PropValue::Value(num.into())
    }
}

impl From<i32> for PropValue {
    fn from(num: i32) -> Self {
        PropValue::Value(num.into())
    }
}

impl From<&str> for PropValue {
    fn from(string: &str) -> Self {
        PropValue::Value(string.into())
    }
}

impl From<String> for PropValue {
    fn from(string: String) -> Self {
        PropValue::Value(string.into())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for PropValue {
    fn from((desktop, mobile): (A, B)) -> Self {
        PropValue::responsive(desktop, mobile)
    }
}
