//! Unit policies applied to token-resolved values before they land in CSS
//! text or HTML attributes.

use crate::Value;
use crate::value::fmt_number;

/// `true` if `value` is pixel-integer-shaped: one or more digits with an
/// optional `px` suffix, nothing else.
pub fn is_px_str(value: &Value) -> bool {
    let rendered = value.render();
    let digits = rendered.strip_suffix("px").unwrap_or(&rendered);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Normalizes pixel-integer-shaped values to a bare number; everything else
/// passes through unchanged (`"200px"` → `200`, `"100%"` → `"100%"`).
pub fn sanitize_size_units(value: &Value) -> Value {
    if is_px_str(value) {
        let rendered = value.render();
        let digits = rendered.strip_suffix("px").unwrap_or(&rendered);
        if let Ok(num) = digits.parse::<f64>() {
            return Value::Num(num);
        }
    }
    value.clone()
}

/// Appends `px` to bare numbers; strings pass through unchanged.
pub fn px(value: &Value) -> Value {
    match value {
        Value::Num(num) => Value::Str(format!("{}px", fmt_number(*num))),
        _ => value.clone(),
    }
}

/// Numbers at or below 1 are fractions (`0.5` → `"50%"`, `1` → `"100%"`),
/// larger numbers are pixels. Pixel-integer-shaped strings are parsed and
/// follow the numeric rule; other strings pass through unchanged.
pub fn perc_or_px(value: &Value) -> Value {
    match value {
        Value::Num(num) => {
            if *num <= 1.0 {
                Value::Str(format!("{}%", fmt_number(num * 100.0)))
            } else {
                Value::Str(format!("{}px", fmt_number(*num)))
            }
        }
        _ if is_px_str(value) => perc_or_px(&sanitize_size_units(value)),
        _ => value.clone(),
    }
}

/// Renders any value as a plain string (`900` → `"900"`).
pub fn str(value: &Value) -> Value {
    Value::Str(value.render())
}
