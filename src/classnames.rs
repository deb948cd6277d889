//! Conditional class-name composition.
//!
//! Templates build `class` attributes from a list where some entries are only
//! present under a condition. Absent entries are dropped and the rest are
//! joined with single spaces, in order.

use std::collections::HashMap;

use tera::Value;

/// Join the present, non-empty class names with a space.
///
/// ```
/// use sapunoa::classnames::class_names;
///
/// let active = true;
/// let classes = class_names([Some("btn"), active.then_some("btn-active"), None, Some("")]);
/// assert_eq!(classes, "btn btn-active");
/// ```
pub fn class_names<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for class in classes.into_iter().flatten() {
        let class = class.as_ref();
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Truthiness of a template value as a class-name entry.
fn class_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Tera function `cn(classes=[...])`.
///
/// `null`, `false` and `""` are dropped; other values are stringified.
pub fn cn_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let classes = args
        .get("classes")
        .ok_or_else(|| tera::Error::msg("cn expects a `classes` argument"))?;

    let joined = match classes {
        Value::Array(items) => class_names(items.iter().map(class_value)),
        single => class_names([class_value(single)]),
    };

    Ok(Value::String(joined))
}
