//! Native values.
//!
//! Natives are the deserialization-friendly form of records: plain JSON
//! scalars, arrays and objects as produced by `serde_json`.

use serde_json::Value;

/// A native value.
pub type NativeValue = Value;

/// A map of field names to native values.
pub type NativeMap = serde_json::Map<String, Value>;

/// Name the kind of a native value for error messages.
///
/// Numbers are split into `int` and `float` the same way `serde_json` stores
/// them, so `1` and `1.0` report different kinds.
pub fn native_kind(value: &NativeValue) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
