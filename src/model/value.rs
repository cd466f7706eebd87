// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core dynamic value type

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::function::Function;
use super::host::HostObject;

/// Shared, ordered element storage of an array value
pub type Array = Arc<Vec<Value>>;

/// Shared, insertion-ordered property storage of an object value
pub type Object = Arc<IndexMap<String, Value>>;

/// The absent value, usable wherever a `&'static Value` is needed
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A dynamically typed value
///
/// Reference variants (arrays, objects, functions, dates, regular
/// expressions and host objects) are reference counted: cloning one yields a
/// second handle to the same underlying value, which is what strict identity
/// compares.
#[derive(Clone)]
pub enum Value {
    /// The absent sentinel
    Undefined,

    /// The explicit empty value
    Null,

    /// Boolean value
    Boolean(bool),

    /// Double precision number, including NaN and the infinities
    Number(f64),

    /// String value
    String(Arc<str>),

    /// Ordered list of values
    Array(Array),

    /// String-keyed map of values
    Object(Object),

    /// Callable value
    Function(Function),

    /// Point in time
    Date(Arc<DateTime<FixedOffset>>),

    /// Regular expression
    RegExp(Arc<Regex>),

    /// Value supplied by the embedding program
    Host(Arc<dyn HostObject>),
}

impl Value {
    /// Create an array value from any sequence of values
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Create an object value from key/value pairs, keeping their order
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(Arc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Create a date value
    pub fn date(date: DateTime<FixedOffset>) -> Self {
        Self::Date(Arc::new(date))
    }

    /// Create a regular expression value
    pub fn regexp(regex: Regex) -> Self {
        Self::RegExp(Arc::new(regex))
    }

    /// Wrap a value owned by the embedding program
    pub fn host<H: HostObject + 'static>(object: H) -> Self {
        Self::Host(Arc::new(object))
    }

    /// Name of the runtime class this value belongs to
    ///
    /// This is the capitalised form (`"Array"`, `"RegExp"`, ...). Host objects
    /// report their own class, so the set of names is open.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Object(_) => "Object",
            Self::Function(_) => "Function",
            Self::Date(_) => "Date",
            Self::RegExp(_) => "RegExp",
            Self::Host(host) => host.class_name(),
        }
    }

    /// Whether a `typeof` test would report this value as `"object"`
    ///
    /// Null and arrays count; callables don't.
    pub fn is_object_like(&self) -> bool {
        match self {
            Self::Null | Self::Array(_) | Self::Object(_) | Self::Date(_) | Self::RegExp(_) => {
                true
            }
            Self::Host(host) => !host.is_callable(),
            _ => false,
        }
    }

    /// Whether this value can be invoked
    pub fn is_callable(&self) -> bool {
        match self {
            Self::Function(_) => true,
            Self::Host(host) => host.is_callable(),
            _ => false,
        }
    }

    /// Try to read a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to read a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to read a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to read array elements
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to read object properties
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Try to read a function
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Look up an own property of an object value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// Strict identity, see [`strict_equal`](crate::equality::strict_equal)
    pub fn same(&self, other: &Value) -> bool {
        crate::equality::strict_equal(self, other)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Undefined
    }
}

/// Values compare by deep equality, so NaN is never equal to itself
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::equality::deep_equal(self, other)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Arc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Arc::from(value))
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Arc::new(items))
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Object(Arc::new(entries))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(date: DateTime<FixedOffset>) -> Self {
        Self::date(date)
    }
}

impl From<Regex> for Value {
    fn from(regex: Regex) -> Self {
        Self::regexp(regex)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(Arc::new(iter.into_iter().collect()))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::object(iter)
    }
}

/// Convert from serde_json::Value
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::from(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(entries) => entries
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect(),
        }
    }
}

/// Convert to serde_json::Value the way a JSON stringifier would
///
/// Non-finite numbers, undefined and functions become `null` inside arrays
/// and are dropped from objects. Dates become RFC 3339 strings and regular
/// expressions empty objects.
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined | Value::Null | Value::Function(_) => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.to_string()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .filter(|(_, value)| !matches!(value, Value::Undefined | Value::Function(_)))
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
            Value::Date(date) => serde_json::Value::String(date.to_rfc3339()),
            Value::RegExp(_) | Value::Host(_) => serde_json::Value::Object(Default::default()),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    // Integral values within the exact range of f64 print without a fraction
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return serde_json::Value::Number((n as i64).into());
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde_json::Value::from(self).serialize(serializer)
    }
}

/// Formats a number the way string coercion does
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

/// String coercion of a value
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Self::Undefined | Self::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{}", parts.join(","))
            }
            Self::Object(_) => write!(f, "[object Object]"),
            Self::Function(function) => {
                write!(f, "function {}() {{ [native code] }}", function.name())
            }
            Self::Date(date) => write!(f, "{}", date.format("%a %b %d %Y %H:%M:%S GMT%z")),
            Self::RegExp(regex) => write!(f, "/{}/", regex.as_str()),
            Self::Host(host) => write!(f, "[object {}]", host.class_name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::Null => write!(f, "Null"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Number(n) => write!(f, "Number({})", format_number(*n)),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Array(items) => f.debug_list().entries(items.iter()).finish(),
            Self::Object(entries) => f.debug_map().entries(entries.iter()).finish(),
            Self::Function(function) => write!(f, "{function:?}"),
            Self::Date(date) => write!(f, "Date({})", date.to_rfc3339()),
            Self::RegExp(regex) => write!(f, "RegExp(/{}/)", regex.as_str()),
            Self::Host(host) => write!(f, "Host({})", host.class_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_class_names() {
        assert_eq!(Value::Undefined.class_name(), "Undefined");
        assert_eq!(Value::Null.class_name(), "Null");
        assert_eq!(Value::from(5).class_name(), "Number");
        assert_eq!(Value::from("text").class_name(), "String");
        assert_eq!(Value::array([1, 2, 3]).class_name(), "Array");
        assert_eq!(Value::object([("a", 1)]).class_name(), "Object");
        assert_eq!(Value::regexp(Regex::new("a+").unwrap()).class_name(), "RegExp");
    }

    #[test]
    fn test_object_like() {
        assert!(Value::Null.is_object_like());
        assert!(Value::array(Vec::<Value>::new()).is_object_like());
        assert!(Value::object(Vec::<(String, Value)>::new()).is_object_like());
        assert!(!Value::from(5).is_object_like());
        assert!(!Value::Undefined.is_object_like());
        assert!(!Value::from(Function::new("f", |_| Value::Undefined)).is_object_like());
    }

    #[test]
    fn test_clones_share_storage() {
        let original = Value::array([1, 2]);
        let copy = original.clone();

        match (&original, &copy) {
            (Value::Array(a), Value::Array(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("Expected arrays"),
        }
    }

    #[test]
    fn test_same_is_strict_identity() {
        let array = Value::array([1, 2]);
        assert!(array.same(&array.clone()));
        assert!(!array.same(&Value::array([1, 2])));

        assert!(Value::from(0.0).same(&Value::from(-0.0)));
        assert!(!Value::from(f64::NAN).same(&Value::from(f64::NAN)));
        assert!(Value::from("a").same(&Value::from("a")));
        assert!(!Value::Null.same(&Value::Undefined));
    }

    #[test]
    fn test_json_conversion() {
        let value = Value::from(json!({"name": "test", "tags": [1, "two", null]}));

        assert_eq!(value.get("name").and_then(Value::as_str), Some("test"));
        let tags = value.get("tags").and_then(Value::as_array).unwrap();
        assert_eq!(tags.len(), 3);
        assert!(matches!(tags[2], Value::Null));
    }

    #[test]
    fn test_json_output_drops_unrepresentable_properties() {
        let value = Value::object([
            ("kept", Value::from(1)),
            ("missing", Value::Undefined),
            ("nan", Value::from(f64::NAN)),
            ("list", Value::array([Value::Undefined, Value::from(2.5)])),
        ]);

        assert_eq!(
            serde_json::Value::from(&value),
            json!({"kept": 1, "nan": null, "list": [null, 2.5]})
        );
    }

    #[test]
    fn test_display_coercion() {
        assert_eq!(Value::array([Value::from(1), Value::Null, Value::from("x")]).to_string(), "1,,x");
        assert_eq!(Value::object([("a", 1)]).to_string(), "[object Object]");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
    }
}
