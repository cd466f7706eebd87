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

//! Standard predicates every registry starts with
//!
//! None of these fail on ill-typed input; a mismatch is simply `false`.

use crate::equality::deep_equal;
use crate::model::Value;

use super::TypeRegistry;
use super::predicate::Predicate;

/// Names and tests of the standard one-argument predicates
pub const STANDARD_PREDICATES: &[(&str, fn(&Value) -> bool)] = &[
    ("object", is_object),
    ("func", is_func),
    ("array", is_array),
    ("string", is_string),
    ("number", is_number),
    ("integer", is_integer),
    ("decimal", is_decimal),
    ("boolean", is_boolean),
    ("null", is_null),
    ("undefined", is_undefined),
    ("defined", is_defined),
    ("true", is_true),
    ("false", is_false),
    ("nan", is_nan),
    ("nil", is_nil),
];

/// Register the standard predicates plus `equal`
pub fn register_builtin_predicates(registry: &mut TypeRegistry) {
    for (name, test) in STANDARD_PREDICATES {
        registry
            .predicates
            .insert((*name).to_string(), Predicate::unary(*test));
    }
    registry
        .predicates
        .insert("equal".to_string(), Predicate::binary(deep_equal));
}

/// Object-like, not an array and not null
pub fn is_object(value: &Value) -> bool {
    value.is_object_like() && !matches!(value, Value::Array(_) | Value::Null)
}

/// Callable
pub fn is_func(value: &Value) -> bool {
    value.is_callable()
}

/// True array
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Textual
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Numeric and not NaN. Infinities count.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if !n.is_nan())
}

/// Number whose remainder modulo one is zero, so `-0` and `1e300` qualify
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) if is_number(value) => n % 1.0 == 0.0,
        _ => false,
    }
}

/// Number whose remainder modulo one is not zero
///
/// The infinities have a NaN remainder and therefore count as decimals.
pub fn is_decimal(value: &Value) -> bool {
    match value {
        Value::Number(n) if is_number(value) => n % 1.0 != 0.0,
        _ => false,
    }
}

/// Exactly `true` or `false`
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

/// Exactly null
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Exactly undefined
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Anything but undefined
pub fn is_defined(value: &Value) -> bool {
    !is_undefined(value)
}

/// Exactly `true`
pub fn is_true(value: &Value) -> bool {
    matches!(value, Value::Boolean(true))
}

/// Exactly `false`
pub fn is_false(value: &Value) -> bool {
    matches!(value, Value::Boolean(false))
}

/// Coerces to NaN, e.g. `"abc"`, `undefined` or `{}`
pub fn is_nan(value: &Value) -> bool {
    value.to_number().is_nan()
}

/// Null or undefined, but not `0`, `""` or `false`
pub fn is_nil(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Function;

    fn empty_object() -> Value {
        Value::object(Vec::<(String, Value)>::new())
    }

    #[test]
    fn test_object() {
        assert!(is_object(&empty_object()));
        assert!(is_object(&Value::object([("text", "Hello, I am indeed an object")])));
        assert!(!is_object(&Value::array([1, 2, 3])));
        assert!(!is_object(&Value::from(5)));
        assert!(!is_object(&Value::from("a string")));
        assert!(!is_object(&Value::Null));
        assert!(!is_object(&Value::Undefined));
        assert!(!is_object(&Value::from(Function::new("f", |_| Value::Null))));
    }

    #[test]
    fn test_func() {
        assert!(is_func(&Value::from(Function::new("f", |_| Value::from(false)))));
        assert!(!is_func(&Value::from("fish")));
        assert!(!is_func(&Value::from(5)));
        assert!(!is_func(&Value::array(Vec::<Value>::new())));
        assert!(!is_func(&empty_object()));
    }

    #[test]
    fn test_number() {
        assert!(is_number(&Value::from(5)));
        assert!(is_number(&Value::from(0.15)));
        assert!(is_number(&Value::from(0xffffff)));
        assert!(is_number(&Value::from(0o777)));
        assert!(is_number(&Value::from(f64::INFINITY)));
        assert!(!is_number(&Value::from(f64::NAN)));
        assert!(!is_number(&Value::from("1")));
        assert!(!is_number(&Value::Undefined));
    }

    #[test]
    fn test_integer() {
        for n in [1.0, 15.0, 908429038402934.0, -51.0, -0.0, 1e300] {
            assert!(is_integer(&Value::from(n)), "{n} is an integer");
        }
        for n in [1.5, 0.12, -1923.1, f64::NAN, f64::INFINITY] {
            assert!(!is_integer(&Value::from(n)), "{n} is not an integer");
        }
        assert!(!is_integer(&Value::from("15")));
        assert!(!is_integer(&Value::array([1, 2, 3])));
        assert!(!is_integer(&empty_object()));
    }

    #[test]
    fn test_decimal() {
        for n in [1.5, 198204.12, -90.0000000000001] {
            assert!(is_decimal(&Value::from(n)), "{n} is a decimal");
        }
        for n in [1.0, 919191.0, 451.0, f64::NAN] {
            assert!(!is_decimal(&Value::from(n)), "{n} is not a decimal");
        }
        assert!(is_decimal(&Value::from(f64::INFINITY)));
        assert!(!is_decimal(&Value::from("1")));
        assert!(!is_decimal(&Value::object([("not", "a number")])));
    }

    #[test]
    fn test_literals() {
        assert!(is_boolean(&Value::from(true)));
        assert!(is_boolean(&Value::from(false)));
        assert!(!is_boolean(&Value::from(0)));
        assert!(!is_boolean(&Value::from("false")));

        assert!(is_true(&Value::from(true)));
        assert!(!is_true(&Value::from(1)));
        assert!(is_false(&Value::from(false)));
        assert!(!is_false(&Value::from(0)));
    }

    #[test]
    fn test_absence() {
        assert!(is_null(&Value::Null));
        assert!(!is_null(&Value::Undefined));
        assert!(!is_null(&Value::from(0)));

        assert!(is_undefined(&Value::Undefined));
        assert!(!is_undefined(&Value::Null));

        assert!(is_defined(&Value::from(2)));
        assert!(is_defined(&Value::Null));
        assert!(is_defined(&Value::from(0)));
        assert!(!is_defined(&Value::Undefined));

        assert!(is_nil(&Value::Null));
        assert!(is_nil(&Value::Undefined));
        assert!(!is_nil(&Value::from(0)));
        assert!(!is_nil(&Value::from("")));
        assert!(!is_nil(&Value::from(false)));
    }

    #[test]
    fn test_nan_coerces() {
        assert!(is_nan(&Value::from(f64::NAN)));
        assert!(is_nan(&Value::from("abc")));
        assert!(is_nan(&Value::Undefined));
        assert!(is_nan(&empty_object()));
        assert!(!is_nan(&Value::from("12")));
        assert!(!is_nan(&Value::Null));
        assert!(!is_nan(&Value::from(true)));
        assert!(!is_nan(&Value::array(Vec::<Value>::new())));
    }
}
