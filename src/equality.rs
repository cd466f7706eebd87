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

//! Strict identity and recursive value equality

use std::sync::Arc;

use crate::classify::classify;
use crate::model::{UNDEFINED, Value};

/// Strict identity
///
/// Primitives compare by value (NaN is not identical to itself, `0` and
/// `-0` are); reference values compare by the storage they point at.
pub fn strict_equal(one: &Value, two: &Value) -> bool {
    match (one, two) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
        (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        (Value::Date(a), Value::Date(b)) => Arc::ptr_eq(a, b),
        (Value::RegExp(a), Value::RegExp(b)) => Arc::ptr_eq(a, b),
        (Value::Host(a), Value::Host(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// Recursive equality by value
///
/// Objects are equal when they have the same number of keys and every key
/// of `one` maps to an equal value in `two`, a key missing from `two`
/// reading as undefined. Arrays are compared element-wise. Everything else
/// falls back to [`strict_equal`].
///
/// There is no cycle guard. Shared storage without interior mutability
/// cannot form a cycle, but a host object that exposes one would recurse
/// without bound.
pub fn deep_equal(one: &Value, two: &Value) -> bool {
    if strict_equal(one, two) {
        return true;
    }

    if classify(one) != classify(two) {
        return false;
    }

    match (one, two) {
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, value)| deep_equal(value, b.get(key).unwrap_or(&UNDEFINED)))
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| deep_equal(x, y))
        }
        // Same tag but no structure to walk; identity already failed
        _ => false,
    }
}
