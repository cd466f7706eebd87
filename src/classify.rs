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

//! Type-tag classification
//!
//! A type tag is the lower-cased runtime class name of a value. Unlike a
//! `typeof` test it tells arrays, null and dates apart from plain objects.

use crate::model::{Function, UNDEFINED, Value};

/// Classify a value as a lowercase type tag
///
/// ```
/// use octofhir_typeis::{Value, classify};
///
/// assert_eq!(classify(&Value::array([1, 2, 3])), "array");
/// assert_eq!(classify(&Value::Null), "null");
/// ```
pub fn classify(value: &Value) -> String {
    value.class_name().to_lowercase()
}

/// Alias of [`classify`] for call sites that read better as `what(value)`
pub fn what(value: &Value) -> String {
    classify(value)
}

/// The classifier as a function value
///
/// Calling it with one argument yields the type tag as a string value.
pub fn classifier() -> Value {
    Value::Function(Function::new("is", |args| {
        Value::from(classify(args.first().unwrap_or(&UNDEFINED)))
    }))
}
