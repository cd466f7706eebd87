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

//! Predicate handles stored in a registry

use std::fmt;
use std::sync::Arc;

use crate::model::{Function, UNDEFINED, Value};

/// Test over a single value
pub type UnaryTest = dyn Fn(&Value) -> bool + Send + Sync;

/// Test over a pair of values
pub type BinaryTest = dyn Fn(&Value, &Value) -> bool + Send + Sync;

/// A named boolean test, cheap to clone
///
/// Arguments are passed as a slice. Missing arguments read as
/// [`Value::Undefined`] and surplus arguments are ignored, so any predicate
/// can be called with any number of arguments without failing.
#[derive(Clone)]
pub enum Predicate {
    /// One-argument test
    Unary(Arc<UnaryTest>),
    /// Two-argument test
    Binary(Arc<BinaryTest>),
}

impl Predicate {
    /// Wrap a one-argument test
    pub fn unary<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Unary(Arc::new(test))
    }

    /// Wrap a two-argument test
    pub fn binary<F>(test: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        Self::Binary(Arc::new(test))
    }

    /// Number of arguments the test reads
    pub fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Evaluate the test
    pub fn call(&self, args: &[&Value]) -> bool {
        match self {
            Self::Unary(test) => test(nth(args, 0)),
            Self::Binary(test) => test(nth(args, 0), nth(args, 1)),
        }
    }

    /// Evaluate the test against a single value
    pub fn test(&self, value: &Value) -> bool {
        self.call(&[value])
    }

    /// The logical complement of this predicate
    pub fn negate(&self) -> Predicate {
        match self {
            Self::Unary(test) => {
                let test = Arc::clone(test);
                Self::Unary(Arc::new(move |value: &Value| !test(value)))
            }
            Self::Binary(test) => {
                let test = Arc::clone(test);
                Self::Binary(Arc::new(move |one: &Value, two: &Value| !test(one, two)))
            }
        }
    }

    /// Lift the predicate into a function value returning a boolean
    pub fn to_function(&self, name: &str) -> Function {
        let predicate = self.clone();
        Function::new(name, move |args: &[Value]| {
            let args: Vec<&Value> = args.iter().collect();
            Value::Boolean(predicate.call(&args))
        })
    }
}

fn nth<'a>(args: &[&'a Value], index: usize) -> &'a Value {
    args.get(index).copied().unwrap_or(&UNDEFINED)
}

impl<F> From<F> for Predicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    fn from(test: F) -> Self {
        Self::unary(test)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(_) => write!(f, "Predicate(unary)"),
            Self::Binary(_) => write!(f, "Predicate(binary)"),
        }
    }
}
