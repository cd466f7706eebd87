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

//! Registry of named type predicates
//!
//! A [`TypeRegistry`] maps names to [`Predicate`]s. It starts out with the
//! standard set (see [`builtin`]) and grows through [`TypeRegistry::define`].
//! Every registry owns its mapping, so definitions made on one instance are
//! never visible on another.

/// Typed accessors for the standard predicate names
///
/// Expands inside an impl block that provides
/// `fn check(&self, name: &str, args: &[&Value]) -> bool`.
macro_rules! predicate_accessors {
    () => {
        /// `object`: object-like, not an array, not null
        pub fn object(&self, value: &Value) -> bool {
            self.check("object", &[value])
        }

        /// `func`: callable
        pub fn func(&self, value: &Value) -> bool {
            self.check("func", &[value])
        }

        /// `array`: a true array
        pub fn array(&self, value: &Value) -> bool {
            self.check("array", &[value])
        }

        /// `string`: textual
        pub fn string(&self, value: &Value) -> bool {
            self.check("string", &[value])
        }

        /// `number`: numeric and not NaN
        pub fn number(&self, value: &Value) -> bool {
            self.check("number", &[value])
        }

        /// `integer`: number with no fractional part
        pub fn integer(&self, value: &Value) -> bool {
            self.check("integer", &[value])
        }

        /// `decimal`: number with a fractional part
        pub fn decimal(&self, value: &Value) -> bool {
            self.check("decimal", &[value])
        }

        /// `boolean`: exactly true or false
        pub fn boolean(&self, value: &Value) -> bool {
            self.check("boolean", &[value])
        }

        /// `null`: exactly null
        pub fn null(&self, value: &Value) -> bool {
            self.check("null", &[value])
        }

        /// `undefined`: exactly undefined
        pub fn undefined(&self, value: &Value) -> bool {
            self.check("undefined", &[value])
        }

        /// `defined`: anything but undefined
        pub fn defined(&self, value: &Value) -> bool {
            self.check("defined", &[value])
        }

        /// `true`: exactly true
        pub fn is_true(&self, value: &Value) -> bool {
            self.check("true", &[value])
        }

        /// `false`: exactly false
        pub fn is_false(&self, value: &Value) -> bool {
            self.check("false", &[value])
        }

        /// `nan`: coerces to NaN
        pub fn nan(&self, value: &Value) -> bool {
            self.check("nan", &[value])
        }

        /// `nil`: null or undefined
        pub fn nil(&self, value: &Value) -> bool {
            self.check("nil", &[value])
        }

        /// `equal`: deep equality by value
        pub fn equal(&self, one: &Value, two: &Value) -> bool {
            self.check("equal", &[one, two])
        }
    };
}

pub(crate) use predicate_accessors;

pub mod builtin;
pub mod config;
pub mod global;
pub mod negation;
pub mod predicate;

pub use builtin::register_builtin_predicates;
pub use config::RegistryConfig;
pub use global::{default_registry, define, instance};
pub use negation::Negation;
pub use predicate::{BinaryTest, Predicate, UnaryTest};

use rustc_hash::FxHashMap;

use crate::error::{IsError, Result};
use crate::model::Value;

/// Name of the registration entry point; nothing may be defined under it
pub const RESERVED_NAME: &str = "define";

/// A mutable mapping from predicate name to predicate
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    predicates: FxHashMap<String, Predicate>,
    config: RegistryConfig,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding the standard predicates
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut registry = Self {
            predicates: FxHashMap::default(),
            config,
        };

        if registry.config.standard_predicates {
            register_builtin_predicates(&mut registry);
        }

        registry
    }

    /// The configuration this registry was created with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Define (or redefine) the predicate `name`
    ///
    /// The last definition under a name wins. Defining under
    /// [`RESERVED_NAME`] fails with [`IsError::ReservedName`] and leaves the
    /// registry untouched.
    pub fn define(&mut self, name: impl Into<String>, predicate: impl Into<Predicate>) -> Result<()> {
        let name = name.into();
        if name == RESERVED_NAME {
            log::warn!("Refusing to define a predicate named `{name}`");
            return Err(IsError::ReservedName { name });
        }

        let predicate = predicate.into();
        if self.config.log_definitions {
            log::debug!(
                "Defining predicate `{}` (arity {})",
                name,
                predicate.arity()
            );
        }
        self.predicates.insert(name, predicate);
        Ok(())
    }

    /// A fresh, independent registry seeded with the standard predicates
    ///
    /// Definitions made on `self` are not carried over, and definitions made
    /// on the new registry never reach `self`.
    pub fn instance(&self) -> TypeRegistry {
        log::debug!("Creating private type registry instance");
        Self::with_config(self.config.clone())
    }

    /// Look up a predicate by name
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    /// Whether a predicate is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered predicates
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether no predicate is registered
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate the predicate registered under `name`
    pub fn test(&self, name: &str, args: &[&Value]) -> Result<bool> {
        self.get(name)
            .map(|predicate| predicate.call(args))
            .ok_or_else(|| IsError::UnknownPredicate {
                name: name.to_string(),
            })
    }

    /// The registry itself, for `registry.a().number(..)`
    pub fn a(&self) -> &Self {
        self
    }

    /// The registry itself, for `registry.an().integer(..)`
    pub fn an(&self) -> &Self {
        self
    }

    /// The negation view
    pub fn not(&self) -> Negation<'_> {
        Negation::new(self)
    }

    /// Unregistered names read as `false`
    fn check(&self, name: &str, args: &[&Value]) -> bool {
        self.get(name).is_some_and(|predicate| predicate.call(args))
    }

    predicate_accessors!();
}
