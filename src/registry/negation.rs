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

//! Negated view over a registry

use crate::error::Result;
use crate::model::Value;

use super::TypeRegistry;
use super::predicate::Predicate;

/// Every predicate of a registry with its result inverted
///
/// The view borrows the registry, so a predicate defined after the view was
/// taken is visible through it and `not.p(v) == !p(v)` holds at all times.
#[derive(Debug, Clone, Copy)]
pub struct Negation<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> Negation<'a> {
    pub(crate) fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// The same view, for `not().a().number(..)`
    pub fn a(self) -> Self {
        self
    }

    /// The same view, for `not().an().object(..)`
    pub fn an(self) -> Self {
        self
    }

    /// The registry this view negates
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// The complement of the predicate registered under `name`
    pub fn get(&self, name: &str) -> Option<Predicate> {
        self.registry.get(name).map(Predicate::negate)
    }

    /// Evaluate the complement of the predicate registered under `name`
    pub fn test(&self, name: &str, args: &[&Value]) -> Result<bool> {
        self.registry.test(name, args).map(|result| !result)
    }

    /// Unregistered names read as `false` here as well as in the registry
    fn check(&self, name: &str, args: &[&Value]) -> bool {
        self.registry
            .get(name)
            .is_some_and(|predicate| !predicate.call(args))
    }

    super::predicate_accessors!();
}
