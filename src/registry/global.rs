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

//! Process-wide default registry
//!
//! Definitions made here are visible to every caller for the lifetime of the
//! process. Code that wants its own vocabulary should take an [`instance`]
//! instead.

use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard};

use super::TypeRegistry;
use super::predicate::Predicate;
use crate::error::Result;

/// Global default registry instance
static DEFAULT_REGISTRY: Lazy<RwLock<TypeRegistry>> =
    Lazy::new(|| RwLock::new(TypeRegistry::new()));

/// Read access to the default registry
///
/// Reads are recursive, so a predicate may consult the default registry while
/// the caller still holds a guard. Drop the guard before calling [`define`].
pub fn default_registry() -> RwLockReadGuard<'static, TypeRegistry> {
    DEFAULT_REGISTRY.read_recursive()
}

/// Define a predicate on the default registry
pub fn define(name: impl Into<String>, predicate: impl Into<Predicate>) -> Result<()> {
    DEFAULT_REGISTRY.write().define(name, predicate)
}

/// A fresh private registry, independent of the default one
pub fn instance() -> TypeRegistry {
    default_registry().instance()
}
