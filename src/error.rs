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

//! Error types for predicate registration and lookup

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, IsError>;

/// Errors raised by a [`TypeRegistry`](crate::TypeRegistry)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsError {
    /// A predicate was defined under the registration entry point's own name
    #[error("Cannot redefine `{name}`: the name is reserved for predicate registration")]
    ReservedName {
        /// The rejected name
        name: String,
    },

    /// A predicate was looked up by a name nothing is registered under
    #[error("No predicate named `{name}` is defined")]
    UnknownPredicate {
        /// The requested name
        name: String,
    },
}
