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

//! Extension point for values owned by the embedding program

/// A value type contributed by the embedding program
///
/// Host objects take part in classification through their class name, so
/// a `Buffer` class classifies as `"buffer"` without any change to the
/// classifier. They compare by identity.
pub trait HostObject: Send + Sync {
    /// Runtime class name, e.g. `"Map"` or `"Buffer"`
    fn class_name(&self) -> &str;

    /// Whether the object can be invoked like a function
    fn is_callable(&self) -> bool {
        false
    }

    /// Numeric coercion of the object
    fn to_number(&self) -> f64 {
        f64::NAN
    }
}
