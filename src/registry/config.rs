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

//! Registry configuration options

use serde::{Deserialize, Serialize};

/// Configuration for how a registry is seeded and how it reports changes
///
/// Fields missing from a serialized form take their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Whether to seed the registry with the standard predicates
    pub standard_predicates: bool,

    /// Whether each definition is reported through `log::debug!`
    pub log_definitions: bool,
}

impl RegistryConfig {
    /// Create a new registry configuration with custom settings
    pub fn new(standard_predicates: bool, log_definitions: bool) -> Self {
        Self {
            standard_predicates,
            log_definitions,
        }
    }

    /// A registry with no predicates at all, for building a vocabulary from scratch
    pub fn empty() -> Self {
        Self {
            standard_predicates: false,
            log_definitions: true,
        }
    }

    /// Standard predicates, no definition logging
    pub fn quiet() -> Self {
        Self {
            standard_predicates: true,
            log_definitions: false,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            standard_predicates: true,
            log_definitions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let default = RegistryConfig::default();
        assert!(default.standard_predicates);
        assert!(default.log_definitions);

        assert!(!RegistryConfig::empty().standard_predicates);
        assert!(!RegistryConfig::quiet().log_definitions);
        assert_eq!(RegistryConfig::new(true, true), default);
    }

    #[test]
    fn test_deserialize_fills_missing_fields_from_default() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"standard_predicates": false}"#).unwrap();
        assert_eq!(config, RegistryConfig::empty());

        let quiet: RegistryConfig =
            serde_json::from_value(serde_json::to_value(RegistryConfig::quiet()).unwrap()).unwrap();
        assert_eq!(quiet, RegistryConfig::quiet());
    }
}
