// Copyright 2023 The RocketMQ Rust Authors
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

//! Topology configuration model.
//!
//! A topology lists the providers deployed for one gateway resource and the
//! filter contributors available to the deployment registry. Provider
//! parameters keep their declared order; per-child parameters of a composite
//! provider are namespaced as `<ProviderName>.<ParamName>`.

use cheetah_string::CheetahString;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Role shared by every authorization provider.
pub const AUTHORIZATION_ROLE: &str = "authorization";

/// Name under which the composite authorization provider is registered.
pub const COMPOSITE_AUTHZ_NAME: &str = "CompositeAuthz";

/// Composite provider parameter holding the comma separated child names.
pub const COMPOSITE_PROVIDER_NAMES_PARAM: &str = "composite.provider.names";

/// Flat parameter map of one provider, in declaration order.
pub type RawParameterMap = IndexMap<String, String>;

/// A single `name = value` provider parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderParam {
    pub name: String,
    pub value: String,
}

impl ProviderParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One provider entry of a topology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub role: CheetahString,
    pub name: CheetahString,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub params: Vec<ProviderParam>,
}

fn default_enabled() -> bool {
    true
}

impl ProviderConfig {
    pub fn new(role: impl Into<CheetahString>, name: impl Into<CheetahString>) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
            enabled: true,
            params: Vec::new(),
        }
    }

    /// Builder-style parameter append.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(ProviderParam::new(name, value));
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Parameters as an ordered map. A repeated name keeps its first position
    /// and takes the last declared value.
    pub fn params_map(&self) -> RawParameterMap {
        self.params
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    }

    /// Value of the last parameter declared as `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Declares a filter contributor the deployment registry can resolve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorConfig {
    pub role: CheetahString,
    pub name: CheetahString,
    pub filter_class: String,
}

/// Providers deployed for one resource plus the available contributors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    #[serde(default)]
    pub contributors: Vec<ContributorConfig>,
}

impl TopologyConfig {
    /// Enabled providers in declaration order.
    pub fn enabled_providers(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.providers.iter().filter(|p| p.enabled)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use gateway_common::ParseConfigFile;

    use super::*;

    #[test]
    fn params_map_preserves_order_and_last_value() {
        let provider = ProviderConfig::new(AUTHORIZATION_ROLE, COMPOSITE_AUTHZ_NAME)
            .with_param("b", "1")
            .with_param("a", "2")
            .with_param("b", "3");

        let map = provider.params_map();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(map.get("b").map(String::as_str), Some("3"));
        assert_eq!(provider.param("b"), Some("3"));
        assert_eq!(provider.param("missing"), None);
    }

    #[test]
    fn enabled_providers_skips_disabled() {
        let topology = TopologyConfig {
            name: "sandbox".to_string(),
            providers: vec![
                ProviderConfig::new("authentication", "ShiroProvider").with_enabled(false),
                ProviderConfig::new(AUTHORIZATION_ROLE, COMPOSITE_AUTHZ_NAME),
            ],
            contributors: vec![],
        };
        let names: Vec<&str> = topology.enabled_providers().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![COMPOSITE_AUTHZ_NAME]);
    }

    #[test]
    fn topology_loads_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
name = "sandbox"

[[providers]]
role = "authorization"
name = "CompositeAuthz"
params = [
    {{ name = "composite.provider.names", value = "AclsAuthz, SomeOther" }},
    {{ name = "AclsAuthz.webhdfs.acl", value = "admin;*;*" }},
]

[[providers]]
role = "authentication"
name = "Anonymous"
enabled = false

[[contributors]]
role = "authorization"
name = "AclsAuthz"
filter_class = "AclsAuthorizationFilter"
"#
        )
        .unwrap();

        let topology: TopologyConfig = ParseConfigFile::parse_config_file(file.path()).unwrap();
        assert_eq!(topology.name, "sandbox");
        assert_eq!(topology.providers.len(), 2);
        let composite = &topology.providers[0];
        assert!(composite.enabled);
        assert_eq!(composite.param(COMPOSITE_PROVIDER_NAMES_PARAM), Some("AclsAuthz, SomeOther"));
        assert_eq!(composite.params[1].name, "AclsAuthz.webhdfs.acl");
        assert!(!topology.providers[1].enabled);
        assert_eq!(topology.contributors[0].filter_class, "AclsAuthorizationFilter");
    }
}
