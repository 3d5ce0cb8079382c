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

//! Builds a resource descriptor from a topology file.

use std::path::Path;
use std::sync::Arc;

use gateway_common::ParseConfigFile;
use gateway_error::GatewayResult;
use tracing::info;

use crate::config::TopologyConfig;
use crate::contributor::DefaultContributorRegistry;
use crate::contributor::DeploymentContext;
use crate::deployment::ProviderDeployer;
use crate::descriptor::DefaultResourceDescriptor;

/// What to build the descriptor for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptorOptions {
    pub resource_role: String,
    pub pattern: String,
    /// Only providers of this role are deployed when set
    pub role: Option<String>,
}

impl Default for DescriptorOptions {
    fn default() -> Self {
        Self {
            resource_role: "GATEWAY".to_string(),
            pattern: "/**".to_string(),
            role: None,
        }
    }
}

/// Loads the topology at `config_file`, registers the composite contributor
/// plus every declared filter contributor, and deploys the enabled providers
/// into a fresh descriptor.
pub fn build_descriptor(
    config_file: impl AsRef<Path>,
    options: &DescriptorOptions,
) -> GatewayResult<DefaultResourceDescriptor> {
    let config_file = config_file.as_ref();
    info!("Loading topology from file: {:?}", config_file);
    let topology: TopologyConfig = ParseConfigFile::parse_config_file(config_file)?;

    let mut registry = DefaultContributorRegistry::with_defaults();
    registry.register_filter_contributors(&topology.contributors)?;
    info!(
        "===== Topology {}: {} providers, {} contributors =====",
        topology.name,
        topology.providers.len(),
        registry.len()
    );

    let deployer = ProviderDeployer::new(DeploymentContext::new(topology.name.clone(), Arc::new(registry)));
    let mut resource = DefaultResourceDescriptor::new(options.resource_role.as_str(), options.pattern.as_str());
    match options.role.as_deref() {
        Some(role) => deployer.deploy_role(&topology, role, &mut resource)?,
        None => deployer.deploy(&topology, &mut resource)?,
    };
    Ok(resource)
}

/// Pretty JSON rendering of `resource`.
pub fn render_descriptor(resource: &DefaultResourceDescriptor) -> GatewayResult<String> {
    Ok(serde_json::to_string_pretty(resource)?)
}
