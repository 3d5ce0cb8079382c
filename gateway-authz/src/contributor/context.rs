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

use std::fmt;
use std::sync::Arc;

use gateway_error::GatewayResult;
use tracing::error;

use crate::contributor::provider_contributor::ProviderDeploymentContributor;
use crate::contributor::registry::ContributorRegistry;

/// State shared by every contributor during one deployment.
#[derive(Clone)]
pub struct DeploymentContext {
    topology_name: String,
    registry: Arc<dyn ContributorRegistry>,
}

impl DeploymentContext {
    pub fn new(topology_name: impl Into<String>, registry: Arc<dyn ContributorRegistry>) -> Self {
        Self {
            topology_name: topology_name.into(),
            registry,
        }
    }

    pub fn topology_name(&self) -> &str {
        &self.topology_name
    }

    /// Resolves the contributor registered for `role`/`name`.
    ///
    /// An unknown name is a configuration error and is returned as such.
    pub fn provider_contributor(&self, role: &str, name: &str) -> GatewayResult<Arc<dyn ProviderDeploymentContributor>> {
        self.registry.resolve(role, name).inspect_err(|e| {
            error!("topology {}: {}", self.topology_name, e);
        })
    }
}

impl fmt::Debug for DeploymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentContext")
            .field("topology_name", &self.topology_name)
            .finish_non_exhaustive()
    }
}
