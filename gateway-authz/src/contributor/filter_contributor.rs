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

use cheetah_string::CheetahString;
use gateway_error::GatewayResult;
use tracing::info;

use crate::config::ContributorConfig;
use crate::config::ProviderConfig;
use crate::contributor::context::DeploymentContext;
use crate::contributor::provider_contributor::ProviderDeploymentContributor;
use crate::descriptor::FilterDescriptor;
use crate::descriptor::FilterParamDescriptor;
use crate::descriptor::ResourceDescriptor;

/// Contributor that appends exactly one filter entry per provider.
///
/// The entry carries the contributor's role and name, the configured filter
/// implementation and the parameters handed to
/// [`contribute_filter`](ProviderDeploymentContributor::contribute_filter).
#[derive(Clone, Debug)]
pub struct FilterProviderContributor {
    role: CheetahString,
    name: CheetahString,
    filter_class: String,
}

impl FilterProviderContributor {
    pub fn new(
        role: impl Into<CheetahString>,
        name: impl Into<CheetahString>,
        filter_class: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
            filter_class: filter_class.into(),
        }
    }

    pub fn filter_class(&self) -> &str {
        &self.filter_class
    }
}

impl From<&ContributorConfig> for FilterProviderContributor {
    fn from(config: &ContributorConfig) -> Self {
        Self::new(config.role.clone(), config.name.clone(), config.filter_class.clone())
    }
}

impl ProviderDeploymentContributor for FilterProviderContributor {
    fn role(&self) -> &str {
        self.role.as_str()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn contribute_filter(
        &self,
        context: &DeploymentContext,
        _provider: &ProviderConfig,
        resource: &mut dyn ResourceDescriptor,
        params: Vec<FilterParamDescriptor>,
    ) -> GatewayResult<()> {
        info!(
            "topology {}: adding filter {} ({}) with {} params",
            context.topology_name(),
            self.name,
            self.filter_class,
            params.len()
        );
        resource.add_filter(
            FilterDescriptor::new()
                .name(self.name.as_str())
                .role(self.role.as_str())
                .impl_class(self.filter_class.as_str())
                .params(params),
        );
        Ok(())
    }
}
