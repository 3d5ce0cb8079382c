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

//! Composite authorization contributor.

use gateway_error::GatewayError;
use gateway_error::GatewayResult;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::composite::name_list::ProviderNameList;
use crate::composite::param_router::into_filter_params;
use crate::composite::param_router::route_provider_params;
use crate::config::ProviderConfig;
use crate::config::ProviderParam;
use crate::config::AUTHORIZATION_ROLE;
use crate::config::COMPOSITE_AUTHZ_NAME;
use crate::config::COMPOSITE_PROVIDER_NAMES_PARAM;
use crate::contributor::DeploymentContext;
use crate::contributor::ProviderDeploymentContributor;
use crate::descriptor::FilterParamDescriptor;
use crate::descriptor::ResourceDescriptor;

/// Authorization provider that delegates to an ordered list of child
/// authorization providers.
///
/// For every name in `composite.provider.names`, in order, the child
/// contributor is resolved from the deployment registry and asked to
/// contribute its filter with only the parameters prefixed by its name.
/// Resolution or contribution failures stop the walk immediately; entries
/// already appended by earlier children are left in place.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompositeAuthzContributor;

impl CompositeAuthzContributor {
    pub fn new() -> Self {
        Self
    }

    /// Child names configured on `provider`.
    pub fn provider_names(provider: &ProviderConfig) -> ProviderNameList {
        ProviderNameList::parse(provider.param(COMPOSITE_PROVIDER_NAMES_PARAM))
    }
}

impl ProviderDeploymentContributor for CompositeAuthzContributor {
    fn role(&self) -> &str {
        AUTHORIZATION_ROLE
    }

    fn name(&self) -> &str {
        COMPOSITE_AUTHZ_NAME
    }

    fn contribute_filter(
        &self,
        context: &DeploymentContext,
        provider: &ProviderConfig,
        resource: &mut dyn ResourceDescriptor,
        _params: Vec<FilterParamDescriptor>,
    ) -> GatewayResult<()> {
        let names = Self::provider_names(provider);
        if names.is_empty() {
            warn!(
                "topology {}: composite provider {} lists no child providers in '{}'",
                context.topology_name(),
                provider.name,
                COMPOSITE_PROVIDER_NAMES_PARAM
            );
            return Ok(());
        }

        let raw = provider.params_map();
        for name in &names {
            // Nesting composites is not supported; a self-listing is a configuration error.
            if name.as_str() == self.name() {
                return Err(GatewayError::contribution_failed(
                    self.name(),
                    "composite provider cannot list itself as a child provider",
                ));
            }
            let contributor = context.provider_contributor(AUTHORIZATION_ROLE, name.as_str())?;

            let routed = route_provider_params(&raw, name);
            debug!(
                "topology {}: routing {} params to child provider {}",
                context.topology_name(),
                routed.len(),
                name
            );
            let child = ProviderConfig {
                role: AUTHORIZATION_ROLE.into(),
                name: name.as_cheetah_string().clone(),
                enabled: true,
                params: routed.iter().map(ProviderParam::from).collect(),
            };
            let params = into_filter_params(&*resource, routed);
            contributor.contribute_filter(context, &child, resource, params)?;
        }
        info!(
            "topology {}: composite provider contributed [{}]",
            context.topology_name(),
            names
        );
        Ok(())
    }
}
