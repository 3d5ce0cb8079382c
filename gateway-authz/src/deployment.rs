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

//! Deployment of a topology's providers into a resource descriptor.

use std::sync::Arc;

use gateway_error::GatewayResult;
use tracing::info;

use crate::config::ProviderConfig;
use crate::config::TopologyConfig;
use crate::contributor::DeploymentContext;
use crate::contributor::ProviderDeploymentContributor;
use crate::descriptor::ResourceDescriptor;

/// Walks the enabled providers of a topology in declaration order and runs
/// each contributor's lifecycle against one resource descriptor.
///
/// Every phase completes for all providers before the next one starts:
/// initialize, provider, filter, finalize. The first error aborts the
/// deployment; nothing already appended to the descriptor is undone.
pub struct ProviderDeployer {
    context: DeploymentContext,
}

impl ProviderDeployer {
    pub fn new(context: DeploymentContext) -> Self {
        Self { context }
    }

    /// Deploys every enabled provider. Returns the number of providers
    /// deployed.
    pub fn deploy(&self, topology: &TopologyConfig, resource: &mut dyn ResourceDescriptor) -> GatewayResult<usize> {
        self.deploy_matching(topology, resource, |_| true)
    }

    /// Deploys only the enabled providers of `role`.
    pub fn deploy_role(
        &self,
        topology: &TopologyConfig,
        role: &str,
        resource: &mut dyn ResourceDescriptor,
    ) -> GatewayResult<usize> {
        self.deploy_matching(topology, resource, |p| p.role.as_str() == role)
    }

    fn deploy_matching<F>(
        &self,
        topology: &TopologyConfig,
        resource: &mut dyn ResourceDescriptor,
        filter: F,
    ) -> GatewayResult<usize>
    where
        F: Fn(&ProviderConfig) -> bool,
    {
        let providers = topology
            .enabled_providers()
            .filter(|p| filter(p))
            .map(|p| {
                self.context
                    .provider_contributor(p.role.as_str(), p.name.as_str())
                    .map(|c| (p, c))
            })
            .collect::<GatewayResult<Vec<(&ProviderConfig, Arc<dyn ProviderDeploymentContributor>)>>>()?;

        for (_, contributor) in &providers {
            contributor.initialize_contribution(&self.context)?;
        }
        for (provider, contributor) in &providers {
            contributor.contribute_provider(&self.context, provider)?;
        }
        for (provider, contributor) in &providers {
            let params = provider
                .params
                .iter()
                .map(|p| resource.create_filter_param().name(p.name.as_str()).value(p.value.as_str()))
                .collect();
            contributor.contribute_filter(&self.context, provider, resource, params)?;
        }
        for (_, contributor) in &providers {
            contributor.finalize_contribution(&self.context)?;
        }

        info!(
            "topology {}: deployed {} providers",
            self.context.topology_name(),
            providers.len()
        );
        Ok(providers.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use gateway_error::DeploymentError;
    use gateway_error::GatewayError;

    use super::*;
    use crate::config::AUTHORIZATION_ROLE;
    use crate::contributor::DefaultContributorRegistry;
    use crate::contributor::FilterProviderContributor;
    use crate::descriptor::DefaultResourceDescriptor;
    use crate::descriptor::FilterParamDescriptor;

    struct LifecycleContributor {
        role: &'static str,
        name: &'static str,
        events: Arc<Mutex<Vec<String>>>,
    }

    impl LifecycleContributor {
        fn record(&self, phase: &str) {
            self.events.lock().unwrap().push(format!("{}:{}", phase, self.name));
        }
    }

    impl ProviderDeploymentContributor for LifecycleContributor {
        fn role(&self) -> &str {
            self.role
        }

        fn name(&self) -> &str {
            self.name
        }

        fn initialize_contribution(&self, _context: &DeploymentContext) -> GatewayResult<()> {
            self.record("init");
            Ok(())
        }

        fn contribute_provider(&self, _context: &DeploymentContext, _provider: &ProviderConfig) -> GatewayResult<()> {
            self.record("provider");
            Ok(())
        }

        fn contribute_filter(
            &self,
            _context: &DeploymentContext,
            _provider: &ProviderConfig,
            _resource: &mut dyn ResourceDescriptor,
            _params: Vec<FilterParamDescriptor>,
        ) -> GatewayResult<()> {
            self.record("filter");
            Ok(())
        }

        fn finalize_contribution(&self, _context: &DeploymentContext) -> GatewayResult<()> {
            self.record("finalize");
            Ok(())
        }
    }

    fn deployer(registry: DefaultContributorRegistry) -> ProviderDeployer {
        ProviderDeployer::new(DeploymentContext::new("sandbox", Arc::new(registry)))
    }

    #[test]
    fn lifecycle_phases_run_for_all_providers_in_turn() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let registry = DefaultContributorRegistry::new()
            .with_contributor(Arc::new(LifecycleContributor {
                role: "authentication",
                name: "Anonymous",
                events: events.clone(),
            }))
            .unwrap()
            .with_contributor(Arc::new(LifecycleContributor {
                role: AUTHORIZATION_ROLE,
                name: "AclsAuthz",
                events: events.clone(),
            }))
            .unwrap();
        let topology = TopologyConfig {
            name: "sandbox".to_string(),
            providers: vec![
                ProviderConfig::new("authentication", "Anonymous"),
                ProviderConfig::new(AUTHORIZATION_ROLE, "AclsAuthz"),
            ],
            contributors: vec![],
        };
        let mut resource = DefaultResourceDescriptor::default();

        let deployed = deployer(registry).deploy(&topology, &mut resource).unwrap();

        assert_eq!(deployed, 2);
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "init:Anonymous",
                "init:AclsAuthz",
                "provider:Anonymous",
                "provider:AclsAuthz",
                "filter:Anonymous",
                "filter:AclsAuthz",
                "finalize:Anonymous",
                "finalize:AclsAuthz",
            ]
        );
    }

    #[test]
    fn provider_params_reach_the_filter() {
        let registry = DefaultContributorRegistry::new()
            .with_contributor(Arc::new(FilterProviderContributor::new(
                AUTHORIZATION_ROLE,
                "AclsAuthz",
                "AclsAuthorizationFilter",
            )))
            .unwrap();
        let topology = TopologyConfig {
            name: "sandbox".to_string(),
            providers: vec![
                ProviderConfig::new(AUTHORIZATION_ROLE, "AclsAuthz").with_param("webhdfs.acl", "admin;*;*"),
                ProviderConfig::new(AUTHORIZATION_ROLE, "Disabled").with_enabled(false),
            ],
            contributors: vec![],
        };
        let mut resource = DefaultResourceDescriptor::default();

        assert_eq!(deployer(registry).deploy(&topology, &mut resource).unwrap(), 1);
        assert_eq!(resource.filters()[0].get_param("webhdfs.acl"), Some("admin;*;*"));
    }

    #[test]
    fn unknown_provider_fails_before_any_contribution() {
        let registry = DefaultContributorRegistry::new()
            .with_contributor(Arc::new(FilterProviderContributor::new(
                AUTHORIZATION_ROLE,
                "AclsAuthz",
                "AclsAuthorizationFilter",
            )))
            .unwrap();
        let topology = TopologyConfig {
            name: "sandbox".to_string(),
            providers: vec![
                ProviderConfig::new(AUTHORIZATION_ROLE, "AclsAuthz"),
                ProviderConfig::new(AUTHORIZATION_ROLE, "Unknown"),
            ],
            contributors: vec![],
        };
        let mut resource = DefaultResourceDescriptor::default();

        let err = deployer(registry).deploy(&topology, &mut resource).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Deployment(DeploymentError::ContributorNotFound { ref name, .. }) if name == "Unknown"
        ));
        assert!(resource.filters().is_empty());
    }

    #[test]
    fn deploy_role_filters_providers() {
        let registry = DefaultContributorRegistry::new()
            .with_contributor(Arc::new(FilterProviderContributor::new(
                AUTHORIZATION_ROLE,
                "AclsAuthz",
                "AclsAuthorizationFilter",
            )))
            .unwrap();
        let topology = TopologyConfig {
            name: "sandbox".to_string(),
            providers: vec![
                ProviderConfig::new("authentication", "NotRegistered"),
                ProviderConfig::new(AUTHORIZATION_ROLE, "AclsAuthz"),
            ],
            contributors: vec![],
        };
        let mut resource = DefaultResourceDescriptor::default();

        let deployed = deployer(registry)
            .deploy_role(&topology, AUTHORIZATION_ROLE, &mut resource)
            .unwrap();
        assert_eq!(deployed, 1);
        assert_eq!(resource.filter_names(), vec!["AclsAuthz"]);
    }
}
