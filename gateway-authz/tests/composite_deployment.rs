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

use std::path::PathBuf;
use std::sync::Arc;

use gateway_authz::build_descriptor;
use gateway_authz::config::AUTHORIZATION_ROLE;
use gateway_authz::config::COMPOSITE_AUTHZ_NAME;
use gateway_authz::config::COMPOSITE_PROVIDER_NAMES_PARAM;
use gateway_authz::CompositeAuthzContributor;
use gateway_authz::DefaultContributorRegistry;
use gateway_authz::DefaultResourceDescriptor;
use gateway_authz::DeploymentContext;
use gateway_authz::DescriptorOptions;
use gateway_authz::FilterProviderContributor;
use gateway_authz::ProviderConfig;
use gateway_authz::ProviderDeployer;
use gateway_authz::ProviderDeploymentContributor;
use gateway_authz::TopologyConfig;
use gateway_common::ParseConfigFile;
use gateway_error::DeploymentError;

fn registry(children: &[&str]) -> DefaultContributorRegistry {
    let mut registry = DefaultContributorRegistry::with_defaults();
    for child in children {
        registry
            .register(Arc::new(FilterProviderContributor::new(
                AUTHORIZATION_ROLE,
                *child,
                format!("{child}Filter"),
            )))
            .unwrap();
    }
    registry
}

fn composite(names: &str) -> ProviderConfig {
    ProviderConfig::new(AUTHORIZATION_ROLE, COMPOSITE_AUTHZ_NAME).with_param(COMPOSITE_PROVIDER_NAMES_PARAM, names)
}

#[test]
fn composite_contributes_children_in_order_with_routed_params() {
    let context = DeploymentContext::new("sandbox", Arc::new(registry(&["A", "B"])));
    let provider = composite("A, B")
        .with_param("A.acl", "admin;*;*")
        .with_param("B.acl", "guest;*;*")
        .with_param("AB.acl", "nobody");
    let mut resource = DefaultResourceDescriptor::new("WEBHDFS", "/webhdfs/**");

    CompositeAuthzContributor
        .contribute_filter(&context, &provider, &mut resource, Vec::new())
        .unwrap();

    assert_eq!(resource.filter_names(), vec!["A", "B"]);
    let a = &resource.filters()[0];
    assert_eq!(a.get_impl_class(), "AFilter");
    assert_eq!(a.get_params().len(), 1);
    assert_eq!(a.get_param("acl"), Some("admin;*;*"));
    let b = &resource.filters()[1];
    assert_eq!(b.get_params().len(), 1);
    assert_eq!(b.get_param("acl"), Some("guest;*;*"));
}

#[test]
fn unresolvable_child_aborts_and_keeps_earlier_entries() {
    let context = DeploymentContext::new("sandbox", Arc::new(registry(&["A", "B"])));
    let mut resource = DefaultResourceDescriptor::default();

    let err = CompositeAuthzContributor
        .contribute_filter(&context, &composite("A,Nope,B"), &mut resource, Vec::new())
        .unwrap_err();

    assert_eq!(
        err.as_deployment(),
        Some(&DeploymentError::contributor_not_found(AUTHORIZATION_ROLE, "Nope"))
    );
    assert_eq!(resource.filter_names(), vec!["A"]);
}

#[test]
fn composite_listing_itself_fails_after_earlier_children() {
    let context = DeploymentContext::new("sandbox", Arc::new(registry(&["A"])));
    let mut resource = DefaultResourceDescriptor::default();

    let err = CompositeAuthzContributor
        .contribute_filter(
            &context,
            &composite("A, CompositeAuthz").with_param("CompositeAuthz.composite.provider.names", "A"),
            &mut resource,
            Vec::new(),
        )
        .unwrap_err();

    assert!(matches!(
        err.as_deployment(),
        Some(DeploymentError::ContributionFailed { .. })
    ));
    assert_eq!(resource.filter_names(), vec!["A"]);
}

fn sample_topology() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("conf").join("topology.toml")
}

#[test]
fn sample_topology_deploys_end_to_end() {
    let options = DescriptorOptions {
        resource_role: "WEBHDFS".to_string(),
        pattern: "/webhdfs/**".to_string(),
        role: None,
    };
    let resource = build_descriptor(sample_topology(), &options).unwrap();

    assert_eq!(resource.filter_names(), vec!["Anonymous", "AclsAuthz", "PathAclsAuthz"]);
    let acls = &resource.filters()[1];
    assert_eq!(acls.get_impl_class(), "AclsAuthorizationFilter");
    assert_eq!(acls.get_param("webhdfs.acl"), Some("admin;*;*"));
    assert_eq!(acls.get_param("webhdfs.acl.mode"), Some("OR"));
    assert_eq!(acls.get_params().len(), 2);
    let path_acls = &resource.filters()[2];
    assert_eq!(path_acls.get_params().len(), 1);
    assert_eq!(path_acls.get_param("webhdfs.rule"), Some("/tmp/**;*;*"));

    let json = serde_json::to_value(&resource).unwrap();
    assert_eq!(json["filters"][1]["impl"], "AclsAuthorizationFilter");
}

#[test]
fn sample_topology_deploys_enabled_providers_only() {
    let topology: TopologyConfig = ParseConfigFile::parse_config_file(sample_topology()).unwrap();

    let mut registry = DefaultContributorRegistry::with_defaults();
    registry.register_filter_contributors(&topology.contributors).unwrap();
    let deployer = ProviderDeployer::new(DeploymentContext::new(topology.name.clone(), Arc::new(registry)));
    let mut resource = DefaultResourceDescriptor::default();

    assert_eq!(deployer.deploy(&topology, &mut resource).unwrap(), 2);
    assert_eq!(topology.providers.len(), 3);
}
