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

//! Composite authorization provider for the gateway filter pipeline.
//!
//! At deployment time the composite provider parses its ordered list of child
//! authorization providers, routes its flat parameter map to each child by
//! name prefix and lets every child append its own filter to the shared
//! resource descriptor.

pub mod bootstrap;
pub mod composite;
pub mod config;
pub mod contributor;
pub mod deployment;
pub mod descriptor;

pub use bootstrap::build_descriptor;
pub use bootstrap::DescriptorOptions;
pub use composite::parse_provider_names;
pub use composite::route_provider_params;
pub use composite::CompositeAuthzContributor;
pub use composite::ProviderName;
pub use composite::ProviderNameList;
pub use composite::RoutedParameter;
pub use config::ProviderConfig;
pub use config::RawParameterMap;
pub use config::TopologyConfig;
pub use contributor::ContributorRegistry;
pub use contributor::DefaultContributorRegistry;
pub use contributor::DeploymentContext;
pub use contributor::FilterProviderContributor;
pub use contributor::ProviderDeploymentContributor;
pub use deployment::ProviderDeployer;
pub use descriptor::DefaultResourceDescriptor;
pub use descriptor::FilterDescriptor;
pub use descriptor::FilterParamDescriptor;
pub use descriptor::ResourceDescriptor;
