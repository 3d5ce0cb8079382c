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

//! Provider deployment contributors.
//!
//! A contributor translates one provider's configuration into filter entries
//! of a resource descriptor. Contributors are looked up by `(role, name)`
//! through a [`ContributorRegistry`] carried by the [`DeploymentContext`].

pub mod context;
pub mod filter_contributor;
pub mod provider_contributor;
pub mod registry;

pub use context::DeploymentContext;
pub use filter_contributor::FilterProviderContributor;
pub use provider_contributor::ProviderDeploymentContributor;
pub use registry::ContributorRegistry;
pub use registry::DefaultContributorRegistry;
