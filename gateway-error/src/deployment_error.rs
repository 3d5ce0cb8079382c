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

//! Deployment error types.

use thiserror::Error;

/// Errors raised while contributing providers to a resource descriptor.
///
/// All of them are fatal for the deployment in progress: the partially built
/// descriptor is expected to be discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeploymentError {
    /// No contributor is registered for the role/name pair
    #[error("No provider contributor found for role '{role}' and name '{name}'")]
    ContributorNotFound { role: String, name: String },

    /// A contributor with the same role/name pair is already registered
    #[error("Provider contributor for role '{role}' and name '{name}' is already registered")]
    DuplicateContributor { role: String, name: String },

    /// A contributor could not append its entries
    #[error("Provider '{provider}' failed to contribute: {reason}")]
    ContributionFailed { provider: String, reason: String },
}

impl DeploymentError {
    pub fn contributor_not_found(role: impl Into<String>, name: impl Into<String>) -> Self {
        DeploymentError::ContributorNotFound {
            role: role.into(),
            name: name.into(),
        }
    }

    pub fn duplicate_contributor(role: impl Into<String>, name: impl Into<String>) -> Self {
        DeploymentError::DuplicateContributor {
            role: role.into(),
            name: name.into(),
        }
    }

    pub fn contribution_failed(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        DeploymentError::ContributionFailed {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}
