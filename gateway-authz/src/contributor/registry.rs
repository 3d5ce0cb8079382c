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

//! Contributor registry.
//!
//! The registry is the lookup capability the composite contributor uses to
//! find its children. It is injected through the deployment context so any
//! contributor kind, the composite included, can be resolved by name.

use std::collections::HashMap;
use std::sync::Arc;

use cheetah_string::CheetahString;
use gateway_error::GatewayError;
use gateway_error::GatewayResult;
use tracing::debug;

use crate::composite::CompositeAuthzContributor;
use crate::config::ContributorConfig;
use crate::contributor::filter_contributor::FilterProviderContributor;
use crate::contributor::provider_contributor::ProviderDeploymentContributor;

/// Looks up provider contributors by role and name.
#[cfg_attr(test, mockall::automock)]
pub trait ContributorRegistry: Send + Sync {
    /// Returns the contributor registered for `role`/`name`.
    ///
    /// # Errors
    ///
    /// `DeploymentError::ContributorNotFound` when nothing is registered
    /// under that pair.
    fn resolve(&self, role: &str, name: &str) -> GatewayResult<Arc<dyn ProviderDeploymentContributor>>;
}

/// Map-backed registry keyed by `(role, name)`.
#[derive(Default)]
pub struct DefaultContributorRegistry {
    contributors: HashMap<(CheetahString, CheetahString), Arc<dyn ProviderDeploymentContributor>>,
}

impl DefaultContributorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the composite authorization contributor.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .contributors
            .insert(key_of(&CompositeAuthzContributor), Arc::new(CompositeAuthzContributor));
        registry
    }

    /// Registers `contributor`; a second contributor for the same role/name
    /// pair is rejected.
    pub fn register(&mut self, contributor: Arc<dyn ProviderDeploymentContributor>) -> GatewayResult<()> {
        let key = key_of(contributor.as_ref());
        if self.contributors.contains_key(&key) {
            return Err(GatewayError::duplicate_contributor(key.0.as_str(), key.1.as_str()));
        }
        debug!("registering provider contributor {}/{}", key.0, key.1);
        self.contributors.insert(key, contributor);
        Ok(())
    }

    pub fn with_contributor(mut self, contributor: Arc<dyn ProviderDeploymentContributor>) -> GatewayResult<Self> {
        self.register(contributor)?;
        Ok(self)
    }

    /// Registers one [`FilterProviderContributor`] per declaration.
    pub fn register_filter_contributors(&mut self, configs: &[ContributorConfig]) -> GatewayResult<()> {
        for config in configs {
            self.register(Arc::new(FilterProviderContributor::from(config)))?;
        }
        Ok(())
    }

    pub fn contains(&self, role: &str, name: &str) -> bool {
        self.contributors
            .contains_key(&(CheetahString::from(role), CheetahString::from(name)))
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }
}

impl ContributorRegistry for DefaultContributorRegistry {
    fn resolve(&self, role: &str, name: &str) -> GatewayResult<Arc<dyn ProviderDeploymentContributor>> {
        self.contributors
            .get(&(CheetahString::from(role), CheetahString::from(name)))
            .cloned()
            .ok_or_else(|| GatewayError::contributor_not_found(role, name))
    }
}

fn key_of(contributor: &dyn ProviderDeploymentContributor) -> (CheetahString, CheetahString) {
    (
        CheetahString::from(contributor.role()),
        CheetahString::from(contributor.name()),
    )
}
