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

//! Provider deployment contributor abstraction.

use gateway_error::GatewayResult;

use crate::config::ProviderConfig;
use crate::contributor::context::DeploymentContext;
use crate::descriptor::FilterParamDescriptor;
use crate::descriptor::ResourceDescriptor;

/// Deployment-time capability of one provider kind.
///
/// Implementations are registered once and shared across deployments, so they
/// must not keep per-deployment state. The lifecycle hooks run in this order
/// for every provider of a topology:
///
/// 1. [`initialize_contribution`](Self::initialize_contribution)
/// 2. [`contribute_provider`](Self::contribute_provider)
/// 3. [`contribute_filter`](Self::contribute_filter)
/// 4. [`finalize_contribution`](Self::finalize_contribution)
///
/// # Example
///
/// ```rust,ignore
/// struct HeaderCheck;
///
/// impl ProviderDeploymentContributor for HeaderCheck {
///     fn role(&self) -> &str {
///         "authorization"
///     }
///
///     fn name(&self) -> &str {
///         "HeaderCheck"
///     }
///
///     fn contribute_filter(
///         &self,
///         _context: &DeploymentContext,
///         _provider: &ProviderConfig,
///         resource: &mut dyn ResourceDescriptor,
///         params: Vec<FilterParamDescriptor>,
///     ) -> GatewayResult<()> {
///         resource.add_filter(FilterDescriptor::new().name(self.name()).params(params));
///         Ok(())
///     }
/// }
/// ```
pub trait ProviderDeploymentContributor: Send + Sync {
    /// Provider role, e.g. `authorization`.
    fn role(&self) -> &str;

    /// Provider name, unique within its role.
    fn name(&self) -> &str;

    fn initialize_contribution(&self, _context: &DeploymentContext) -> GatewayResult<()> {
        Ok(())
    }

    fn contribute_provider(&self, _context: &DeploymentContext, _provider: &ProviderConfig) -> GatewayResult<()> {
        Ok(())
    }

    /// Appends this provider's filter entries to `resource`.
    ///
    /// `params` are the parameters meant for this provider, already created
    /// through [`ResourceDescriptor::create_filter_param`].
    fn contribute_filter(
        &self,
        context: &DeploymentContext,
        provider: &ProviderConfig,
        resource: &mut dyn ResourceDescriptor,
        params: Vec<FilterParamDescriptor>,
    ) -> GatewayResult<()>;

    fn finalize_contribution(&self, _context: &DeploymentContext) -> GatewayResult<()> {
        Ok(())
    }
}
