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

//! Prefix based routing of composite parameters to child providers.
//!
//! A parameter belongs to provider `P` iff its key starts with `P.`. The
//! trailing dot is part of the match, so `AB.x` never reaches provider `A`.

use crate::composite::name_list::ProviderName;
use crate::config::ProviderParam;
use crate::config::RawParameterMap;
use crate::descriptor::FilterParamDescriptor;
use crate::descriptor::ResourceDescriptor;

/// A parameter addressed to one child provider, with its prefix removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutedParameter {
    pub key: String,
    pub value: String,
}

impl From<&RoutedParameter> for ProviderParam {
    fn from(param: &RoutedParameter) -> Self {
        ProviderParam::new(param.key.clone(), param.value.clone())
    }
}

/// Selects the entries of `raw` addressed to `name`, in map order, stripping
/// the `<name>.` prefix exactly once.
pub fn route_provider_params(raw: &RawParameterMap, name: &ProviderName) -> Vec<RoutedParameter> {
    let prefix = name.param_prefix();
    raw.iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix.as_str()).map(|stripped| RoutedParameter {
                key: stripped.to_string(),
                value: value.clone(),
            })
        })
        .collect()
}

/// Turns routed parameters into descriptor parameter entries, creating one
/// entry per parameter through `resource`.
pub fn into_filter_params(
    resource: &dyn ResourceDescriptor,
    routed: impl IntoIterator<Item = RoutedParameter>,
) -> Vec<FilterParamDescriptor> {
    routed
        .into_iter()
        .map(|param| resource.create_filter_param().name(param.key).value(param.value))
        .collect()
}

/// [`route_provider_params`] followed by [`into_filter_params`].
pub fn provider_specific_params(
    resource: &dyn ResourceDescriptor,
    raw: &RawParameterMap,
    name: &ProviderName,
) -> Vec<FilterParamDescriptor> {
    into_filter_params(resource, route_provider_params(raw, name))
}
