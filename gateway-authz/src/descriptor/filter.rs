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

use serde::Serialize;

use crate::descriptor::filter_param::FilterParamDescriptor;

/// One filter entry of a resource's chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    name: String,
    role: String,
    #[serde(rename = "impl")]
    impl_class: String,
    params: Vec<FilterParamDescriptor>,
}

impl FilterDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn impl_class(mut self, impl_class: impl Into<String>) -> Self {
        self.impl_class = impl_class.into();
        self
    }

    pub fn param(mut self, param: FilterParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Appends `params` after any parameter already present.
    pub fn params(mut self, params: impl IntoIterator<Item = FilterParamDescriptor>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_role(&self) -> &str {
        &self.role
    }

    pub fn get_impl_class(&self) -> &str {
        &self.impl_class
    }

    pub fn get_params(&self) -> &[FilterParamDescriptor] {
        &self.params
    }

    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|p| p.get_name() == name).map(|p| p.get_value())
    }
}
