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

use crate::descriptor::filter::FilterDescriptor;
use crate::descriptor::filter_param::FilterParamDescriptor;

/// Append-only builder for one gateway resource's filter chain.
///
/// A single instance is shared by the composite contributor and every child
/// contributor it delegates to; entries are appended strictly in provider
/// order.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceDescriptor {
    /// Creates a detached parameter entry. The caller fills it through the
    /// chainable `name`/`value` setters and hands it to a filter.
    fn create_filter_param(&self) -> FilterParamDescriptor;

    /// Appends `filter` at the end of the chain.
    fn add_filter(&mut self, filter: FilterDescriptor);
}

/// In-memory resource descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DefaultResourceDescriptor {
    role: String,
    pattern: String,
    filters: Vec<FilterDescriptor>,
}

impl DefaultResourceDescriptor {
    pub fn new(role: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            pattern: pattern.into(),
            filters: Vec::new(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn filters(&self) -> &[FilterDescriptor] {
        &self.filters
    }

    /// Filter names in chain order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.get_name()).collect()
    }
}

impl ResourceDescriptor for DefaultResourceDescriptor {
    fn create_filter_param(&self) -> FilterParamDescriptor {
        FilterParamDescriptor::new()
    }

    fn add_filter(&mut self, filter: FilterDescriptor) {
        self.filters.push(filter);
    }
}
