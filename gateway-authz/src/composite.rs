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

//! Composite authorization provider.
//!
//! The composite provider delegates to an ordered list of child
//! authorization providers named in its `composite.provider.names`
//! parameter. Child parameters share the composite's flat parameter map and
//! are namespaced as `<ProviderName>.<ParamName>`:
//!
//! ```text
//! composite.provider.names = AclsAuthz, SomeOther
//! AclsAuthz.webhdfs.acl    = admin;*;*     -> AclsAuthz gets webhdfs.acl
//! SomeOther.webhdfs.acl    = guest;*;*     -> SomeOther gets webhdfs.acl
//! ```

pub mod composite_contributor;
pub mod name_list;
pub mod param_router;

pub use composite_contributor::CompositeAuthzContributor;
pub use name_list::parse_provider_names;
pub use name_list::ProviderName;
pub use name_list::ProviderNameList;
pub use param_router::provider_specific_params;
pub use param_router::route_provider_params;
pub use param_router::RoutedParameter;
