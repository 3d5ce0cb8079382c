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

//! # Gateway Error Handling
//!
//! Unified error type shared by the gateway authorization crates.
//!
//! ```rust
//! use gateway_error::GatewayError;
//! use gateway_error::GatewayResult;
//!
//! fn lookup(name: &str) -> GatewayResult<()> {
//!     if name.is_empty() {
//!         return Err(GatewayError::contributor_not_found("authorization", name));
//!     }
//!     Ok(())
//! }
//! # lookup("AclsAuthz").unwrap();
//! ```

pub mod deployment_error;
pub mod unified;

pub use deployment_error::DeploymentError;
pub use unified::GatewayError;
pub use unified::GatewayResult;
