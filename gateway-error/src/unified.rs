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

//! Unified error system for the gateway authorization crates.
//!
//! Every fallible operation returns [`GatewayResult`]. Errors are grouped by
//! category; deployment failures carry their own [`DeploymentError`] so
//! callers can match on them without string inspection.

use thiserror::Error;

pub use crate::deployment_error::DeploymentError;

/// Main error type for all gateway authorization operations
#[derive(Debug, Error)]
pub enum GatewayError {
    // ============================================================================
    // Deployment Errors
    // ============================================================================
    /// Provider deployment failures (unknown contributor, contributor failure)
    #[error(transparent)]
    Deployment(#[from] DeploymentError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration parsing failed
    #[error("Configuration parse error for '{key}': {reason}")]
    ConfigParseFailed { key: &'static str, reason: String },

    /// Invalid configuration value
    #[error("Invalid configuration for '{key}': value='{value}', reason={reason}")]
    ConfigInvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    // ============================================================================
    // System Errors
    // ============================================================================
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl GatewayError {
    /// Create a contributor not found error
    #[inline]
    pub fn contributor_not_found(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Deployment(DeploymentError::contributor_not_found(role, name))
    }

    /// Create a duplicate contributor error
    #[inline]
    pub fn duplicate_contributor(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Deployment(DeploymentError::duplicate_contributor(role, name))
    }

    /// Create a contribution failed error
    #[inline]
    pub fn contribution_failed(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Deployment(DeploymentError::contribution_failed(provider, reason))
    }

    /// Create an illegal argument error
    #[inline]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    /// Create a configuration parse error for `key`
    #[inline]
    pub fn config_parse_failed(key: &'static str, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            key,
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn config_invalid_value(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigInvalidValue {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the deployment error if this is one
    pub fn as_deployment(&self) -> Option<&DeploymentError> {
        match self {
            Self::Deployment(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "with_serde")]
impl From<serde_json::Error> for GatewayError {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Result type alias for gateway authorization operations
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
