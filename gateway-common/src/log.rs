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

use std::fmt;
use std::str::FromStr;

use gateway_error::GatewayError;
use gateway_error::GatewayResult;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initializes the logger. Output goes to stderr so stdout stays free for
/// command results.
///
/// Filter directives are read from the `RUST_LOG` environment variable (a plain level such
/// as `debug` or per-target directives such as `gateway_authz=debug`). Unset, empty or
/// invalid directives fall back to INFO. Thread names, levels, line numbers and thread ids
/// are included in the output.
pub fn init_logger() -> GatewayResult<()> {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_level(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GatewayError::internal(format!("failed to install logger: {e}")))
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

pub fn init_logger_with_level(level: Level) -> GatewayResult<()> {
    let max_level = tracing::Level::from_str(level.as_str())
        .map_err(|e| GatewayError::config_invalid_value("log_level", level.as_str(), e.to_string()))?;
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_level(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GatewayError::internal(format!("failed to install logger: {e}")))
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Level(&'static str);

impl Level {
    /// Constant representing the ERROR log level.
    pub const ERROR: Level = Level("ERROR");

    /// Constant representing the WARN log level.
    pub const WARN: Level = Level("WARN");

    /// Constant representing the INFO log level.
    pub const INFO: Level = Level("INFO");

    /// Constant representing the DEBUG log level.
    pub const DEBUG: Level = Level("DEBUG");

    /// Constant representing the TRACE log level.
    pub const TRACE: Level = Level("TRACE");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Case-insensitive lookup; `None` for anything that is not a level name.
    pub fn parse(level: &str) -> Option<Level> {
        match level.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        }
    }
}

impl FromStr for Level {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::parse(s).ok_or_else(|| GatewayError::illegal_argument(format!("Invalid log level: {s}")))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}
