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

use std::fmt::Debug;
use std::path::Path;

use config::Config;
use gateway_error::GatewayError;
use gateway_error::GatewayResult;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Loads `config_file` and deserializes it into `C`.
///
/// The format is picked from the file extension (`.toml`, `.json`, `.yaml`, ...).
pub fn parse_config_file<C>(config_file: impl AsRef<Path>) -> GatewayResult<C>
where
    C: Debug + DeserializeOwned,
{
    let path = config_file.as_ref();
    if !path.is_file() {
        return Err(GatewayError::config_invalid_value(
            "config_file",
            path.display().to_string(),
            "not an existing file",
        ));
    }
    let parsed = Config::builder()
        .add_source(config::File::from(path))
        .build()
        .and_then(|cfg| cfg.try_deserialize::<C>())
        .map_err(|e| GatewayError::config_parse_failed("config_file", e.to_string()))?;
    debug!("parsed config file {}: {:?}", path.display(), parsed);
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        #[serde(default)]
        enabled: bool,
    }

    #[test]
    fn parse_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "name = \"sandbox\"\nenabled = true").unwrap();

        let sample: Sample = parse_config_file(file.path()).unwrap();
        assert_eq!(sample.name, "sandbox");
        assert!(sample.enabled);
    }

    #[test]
    fn missing_file_is_rejected() {
        let result = parse_config_file::<Sample>("/definitely/not/here.toml");
        assert!(matches!(
            result,
            Err(GatewayError::ConfigInvalidValue { key: "config_file", .. })
        ));
    }

    #[test]
    fn missing_field_surfaces_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "enabled = false").unwrap();

        let result = parse_config_file::<Sample>(file.path());
        assert!(matches!(
            result,
            Err(GatewayError::ConfigParseFailed { key: "config_file", .. })
        ));
    }
}
