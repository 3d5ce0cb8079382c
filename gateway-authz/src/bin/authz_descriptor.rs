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

use std::path::PathBuf;
use std::process;

use anyhow::bail;
use clap::Parser;
use gateway_authz::bootstrap;
use gateway_authz::bootstrap::DescriptorOptions;
use gateway_common::log::Level;
use tracing::error;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        gateway_common::log::init_logger_with_level(Level::DEBUG)?;
    } else {
        gateway_common::log::init_logger()?;
    }

    if !args.config_file.is_file() {
        bail!("Config file does not exist or is not a file: {:?}", args.config_file);
    }
    let options = DescriptorOptions {
        resource_role: args.resource_role,
        pattern: args.pattern,
        role: args.role,
    };
    match bootstrap::build_descriptor(&args.config_file, &options).and_then(|r| bootstrap::render_descriptor(&r)) {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            error!("Failed to build resource descriptor: {}", e);
            process::exit(-1);
        }
    }
}

/// Command line arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "authz-descriptor",
    version = "0.1.0",
    about = "Builds the filter chain descriptor of a gateway resource from a topology file"
)]
struct Args {
    /// Topology file (TOML, JSON or YAML)
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    config_file: PathBuf,

    /// Resource URL pattern
    #[arg(long, default_value = "/**")]
    pattern: String,

    /// Role of the resource being described
    #[arg(long = "resource-role", default_value = "GATEWAY")]
    resource_role: String,

    /// Only deploy providers of this role
    #[arg(short, long)]
    role: Option<String>,

    /// Log at debug level instead of RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}
