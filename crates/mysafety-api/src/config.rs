// Copyright 2024 MySafety Platform
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

//! Server configuration from command-line flags and environment.

use clap::Parser;
use mysafety_core::MySafetyError;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

const BIND_ADDR_ENV_VAR: &str = "MYSAFETY_BIND_ADDR";
const LOG_ENV_VAR: &str = "MYSAFETY_LOG";

/// Runtime settings for the API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "mysafety-api", version, about = "MySafety authorization API")]
pub struct ApiConfig {
    /// Address to listen on.
    #[arg(long, env = BIND_ADDR_ENV_VAR, default_value = "127.0.0.1:3000")]
    pub bind_addr: SocketAddr,

    /// Log filter directive, e.g. `info` or `mysafety_security=debug`.
    #[arg(long, env = LOG_ENV_VAR, default_value = "info")]
    pub log_filter: String,
}

impl ApiConfig {
    /// Builds the tracing filter from `log_filter`.
    pub fn env_filter(&self) -> Result<EnvFilter, MySafetyError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            MySafetyError::ConfigError(format!(
                "Invalid log filter '{}' ({}): {}",
                self.log_filter, LOG_ENV_VAR, e
            ))
        })
    }
}
