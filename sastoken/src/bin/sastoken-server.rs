// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Token server entry point.
//!
//! Configured through `SASTOKEN_LISTEN_ADDR`, `SASTOKEN_ROUTE` and
//! `SASTOKEN_STRICT_STATUS`. Logging follows `RUST_LOG`.

use log::{error, info};
use sastoken::{Config, OsEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env(&OsEnv).inspect_err(|e| {
        error!("failed to load configuration: {e}");
    })?;
    info!(
        "starting token server: listen_addr={}, route={}, status_mode={:?}",
        config.listen_addr, config.route, config.status_mode
    );

    sastoken::server::serve(config).await
}
