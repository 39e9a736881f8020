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

use std::net::{Ipv4Addr, SocketAddr};

use log::debug;
use sastoken_core::{Env, Error, Result};
use sastoken_service_bus::StatusMode;

/// Environment variable holding the listen address.
pub const SASTOKEN_LISTEN_ADDR: &str = "SASTOKEN_LISTEN_ADDR";
/// Environment variable holding the route of the token endpoint.
pub const SASTOKEN_ROUTE: &str = "SASTOKEN_ROUTE";
/// Environment variable switching missing parameters to `400 Bad Request`.
pub const SASTOKEN_STRICT_STATUS: &str = "SASTOKEN_STRICT_STATUS";

const DEFAULT_PORT: u16 = 7071;
const DEFAULT_ROUTE: &str = "/api/SASToken";

/// Config carries all the configuration of the token server.
///
/// No key material is configured here: every request brings its own key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `listen_addr` will be loaded from
    ///
    /// - env value: [`SASTOKEN_LISTEN_ADDR`]
    /// - default: `0.0.0.0:7071`
    pub listen_addr: SocketAddr,
    /// `route` will be loaded from
    ///
    /// - env value: [`SASTOKEN_ROUTE`]
    /// - default: `/api/SASToken`
    pub route: String,
    /// `status_mode` will be loaded from
    ///
    /// - env value: [`SASTOKEN_STRICT_STATUS`], `true`/`1`/`on` for strict
    /// - default: compatible
    pub status_mode: StatusMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            route: DEFAULT_ROUTE.to_string(),
            status_mode: StatusMode::default(),
        }
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(env: &dyn Env) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = env.var(SASTOKEN_LISTEN_ADDR) {
            config.listen_addr = v.trim().parse().map_err(|e| {
                Error::config_invalid(format!("{SASTOKEN_LISTEN_ADDR} is invalid: {v}"))
                    .with_source(e)
            })?;
        }

        if let Some(v) = env.var(SASTOKEN_ROUTE) {
            config.route = parse_route(&v)?;
        }

        if let Some(v) = env.var(SASTOKEN_STRICT_STATUS) {
            config.status_mode = if parse_bool(SASTOKEN_STRICT_STATUS, &v)? {
                StatusMode::Strict
            } else {
                StatusMode::Compatible
            };
        }

        debug!("loaded config: {config:?}");
        Ok(config)
    }
}

fn parse_route(v: &str) -> Result<String> {
    let route = v.trim();
    if !route.starts_with('/') {
        return Err(Error::config_invalid(format!(
            "{SASTOKEN_ROUTE} must start with '/': {v}"
        )));
    }
    // Path captures and wildcards would turn the endpoint into a pattern.
    if route.contains([':', '*', '{', '}']) {
        return Err(Error::config_invalid(format!(
            "{SASTOKEN_ROUTE} must be a literal path: {v}"
        )));
    }
    Ok(route.to_string())
}

fn parse_bool(name: &str, v: &str) -> Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" | "" => Ok(false),
        _ => Err(Error::config_invalid(format!(
            "{name} must be a boolean: {v}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sastoken_core::{ErrorKind, StaticEnv};
    use test_case::test_case;

    #[test]
    fn test_default() {
        let config = Config::from_env(&StaticEnv::default()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:7071");
        assert_eq!(config.route, "/api/SASToken");
        assert_eq!(config.status_mode, StatusMode::Compatible);
    }

    #[test]
    fn test_from_env() {
        let env = StaticEnv::from_pairs([
            (SASTOKEN_LISTEN_ADDR, "127.0.0.1:8080"),
            (SASTOKEN_ROUTE, "/token"),
            (SASTOKEN_STRICT_STATUS, "on"),
        ]);
        let config = Config::from_env(&env).unwrap();

        assert_eq!(
            config,
            Config {
                listen_addr: "127.0.0.1:8080".parse().unwrap(),
                route: "/token".to_string(),
                status_mode: StatusMode::Strict,
            }
        );
    }

    #[test_case(SASTOKEN_LISTEN_ADDR, "localhost"; "addr without port")]
    #[test_case(SASTOKEN_ROUTE, "api/token"; "relative route")]
    #[test_case(SASTOKEN_ROUTE, "/api/:name"; "route capture")]
    #[test_case(SASTOKEN_STRICT_STATUS, "maybe"; "bad bool")]
    fn test_from_env_invalid(name: &str, value: &str) {
        let env = StaticEnv::from_pairs([(name, value)]);
        let err = Config::from_env(&env).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.to_string().contains(name));
    }

    #[test_case("TRUE", true; "upper true")]
    #[test_case("1", true; "one")]
    #[test_case("off", false; "off")]
    #[test_case("", false; "empty")]
    fn test_parse_bool(v: &str, expected: bool) {
        assert_eq!(parse_bool("X", v).unwrap(), expected);
    }
}
