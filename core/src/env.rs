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

use std::collections::HashMap;
use std::fmt::Debug;

/// Permits parameterizing environment lookups so configuration can be tested
/// without touching the process environment.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// Returns `None` if the variable is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// StaticEnv provides a fixed set of variables.
///
/// This is useful for testing or running with a configuration that does not
/// come from the process.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl StaticEnv {
    /// Create a StaticEnv from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            envs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_env() {
        let env = StaticEnv::from_pairs([("SASTOKEN_ROUTE", "/token")]);

        assert_eq!(env.var("SASTOKEN_ROUTE").as_deref(), Some("/token"));
        assert_eq!(env.var("SASTOKEN_LISTEN_ADDR"), None);
    }
}
