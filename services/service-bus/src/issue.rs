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

use log::debug;
use sastoken_core::encode::url_encode;
use sastoken_core::hash::base64_hmac_sha256;
use sastoken_core::time::{now, unix_seconds, DateTime};
use sastoken_core::{Error, Result};

use crate::constants::TOKEN_LIFETIME_SECS;
use crate::Token;

/// TokenIssuer issues Shared Access Signature tokens for Service Bus and
/// Event Hubs resources.
///
/// - [Shared Access Signature authentication](https://learn.microsoft.com/en-us/azure/service-bus-messaging/service-bus-sas)
///
/// The issuer holds no key material and no mutable state. One value can be
/// shared by any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenIssuer {
    time: Option<DateTime>,
}

impl TokenIssuer {
    /// Create a new issuer that reads the wall clock on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the issuing time.
    ///
    /// # Note
    ///
    /// We should always take current time to issue tokens.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Issue a token for `resource_uri`, signed with `key` and labelled with
    /// `key_name`.
    ///
    /// Presence is checked in the order key, key name, resource uri and the
    /// first absent parameter is reported. Present values are used verbatim,
    /// so an empty string is accepted and signed like any other value.
    pub fn issue(
        &self,
        resource_uri: Option<&str>,
        key_name: Option<&str>,
        key: Option<&str>,
    ) -> Result<Token> {
        let Some(key) = key else {
            return Err(Error::missing_key());
        };
        let Some(key_name) = key_name else {
            return Err(Error::missing_key_name());
        };
        let Some(resource_uri) = resource_uri else {
            return Err(Error::missing_resource_uri());
        };

        let now = self.time.unwrap_or_else(now);
        Ok(build_token(resource_uri, key_name, key.as_bytes(), now))
    }
}

/// Build a token at the given time.
///
/// This is the whole signing algorithm and cannot fail: the key may be any
/// byte sequence and the resource any string.
pub fn build_token(resource_uri: &str, key_name: &str, key: &[u8], now: DateTime) -> Token {
    let expiry = unix_seconds(now) + TOKEN_LIFETIME_SECS;
    let resource = url_encode(resource_uri);

    let string_to_sign = string_to_sign(&resource, expiry);
    let signature = base64_hmac_sha256(key, string_to_sign.as_bytes());

    Token {
        resource,
        signature: url_encode(&signature),
        expiry,
        key_name: key_name.to_string(),
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// URL-encoded resource URI + "\n" +
/// Expiry (decimal Unix seconds)
/// ```
fn string_to_sign(encoded_resource: &str, expiry: i64) -> String {
    let s = format!("{encoded_resource}\n{expiry}");
    debug!("string to sign: {:?}", &s);
    s
}
