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

use std::fmt::{Debug, Display, Formatter};

use sastoken_core::time::{from_unix, DateTime};
use sastoken_core::utils::Redact;

use crate::constants::TOKEN_TYPE;

/// Token is an issued Shared Access Signature.
///
/// Its [`Display`] output is the wire format:
///
/// ```text
/// SharedAccessSignature sr=<resource>&sig=<signature>&se=<expiry>&skn=<key name>
/// ```
///
/// `sr` and `sig` are stored URL-encoded. `skn` is stored and rendered
/// exactly as supplied, without any encoding: existing token consumers parse
/// it that way.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub(crate) resource: String,
    pub(crate) signature: String,
    pub(crate) expiry: i64,
    pub(crate) key_name: String,
}

impl Token {
    /// URL-encoded resource URI (`sr`).
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// URL-encoded base64 signature (`sig`).
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Expiry in seconds since the Unix epoch (`se`).
    pub fn expiry(&self) -> i64 {
        self.expiry
    }

    /// Key name (`skn`), verbatim.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Expiry as a datetime.
    pub fn expires_at(&self) -> sastoken_core::Result<DateTime> {
        from_unix(self.expiry)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{TOKEN_TYPE} sr={}&sig={}&se={}&skn={}",
            self.resource, self.signature, self.expiry, self.key_name
        )
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("resource", &self.resource)
            .field("signature", &Redact::from(&self.signature))
            .field("expiry", &self.expiry)
            .field("key_name", &self.key_name)
            .finish()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token() -> Token {
        Token {
            resource: "sb%3A%2F%2Fns.servicebus.windows.net%2Fq".to_string(),
            signature: "c2lnbmF0dXJlLXZhbHVlLWhlcmU%3D".to_string(),
            expiry: 1_700_604_800,
            key_name: "send&listen=1".to_string(),
        }
    }

    #[test]
    fn test_display_wire_format() {
        assert_eq!(
            token().to_string(),
            "SharedAccessSignature sr=sb%3A%2F%2Fns.servicebus.windows.net%2Fq\
             &sig=c2lnbmF0dXJlLXZhbHVlLWhlcmU%3D&se=1700604800&skn=send&listen=1"
        );
    }

    #[test]
    fn test_debug_redacts_signature() {
        let debug = format!("{:?}", token());

        assert!(debug.contains("c2l***%3D"));
        assert!(!debug.contains("c2lnbmF0dXJlLXZhbHVlLWhlcmU"));
    }

    #[test]
    fn test_expires_at() {
        let at = token().expires_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2023-11-21T22:13:20+00:00");
    }
}
