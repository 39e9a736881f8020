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

use std::borrow::Cow;
use std::fmt::{Debug, Formatter};

use sastoken_core::utils::Redact;
use sastoken_core::Result;

use crate::constants::*;
use crate::{Token, TokenIssuer};

/// TokenParams carries the three inputs of a token request.
///
/// `None` means the parameter was absent. `Some("")` means it was present
/// with an empty value, which is accepted by the issuer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenParams {
    /// `uri`: the resource the token grants access to.
    pub resource_uri: Option<String>,
    /// `keyName`: the shared access policy name.
    pub key_name: Option<String>,
    /// `key`: the shared access key.
    pub key: Option<String>,
}

impl Debug for TokenParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenParams")
            .field("resource_uri", &self.resource_uri)
            .field("key_name", &self.key_name)
            .field("key", &Redact::from(&self.key))
            .finish()
    }
}

impl TokenParams {
    /// Parse parameters from a URL query string.
    ///
    /// Names are matched ignoring ASCII case and the first occurrence wins.
    /// Values are percent-decoded and `+` decodes to a space, so a base64 key
    /// containing `+` must be sent as `%2B`.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        params.fill(form_urlencoded::parse(query.as_bytes()));
        params
    }

    /// Fill parameters that are still absent from a form encoded body.
    ///
    /// Values already taken from the query string are kept. Bytes that are
    /// not valid UTF-8 decode to `U+FFFD` instead of failing.
    pub fn merge_form(&mut self, body: &[u8]) {
        if self.is_complete() {
            return;
        }
        self.fill(form_urlencoded::parse(body));
    }

    /// Check whether all three parameters are present.
    pub fn is_complete(&self) -> bool {
        self.resource_uri.is_some() && self.key_name.is_some() && self.key.is_some()
    }

    /// Issue a token from these parameters.
    pub fn issue(&self, issuer: &TokenIssuer) -> Result<Token> {
        issuer.issue(
            self.resource_uri.as_deref(),
            self.key_name.as_deref(),
            self.key.as_deref(),
        )
    }

    fn fill<'a>(&mut self, pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) {
        for (name, value) in pairs {
            let slot = if name.eq_ignore_ascii_case(PARAM_RESOURCE_URI) {
                &mut self.resource_uri
            } else if name.eq_ignore_ascii_case(PARAM_KEY_NAME) {
                &mut self.key_name
            } else if name.eq_ignore_ascii_case(PARAM_KEY) {
                &mut self.key
            } else {
                continue;
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
    }
}
