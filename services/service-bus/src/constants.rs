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

/// Scheme prefix of every issued token.
pub const TOKEN_TYPE: &str = "SharedAccessSignature";

/// Seconds a token stays valid: 7 days.
pub const TOKEN_LIFETIME_SECS: i64 = 60 * 60 * 24 * 7;

// Request parameters, matched ignoring ASCII case.
pub const PARAM_RESOURCE_URI: &str = "uri";
pub const PARAM_KEY_NAME: &str = "keyName";
pub const PARAM_KEY: &str = "key";

// Media types produced by the HTTP adapter.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON_UTF8: &str = "application/json; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_WWW_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
