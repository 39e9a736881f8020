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

//! Core components for issuing Shared Access Signature tokens.
//!
//! This crate provides the foundational types shared by the sastoken ecosystem.
//! Service crates build their token issuers on top of these primitives.
//!
//! ## Overview
//!
//! - [`Error`] / [`ErrorKind`]: the error type every crate returns
//! - [`Env`]: abstract access to environment variables, with [`OsEnv`] and [`StaticEnv`]
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA256 and base64 helpers
//! - [`encode`]: WWW-form URL encoding
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction
//!
//! ## Example
//!
//! ```
//! use sastoken_core::encode::url_encode;
//! use sastoken_core::hash::base64_hmac_sha256;
//!
//! let to_sign = format!("{}\n{}", url_encode("sb://ns.servicebus.windows.net/q"), 1700604800);
//! let signature = base64_hmac_sha256(b"secret", to_sign.as_bytes());
//! assert_eq!(signature.len(), 44);
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod encode;
pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
