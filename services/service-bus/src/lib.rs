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

//! Azure Service Bus and Event Hubs token issuer
//!
//! This crate issues Shared Access Signature tokens of the form
//!
//! ```text
//! SharedAccessSignature sr=<resource>&sig=<signature>&se=<expiry>&skn=<key name>
//! ```
//!
//! Tokens are valid for seven days from the time they are issued.
//!
//! # Example
//!
//! ```rust
//! use sastoken_service_bus::TokenIssuer;
//!
//! let token = TokenIssuer::new()
//!     .issue(
//!         Some("https://example.servicebus.windows.net/myqueue"),
//!         Some("RootManageSharedAccessKey"),
//!         Some("abcd1234"),
//!     )
//!     .expect("all parameters are present");
//!
//! assert!(token
//!     .to_string()
//!     .starts_with("SharedAccessSignature sr=https%3A%2F%2Fexample.servicebus.windows.net%2Fmyqueue&sig="));
//! ```

mod constants;
pub use constants::{TOKEN_LIFETIME_SECS, TOKEN_TYPE};

mod token;
pub use token::Token;

mod issue;
pub use issue::{build_token, TokenIssuer};

mod params;
pub use params::TokenParams;

pub mod handler;
pub use handler::StatusMode;
