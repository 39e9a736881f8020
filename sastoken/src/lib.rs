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

//! Issue Shared Access Signature tokens.
//!
//! This crate re-exports the core types and the service issuers behind
//! feature flags, and ships an HTTP server that hands tokens out.
//!
//! - `service-bus`: Service Bus and Event Hubs tokens, see [`service_bus`].
//! - `server`: the axum router in [`server`] and the `sastoken-server` binary.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "service-bus")]
//! # fn main() -> sastoken::Result<()> {
//! use sastoken::service_bus::TokenIssuer;
//!
//! let token = TokenIssuer::new().issue(
//!     Some("sb://example.servicebus.windows.net/myqueue"),
//!     Some("RootManageSharedAccessKey"),
//!     Some("abcd1234"),
//! )?;
//! println!("{token}");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "service-bus"))]
//! # fn main() {}
//! ```

pub use sastoken_core::*;

#[cfg(feature = "service-bus")]
pub mod service_bus {
    pub use sastoken_service_bus::*;
}

#[cfg(feature = "service-bus")]
mod config;
#[cfg(feature = "service-bus")]
pub use config::{Config, SASTOKEN_LISTEN_ADDR, SASTOKEN_ROUTE, SASTOKEN_STRICT_STATUS};

#[cfg(feature = "server")]
pub mod server;
