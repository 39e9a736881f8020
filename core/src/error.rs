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

use std::fmt;
use thiserror::Error;

/// The error type for sastoken operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The `key` parameter was not supplied
    MissingKey,

    /// The `keyName` parameter was not supplied
    MissingKeyName,

    /// The `uri` parameter was not supplied
    MissingResourceUri,

    /// Request cannot be handled (undecodable body, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (I/O, decoding, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error reports an absent request parameter
    pub fn is_missing_parameter(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingKey | ErrorKind::MissingKeyName | ErrorKind::MissingResourceUri
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a missing key error.
    ///
    /// The message is part of the wire contract and must not change.
    pub fn missing_key() -> Self {
        Self::new(ErrorKind::MissingKey, "key parameter cannot be null")
    }

    /// Create a missing key name error.
    ///
    /// The message is part of the wire contract and must not change.
    pub fn missing_key_name() -> Self {
        Self::new(ErrorKind::MissingKeyName, "keyName parameter cannot be null")
    }

    /// Create a missing resource uri error.
    ///
    /// The message is part of the wire contract and must not change.
    pub fn missing_resource_uri() -> Self {
        Self::new(ErrorKind::MissingResourceUri, "uri parameter cannot be null")
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingKey => write!(f, "missing key"),
            ErrorKind::MissingKeyName => write!(f, "missing key name"),
            ErrorKind::MissingResourceUri => write!(f, "missing resource uri"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
