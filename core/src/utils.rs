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

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret so it can be placed in `Debug` output or logs.
///
/// - Absent values print as `NONE` and empty ones as `EMPTY`.
/// - Values shorter than 12 bytes are fully masked.
/// - Longer values keep their first three and last three characters.
///
/// Signing keys must only ever be formatted through this type.
pub struct Redact<'a>(Option<&'a str>);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(Some(value))
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(Some(value.as_str()))
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(value) = self.0 else {
            return f.write_str("NONE");
        };

        let length = value.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !value.is_char_boundary(3) || !value.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&value[..3])?;
            f.write_str("***")?;
            f.write_str(&value[length - 3..])
        }
    }
}
