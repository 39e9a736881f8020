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

//! Time related utils.

use crate::Error;
use chrono::TimeZone;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Whole seconds since the Unix epoch, rounded towards negative infinity.
pub fn unix_seconds(time: DateTime) -> i64 {
    // chrono keeps sub-second precision in a separate non-negative field.
    time.timestamp()
}

/// Create datetime from seconds since the Unix epoch.
pub fn from_unix(secs: i64) -> crate::Result<DateTime> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::unexpected(format!("timestamp {secs} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_seconds_floors_sub_seconds() {
        let t = Utc.timestamp_opt(1_700_000_000, 999_999_999).unwrap();
        assert_eq!(unix_seconds(t), 1_700_000_000);
    }

    #[test]
    fn test_from_unix() {
        let t = from_unix(1_700_000_000).unwrap();
        assert_eq!(t.to_rfc3339(), "2023-11-14T22:13:20+00:00");
        assert_eq!(unix_seconds(t), 1_700_000_000);
    }

    #[test]
    fn test_from_unix_out_of_range() {
        assert!(from_unix(i64::MAX).is_err());
    }
}
