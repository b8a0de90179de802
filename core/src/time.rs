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
use chrono::Utc;
use std::fmt::Write;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Layout of the HTTP date used by Shared Key signing: "Sat, 02 Nov 2013 15:00:00 GMT".
///
/// The day is always zero padded and the zone is always the literal `GMT`.
pub const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into the given chrono layout.
///
/// Returns a `ConfigInvalid` error if the layout can't be rendered.
pub fn format(t: DateTime, layout: &str) -> crate::Result<String> {
    let mut s = String::new();
    write!(s, "{}", t.format(layout)).map_err(|e| {
        Error::config_invalid(format!("invalid date layout: {layout}")).with_source(e)
    })?;
    Ok(s)
}

/// Format time into http date: "Sat, 02 Nov 2013 15:00:00 GMT"
pub fn format_http_date(t: DateTime) -> String {
    t.format(HTTP_DATE).to_string()
}

/// Parse time from RFC3339: "2013-11-02T15:00:00Z"
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse {s} into rfc3339 failed")).with_source(e))?
        .with_timezone(&Utc))
}
