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


//! Core components for signing Azure Blob Storage requests.
//!
//! This crate provides the service independent building blocks used by
//! `azsign-azure-blob`:
//!
//! - [`Error`] and [`ErrorKind`]: the single error type shared by every crate
//! - [`SigningRequest`]: a signing view over `http::request::Parts`
//! - [`Env`]: environment access, with [`OsEnv`] and [`StaticEnv`] implementations
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and HMAC-SHA256 helpers
//! - [`time`]: date formatting and parsing
//! - [`utils`]: general utilities including data redaction
//!
//! ## Example
//!
//! ```
//! use azsign_core::hash::base64_hmac_sha256;
//! use azsign_core::time::{format_http_date, parse_rfc3339};
//!
//! let date = format_http_date(parse_rfc3339("2013-11-02T15:00:00Z").unwrap());
//! assert_eq!(date, "Sat, 02 Nov 2013 15:00:00 GMT");
//!
//! let signature = base64_hmac_sha256(b"key", date.as_bytes());
//! assert!(!signature.is_empty());
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod request;
pub use request::{parse_query, SigningRequest};
