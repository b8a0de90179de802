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


//! Azure Blob Storage Shared Key signer
//!
//! This crate builds requests authorized with the Shared Key scheme
//! (API version `2009-09-19`):
//!
//! - [`Credential`]: account name and base64 encoded account key
//! - [`RequestDescriptor`]: method, container, resource, time, headers and body
//! - [`RequestAssembler`]: builds the url, merges headers and signs
//! - [`canonicalize_headers`] / [`canonicalize_resource`] / [`string_to_sign`]:
//!   the canonicalization steps, exposed for inspection
//! - [`Config`]: loads account and profile from env or a connection string
//!
//! Sending the request is left to any http client.
//!
//! # Example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use azsign_azure_blob::{Config, RequestAssembler, RequestDescriptor};
//! use azsign_core::OsEnv;
//! use reqwest::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::default().from_env(&OsEnv)?;
//!     let cred = config.credential().expect("account name and key must be set");
//!
//!     let assembler = RequestAssembler::new().with_profile(config.profile());
//!     let desc = RequestDescriptor::new("get", "container").with_resource("?restype=container");
//!     let req = assembler.prepare_request(&cred, &desc)?;
//!
//!     let resp = Client::new().execute(req.try_into()?).await?;
//!     println!("Response: {}", resp.status());
//!
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::{DEFAULT_API_VERSION, DEFAULT_ENDPOINT_SUFFIX};

mod credential;
pub use credential::Credential;

mod descriptor;
pub use descriptor::RequestDescriptor;

mod config;
pub use config::{Config, HeaderCanonicalization, SigningProfile};
mod connection_string;

mod canonicalize;
pub use canonicalize::{canonicalize_headers, canonicalize_resource};

mod sign;
pub use sign::{content_length, sign, signature, string_to_sign};

mod assemble;
pub use assemble::RequestAssembler;
