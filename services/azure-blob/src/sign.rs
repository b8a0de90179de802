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


use azsign_core::hash::base64_hmac_sha256;
use azsign_core::{Result, SigningRequest};
use http::Method;
use log::debug;

use crate::canonicalize::{canonicalize_headers, canonicalize_resource};
use crate::{Credential, SigningProfile};

/// Content-Length as it enters the string to sign.
///
/// Only `PUT` carries the decimal body length (`0` without body); every
/// other method signs an empty field, even when it has a body.
pub fn content_length(method: &Method, content_length: u64) -> String {
    if *method == Method::PUT {
        content_length.to_string()
    } else {
        String::new()
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Content-Encoding + "\n" +     (always empty)
/// Content-Language + "\n" +     (always empty)
/// Content-Length + "\n" +
/// Content-MD5 + "\n" +          (always empty)
/// Content-Type + "\n" +         (always empty)
/// Date + "\n" +                 (always empty, x-ms-date is used)
/// If-Modified-Since + "\n" +    (always empty)
/// If-Match + "\n" +             (always empty)
/// If-None-Match + "\n" +        (always empty)
/// If-Unmodified-Since + "\n" +  (always empty)
/// Range + "\n" +                (always empty)
/// CanonicalizedHeaders + "\n" +
/// CanonicalizedResource;
/// ```
///
/// ## Reference
///
/// - [Blob, Queue, and File Services (Shared Key authorization)](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
pub fn string_to_sign(
    method: &Method,
    content_length: &str,
    canonical_headers: &str,
    canonical_resource: &str,
) -> String {
    [
        method.as_str(),
        "",
        "",
        content_length,
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        canonical_headers,
        canonical_resource,
    ]
    .join("\n")
}

/// Sign the string with the decoded account key.
///
/// Returns the base64 encoded HMAC-SHA256 of `string_to_sign`.
pub fn sign(cred: &Credential, string_to_sign: &str) -> Result<String> {
    let key = cred.decoded_key()?;
    Ok(base64_hmac_sha256(&key, string_to_sign.as_bytes()))
}

/// Compute the shared key signature of a prepared request.
///
/// Canonical strings are rebuilt from `ctx` on every call, so headers added
/// between two calls are always observed.
pub fn signature(
    cred: &Credential,
    container: &str,
    ctx: &SigningRequest,
    profile: &SigningProfile,
) -> Result<String> {
    let canonical_headers = canonicalize_headers(ctx, profile.header_canonicalization)?;
    let canonical_resource = canonicalize_resource(ctx, &cred.account_name, container);
    let content_length = content_length(&ctx.method, ctx.content_length);

    let s = string_to_sign(
        &ctx.method,
        &content_length,
        &canonical_headers,
        &canonical_resource,
    );
    debug!("string to sign: {}", &s);

    sign(cred, &s)
}
