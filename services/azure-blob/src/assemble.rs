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


use azsign_core::time::format;
use azsign_core::{Error, Result, SigningRequest};
use bytes::Bytes;
use http::header::{HeaderName, AUTHORIZATION};
use http::{HeaderValue, Method, Request, Uri};
use log::debug;

use crate::constants::*;
use crate::sign::signature;
use crate::{Credential, HeaderCanonicalization, RequestDescriptor, SigningProfile};

/// RequestAssembler builds Shared Key authorized requests for Azure Blob Storage.
///
/// - [Authorize with Shared Key](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
///
/// ```
/// use azsign_azure_blob::{Credential, RequestAssembler, RequestDescriptor};
/// use azsign_core::time::parse_rfc3339;
///
/// let cred = Credential::with_shared_key("sampleAccount", "secretKey");
/// let desc = RequestDescriptor::new("put", "samplecontainer")
///     .with_resource("?restype=container")
///     .with_request_time(parse_rfc3339("2013-11-02T15:00:00Z").unwrap());
///
/// let req = RequestAssembler::new().prepare_request(&cred, &desc).unwrap();
/// assert_eq!(
///     req.headers()["authorization"],
///     "SharedKey sampleAccount:h0VRxbQipkWe0762ni41UQrKqV5h/j5gMlJDjb0tvys="
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestAssembler {
    profile: SigningProfile,
}

impl RequestAssembler {
    /// Create a new assembler with the default signing profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the signing profile.
    pub fn with_profile(mut self, profile: SigningProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Choose how header values are canonicalized.
    pub fn with_header_canonicalization(mut self, mode: HeaderCanonicalization) -> Self {
        self.profile.header_canonicalization = mode;
        self
    }

    /// The signing profile in use.
    pub fn profile(&self) -> &SigningProfile {
        &self.profile
    }

    /// Build the target url: `https://{account}.blob.{suffix}/{container}{resource}`.
    pub fn request_url(&self, cred: &Credential, desc: &RequestDescriptor) -> String {
        format!(
            "{BLOB_SCHEME}://{}.{BLOB_SERVICE}.{}/{}{}",
            cred.account_name, self.profile.endpoint_suffix, desc.container, desc.resource
        )
    }

    /// Prepare a signed request ready to be sent by any http client.
    ///
    /// Custom headers are merged first, then `x-ms-date`, `x-ms-version`
    /// and `Authorization` are appended so the signature observes every
    /// custom `x-ms-` header.
    pub fn prepare_request(
        &self,
        cred: &Credential,
        desc: &RequestDescriptor,
    ) -> Result<Request<Bytes>> {
        if cred.account_name.is_empty() {
            return Err(Error::config_invalid("account name is required"));
        }

        let method = Method::from_bytes(desc.method.to_uppercase().as_bytes())?;
        let url = self.request_url(cred, desc);
        let uri: Uri = url.parse()?;
        debug!("preparing {method} request to {url}");

        let mut req = Request::new(desc.body.clone().unwrap_or_default());
        *req.method_mut() = method;
        *req.uri_mut() = uri;

        for (name, value) in &desc.headers {
            req.headers_mut().append(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let (mut parts, body) = req.into_parts();
        parts.headers.append(
            X_MS_DATE,
            HeaderValue::from_str(&format(desc.request_time, &self.profile.date_format)?)?,
        );
        parts.headers.append(
            X_MS_VERSION,
            HeaderValue::from_str(&self.profile.api_version)?,
        );

        let mut ctx = SigningRequest::build(&mut parts, desc.content_length())?;
        let signature = signature(cred, &desc.container, &ctx, &self.profile)?;
        ctx.headers.append(AUTHORIZATION, {
            let mut value =
                HeaderValue::from_str(&format!("SharedKey {}:{signature}", cred.account_name))?;
            value.set_sensitive(true);
            value
        });
        ctx.apply(&mut parts);

        Ok(Request::from_parts(parts, body))
    }
}
