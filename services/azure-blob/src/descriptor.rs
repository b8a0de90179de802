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


use azsign_core::time::{now, DateTime};
use bytes::Bytes;

/// RequestDescriptor describes one outbound call before it's signed.
///
/// ```
/// use azsign_azure_blob::RequestDescriptor;
///
/// let desc = RequestDescriptor::new("put", "samplecontainer")
///     .with_resource("/hello.txt")
///     .with_header("x-ms-blob-type", "BlockBlob")
///     .with_body("hello, world");
/// assert_eq!(desc.content_length(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
    /// HTTP method, case-insensitive.
    pub method: String,
    /// Container name, placed right after the host.
    pub container: String,
    /// Remaining path and query, may be empty or start with `?`.
    pub resource: String,
    /// Time used for `x-ms-date` and the signature.
    pub request_time: DateTime,
    /// Custom headers in insertion order.
    pub headers: Vec<(String, String)>,
    /// Optional request body.
    pub body: Option<Bytes>,
}

impl RequestDescriptor {
    /// Create a descriptor for `method` against `container`, timed now.
    pub fn new(method: &str, container: &str) -> Self {
        Self {
            method: method.to_string(),
            container: container.to_string(),
            resource: String::new(),
            request_time: now(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set the resource suffix, for example `?restype=container`.
    pub fn with_resource(mut self, resource: &str) -> Self {
        self.resource = resource.to_string();
        self
    }

    /// Set the request time.
    pub fn with_request_time(mut self, time: DateTime) -> Self {
        self.request_time = time;
        self
    }

    /// Add a custom header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Length of the body in bytes, `0` without body.
    pub fn content_length(&self) -> u64 {
        self.body.as_ref().map_or(0, |b| b.len() as u64)
    }
}
