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


use azsign_azure_blob::{
    canonicalize_headers, canonicalize_resource, HeaderCanonicalization, RequestAssembler,
    RequestDescriptor,
};
use azsign_core::SigningRequest;
use pretty_assertions::assert_eq;

use super::{sample_credential, sample_descriptor};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_request_url() {
    assert_eq!(
        RequestAssembler::new().request_url(&sample_credential(), &sample_descriptor()),
        "https://sampleAccount.blob.core.windows.net/samplecontainer?restype=container"
    );
}

#[test]
fn test_prepare_request() {
    init_logger();

    let req = RequestAssembler::new()
        .prepare_request(&sample_credential(), &sample_descriptor())
        .expect("prepare request must succeed");

    assert_eq!(req.uri().scheme_str(), Some("https"));
    assert_eq!(req.uri().host(), Some("sampleAccount.blob.core.windows.net"));
    assert_eq!(req.uri().path(), "/samplecontainer");
    assert_eq!(req.method().as_str(), "PUT");
    assert_eq!(req.headers()["x-ms-date"], "Sat, 02 Nov 2013 15:00:00 GMT");
    assert_eq!(req.headers()["x-ms-version"], "2009-09-19");
    assert_eq!(
        req.headers()["authorization"],
        "SharedKey sampleAccount:h0VRxbQipkWe0762ni41UQrKqV5h/j5gMlJDjb0tvys="
    );
}

#[test]
fn test_prepare_request_with_custom_headers() {
    init_logger();

    let desc = sample_descriptor()
        .with_header("x-ms-blob-type", "BlockBlob")
        .with_header("some", "header key");

    let req = RequestAssembler::new()
        .prepare_request(&sample_credential(), &desc)
        .expect("prepare request must succeed");

    assert_eq!(req.headers()["some"], "header key");
    assert_eq!(req.headers()["x-ms-blob-type"], "BlockBlob");
    assert_eq!(req.headers()["x-ms-date"], "Sat, 02 Nov 2013 15:00:00 GMT");
    assert_eq!(req.headers()["x-ms-version"], "2009-09-19");
    assert_eq!(
        req.headers()["authorization"],
        "SharedKey sampleAccount:BXo6wDPzH6TAUVgg0immVsr/1x6xlBLC3/8W71iRMmo="
    );

    // Re-canonicalize the prepared request: `some` isn't part of it.
    let (mut parts, _) = req.into_parts();
    let ctx = SigningRequest::build(&mut parts, 0).expect("request must be valid");
    let headers = canonicalize_headers(&ctx, HeaderCanonicalization::Verbatim)
        .expect("headers must be valid");
    assert_eq!(
        headers,
        "x-ms-blob-type:BlockBlob\nx-ms-date:Sat, 02 Nov 2013 15:00:00 GMT\nx-ms-version:2009-09-19"
    );
}

#[test]
fn test_prepare_request_is_deterministic() {
    let assembler = RequestAssembler::new();
    let first = assembler
        .prepare_request(&sample_credential(), &sample_descriptor())
        .expect("prepare request must succeed");
    let second = assembler
        .prepare_request(&sample_credential(), &sample_descriptor())
        .expect("prepare request must succeed");

    assert_eq!(
        first.headers()["authorization"],
        second.headers()["authorization"]
    );
}

#[test]
fn test_canonicalized_resource_with_custom_params() {
    let desc = RequestDescriptor::new("get", "samplecontainer")
        .with_resource("?restype=container&comp=list");
    let req = RequestAssembler::new()
        .prepare_request(&sample_credential(), &desc)
        .expect("prepare request must succeed");

    let (mut parts, _) = req.into_parts();
    let ctx = SigningRequest::build(&mut parts, 0).expect("request must be valid");
    assert_eq!(
        canonicalize_resource(&ctx, "sampleAccount", "samplecontainer"),
        "/sampleAccount/samplecontainer\ncomp:list\nrestype:container"
    );
}

/// The default canonicalization keeps header values as is; the unfolded
/// mode collapses whitespace and therefore signs differently.
#[test]
fn test_header_canonicalization_mode_changes_signature() {
    let desc = sample_descriptor().with_header("x-ms-meta-note", "two  spaces");

    let verbatim = RequestAssembler::new()
        .prepare_request(&sample_credential(), &desc)
        .expect("prepare request must succeed");
    let unfolded = RequestAssembler::new()
        .with_header_canonicalization(HeaderCanonicalization::Unfolded)
        .prepare_request(&sample_credential(), &desc)
        .expect("prepare request must succeed");

    assert_ne!(
        verbatim.headers()["authorization"],
        unfolded.headers()["authorization"]
    );

    // Without whitespace to unfold both modes agree.
    let plain = sample_descriptor();
    let verbatim = RequestAssembler::new()
        .prepare_request(&sample_credential(), &plain)
        .expect("prepare request must succeed");
    let unfolded = RequestAssembler::new()
        .with_header_canonicalization(HeaderCanonicalization::Unfolded)
        .prepare_request(&sample_credential(), &plain)
        .expect("prepare request must succeed");
    assert_eq!(
        verbatim.headers()["authorization"],
        unfolded.headers()["authorization"]
    );
}
