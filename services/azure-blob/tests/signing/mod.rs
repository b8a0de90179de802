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


use azsign_azure_blob::{Credential, RequestDescriptor};
use azsign_core::time::parse_rfc3339;

mod live;
mod shared_key;

fn sample_credential() -> Credential {
    Credential::with_shared_key("sampleAccount", "secretKey")
}

fn sample_descriptor() -> RequestDescriptor {
    RequestDescriptor::new("put", "samplecontainer")
        .with_resource("?restype=container")
        .with_request_time(parse_rfc3339("2013-11-02T15:00:00Z").expect("time must be valid"))
}
