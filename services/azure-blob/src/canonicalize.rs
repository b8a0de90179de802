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


use azsign_core::{Result, SigningRequest};

use crate::constants::X_MS_HEADER_PREFIX;
use crate::HeaderCanonicalization;

/// Build the canonicalized headers string.
///
/// Every header whose name starts with `x-ms-` is selected, its name is
/// lower-cased and its first value is kept. The `name:value` lines are
/// sorted and joined by `\n` without trailing newline.
///
/// ## Reference
///
/// - [Constructing the canonicalized headers string](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-headers-string)
pub fn canonicalize_headers(
    ctx: &SigningRequest,
    mode: HeaderCanonicalization,
) -> Result<String> {
    let headers = ctx
        .header_to_vec_with_prefix(X_MS_HEADER_PREFIX)?
        .into_iter()
        .map(|(k, v)| match mode {
            HeaderCanonicalization::Verbatim => (k, v),
            HeaderCanonicalization::Unfolded => {
                (k, v.split_whitespace().collect::<Vec<_>>().join(" "))
            }
        })
        .collect();

    Ok(SigningRequest::header_to_string(headers, ":", "\n"))
}

/// Build the canonicalized resource string.
///
/// ```text
/// /{account}/{container}
/// \n{key}:{value1,value2}   (one line per query key, keys and values sorted)
/// ```
///
/// ## Reference
///
/// - [Constructing the canonicalized resource string](https://docs.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-resource-string)
pub fn canonicalize_resource(ctx: &SigningRequest, account_name: &str, container: &str) -> String {
    let mut s = format!("/{account_name}/{container}");

    for (key, mut values) in ctx.query_to_map() {
        values.sort_unstable();

        s.push('\n');
        s.push_str(key);
        s.push(':');
        s.push_str(&values.join(","));
    }

    s
}
