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


use std::collections::BTreeMap;
use std::mem;

use http::request::Parts;
use http::HeaderMap;
use http::Method;

use crate::{Error, Result};

/// Signing context for request.
///
/// It's a read view over the request being signed: headers are taken out of
/// the request while signing and returned by [`SigningRequest::apply`].
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP path, still percent encoded.
    pub path: String,
    /// HTTP query parameters, percent decoded, in request order.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Length of the request body in bytes.
    pub content_length: u64,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// Returns a `RequestInvalid` error if the query string can't be parsed.
    pub fn build(parts: &mut Parts, content_length: u64) -> Result<Self> {
        let query = match parts.uri.query() {
            Some(q) => parse_query(q)?,
            None => Vec::new(),
        };

        Ok(SigningRequest {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            query,
            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
            content_length,
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut Parts) {
        mem::swap(&mut parts.headers, &mut self.headers);
    }

    /// Group query values by key.
    ///
    /// Keys are ordered lexicographically, values keep request order.
    pub fn query_to_map(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut m: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (k, v) in &self.query {
            m.entry(k.as_str()).or_default().push(v.as_str());
        }
        m
    }

    /// Get headers whose name starts with given prefix, compared case-insensitively.
    ///
    /// Names are lower-cased and only the first value of every header is
    /// returned, so each name appears exactly once.
    pub fn header_to_vec_with_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let prefix = prefix.to_lowercase();

        self.headers
            .keys()
            .filter(|k| k.as_str().to_lowercase().starts_with(&prefix))
            .filter_map(|k| self.headers.get(k).map(|v| (k, v)))
            .map(|(k, v)| -> Result<(String, String)> {
                Ok((k.as_str().to_lowercase(), v.to_str()?.to_string()))
            })
            .collect()
    }

    /// Convert headers to sorted lines.
    ///
    /// Every header becomes a `name{sep}value` line, lines are sorted as
    /// whole strings and joined by `join`.
    ///
    /// ```shell
    /// [(c, d), (a, b)] => "a:b\nc:d"
    /// ```
    pub fn header_to_string(headers: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut lines: Vec<String> = headers
            .into_iter()
            .map(|(k, v)| format!("{k}{sep}{v}"))
            .collect();
        lines.sort();

        lines.join(join)
    }
}

/// Parse a raw query string into decoded `(key, value)` pairs.
///
/// Pairs are separated by `&`, `+` decodes to a space and `%XX` escapes are
/// decoded. Empty segments are skipped. A `;` separator, a malformed escape
/// or a non utf-8 result is a `RequestInvalid` error.
pub fn parse_query(query: &str) -> Result<Vec<(String, String)>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            if pair.contains(';') {
                return Err(Error::request_invalid(format!(
                    "invalid semicolon separator in query: {pair}"
                )));
            }

            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((query_unescape(k)?, query_unescape(v)?))
        })
        .collect()
}

fn query_unescape(s: &str) -> Result<String> {
    let bs = s.as_bytes();
    for (idx, _) in bs.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let valid = matches!(
            (bs.get(idx + 1), bs.get(idx + 2)),
            (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
        );
        if !valid {
            return Err(Error::request_invalid(format!(
                "invalid percent escape in query: {s}"
            )));
        }
    }

    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8()
        .map(|v| v.into_owned())
        .map_err(|e| {
            Error::request_invalid(format!("query is not valid utf-8: {s}")).with_source(e)
        })
}
