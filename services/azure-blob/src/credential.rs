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


use azsign_core::hash::base64_decode;
use azsign_core::utils::Redact;
use azsign_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Credential holds the storage account name and its base64 encoded key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Azure storage account name.
    pub account_name: String,
    /// Azure storage account key, base64 encoded.
    pub account_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .finish()
    }
}

impl Credential {
    /// Create a new credential with shared key authentication.
    pub fn with_shared_key(account_name: &str, account_key: &str) -> Self {
        Self {
            account_name: account_name.to_string(),
            account_key: account_key.to_string(),
        }
    }

    /// Check if both account name and key are present.
    pub fn is_valid(&self) -> bool {
        !self.account_name.is_empty() && !self.account_key.is_empty()
    }

    /// Decode the account key into the raw HMAC key.
    ///
    /// A lone trailing symbol (length one more than a multiple of four)
    /// carries fewer than eight bits and is ignored. Any other decode
    /// failure is a [`ErrorKind::MalformedKey`](azsign_core::ErrorKind::MalformedKey) error.
    pub fn decoded_key(&self) -> Result<Vec<u8>> {
        let key = self.account_key.as_str();
        let key = if key.is_ascii() && key.len() % 4 == 1 {
            &key[..key.len() - 1]
        } else {
            key
        };

        let decoded = base64_decode(key).map_err(|e| {
            Error::malformed_key(format!(
                "account key of {} is not valid base64",
                self.account_name
            ))
            .with_source(e)
        })?;
        if decoded.is_empty() {
            return Err(Error::malformed_key(format!(
                "account key of {} is empty",
                self.account_name
            )));
        }

        Ok(decoded)
    }
}
