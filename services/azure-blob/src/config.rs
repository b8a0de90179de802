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


use std::fmt::{Debug, Formatter};

use azsign_core::time::HTTP_DATE;
use azsign_core::utils::Redact;
use azsign_core::{Env, Result};

use crate::connection_string;
use crate::constants::*;
use crate::Credential;

/// HeaderCanonicalization controls how `x-ms-` header values enter the
/// canonical headers string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderCanonicalization {
    /// Use the first value of every header as is.
    ///
    /// This is the behavior every existing `2009-09-19` signature was computed with.
    #[default]
    Verbatim,
    /// Replace every run of whitespace, folded line breaks included, with a
    /// single space and trim the value.
    Unfolded,
}

/// SigningProfile carries the fixed parts of the signing contract.
///
/// The default profile targets API version `2009-09-19` on the public
/// cloud; other versions or clouds are supported by substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningProfile {
    /// Value of the `x-ms-version` header.
    pub api_version: String,
    /// Host suffix after `{account}.blob.`.
    pub endpoint_suffix: String,
    /// chrono layout of `x-ms-date`.
    pub date_format: String,
    /// How header values are canonicalized.
    pub header_canonicalization: HeaderCanonicalization,
}

impl Default for SigningProfile {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            endpoint_suffix: DEFAULT_ENDPOINT_SUFFIX.to_string(),
            date_format: HTTP_DATE.to_string(),
            header_canonicalization: HeaderCanonicalization::Verbatim,
        }
    }
}

/// Config carries all the configuration for Azure Blob Storage signing.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// `account_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ACCOUNT_NAME`] or [`AZURE_STORAGE_ACCOUNT_NAME`]
    /// - connection string: `AccountName`
    pub account_name: Option<String>,
    /// `account_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ACCOUNT_KEY`] or [`AZURE_STORAGE_ACCOUNT_KEY`]
    /// - connection string: `AccountKey`
    pub account_key: Option<String>,
    /// `endpoint_suffix` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ENDPOINT_SUFFIX`]
    /// - connection string: `EndpointSuffix`
    ///
    /// Defaults to `core.windows.net`.
    pub endpoint_suffix: Option<String>,
    /// `api_version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_API_VERSION`]
    ///
    /// Defaults to `2009-09-19`.
    pub api_version: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .field("endpoint_suffix", &self.endpoint_suffix)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set on `self` win over env values. Explicit env values
    /// win over the ones parsed from [`AZURE_STORAGE_CONNECTION_STRING`].
    pub fn from_env(self, env: &impl Env) -> Result<Self> {
        let envs = env.vars();

        let mut loaded = match envs.get(AZURE_STORAGE_CONNECTION_STRING) {
            Some(conn_str) => connection_string::parse(conn_str)?,
            None => Config::default(),
        };

        if let Some(v) = envs
            .get(AZBLOB_ACCOUNT_NAME)
            .or_else(|| envs.get(AZURE_STORAGE_ACCOUNT_NAME))
        {
            loaded.account_name = Some(v.to_string());
        }
        if let Some(v) = envs
            .get(AZBLOB_ACCOUNT_KEY)
            .or_else(|| envs.get(AZURE_STORAGE_ACCOUNT_KEY))
        {
            loaded.account_key = Some(v.to_string());
        }
        if let Some(v) = envs.get(AZBLOB_ENDPOINT_SUFFIX) {
            loaded.endpoint_suffix = Some(v.to_string());
        }
        if let Some(v) = envs.get(AZBLOB_API_VERSION) {
            loaded.api_version = Some(v.to_string());
        }

        Ok(Self {
            account_name: self.account_name.or(loaded.account_name),
            account_key: self.account_key.or(loaded.account_key),
            endpoint_suffix: self.endpoint_suffix.or(loaded.endpoint_suffix),
            api_version: self.api_version.or(loaded.api_version),
        })
    }

    /// Parse config from an [Azure connection string][1].
    ///
    /// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
    pub fn from_connection_string(conn_str: &str) -> Result<Self> {
        connection_string::parse(conn_str)
    }

    /// Build the shared key credential if both account name and key are set.
    pub fn credential(&self) -> Option<Credential> {
        match (&self.account_name, &self.account_key) {
            (Some(name), Some(key)) => Some(Credential::with_shared_key(name, key)),
            _ => None,
        }
    }

    /// Build the signing profile, falling back to the defaults.
    pub fn profile(&self) -> SigningProfile {
        let mut profile = SigningProfile::default();
        if let Some(v) = &self.endpoint_suffix {
            profile.endpoint_suffix = v.clone();
        }
        if let Some(v) = &self.api_version {
            profile.api_version = v.clone();
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azsign_core::StaticEnv;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_env() {
        let env = StaticEnv::from_pairs([
            (AZBLOB_ACCOUNT_NAME, "sampleAccount"),
            (AZBLOB_ACCOUNT_KEY, "secretKey"),
            (AZBLOB_ENDPOINT_SUFFIX, "core.chinacloudapi.cn"),
        ]);

        let cfg = Config::default().from_env(&env).unwrap();
        assert_eq!(cfg.account_name.as_deref(), Some("sampleAccount"));
        assert_eq!(cfg.account_key.as_deref(), Some("secretKey"));
        assert_eq!(cfg.api_version, None);

        let profile = cfg.profile();
        assert_eq!(profile.endpoint_suffix, "core.chinacloudapi.cn");
        assert_eq!(profile.api_version, DEFAULT_API_VERSION);
        assert_eq!(
            cfg.credential(),
            Some(Credential::with_shared_key("sampleAccount", "secretKey"))
        );
    }

    #[test]
    fn test_from_env_fallback_names() {
        let env = StaticEnv::from_pairs([
            (AZURE_STORAGE_ACCOUNT_NAME, "fallback"),
            (AZURE_STORAGE_ACCOUNT_KEY, "c2VjcmV0"),
        ]);

        let cfg = Config::default().from_env(&env).unwrap();
        assert_eq!(
            cfg.credential(),
            Some(Credential::with_shared_key("fallback", "c2VjcmV0"))
        );
    }

    #[test]
    fn test_from_env_precedence() {
        let env = StaticEnv::from_pairs([
            (
                AZURE_STORAGE_CONNECTION_STRING,
                "AccountName=fromconn;AccountKey=Y29ubg==;EndpointSuffix=core.usgovcloudapi.net",
            ),
            (AZBLOB_ACCOUNT_NAME, "fromenv"),
        ]);

        let cfg = Config {
            api_version: Some("2009-09-19".to_string()),
            ..Default::default()
        }
        .from_env(&env)
        .unwrap();

        assert_eq!(
            cfg,
            Config {
                account_name: Some("fromenv".to_string()),
                account_key: Some("Y29ubg==".to_string()),
                endpoint_suffix: Some("core.usgovcloudapi.net".to_string()),
                api_version: Some("2009-09-19".to_string()),
            }
        );
    }

    #[test]
    fn test_from_env_bad_connection_string() {
        let env = StaticEnv::from_pairs([(AZURE_STORAGE_CONNECTION_STRING, "AccountName")]);

        let err = Config::default().from_env(&env).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_config() {
        let cfg = Config::default();
        assert_eq!(cfg.credential(), None);
        assert_eq!(cfg.profile(), SigningProfile::default());
    }

    #[test]
    fn test_debug_redacts_key() {
        let cfg = Config {
            account_key: Some("secretKey".to_string()),
            ..Default::default()
        };
        assert!(!format!("{cfg:?}").contains("secretKey"));
    }
}
