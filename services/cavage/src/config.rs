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

use crate::algorithm::Algorithm;
use crate::constants::*;
use httpsig_core::utils::Redact;
use httpsig_core::{Context, Error, Result};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for an http signature signer.
///
/// Every field is optional here: [`HeaderSigner::from_config`](crate::HeaderSigner::from_config)
/// decides what is required.
///
/// ```
/// use httpsig_cavage::Config;
///
/// # fn main() -> httpsig_core::Result<()> {
/// let cfg = Config::from_toml(
///     r#"
///     key_id = "k1"
///     key_type = "hmac"
///     secret = "secret"
///     headers = ["(request-target)", "host", "date"]
///     "#,
/// )?;
/// assert_eq!(cfg.key_id.as_deref(), Some("k1"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HTTPSIG_KEY_ID`]
    pub key_id: Option<String>,
    /// `key_type` is one of `rsa`, `ecdsa` or `hmac`. Loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HTTPSIG_KEY_TYPE`]
    pub key_type: Option<String>,
    /// `secret` is the HMAC passphrase or the PEM encoded private key. Loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HTTPSIG_SECRET`]
    pub secret: Option<String>,
    /// `algorithm` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HTTPSIG_ALGORITHM`]
    pub algorithm: Option<Algorithm>,
    /// `headers` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HTTPSIG_HEADERS`], separated by spaces or commas
    pub headers: Option<Vec<String>>,
    /// `sign_header` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HTTPSIG_SIGN_HEADER`]
    pub sign_header: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set key_id
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Set key_type
    pub fn with_key_type(mut self, key_type: impl Into<String>) -> Self {
        self.key_type = Some(key_type.into());
        self
    }

    /// Set secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set headers
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Set sign_header
    pub fn with_sign_header(mut self, sign_header: impl Into<String>) -> Self {
        self.sign_header = Some(sign_header.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(HTTPSIG_KEY_ID) {
            self.key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(HTTPSIG_KEY_TYPE) {
            self.key_type.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(HTTPSIG_SECRET) {
            self.secret.get_or_insert(v);
        }
        if self.algorithm.is_none() {
            if let Some(v) = ctx.env_var(HTTPSIG_ALGORITHM) {
                self.algorithm = Some(v.parse()?);
            }
        }
        if let Some(v) = ctx.env_var(HTTPSIG_HEADERS) {
            self.headers.get_or_insert_with(|| split_headers(&v));
        }
        if let Some(v) = ctx.env_var(HTTPSIG_SIGN_HEADER) {
            self.sign_header.get_or_insert(v);
        }

        Ok(self)
    }

    /// Load config from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config_invalid("failed to parse toml config").with_source(e))
    }

    /// Fill the fields not set in `self` from `other`.
    pub fn merge(self, other: Config) -> Self {
        Self {
            key_id: self.key_id.or(other.key_id),
            key_type: self.key_type.or(other.key_type),
            secret: self.secret.or(other.secret),
            algorithm: self.algorithm.or(other.algorithm),
            headers: self.headers.or(other.headers),
            sign_header: self.sign_header.or(other.sign_header),
        }
    }
}

fn split_headers(v: &str) -> Vec<String> {
    v.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("key_id", &self.key_id)
            .field("key_type", &self.key_type)
            .field("secret", &self.secret.as_ref().map(Redact::from))
            .field("algorithm", &self.algorithm)
            .field("headers", &self.headers)
            .field("sign_header", &self.sign_header)
            .finish()
    }
}
