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

use httpsig_core::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Key family an algorithm belongs to.
///
/// The family of the key material decides which algorithms are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// RSA private key, PKCS#1 v1.5 signatures.
    Rsa,
    /// NIST P-256 private key, ECDSA signatures.
    Ecdsa,
    /// Shared secret, HMAC.
    Hmac,
}

impl KeyFamily {
    /// Name of the family as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFamily::Rsa => "rsa",
            KeyFamily::Ecdsa => "ecdsa",
            KeyFamily::Hmac => "hmac",
        }
    }
}

impl Display for KeyFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rsa" => Ok(KeyFamily::Rsa),
            "ecdsa" | "ec" => Ok(KeyFamily::Ecdsa),
            "hmac" => Ok(KeyFamily::Hmac),
            v => Err(Error::unsupported_key_type(format!(
                "key type `{v}` is not supported, expect one of rsa, ecdsa or hmac"
            ))),
        }
    }
}

/// Signature algorithm, a (key family, digest) pair.
///
/// Named by its wire name, e.g. `hmac-sha256`. Parsing, from a string or
/// through serde, is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `rsa-sha1`
    RsaSha1,
    /// `rsa-sha256`
    RsaSha256,
    /// `rsa-sha512`
    RsaSha512,
    /// `hmac-sha1`
    HmacSha1,
    /// `hmac-sha256`
    HmacSha256,
    /// `hmac-sha512`
    HmacSha512,
    /// `ecdsa-sha256`
    EcdsaSha256,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::RsaSha1,
        Algorithm::RsaSha256,
        Algorithm::RsaSha512,
        Algorithm::HmacSha1,
        Algorithm::HmacSha256,
        Algorithm::HmacSha512,
        Algorithm::EcdsaSha256,
    ];

    /// Wire name of the algorithm, as emitted in the `algorithm` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::RsaSha1 => "rsa-sha1",
            Algorithm::RsaSha256 => "rsa-sha256",
            Algorithm::RsaSha512 => "rsa-sha512",
            Algorithm::HmacSha1 => "hmac-sha1",
            Algorithm::HmacSha256 => "hmac-sha256",
            Algorithm::HmacSha512 => "hmac-sha512",
            Algorithm::EcdsaSha256 => "ecdsa-sha256",
        }
    }

    /// Key family this algorithm needs.
    pub fn family(&self) -> KeyFamily {
        match self {
            Algorithm::RsaSha1 | Algorithm::RsaSha256 | Algorithm::RsaSha512 => KeyFamily::Rsa,
            Algorithm::HmacSha1 | Algorithm::HmacSha256 | Algorithm::HmacSha512 => {
                KeyFamily::Hmac
            }
            Algorithm::EcdsaSha256 => KeyFamily::Ecdsa,
        }
    }

    /// Algorithm used when none is configured for a key of this family.
    pub fn default_for(family: KeyFamily) -> Algorithm {
        match family {
            KeyFamily::Rsa => Algorithm::RsaSha256,
            KeyFamily::Ecdsa => Algorithm::EcdsaSha256,
            KeyFamily::Hmac => Algorithm::HmacSha256,
        }
    }

    /// Check that `family` can be used with this algorithm.
    pub fn check_family(&self, family: KeyFamily) -> Result<()> {
        if self.family() == family {
            return Ok(());
        }

        Err(Error::algorithm_mismatch(format!(
            "algorithm `{self}` requires a {} key but got a {family} key",
            self.family()
        )))
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == name)
            .ok_or_else(|| Error::config_invalid(format!("algorithm `{s}` is not supported")))
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
