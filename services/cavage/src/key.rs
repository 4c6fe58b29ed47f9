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

use crate::algorithm::{Algorithm, KeyFamily};
use httpsig_core::hash::{hmac_sha1, hmac_sha256, hmac_sha512};
use httpsig_core::utils::Redact;
use httpsig_core::{Error, Result};
use p256::ecdsa::DerSignature;
use p256::pkcs8::DecodePrivateKey as _;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt::{Debug, Formatter};

/// Secret used to sign requests.
///
/// The variant decides which [`Algorithm`]s can be used with it. Keys are
/// parsed from in-memory PEM text only; reading key files is up to the caller.
#[derive(Clone)]
pub enum KeyMaterial {
    /// RSA private key.
    Rsa(RsaPrivateKey),
    /// NIST P-256 private key.
    Ecdsa(p256::ecdsa::SigningKey),
    /// Shared HMAC secret.
    Hmac(Vec<u8>),
}

impl KeyMaterial {
    /// Use the given bytes as HMAC secret.
    pub fn hmac(secret: impl AsRef<[u8]>) -> Self {
        KeyMaterial::Hmac(secret.as_ref().to_vec())
    }

    /// Parse an RSA private key from PKCS#8 (`BEGIN PRIVATE KEY`) or
    /// PKCS#1 (`BEGIN RSA PRIVATE KEY`) PEM.
    pub fn rsa_from_pem(pem: &str) -> Result<Self> {
        let key = match RsaPrivateKey::from_pkcs8_pem(pem) {
            Ok(key) => key,
            Err(pkcs8_err) => RsaPrivateKey::from_pkcs1_pem(pem).map_err(|e| {
                Error::config_invalid(format!(
                    "parse rsa private key failed: not PKCS#8 ({pkcs8_err}) nor PKCS#1 ({e})"
                ))
            })?,
        };
        Ok(KeyMaterial::Rsa(key))
    }

    /// Parse a P-256 private key from PKCS#8 (`BEGIN PRIVATE KEY`) or
    /// SEC1 (`BEGIN EC PRIVATE KEY`) PEM.
    pub fn ecdsa_from_pem(pem: &str) -> Result<Self> {
        let key = match p256::ecdsa::SigningKey::from_pkcs8_pem(pem) {
            Ok(key) => key,
            Err(pkcs8_err) => {
                let secret = p256::SecretKey::from_sec1_pem(pem).map_err(|e| {
                    Error::config_invalid(format!(
                        "parse ecdsa private key failed: not PKCS#8 ({pkcs8_err}) nor SEC1 ({e})"
                    ))
                })?;
                p256::ecdsa::SigningKey::from(secret)
            }
        };
        Ok(KeyMaterial::Ecdsa(key))
    }

    /// Build key material of the given family from its textual form: PEM for
    /// asymmetric keys, the raw passphrase for HMAC.
    pub fn from_secret(family: KeyFamily, secret: &str) -> Result<Self> {
        match family {
            KeyFamily::Rsa => Self::rsa_from_pem(secret),
            KeyFamily::Ecdsa => Self::ecdsa_from_pem(secret),
            KeyFamily::Hmac => Ok(Self::hmac(secret)),
        }
    }

    /// Key family of this material.
    pub fn family(&self) -> KeyFamily {
        match self {
            KeyMaterial::Rsa(_) => KeyFamily::Rsa,
            KeyMaterial::Ecdsa(_) => KeyFamily::Ecdsa,
            KeyMaterial::Hmac(_) => KeyFamily::Hmac,
        }
    }
}

impl From<RsaPrivateKey> for KeyMaterial {
    fn from(key: RsaPrivateKey) -> Self {
        KeyMaterial::Rsa(key)
    }
}

impl From<p256::ecdsa::SigningKey> for KeyMaterial {
    fn from(key: p256::ecdsa::SigningKey) -> Self {
        KeyMaterial::Ecdsa(key)
    }
}

impl Debug for KeyMaterial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMaterial::Rsa(key) => f
                .debug_struct("Rsa")
                .field("bits", &(key.size() * 8))
                .finish_non_exhaustive(),
            KeyMaterial::Ecdsa(_) => f
                .debug_struct("Ecdsa")
                .field("curve", &"P-256")
                .finish_non_exhaustive(),
            KeyMaterial::Hmac(secret) => f.debug_tuple("Hmac").field(&Redact::from(secret)).finish(),
        }
    }
}

/// Key bound to a single algorithm, ready to sign.
///
/// Resolved once when a signer is built so signing never re-parses keys or
/// re-checks the algorithm.
#[derive(Clone)]
pub(crate) enum SigningKey {
    RsaSha1(pkcs1v15::SigningKey<Sha1>),
    RsaSha256(pkcs1v15::SigningKey<Sha256>),
    RsaSha512(pkcs1v15::SigningKey<Sha512>),
    HmacSha1(Vec<u8>),
    HmacSha256(Vec<u8>),
    HmacSha512(Vec<u8>),
    EcdsaSha256(p256::ecdsa::SigningKey),
}

impl SigningKey {
    /// Bind `key` to `algorithm`.
    ///
    /// Fails with [`httpsig_core::ErrorKind::AlgorithmMismatch`] when the key
    /// family does not fit the algorithm.
    pub(crate) fn new(algorithm: Algorithm, key: KeyMaterial) -> Result<Self> {
        algorithm.check_family(key.family())?;

        let signing_key = match (algorithm, key) {
            (Algorithm::RsaSha1, KeyMaterial::Rsa(k)) => {
                SigningKey::RsaSha1(pkcs1v15::SigningKey::new(k))
            }
            (Algorithm::RsaSha256, KeyMaterial::Rsa(k)) => {
                SigningKey::RsaSha256(pkcs1v15::SigningKey::new(k))
            }
            (Algorithm::RsaSha512, KeyMaterial::Rsa(k)) => {
                SigningKey::RsaSha512(pkcs1v15::SigningKey::new(k))
            }
            (Algorithm::HmacSha1, KeyMaterial::Hmac(k)) => SigningKey::HmacSha1(k),
            (Algorithm::HmacSha256, KeyMaterial::Hmac(k)) => SigningKey::HmacSha256(k),
            (Algorithm::HmacSha512, KeyMaterial::Hmac(k)) => SigningKey::HmacSha512(k),
            (Algorithm::EcdsaSha256, KeyMaterial::Ecdsa(k)) => SigningKey::EcdsaSha256(k),
            (alg, key) => {
                return Err(Error::algorithm_mismatch(format!(
                    "algorithm `{alg}` can't be used with a {} key",
                    key.family()
                )))
            }
        };
        Ok(signing_key)
    }

    /// Sign `content` and return the raw signature bytes.
    ///
    /// RSA signatures are PKCS#1 v1.5, ECDSA signatures are DER encoded and
    /// deterministic (RFC 6979).
    pub(crate) fn sign(&self, content: &[u8]) -> Result<Vec<u8>> {
        let signature = match self {
            SigningKey::RsaSha1(k) => k.try_sign(content).map(|s| s.to_vec()),
            SigningKey::RsaSha256(k) => k.try_sign(content).map(|s| s.to_vec()),
            SigningKey::RsaSha512(k) => k.try_sign(content).map(|s| s.to_vec()),
            SigningKey::HmacSha1(k) => return hmac_sha1(k, content),
            SigningKey::HmacSha256(k) => return hmac_sha256(k, content),
            SigningKey::HmacSha512(k) => return hmac_sha512(k, content),
            SigningKey::EcdsaSha256(k) => {
                Signer::<DerSignature>::try_sign(k, content).map(|s| s.to_vec())
            }
        };

        signature.map_err(|e| Error::unexpected(format!("failed to sign: {e}")))
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SigningKey::RsaSha1(_) => "RsaSha1",
            SigningKey::RsaSha256(_) => "RsaSha256",
            SigningKey::RsaSha512(_) => "RsaSha512",
            SigningKey::HmacSha1(_) => "HmacSha1",
            SigningKey::HmacSha256(_) => "HmacSha256",
            SigningKey::HmacSha512(_) => "HmacSha512",
            SigningKey::EcdsaSha256(_) => "EcdsaSha256",
        };
        f.debug_tuple(name).field(&"***").finish()
    }
}
