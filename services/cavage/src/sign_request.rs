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
use crate::config::Config;
use crate::constants::SIGNATURE_SCHEME;
use crate::key::{KeyMaterial, SigningKey};
use crate::signing_string::{self, HeaderSpec};
use http::header::{HeaderName, AUTHORIZATION, DATE};
use http::{HeaderMap, HeaderValue};
use httpsig_core::hash::base64_encode;
use httpsig_core::time::{format_http_date, now, DateTime};
use httpsig_core::{Error, Result, SignRequest, SigningRequest};
use log::debug;
use std::borrow::Cow;
use std::fmt::{Debug, Formatter, Write};

/// HeaderSigner implements the HTTP Signatures scheme.
///
/// - [Signing HTTP Messages](https://datatracker.ietf.org/doc/html/draft-cavage-http-signatures-12)
///
/// The signer is immutable once built: it can be shared across threads and
/// every call to [`HeaderSigner::sign`] is independent.
///
/// ```
/// use httpsig_cavage::{HeaderSigner, KeyMaterial};
/// use httpsig_core::SigningRequest;
///
/// # fn main() -> httpsig_core::Result<()> {
/// let signer = HeaderSigner::builder("k1", KeyMaterial::hmac("secret"))
///     .headers(["(request-target)", "host", "date"])
///     .build()?;
///
/// let req = SigningRequest::new(http::Method::GET, "/foo?p=1").with_host("api.example.com");
/// let delta = signer.sign(&req)?;
/// assert!(delta.contains_key("date"));
/// assert!(delta["authorization"].to_str()?.starts_with("Signature keyId=\"k1\""));
/// # Ok(())
/// # }
/// ```
pub struct HeaderSigner {
    key_id: String,
    algorithm: Algorithm,
    headers: HeaderSpec,
    sign_header: HeaderName,
    key: SigningKey,
    time: Option<DateTime>,
}

/// Builder of [`HeaderSigner`]. All checks happen in [`HeaderSignerBuilder::build`].
pub struct HeaderSignerBuilder {
    key_id: String,
    secret: KeyMaterial,
    algorithm: Option<Algorithm>,
    headers: Vec<String>,
    sign_header: Option<String>,
}

impl HeaderSigner {
    /// Create a builder for a signer using `secret`, announced to the
    /// verifier as `key_id`.
    ///
    /// `key_id` is written verbatim between double quotes: it must not
    /// contain `"` itself, no escaping is applied.
    pub fn builder(key_id: impl Into<String>, secret: KeyMaterial) -> HeaderSignerBuilder {
        HeaderSignerBuilder {
            key_id: key_id.into(),
            secret,
            algorithm: None,
            headers: Vec::new(),
            sign_header: None,
        }
    }

    /// Build a signer from [`Config`].
    ///
    /// The key family comes from `key_type`, or from `algorithm` when
    /// `key_type` is not set. `secret` is parsed as PEM for asymmetric
    /// families and used as-is for HMAC.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let key_id = cfg
            .key_id
            .as_deref()
            .ok_or_else(|| Error::config_invalid("key_id is required"))?;
        let secret = cfg
            .secret
            .as_deref()
            .ok_or_else(|| Error::config_invalid("secret is required"))?;

        let family = match (&cfg.key_type, cfg.algorithm) {
            (Some(key_type), _) => key_type.trim().to_ascii_lowercase().parse::<KeyFamily>()?,
            (None, Some(alg)) => alg.family(),
            (None, None) => {
                return Err(Error::algorithm_unresolvable(
                    "neither key_type nor algorithm is configured",
                ))
            }
        };

        let mut builder = Self::builder(key_id, KeyMaterial::from_secret(family, secret)?);
        if let Some(alg) = cfg.algorithm {
            builder = builder.algorithm(alg);
        }
        if let Some(headers) = &cfg.headers {
            builder = builder.headers(headers.iter().cloned());
        }
        if let Some(name) = &cfg.sign_header {
            builder = builder.sign_header(name.clone());
        }
        builder.build()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The key id announced to the verifier.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The algorithm used to sign.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The headers covered by every signature.
    pub fn headers(&self) -> &HeaderSpec {
        &self.headers
    }

    /// The header the signature is written into.
    pub fn sign_header(&self) -> &HeaderName {
        &self.sign_header
    }

    /// Sign the request and return the headers to set on it.
    ///
    /// The delta always holds the signature header. It also holds `date`
    /// when `date` is covered and the request has none: the value is
    /// generated now and is part of what gets signed, so it must be sent
    /// as-is. An existing `date` is never replaced.
    pub fn sign(&self, req: &SigningRequest) -> Result<HeaderMap> {
        let mut delta = HeaderMap::new();

        let req = if self.headers.contains(&DATE) && !req.contains_header(&DATE) {
            let date: HeaderValue = format_http_date(self.time.unwrap_or_else(now)).parse()?;
            delta.insert(DATE, date.clone());

            let mut req = req.clone();
            req.headers.insert(DATE, date);
            Cow::Owned(req)
        } else {
            Cow::Borrowed(req)
        };

        let string_to_sign = signing_string::build(&req, &self.headers)?;
        debug!("string to sign: {}", &string_to_sign);

        let signature = base64_encode(&self.key.sign(string_to_sign.as_bytes())?);

        let mut value: HeaderValue = self.signature_value(&signature)?.parse()?;
        value.set_sensitive(true);
        delta.insert(self.sign_header.clone(), value);

        Ok(delta)
    }

    /// Format the signature parameters.
    ///
    /// `Authorization` gets the `Signature` scheme token in front, any other
    /// header carries the bare parameter list.
    fn signature_value(&self, signature: &str) -> Result<String> {
        let mut s = String::new();
        if self.sign_header == AUTHORIZATION {
            write!(s, "{SIGNATURE_SCHEME} ")?;
        }
        write!(s, "keyId=\"{}\",", self.key_id)?;
        write!(s, "algorithm=\"{}\",", self.algorithm)?;
        write!(s, "headers=\"{}\",", self.headers)?;
        write!(s, "signature=\"{signature}\"")?;
        Ok(s)
    }
}

impl SignRequest for HeaderSigner {
    fn sign_request(&self, req: &SigningRequest) -> Result<HeaderMap> {
        self.sign(req)
    }
}

impl Debug for HeaderSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderSigner")
            .field("key_id", &self.key_id)
            .field("algorithm", &self.algorithm)
            .field("headers", &self.headers.to_string())
            .field("sign_header", &self.sign_header)
            .field("key", &self.key)
            .finish()
    }
}

impl HeaderSignerBuilder {
    /// Set the algorithm. Inferred from the key family when not set.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the ordered list of headers to sign. Defaults to `["date"]`.
    ///
    /// `(request-target)` covers the method and path.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the header the signature is written into. Defaults to `authorization`.
    pub fn sign_header(mut self, name: impl Into<String>) -> Self {
        self.sign_header = Some(name.into());
        self
    }

    /// Validate the configuration and build the signer.
    ///
    /// Fails with `AlgorithmMismatch` when the algorithm doesn't fit the key.
    /// Fails with `ConfigInvalid` for an empty or malformed key id, an invalid
    /// header name, or a sign header that is invalid or covered by the
    /// signature.
    pub fn build(self) -> Result<HeaderSigner> {
        if self.key_id.is_empty() {
            return Err(Error::config_invalid("key_id must not be empty"));
        }
        HeaderValue::from_str(&self.key_id).map_err(|e| {
            Error::config_invalid("key_id is not a valid header value").with_source(e)
        })?;

        let family = self.secret.family();
        let algorithm = match self.algorithm {
            Some(alg) => {
                alg.check_family(family)?;
                alg
            }
            None => Algorithm::default_for(family),
        };

        let headers = HeaderSpec::new(&self.headers)?;

        let sign_header = match &self.sign_header {
            Some(name) => HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| {
                Error::config_invalid(format!("sign header `{name}` is not a valid header name"))
                    .with_source(e)
            })?,
            None => AUTHORIZATION,
        };
        if headers.contains(&sign_header) {
            return Err(Error::config_invalid(format!(
                "sign header `{sign_header}` can't be one of the signed headers"
            )));
        }

        let key = SigningKey::new(algorithm, self.secret)?;
        debug!("http signature signer uses {algorithm} over headers `{headers}`");

        Ok(HeaderSigner {
            key_id: self.key_id,
            algorithm,
            headers,
            sign_header,
            key,
            time: None,
        })
    }
}

impl Debug for HeaderSignerBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderSignerBuilder")
            .field("key_id", &self.key_id)
            .field("secret", &self.secret)
            .field("algorithm", &self.algorithm)
            .field("headers", &self.headers)
            .field("sign_header", &self.sign_header)
            .finish()
    }
}
