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

//! Signing string construction.
//!
//! The signing string is the exact byte sequence signed on the client and
//! rebuilt by the verifier from the `headers` parameter, so its layout is
//! fixed: one `name: value` line per covered header, names lower-cased,
//! lines joined by `\n`, no trailing newline.

use crate::constants::{DEFAULT_HEADERS, REQUEST_TARGET};
use http::header::{HeaderName, HOST};
use httpsig_core::{Error, Result, SigningRequest};
use std::fmt::{Display, Formatter, Write};

/// One entry of the header list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// `(request-target)`: the lower-cased method and the path.
    RequestTarget,
    /// A real request header.
    Header(HeaderName),
}

impl Component {
    /// Name as it appears in the signing string and the `headers` parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Component::RequestTarget => REQUEST_TARGET,
            Component::Header(name) => name.as_str(),
        }
    }

    fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim().to_ascii_lowercase();
        if name == REQUEST_TARGET {
            return Ok(Component::RequestTarget);
        }

        HeaderName::from_bytes(name.as_bytes())
            .map(Component::Header)
            .map_err(|e| {
                Error::config_invalid(format!("`{raw}` is not a valid header name")).with_source(e)
            })
    }
}

/// Ordered list of headers covered by the signature.
///
/// Names are case-insensitive and stored lower-cased. Order is preserved
/// since it decides both the signed bytes and the `headers` parameter.
/// Duplicates are dropped, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    components: Vec<Component>,
}

impl HeaderSpec {
    /// Build a header list. An empty input falls back to `["date"]`.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut components: Vec<Component> = Vec::new();
        for name in names {
            let component = Component::parse(name.as_ref())?;
            if !components.contains(&component) {
                components.push(component);
            }
        }

        if components.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self { components })
    }

    /// Iterate over the covered components in order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Check whether the given header is covered.
    pub fn contains(&self, name: &HeaderName) -> bool {
        self.components
            .iter()
            .any(|c| matches!(c, Component::Header(h) if h == name))
    }

    /// Number of covered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false: an empty list falls back to the default.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self {
            components: DEFAULT_HEADERS
                .iter()
                .map(|name| Component::Header(HeaderName::from_static(*name)))
                .collect(),
        }
    }
}

/// Space-joined lower-cased names, the value of the `headers` parameter.
impl Display for HeaderSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, c) in self.components.iter().enumerate() {
            if idx > 0 {
                f.write_char(' ')?;
            }
            f.write_str(c.as_str())?;
        }
        Ok(())
    }
}

/// Build the signing string for `req` covering `spec`.
///
/// - `(request-target)` emits `(request-target): {method} {path}` with the
///   method lower-cased.
/// - `host` falls back to [`SigningRequest::host`] when the request carries
///   no `Host` header yet.
/// - Any other absent header fails with
///   [`httpsig_core::ErrorKind::MissingHeader`]: a partial string is never
///   returned.
pub fn build(req: &SigningRequest, spec: &HeaderSpec) -> Result<String> {
    let mut s = String::new();
    for (idx, component) in spec.iter().enumerate() {
        if idx > 0 {
            s.push('\n');
        }

        match component {
            Component::RequestTarget => {
                write!(
                    s,
                    "{REQUEST_TARGET}: {} {}",
                    req.method.as_str().to_lowercase(),
                    req.path
                )?;
            }
            Component::Header(name) => {
                let value = match req.header_value(name)? {
                    Some(v) => v,
                    None if *name == HOST => req
                        .host
                        .clone()
                        .ok_or_else(|| Error::missing_header(name.as_str()))?,
                    None => return Err(Error::missing_header(name.as_str())),
                };
                write!(s, "{}: {}", name.as_str(), value)?;
            }
        }
    }

    Ok(s)
}
