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

use crate::Result;
use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

/// Request metadata a signer works on.
///
/// Headers live in an [`HeaderMap`], so every lookup is case-insensitive
/// without lower-casing at call sites.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path including the query string, excluding scheme and host.
    pub path: String,
    /// Host (authority) resolved from the request URL.
    ///
    /// Transports often add the `Host` header only when the request is
    /// written to the wire, so the signer falls back to this value.
    pub host: Option<String>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Create a signing request without headers.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            host: None,
            headers: HeaderMap::new(),
        }
    }

    /// Set the host resolved from the request URL.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Append a header, keeping existing values of the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        self.headers
            .append(HeaderName::from_bytes(name.as_bytes())?, value.parse()?);
        Ok(self)
    }

    /// Build a signing request from http::request::Parts.
    ///
    /// Headers are copied: the request itself is only touched by [`SigningRequest::apply`].
    pub fn build(parts: &http::request::Parts) -> Self {
        let path = parts
            .uri
            .path_and_query()
            .map(|paq| paq.as_str())
            .filter(|paq| !paq.is_empty())
            .unwrap_or("/")
            .to_string();

        SigningRequest {
            method: parts.method.clone(),
            path,
            host: parts.uri.authority().map(|v| v.as_str().to_string()),
            headers: parts.headers.clone(),
        }
    }

    /// Merge a header delta into http::request::Parts.
    ///
    /// Entries in `delta` replace every existing value of the same name.
    pub fn apply(delta: HeaderMap, parts: &mut http::request::Parts) {
        let mut last: Option<HeaderName> = None;
        for (name, value) in delta {
            match name {
                Some(name) => {
                    parts.headers.insert(name.clone(), value);
                    last = Some(name);
                }
                // Follow-up values of the previous name.
                None => {
                    if let Some(name) = &last {
                        parts.headers.append(name.clone(), value);
                    }
                }
            }
        }
    }

    /// Get header value by name.
    ///
    /// Multiple values are joined with `", "` in the order they were added,
    /// and surrounding whitespace is trimmed. Returns `None` if the header is absent.
    pub fn header_value(&self, name: &HeaderName) -> Result<Option<String>> {
        let mut values = self.headers.get_all(name).iter().peekable();
        if values.peek().is_none() {
            return Ok(None);
        }

        let mut s = String::new();
        for (idx, v) in values.enumerate() {
            if idx > 0 {
                s.push_str(", ");
            }
            s.push_str(Self::header_value_normalize(v)?);
        }
        Ok(Some(s))
    }

    /// Check whether the header is present.
    #[inline]
    pub fn contains_header(&self, name: &HeaderName) -> bool {
        self.headers.contains_key(name)
    }

    fn header_value_normalize(v: &HeaderValue) -> Result<&str> {
        Ok(v.to_str()?.trim())
    }
}
