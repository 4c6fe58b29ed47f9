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

use crate::{Result, SignRequest, SigningRequest};
use http::HeaderMap;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// It is the glue between any HTTP client built on the `http` crate and a
/// [`SignRequest`] implementation: call [`Signer::sign`] from the client's
/// request interception point, right before the request is sent.
#[derive(Clone, Debug)]
pub struct Signer {
    inner: Arc<dyn SignRequest>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(inner: impl SignRequest) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Compute the header delta for the given request metadata.
    pub fn sign_request(&self, req: &SigningRequest) -> Result<HeaderMap> {
        self.inner.sign_request(req)
    }

    /// Signing request.
    ///
    /// The host used for a `host` header that is not set yet is taken from
    /// the request URI. `parts` is left untouched when signing fails.
    pub fn sign(&self, parts: &mut http::request::Parts) -> Result<()> {
        let req = SigningRequest::build(parts);
        let delta = self.inner.sign_request(&req)?;
        SigningRequest::apply(delta, parts);
        Ok(())
    }
}
