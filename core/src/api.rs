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

use crate::{Result, SigningRequest};
use http::HeaderMap;
use std::fmt::Debug;
use std::sync::Arc;

/// SignRequest is the capability every signing scheme implements.
///
/// Implementations own their key material and are immutable after
/// construction, so one instance can sign from many threads at once.
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Compute the headers that must be set on the outgoing request.
    ///
    /// The request itself is never modified. Callers merge the returned
    /// delta, overwriting existing headers of the same name. On error
    /// nothing is returned and nothing must be applied.
    fn sign_request(&self, req: &SigningRequest) -> Result<HeaderMap>;
}

impl<T: SignRequest + ?Sized> SignRequest for Arc<T> {
    fn sign_request(&self, req: &SigningRequest) -> Result<HeaderMap> {
        self.as_ref().sign_request(req)
    }
}

impl<T: SignRequest + ?Sized> SignRequest for Box<T> {
    fn sign_request(&self, req: &SigningRequest) -> Result<HeaderMap> {
        self.as_ref().sign_request(req)
    }
}
