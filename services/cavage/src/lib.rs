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

//! HTTP Signatures (draft-cavage) signer.
//!
//! [`HeaderSigner`] builds the signing string from the configured list of
//! headers, signs it with one of [`Algorithm`] and returns the headers to set
//! on the request: the signature header and, when it was generated, `date`.
//!
//! ```
//! use httpsig_cavage::{Algorithm, HeaderSigner, KeyMaterial};
//! use httpsig_core::Signer;
//!
//! # fn main() -> httpsig_core::Result<()> {
//! let signer = Signer::new(
//!     HeaderSigner::builder("k1", KeyMaterial::hmac("secret"))
//!         .algorithm(Algorithm::HmacSha256)
//!         .headers(["(request-target)", "host", "date"])
//!         .build()?,
//! );
//!
//! let (mut parts, _) = http::Request::get("https://example.com/foo")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts();
//! signer.sign(&mut parts)?;
//! assert!(parts.headers.contains_key("authorization"));
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod algorithm;
pub use algorithm::{Algorithm, KeyFamily};

mod key;
pub use key::KeyMaterial;

pub mod signing_string;
pub use signing_string::{Component, HeaderSpec};

mod config;
pub use config::Config;

mod sign_request;
pub use sign_request::{HeaderSigner, HeaderSignerBuilder};
