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

//! Core components for signing HTTP requests.
//!
//! This crate provides the foundational types and traits shared by every
//! signing scheme in the httpsig ecosystem.
//!
//! ## Overview
//!
//! - **SigningRequest**: request metadata (method, path, resolved host, headers) a scheme signs
//! - **SignRequest**: the narrow capability a scheme implements, returning the headers to set
//! - **Signer**: glue applying that header delta to `http::request::Parts`
//! - **Context**: environment access used while building signers from configuration
//!
//! ## Example
//!
//! ```
//! use httpsig_core::{Result, SignRequest, Signer, SigningRequest};
//! use http::HeaderMap;
//!
//! #[derive(Debug)]
//! struct StaticToken;
//!
//! impl SignRequest for StaticToken {
//!     fn sign_request(&self, _req: &SigningRequest) -> Result<HeaderMap> {
//!         let mut delta = HeaderMap::new();
//!         delta.insert(http::header::AUTHORIZATION, "Bearer token".parse()?);
//!         Ok(delta)
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let signer = Signer::new(StaticToken);
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: HTTP date helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::Context;
mod env;
pub use env::{Env, OsEnv, StaticEnv};

mod api;
pub use api::SignRequest;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
