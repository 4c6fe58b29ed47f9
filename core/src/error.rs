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

use std::fmt;
use thiserror::Error;

/// The error type for httpsig operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    header_name: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The algorithm belongs to a different key family than the key material.
    AlgorithmMismatch,

    /// No algorithm was given and none can be inferred.
    AlgorithmUnresolvable,

    /// The key material is not usable by any supported algorithm family.
    UnsupportedKeyType,

    /// A header named in the header list is absent from the request.
    MissingHeader,

    /// Request cannot be signed (invalid header values, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (crypto backend failures, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            header_name: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the missing header, set for [`ErrorKind::MissingHeader`].
    pub fn header_name(&self) -> Option<&str> {
        self.header_name.as_deref()
    }

    /// Check if this error was raised while building a signer.
    ///
    /// Such errors are configuration bugs and retrying will not help.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::AlgorithmMismatch
                | ErrorKind::AlgorithmUnresolvable
                | ErrorKind::UnsupportedKeyType
                | ErrorKind::ConfigInvalid
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an algorithm mismatch error
    pub fn algorithm_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlgorithmMismatch, message)
    }

    /// Create an algorithm unresolvable error
    pub fn algorithm_unresolvable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlgorithmUnresolvable, message)
    }

    /// Create an unsupported key type error
    pub fn unsupported_key_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedKeyType, message)
    }

    /// Create a missing header error for the given header name.
    pub fn missing_header(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut err = Self::new(
            ErrorKind::MissingHeader,
            format!("header `{name}` is required for signing but not present"),
        );
        err.header_name = Some(name);
        err
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::AlgorithmMismatch => write!(f, "algorithm mismatch"),
            ErrorKind::AlgorithmUnresolvable => write!(f, "unresolvable algorithm"),
            ErrorKind::UnsupportedKeyType => write!(f, "unsupported key type"),
            ErrorKind::MissingHeader => write!(f, "missing header"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
