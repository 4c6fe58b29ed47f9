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

/// Pseudo-header covering the request method and path.
pub const REQUEST_TARGET: &str = "(request-target)";
/// Header list used when none is configured.
pub const DEFAULT_HEADERS: &[&str] = &["date"];
/// Scheme token prefixed to the value when signing into `Authorization`.
pub const SIGNATURE_SCHEME: &str = "Signature";

// Env values used by Config::from_env.
pub const HTTPSIG_KEY_ID: &str = "HTTPSIG_KEY_ID";
pub const HTTPSIG_KEY_TYPE: &str = "HTTPSIG_KEY_TYPE";
pub const HTTPSIG_SECRET: &str = "HTTPSIG_SECRET";
pub const HTTPSIG_ALGORITHM: &str = "HTTPSIG_ALGORITHM";
pub const HTTPSIG_HEADERS: &str = "HTTPSIG_HEADERS";
pub const HTTPSIG_SIGN_HEADER: &str = "HTTPSIG_SIGN_HEADER";
