// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration for the service adapter.

use auth::credentials::Credentials;
use std::time::Duration;

/// The number of retries used when the application does not configure one.
pub const DEFAULT_RETRIES: u32 = 3;

/// The default endpoint for the Cloud Storage JSON API.
pub const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";

pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// The configuration bound to a [Service][crate::client::Service] for its
/// entire lifetime.
///
/// Applications rarely create this type directly, use
/// [Service::builder()][crate::client::Service::builder] instead.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ClientConfig {
    /// Overrides the default endpoint.
    pub endpoint: Option<String>,
    /// Overrides the default credentials.
    pub credentials: Option<Credentials>,
    /// The number of additional attempts made by the transport when a request
    /// fails with a transient error.
    pub retries: u32,
    /// The timeout for each attempt. If `None` the transport default applies.
    pub timeout: Option<Duration>,
    /// Log each request, see also `GOOGLE_CLOUD_RUST_LOGGING`.
    pub tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            credentials: None,
            retries: DEFAULT_RETRIES,
            timeout: None,
            tracing: false,
        }
    }
}

// Returns true if the environment or client configuration enables tracing.
pub(crate) fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}
