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

//! Google Cloud Client Libraries for Rust - Storage JSON API service adapter
//!
//! This crate contains a thin adapter over the [Google Cloud Storage] JSON API.
//! Most applications will use the [Service][client::Service] type, which
//! exposes one method per remote operation:
//!
//! * buckets: list, get, insert, patch, delete
//! * bucket access controls: list, get, insert, patch, delete
//! * default object access controls: list, get, insert, patch, delete
//! * objects: list, get, insert, patch, delete, copy, download
//! * object access controls: list, get, insert, patch, delete
//!
//! Each method performs exactly one call to the underlying transport, and
//! any failure reported by the transport is returned as an [Error] whose
//! [kind][Error::kind] is computed from the HTTP status code.
//!
//! The transport is defined by the [stub::Storage] trait. Applications can
//! provide their own implementation, typically a mock, using
//! [Service::from_stub][client::Service::from_stub].
//!
//! [Google Cloud Storage]: https://cloud.google.com/storage

pub mod acl;
pub mod client_builder;
pub mod config;
pub mod encryption;
pub mod error;
pub mod mime;
pub mod model;
pub mod options;
pub mod stub;

pub use error::Error;

/// The result type returned by all the [Service][client::Service] operations.
pub type Result<T> = std::result::Result<T, Error>;

mod backoff_policy;
mod retry_policy;
mod service;
mod transport;

/// The service adapter and its builder.
pub mod client {
    pub use crate::service::{ClientBuilder, Service};
    pub use crate::transport::HttpStorage;
}
