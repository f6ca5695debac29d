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

//! Defines the retry policy for the HTTP transport.
//!
//! The storage service [recommends] retrying 408, 429, and all 5xx HTTP
//! status codes, as well as I/O errors and timeouts. Only idempotent requests
//! are retried.
//!
//! [recommends]: https://cloud.google.com/storage/docs/retry-strategy

use gax::error::Error;
use gax::retry_policy::{LimitedAttemptCount, RetryPolicy};
use gax::retry_result::RetryResult;
use gax::retry_state::RetryState;

/// The retry policy used by the transport.
///
/// Makes at most `retries + 1` attempts.
pub(crate) fn with_retries(retries: u32) -> impl RetryPolicy {
    LimitedAttemptCount::custom(RetryableErrors, retries.saturating_add(1))
}

/// Follows the [retry strategy] recommended by the Cloud Storage service guides.
///
/// [retry strategy]: https://cloud.google.com/storage/docs/retry-strategy
#[derive(Clone, Debug)]
pub(crate) struct RetryableErrors;

impl RetryPolicy for RetryableErrors {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !state.idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        if let Some(code) = error.http_status_code() {
            return match code {
                408 | 429 | 500..600 => RetryResult::Continue(error),
                _ => RetryResult::Permanent(error),
            };
        }
        RetryResult::Permanent(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use http::HeaderMap;
    use test_case::test_case;

    fn http_error(code: u16) -> Error {
        Error::http(code, HeaderMap::new(), bytes::Bytes::from_static(b"err"))
    }

    #[test_case(408)]
    #[test_case(429)]
    #[test_case(500)]
    #[test_case(502)]
    #[test_case(503)]
    #[test_case(504)]
    fn retryable_http(code: u16) {
        let p = RetryableErrors;
        assert!(
            p.on_error(&RetryState::new(true), http_error(code))
                .is_continue()
        );
        assert!(
            p.on_error(&RetryState::new(false), http_error(code))
                .is_permanent()
        );
    }

    #[test_case(400)]
    #[test_case(401)]
    #[test_case(403)]
    #[test_case(404)]
    #[test_case(409)]
    #[test_case(412)]
    fn permanent_http(code: u16) {
        let p = RetryableErrors;
        assert!(
            p.on_error(&RetryState::new(true), http_error(code))
                .is_permanent()
        );
        assert!(
            p.on_error(&RetryState::new(false), http_error(code))
                .is_permanent()
        );
    }

    #[test]
    fn io_and_timeout() {
        let p = RetryableErrors;
        assert!(
            p.on_error(&RetryState::new(true), Error::io("reset"))
                .is_continue()
        );
        assert!(
            p.on_error(&RetryState::new(true), Error::timeout("slow"))
                .is_continue()
        );
        assert!(
            p.on_error(&RetryState::new(false), Error::io("reset"))
                .is_permanent()
        );
        assert!(
            p.on_error(&RetryState::new(false), Error::timeout("slow"))
                .is_permanent()
        );
    }

    #[test]
    fn permanent_other() {
        let p = RetryableErrors;
        // Without HTTP metadata the error did not come from this transport.
        let status = Status::default().set_code(Code::Unavailable);
        assert!(
            p.on_error(&RetryState::new(true), Error::service(status))
                .is_permanent()
        );
        assert!(
            p.on_error(&RetryState::new(true), Error::deser("bad json"))
                .is_permanent()
        );
    }

    #[test]
    fn attempt_limit() {
        let p = with_retries(2);
        let state = RetryState::new(true);
        assert!(
            p.on_error(&state.clone().set_attempt_count(1_u32), http_error(503))
                .is_continue()
        );
        assert!(
            p.on_error(&state.clone().set_attempt_count(2_u32), http_error(503))
                .is_continue()
        );
        assert!(
            p.on_error(&state.set_attempt_count(3_u32), http_error(503))
                .is_exhausted()
        );
    }

    #[test]
    fn zero_retries() {
        let p = with_retries(0);
        let state = RetryState::new(true).set_attempt_count(1_u32);
        assert!(p.on_error(&state, http_error(503)).is_exhausted());
    }
}
