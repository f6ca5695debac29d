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

//! The error type returned by the service adapter.
//!
//! Every failure reported by the transport is translated into an [Error]. The
//! translation preserves the HTTP status code and the message, and classifies
//! the failure into an [ErrorKind] using a fixed mapping table. The original
//! transport error is available as the [source()][std::error::Error::source]
//! of the translated error.

use gax::error::rpc::Code;

/// The category of a failed operation.
///
/// The category is derived from the HTTP status code returned by the service.
/// When there is no HTTP status code (for example, the error was reported by
/// a mock transport) the category is derived from the status code in the
/// error details, and finally from the type of transport failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request was malformed, or some of its parameters are invalid.
    InvalidArgument,
    /// The request did not include valid credentials.
    Unauthenticated,
    /// The credentials do not grant access to the resource.
    PermissionDenied,
    /// The bucket, object, or access control does not exist.
    NotFound,
    /// The resource already exists, or a concurrent change conflicted.
    AlreadyExists,
    /// A precondition, such as a generation match, failed.
    FailedPrecondition,
    /// Some quota or rate limit was exceeded.
    ResourceExhausted,
    /// The request was cancelled by the client.
    Cancelled,
    /// The service reported an internal error.
    Internal,
    /// The operation is not supported by the service.
    Unimplemented,
    /// The service is unavailable, the request may succeed if retried.
    Unavailable,
    /// The request did not complete before its deadline.
    DeadlineExceeded,
    /// Any other failure.
    Unknown,
}

impl ErrorKind {
    /// Maps an HTTP status code to an error category.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::error::ErrorKind;
    /// assert_eq!(ErrorKind::from_http_status(404), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_http_status(502), ErrorKind::Internal);
    /// ```
    pub fn from_http_status(code: u16) -> Self {
        match code {
            400 => Self::InvalidArgument,
            401 => Self::Unauthenticated,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::AlreadyExists,
            412 => Self::FailedPrecondition,
            429 => Self::ResourceExhausted,
            499 => Self::Cancelled,
            500 => Self::Internal,
            501 => Self::Unimplemented,
            503 => Self::Unavailable,
            504 => Self::DeadlineExceeded,
            502 | 505..600 => Self::Internal,
            _ => Self::Unknown,
        }
    }

    /// Maps an RPC status code to an error category.
    pub fn from_code(code: Code) -> Self {
        match code {
            Code::InvalidArgument | Code::OutOfRange => Self::InvalidArgument,
            Code::Unauthenticated => Self::Unauthenticated,
            Code::PermissionDenied => Self::PermissionDenied,
            Code::NotFound => Self::NotFound,
            Code::AlreadyExists | Code::Aborted => Self::AlreadyExists,
            Code::FailedPrecondition => Self::FailedPrecondition,
            Code::ResourceExhausted => Self::ResourceExhausted,
            Code::Cancelled => Self::Cancelled,
            Code::Internal | Code::Unknown | Code::DataLoss => Self::Internal,
            Code::Unimplemented => Self::Unimplemented,
            Code::Unavailable => Self::Unavailable,
            Code::DeadlineExceeded => Self::DeadlineExceeded,
            _ => Self::Unknown,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::Unauthenticated => "unauthenticated",
            Self::PermissionDenied => "permission denied",
            Self::NotFound => "not found",
            Self::AlreadyExists => "already exists",
            Self::FailedPrecondition => "failed precondition",
            Self::ResourceExhausted => "resource exhausted",
            Self::Cancelled => "cancelled",
            Self::Internal => "internal error",
            Self::Unimplemented => "unimplemented",
            Self::Unavailable => "unavailable",
            Self::DeadlineExceeded => "deadline exceeded",
            Self::Unknown => "unknown error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned by all the service adapter operations.
///
/// # Example
/// ```
/// # use google_cloud_storage_service::{client::Service, error::ErrorKind};
/// # async fn sample(service: &Service) -> anyhow::Result<()> {
/// match service.get_bucket("my-bucket", Default::default()).await {
///     Ok(bucket) => println!("bucket={bucket:?}"),
///     Err(e) if e.kind() == ErrorKind::NotFound => println!("no such bucket"),
///     Err(e) => return Err(e.into()),
/// }
/// # Ok(()) }
/// ```
#[derive(thiserror::Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    status_code: Option<u16>,
    message: String,
    #[source]
    source: gax::error::Error,
}

impl Error {
    /// The category of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The HTTP status code reported by the service, if any.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// The error message reported by the service.
    ///
    /// If the service did not include a message, this is the description of
    /// the transport error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error reported by the transport.
    pub fn transport_error(&self) -> &gax::error::Error {
        &self.source
    }
}

impl From<gax::error::Error> for Error {
    fn from(source: gax::error::Error) -> Self {
        let status_code = source.http_status_code();
        let kind = match (status_code, source.status()) {
            (Some(code), _) => ErrorKind::from_http_status(code),
            (None, Some(status)) => ErrorKind::from_code(status.code),
            (None, None) if source.is_timeout() => ErrorKind::DeadlineExceeded,
            (None, None) if source.is_authentication() => ErrorKind::Unauthenticated,
            (None, None) => ErrorKind::Unknown,
        };
        let message = match (source.status(), source.http_payload()) {
            (Some(status), _) if !status.message.is_empty() => status.message.clone(),
            (_, Some(payload)) if !payload.is_empty() => {
                String::from_utf8_lossy(payload).into_owned()
            }
            _ => source.to_string(),
        };
        Self {
            kind,
            status_code,
            message,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Status;
    use http::HeaderMap;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(400, ErrorKind::InvalidArgument)]
    #[test_case(401, ErrorKind::Unauthenticated)]
    #[test_case(403, ErrorKind::PermissionDenied)]
    #[test_case(404, ErrorKind::NotFound)]
    #[test_case(409, ErrorKind::AlreadyExists)]
    #[test_case(412, ErrorKind::FailedPrecondition)]
    #[test_case(429, ErrorKind::ResourceExhausted)]
    #[test_case(499, ErrorKind::Cancelled)]
    #[test_case(500, ErrorKind::Internal)]
    #[test_case(501, ErrorKind::Unimplemented)]
    #[test_case(502, ErrorKind::Internal)]
    #[test_case(503, ErrorKind::Unavailable)]
    #[test_case(504, ErrorKind::DeadlineExceeded)]
    #[test_case(599, ErrorKind::Internal)]
    #[test_case(308, ErrorKind::Unknown)]
    #[test_case(418, ErrorKind::Unknown)]
    fn http_status(code: u16, want: ErrorKind) {
        assert_eq!(ErrorKind::from_http_status(code), want);
    }

    #[test_case(Code::InvalidArgument, ErrorKind::InvalidArgument)]
    #[test_case(Code::OutOfRange, ErrorKind::InvalidArgument)]
    #[test_case(Code::Unauthenticated, ErrorKind::Unauthenticated)]
    #[test_case(Code::PermissionDenied, ErrorKind::PermissionDenied)]
    #[test_case(Code::NotFound, ErrorKind::NotFound)]
    #[test_case(Code::AlreadyExists, ErrorKind::AlreadyExists)]
    #[test_case(Code::Aborted, ErrorKind::AlreadyExists)]
    #[test_case(Code::FailedPrecondition, ErrorKind::FailedPrecondition)]
    #[test_case(Code::ResourceExhausted, ErrorKind::ResourceExhausted)]
    #[test_case(Code::Cancelled, ErrorKind::Cancelled)]
    #[test_case(Code::Internal, ErrorKind::Internal)]
    #[test_case(Code::DataLoss, ErrorKind::Internal)]
    #[test_case(Code::Unimplemented, ErrorKind::Unimplemented)]
    #[test_case(Code::Unavailable, ErrorKind::Unavailable)]
    #[test_case(Code::DeadlineExceeded, ErrorKind::DeadlineExceeded)]
    #[test_case(Code::Unknown, ErrorKind::Internal)]
    #[test_case(Code::Ok, ErrorKind::Unknown)]
    fn rpc_code(code: Code, want: ErrorKind) {
        assert_eq!(ErrorKind::from_code(code), want);
    }

    #[test]
    fn from_service_unknown_code() {
        let status = Status::default()
            .set_code(Code::Unknown)
            .set_message("unexpected failure");
        let got = Error::from(gax::error::Error::service(status));
        assert_eq!(got.kind(), ErrorKind::Internal);
        assert_eq!(got.status_code(), None);
        assert_eq!(got.message(), "unexpected failure");
    }

    #[test]
    fn from_service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("No such object: my-bucket/my-object");
        let source = gax::error::Error::service_with_http_metadata(
            status,
            Some(404),
            Some(HeaderMap::new()),
        );
        let got = Error::from(source);
        assert_eq!(got.kind(), ErrorKind::NotFound);
        assert_eq!(got.status_code(), Some(404));
        assert_eq!(got.message(), "No such object: my-bucket/my-object");
        assert!(got.source().is_some(), "{got:?}");
        assert_eq!(got.transport_error().http_status_code(), Some(404));
        let fmt = got.to_string();
        assert!(fmt.contains("not found"), "{fmt}");
        assert!(fmt.contains("No such object"), "{fmt}");
    }

    #[test]
    fn http_status_wins_over_rpc_code() {
        let status = Status::default()
            .set_code(Code::Unknown)
            .set_message("conflict");
        let source = gax::error::Error::service_with_http_metadata(status, Some(409), None);
        let got = Error::from(source);
        assert_eq!(got.kind(), ErrorKind::AlreadyExists);
        assert_eq!(got.status_code(), Some(409));
        assert_eq!(got.message(), "conflict");
    }

    #[test]
    fn from_http_payload() {
        let source = gax::error::Error::http(
            412,
            HeaderMap::new(),
            bytes::Bytes::from_static(b"precondition failed"),
        );
        let got = Error::from(source);
        assert_eq!(got.kind(), ErrorKind::FailedPrecondition);
        assert_eq!(got.status_code(), Some(412));
        assert_eq!(got.message(), "precondition failed");
    }

    #[test]
    fn from_service_without_http() {
        let status = Status::default()
            .set_code(Code::Unavailable)
            .set_message("try-again");
        let got = Error::from(gax::error::Error::service(status));
        assert_eq!(got.kind(), ErrorKind::Unavailable);
        assert_eq!(got.status_code(), None);
        assert_eq!(got.message(), "try-again");
    }

    #[test]
    fn from_timeout() {
        let got = Error::from(gax::error::Error::timeout("too slow"));
        assert_eq!(got.kind(), ErrorKind::DeadlineExceeded);
        assert_eq!(got.status_code(), None);
        assert!(!got.message().is_empty());
    }

    #[test]
    fn from_io() {
        let got = Error::from(gax::error::Error::io("connection reset"));
        assert_eq!(got.kind(), ErrorKind::Unknown);
        assert_eq!(got.status_code(), None);
    }
}
