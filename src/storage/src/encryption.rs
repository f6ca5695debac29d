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

//! Customer-supplied encryption keys.
//!
//! Cloud Storage can encrypt object data with a key supplied by the
//! application. The key is sent with every request that reads or writes the
//! object data, using three headers:
//!
//! - `x-goog-encryption-algorithm`: always `AES256`.
//! - `x-goog-encryption-key`: the base64 encoding of the raw key.
//! - `x-goog-encryption-key-sha256`: the base64 encoding of the SHA-256
//!   digest of the raw key.
//!
//! When rewriting (copying) an object, the key for the source object uses
//! the `x-goog-copy-source-encryption-*` variants of these headers.
//!
//! The key length is not validated locally, the service rejects invalid keys.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use sha2::{Digest, Sha256};

/// The only algorithm supported by Cloud Storage.
pub const ALGORITHM: &str = "AES256";

/// The header names for one family of encryption headers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderNames {
    pub algorithm: &'static str,
    pub key: &'static str,
    pub key_sha256: &'static str,
}

/// Headers used for the object being read or written.
pub const KEY_HEADERS: HeaderNames = HeaderNames {
    algorithm: "x-goog-encryption-algorithm",
    key: "x-goog-encryption-key",
    key_sha256: "x-goog-encryption-key-sha256",
};

/// Headers used for the source object in a rewrite.
pub const COPY_SOURCE_KEY_HEADERS: HeaderNames = HeaderNames {
    algorithm: "x-goog-copy-source-encryption-algorithm",
    key: "x-goog-copy-source-encryption-key",
    key_sha256: "x-goog-copy-source-encryption-key-sha256",
};

/// An encryption key supplied by the application.
///
/// # Example
/// ```
/// # use google_cloud_storage_service::encryption::EncryptionKey;
/// let key = EncryptionKey::new(vec![0x42_u8; 32]);
/// let headers = key.headers();
/// assert_eq!(headers[0], ("x-goog-encryption-algorithm", "AES256".to_string()));
/// ```
#[derive(Clone, PartialEq)]
pub struct EncryptionKey {
    key: bytes::Bytes,
    sha256: Option<bytes::Bytes>,
}

impl EncryptionKey {
    /// Creates a key from its raw (not base64 encoded) bytes.
    pub fn new<T: Into<bytes::Bytes>>(key: T) -> Self {
        Self {
            key: key.into(),
            sha256: None,
        }
    }

    /// Uses a precomputed SHA-256 digest of the key.
    ///
    /// The digest is sent as-is, it is not verified against the key.
    pub fn with_sha256<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.sha256 = Some(v.into());
        self
    }

    /// The raw key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The SHA-256 digest of the key.
    ///
    /// Returns the precomputed digest if one was provided, otherwise the
    /// digest is computed from the key.
    pub fn sha256(&self) -> bytes::Bytes {
        match &self.sha256 {
            Some(d) => d.clone(),
            None => bytes::Bytes::from(Sha256::digest(&self.key).to_vec()),
        }
    }

    /// Returns the headers for an object read or written with this key.
    pub fn headers(&self) -> [(&'static str, String); 3] {
        self.headers_for(&KEY_HEADERS)
    }

    /// Returns the headers for the source object of a rewrite.
    pub fn copy_source_headers(&self) -> [(&'static str, String); 3] {
        self.headers_for(&COPY_SOURCE_KEY_HEADERS)
    }

    pub(crate) fn headers_for(&self, names: &HeaderNames) -> [(&'static str, String); 3] {
        [
            (names.algorithm, ALGORITHM.to_string()),
            (names.key, BASE64_STANDARD.encode(&self.key)),
            (names.key_sha256, BASE64_STANDARD.encode(self.sha256())),
        ]
    }
}

// Never print the key material.
impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("key", &"[censored]")
            .field("sha256", &BASE64_STANDARD.encode(self.sha256()))
            .finish()
    }
}

/// Returns the encryption headers for an optional key.
///
/// Returns an empty list when `key` is `None`.
pub fn encryption_headers(
    key: Option<&EncryptionKey>,
    names: &HeaderNames,
) -> Vec<(&'static str, String)> {
    key.map(|k| k.headers_for(names).to_vec())
        .unwrap_or_default()
}

pub(crate) fn apply_encryption_headers(
    builder: reqwest::RequestBuilder,
    key: Option<&EncryptionKey>,
    names: &HeaderNames,
) -> reqwest::RequestBuilder {
    encryption_headers(key, names)
        .into_iter()
        .fold(builder, |b, (name, value)| b.header(name, value))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use test_case::test_case;

    /// Returns a key and its expected header values.
    pub(crate) fn create_key_helper() -> (Vec<u8>, String, Vec<u8>, String) {
        // Make a 32-byte key.
        let key = vec![b'a'; 32];
        let key_base64 = BASE64_STANDARD.encode(key.clone());

        let key_sha256 = Sha256::digest(key.clone());
        let key_sha256_base64 = BASE64_STANDARD.encode(key_sha256);
        (key, key_base64, key_sha256.to_vec(), key_sha256_base64)
    }

    #[test]
    fn derived_digest() {
        let (key, key_base64, key_sha256, key_sha256_base64) = create_key_helper();
        let k = EncryptionKey::new(key.clone());
        assert_eq!(k.key(), key.as_slice());
        assert_eq!(k.sha256().as_ref(), key_sha256.as_slice());
        assert_eq!(
            k.headers(),
            [
                ("x-goog-encryption-algorithm", "AES256".to_string()),
                ("x-goog-encryption-key", key_base64),
                ("x-goog-encryption-key-sha256", key_sha256_base64),
            ]
        );
    }

    #[test]
    fn supplied_digest() {
        let (key, key_base64, _, _) = create_key_helper();
        let digest = vec![b'd'; 32];
        let k = EncryptionKey::new(key).with_sha256(digest.clone());
        assert_eq!(k.sha256().as_ref(), digest.as_slice());
        let headers = k.headers();
        assert_eq!(headers[1], ("x-goog-encryption-key", key_base64));
        assert_eq!(
            headers[2],
            (
                "x-goog-encryption-key-sha256",
                BASE64_STANDARD.encode(&digest)
            )
        );
    }

    #[test]
    fn copy_source() {
        let (key, key_base64, _, key_sha256_base64) = create_key_helper();
        let k = EncryptionKey::new(key);
        assert_eq!(
            k.copy_source_headers(),
            [
                (
                    "x-goog-copy-source-encryption-algorithm",
                    "AES256".to_string()
                ),
                ("x-goog-copy-source-encryption-key", key_base64),
                ("x-goog-copy-source-encryption-key-sha256", key_sha256_base64),
            ]
        );
    }

    // The service validates the key length, not the client.
    #[test_case(vec![]; "empty")]
    #[test_case(vec![b'x'; 7]; "short")]
    #[test_case(vec![b'x'; 64]; "long")]
    fn any_length(key: Vec<u8>) {
        let k = EncryptionKey::new(key.clone());
        let headers = k.headers();
        assert_eq!(headers[1].1, BASE64_STANDARD.encode(&key));
        assert_eq!(headers[2].1, BASE64_STANDARD.encode(Sha256::digest(&key)));
    }

    #[test]
    fn no_key() {
        assert!(encryption_headers(None, &KEY_HEADERS).is_empty());
        assert!(encryption_headers(None, &COPY_SOURCE_KEY_HEADERS).is_empty());
    }

    #[test]
    fn with_key() {
        let (key, ..) = create_key_helper();
        let k = EncryptionKey::new(key);
        let got = encryption_headers(Some(&k), &KEY_HEADERS);
        assert_eq!(got, k.headers().to_vec());
    }

    #[test]
    fn debug_hides_key() {
        let (key, key_base64, ..) = create_key_helper();
        let k = EncryptionKey::new(key);
        let fmt = format!("{k:?}");
        assert!(!fmt.contains(&key_base64), "{fmt}");
        assert!(fmt.contains("censored"), "{fmt}");
    }

    #[test]
    fn apply() -> anyhow::Result<()> {
        let (key, key_base64, _, key_sha256_base64) = create_key_helper();
        let k = EncryptionKey::new(key);
        let client = reqwest::Client::new();
        let builder = client.get("http://localhost/test");
        let request = apply_encryption_headers(builder, Some(&k), &KEY_HEADERS).build()?;
        let headers = request.headers();
        assert_eq!(
            headers
                .get("x-goog-encryption-algorithm")
                .map(|v| v.as_bytes()),
            Some("AES256".as_bytes())
        );
        assert_eq!(
            headers.get("x-goog-encryption-key").map(|v| v.as_bytes()),
            Some(key_base64.as_bytes())
        );
        assert_eq!(
            headers
                .get("x-goog-encryption-key-sha256")
                .map(|v| v.as_bytes()),
            Some(key_sha256_base64.as_bytes())
        );

        let builder = client.get("http://localhost/test");
        let request = apply_encryption_headers(builder, None, &KEY_HEADERS).build()?;
        assert!(
            request.headers().get("x-goog-encryption-key").is_none(),
            "{request:?}"
        );
        Ok(())
    }
}
