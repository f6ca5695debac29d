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

//! Per-operation options for the [Service] operations.
//!
//! Each operation takes one of these types, with all fields optional. The
//! [Service] maps each field to the corresponding field of the transport
//! request. The field names here follow the domain, for example,
//! [InsertBucketOptions::acl] is sent as the `predefinedAcl` query parameter.
//!
//! # Example
//! ```
//! # use google_cloud_storage_service::options::InsertObjectOptions;
//! let options = InsertObjectOptions::default()
//!     .set_acl("public")
//!     .set_cache_control("public, max-age=3600")
//!     .set_metadata([("color", "blue")]);
//! assert_eq!(options.acl.map(|a| a.to_string()), Some("publicRead".to_string()));
//! ```

use crate::acl::{AclRule, PredefinedAcl};
use crate::encryption::EncryptionKey;
use crate::model::Cors;
use std::collections::HashMap;

#[cfg(doc)]
use crate::client::Service;

/// The options for [Service::list_buckets].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListBucketsOptions {
    /// Only return buckets whose names start with this prefix.
    pub prefix: Option<String>,
    /// A page token returned by a previous call, sent as `pageToken`.
    pub token: Option<String>,
    /// The maximum number of buckets in the response, sent as `maxResults`.
    pub max: Option<u32>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl ListBucketsOptions {
    pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    pub fn set_token<T: Into<String>>(mut self, v: T) -> Self {
        self.token = Some(v.into());
        self
    }

    pub fn set_max(mut self, v: u32) -> Self {
        self.max = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::get_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetBucketOptions {
    pub if_metageneration_match: Option<i64>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl GetBucketOptions {
    pub fn set_if_metageneration_match(mut self, v: i64) -> Self {
        self.if_metageneration_match = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::insert_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertBucketOptions {
    /// A predefined ACL for the bucket, sent as `predefinedAcl`.
    pub acl: Option<PredefinedAcl>,
    /// A predefined default object ACL, sent as `predefinedDefaultObjectAcl`.
    pub default_acl: Option<PredefinedAcl>,
    /// A full ACL for the bucket, sent in the bucket `acl` field.
    pub acl_rules: Vec<AclRule>,
    /// A full default object ACL, sent in the bucket `defaultObjectAcl` field.
    pub default_acl_rules: Vec<AclRule>,
    pub location: Option<String>,
    pub storage_class: Option<String>,
    /// Enables or disables object versioning.
    pub versioning: Option<bool>,
    /// The destination bucket for access logs.
    pub logging_bucket: Option<String>,
    /// The object name prefix for access logs.
    pub logging_prefix: Option<String>,
    /// The main page suffix for static websites.
    pub website_main: Option<String>,
    /// The page served when an object is not found.
    pub website_404: Option<String>,
    pub cors: Vec<Cors>,
    pub labels: HashMap<String, String>,
    pub requester_pays: Option<bool>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl InsertBucketOptions {
    pub fn set_acl<T: Into<PredefinedAcl>>(mut self, v: T) -> Self {
        self.acl = Some(v.into());
        self
    }

    pub fn set_default_acl<T: Into<PredefinedAcl>>(mut self, v: T) -> Self {
        self.default_acl = Some(v.into());
        self
    }

    pub fn set_acl_rules<T: IntoIterator<Item = AclRule>>(mut self, v: T) -> Self {
        self.acl_rules = v.into_iter().collect();
        self
    }

    pub fn set_default_acl_rules<T: IntoIterator<Item = AclRule>>(mut self, v: T) -> Self {
        self.default_acl_rules = v.into_iter().collect();
        self
    }

    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    pub fn set_versioning(mut self, v: bool) -> Self {
        self.versioning = Some(v);
        self
    }

    pub fn set_logging_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.logging_bucket = Some(v.into());
        self
    }

    pub fn set_logging_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.logging_prefix = Some(v.into());
        self
    }

    pub fn set_website_main<T: Into<String>>(mut self, v: T) -> Self {
        self.website_main = Some(v.into());
        self
    }

    pub fn set_website_404<T: Into<String>>(mut self, v: T) -> Self {
        self.website_404 = Some(v.into());
        self
    }

    pub fn set_cors<T: IntoIterator<Item = Cors>>(mut self, v: T) -> Self {
        self.cors = v.into_iter().collect();
        self
    }

    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_requester_pays(mut self, v: bool) -> Self {
        self.requester_pays = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::patch_bucket].
///
/// Only the fields that are set are changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchBucketOptions {
    /// A predefined ACL for the bucket, sent as `predefinedAcl`.
    pub acl: Option<PredefinedAcl>,
    /// A predefined default object ACL, sent as `predefinedDefaultObjectAcl`.
    pub default_acl: Option<PredefinedAcl>,
    /// Replaces the bucket ACL.
    pub acl_rules: Vec<AclRule>,
    /// Replaces the default object ACL.
    pub default_acl_rules: Vec<AclRule>,
    pub storage_class: Option<String>,
    pub versioning: Option<bool>,
    pub logging_bucket: Option<String>,
    pub logging_prefix: Option<String>,
    pub website_main: Option<String>,
    pub website_404: Option<String>,
    /// Replaces the CORS configuration.
    pub cors: Vec<Cors>,
    /// Replaces the labels.
    pub labels: HashMap<String, String>,
    pub requester_pays: Option<bool>,
    pub if_metageneration_match: Option<i64>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl PatchBucketOptions {
    pub fn set_acl<T: Into<PredefinedAcl>>(mut self, v: T) -> Self {
        self.acl = Some(v.into());
        self
    }

    pub fn set_default_acl<T: Into<PredefinedAcl>>(mut self, v: T) -> Self {
        self.default_acl = Some(v.into());
        self
    }

    pub fn set_acl_rules<T: IntoIterator<Item = AclRule>>(mut self, v: T) -> Self {
        self.acl_rules = v.into_iter().collect();
        self
    }

    pub fn set_default_acl_rules<T: IntoIterator<Item = AclRule>>(mut self, v: T) -> Self {
        self.default_acl_rules = v.into_iter().collect();
        self
    }

    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    pub fn set_versioning(mut self, v: bool) -> Self {
        self.versioning = Some(v);
        self
    }

    pub fn set_logging_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.logging_bucket = Some(v.into());
        self
    }

    pub fn set_logging_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.logging_prefix = Some(v.into());
        self
    }

    pub fn set_website_main<T: Into<String>>(mut self, v: T) -> Self {
        self.website_main = Some(v.into());
        self
    }

    pub fn set_website_404<T: Into<String>>(mut self, v: T) -> Self {
        self.website_404 = Some(v.into());
        self
    }

    pub fn set_cors<T: IntoIterator<Item = Cors>>(mut self, v: T) -> Self {
        self.cors = v.into_iter().collect();
        self
    }

    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_requester_pays(mut self, v: bool) -> Self {
        self.requester_pays = Some(v);
        self
    }

    pub fn set_if_metageneration_match(mut self, v: i64) -> Self {
        self.if_metageneration_match = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::delete_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteBucketOptions {
    pub if_metageneration_match: Option<i64>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl DeleteBucketOptions {
    pub fn set_if_metageneration_match(mut self, v: i64) -> Self {
        self.if_metageneration_match = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for the bucket access control and default object access
/// control operations, such as [Service::insert_bucket_acl] and
/// [Service::insert_default_acl].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BucketAclOptions {
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl BucketAclOptions {
    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::list_objects].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListObjectsOptions {
    /// Only return objects whose names start with this prefix.
    pub prefix: Option<String>,
    /// Group the results by the portion of the name up to this delimiter.
    pub delimiter: Option<String>,
    /// A page token returned by a previous call, sent as `pageToken`.
    pub token: Option<String>,
    /// The maximum number of objects in the response, sent as `maxResults`.
    pub max: Option<u32>,
    /// Include all the versions of each object.
    pub versions: Option<bool>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl ListObjectsOptions {
    pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
        self.delimiter = Some(v.into());
        self
    }

    pub fn set_token<T: Into<String>>(mut self, v: T) -> Self {
        self.token = Some(v.into());
        self
    }

    pub fn set_max(mut self, v: u32) -> Self {
        self.max = Some(v);
        self
    }

    pub fn set_versions(mut self, v: bool) -> Self {
        self.versions = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::get_object].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetObjectOptions {
    /// Selects a specific revision of the object.
    pub generation: Option<i64>,
    /// The customer-supplied key for the object.
    pub encryption_key: Option<EncryptionKey>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl GetObjectOptions {
    pub fn set_generation(mut self, v: i64) -> Self {
        self.generation = Some(v);
        self
    }

    pub fn set_encryption_key(mut self, v: EncryptionKey) -> Self {
        self.encryption_key = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::insert_object].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertObjectOptions {
    /// A predefined ACL for the object, sent as `predefinedAcl`.
    pub acl: Option<PredefinedAcl>,
    /// The content type. When not set it is guessed from the object name.
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub content_disposition: Option<String>,
    pub content_encoding: Option<String>,
    pub content_language: Option<String>,
    /// The base64 encoded MD5 hash of the data, verified by the service.
    pub md5: Option<String>,
    /// The base64 encoded CRC32C checksum of the data, verified by the service.
    pub crc32c: Option<String>,
    /// User-provided metadata.
    pub metadata: HashMap<String, String>,
    pub storage_class: Option<String>,
    /// Use `0` to create the object only if it does not exist.
    pub if_generation_match: Option<i64>,
    /// Encrypts the object with a customer-supplied key.
    pub encryption_key: Option<EncryptionKey>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl InsertObjectOptions {
    pub fn set_acl<T: Into<PredefinedAcl>>(mut self, v: T) -> Self {
        self.acl = Some(v.into());
        self
    }

    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    pub fn set_cache_control<T: Into<String>>(mut self, v: T) -> Self {
        self.cache_control = Some(v.into());
        self
    }

    pub fn set_content_disposition<T: Into<String>>(mut self, v: T) -> Self {
        self.content_disposition = Some(v.into());
        self
    }

    pub fn set_content_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.content_encoding = Some(v.into());
        self
    }

    pub fn set_content_language<T: Into<String>>(mut self, v: T) -> Self {
        self.content_language = Some(v.into());
        self
    }

    pub fn set_md5<T: Into<String>>(mut self, v: T) -> Self {
        self.md5 = Some(v.into());
        self
    }

    pub fn set_crc32c<T: Into<String>>(mut self, v: T) -> Self {
        self.crc32c = Some(v.into());
        self
    }

    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    pub fn set_if_generation_match(mut self, v: i64) -> Self {
        self.if_generation_match = Some(v);
        self
    }

    pub fn set_encryption_key(mut self, v: EncryptionKey) -> Self {
        self.encryption_key = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::patch_object].
///
/// Only the fields that are set are changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatchObjectOptions {
    /// A predefined ACL for the object, sent as `predefinedAcl`.
    pub acl: Option<PredefinedAcl>,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub content_disposition: Option<String>,
    pub content_encoding: Option<String>,
    pub content_language: Option<String>,
    /// Replaces the user-provided metadata.
    pub metadata: HashMap<String, String>,
    pub generation: Option<i64>,
    pub if_metageneration_match: Option<i64>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl PatchObjectOptions {
    pub fn set_acl<T: Into<PredefinedAcl>>(mut self, v: T) -> Self {
        self.acl = Some(v.into());
        self
    }

    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    pub fn set_cache_control<T: Into<String>>(mut self, v: T) -> Self {
        self.cache_control = Some(v.into());
        self
    }

    pub fn set_content_disposition<T: Into<String>>(mut self, v: T) -> Self {
        self.content_disposition = Some(v.into());
        self
    }

    pub fn set_content_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.content_encoding = Some(v.into());
        self
    }

    pub fn set_content_language<T: Into<String>>(mut self, v: T) -> Self {
        self.content_language = Some(v.into());
        self
    }

    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_generation(mut self, v: i64) -> Self {
        self.generation = Some(v);
        self
    }

    pub fn set_if_metageneration_match(mut self, v: i64) -> Self {
        self.if_metageneration_match = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::delete_object].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteObjectOptions {
    /// Permanently deletes this revision of the object.
    pub generation: Option<i64>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl DeleteObjectOptions {
    pub fn set_generation(mut self, v: i64) -> Self {
        self.generation = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::copy_object].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CopyObjectOptions {
    /// A predefined ACL for the destination, sent as `destinationPredefinedAcl`.
    pub acl: Option<PredefinedAcl>,
    pub source_generation: Option<i64>,
    /// The token returned by a previous, incomplete, copy. Sent as `rewriteToken`.
    pub token: Option<String>,
    /// Overrides the content type of the destination.
    pub content_type: Option<String>,
    /// Overrides the cache control of the destination.
    pub cache_control: Option<String>,
    /// Overrides the user-provided metadata of the destination.
    pub metadata: HashMap<String, String>,
    /// The customer-supplied key for the source and, unless
    /// `destination_encryption_key` is set, the destination.
    pub encryption_key: Option<EncryptionKey>,
    /// The customer-supplied key for the destination.
    pub destination_encryption_key: Option<EncryptionKey>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl CopyObjectOptions {
    pub fn set_acl<T: Into<PredefinedAcl>>(mut self, v: T) -> Self {
        self.acl = Some(v.into());
        self
    }

    pub fn set_source_generation(mut self, v: i64) -> Self {
        self.source_generation = Some(v);
        self
    }

    pub fn set_token<T: Into<String>>(mut self, v: T) -> Self {
        self.token = Some(v.into());
        self
    }

    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    pub fn set_cache_control<T: Into<String>>(mut self, v: T) -> Self {
        self.cache_control = Some(v.into());
        self
    }

    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_encryption_key(mut self, v: EncryptionKey) -> Self {
        self.encryption_key = Some(v);
        self
    }

    pub fn set_destination_encryption_key(mut self, v: EncryptionKey) -> Self {
        self.destination_encryption_key = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for [Service::download_object].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DownloadObjectOptions {
    pub generation: Option<i64>,
    /// The customer-supplied key for the object.
    pub encryption_key: Option<EncryptionKey>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl DownloadObjectOptions {
    pub fn set_generation(mut self, v: i64) -> Self {
        self.generation = Some(v);
        self
    }

    pub fn set_encryption_key(mut self, v: EncryptionKey) -> Self {
        self.encryption_key = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}

/// The options for the object access control operations, such as
/// [Service::insert_object_acl].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectAclOptions {
    /// Selects a specific revision of the object.
    pub generation: Option<i64>,
    /// The project billed for the request, required for requester pays buckets.
    pub user_project: Option<String>,
}

impl ObjectAclOptions {
    pub fn set_generation(mut self, v: i64) -> Self {
        self.generation = Some(v);
        self
    }

    pub fn set_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }
}
