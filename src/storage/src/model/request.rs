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

//! The requests sent through the [stub::Storage][crate::stub::Storage] trait.
//!
//! Each request maps to exactly one JSON API call. The field names follow
//! the names of the query parameters and resources in the JSON API, for
//! example, `predefined_acl` is sent as the `predefinedAcl` query parameter.
//!
//! Applications only see these types when implementing (or mocking) the
//! transport. The [Service][crate::client::Service] builds them from the
//! per-operation options in [crate::options].

use super::{Bucket, BucketAccessControl, Object, ObjectAccessControl};
use crate::encryption::EncryptionKey;

/// The request for `storage.buckets.list`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBucketsRequest {
    pub project: String,
    pub prefix: Option<String>,
    pub page_token: Option<String>,
    pub max_results: Option<u32>,
    pub user_project: Option<String>,
}

/// The request for `storage.buckets.get`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketRequest {
    pub bucket: String,
    pub if_metageneration_match: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.buckets.insert`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertBucketRequest {
    pub project: String,
    /// The bucket resource, including its name.
    pub bucket: Bucket,
    pub predefined_acl: Option<String>,
    pub predefined_default_object_acl: Option<String>,
    pub user_project: Option<String>,
}

/// The request for `storage.buckets.patch`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchBucketRequest {
    pub bucket: String,
    /// The fields to update. Fields that are not set are left unchanged.
    pub metadata: Bucket,
    pub predefined_acl: Option<String>,
    pub predefined_default_object_acl: Option<String>,
    pub if_metageneration_match: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.buckets.delete`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBucketRequest {
    pub bucket: String,
    pub if_metageneration_match: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.bucketAccessControls.list`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBucketAccessControlsRequest {
    pub bucket: String,
    pub user_project: Option<String>,
}

/// The request for `storage.bucketAccessControls.get`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketAccessControlRequest {
    pub bucket: String,
    pub entity: String,
    pub user_project: Option<String>,
}

/// The request for `storage.bucketAccessControls.insert`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertBucketAccessControlRequest {
    pub bucket: String,
    pub acl: BucketAccessControl,
    pub user_project: Option<String>,
}

/// The request for `storage.bucketAccessControls.patch`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchBucketAccessControlRequest {
    pub bucket: String,
    pub entity: String,
    pub acl: BucketAccessControl,
    pub user_project: Option<String>,
}

/// The request for `storage.bucketAccessControls.delete`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBucketAccessControlRequest {
    pub bucket: String,
    pub entity: String,
    pub user_project: Option<String>,
}

/// The request for `storage.defaultObjectAccessControls.list`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDefaultObjectAccessControlsRequest {
    pub bucket: String,
    pub user_project: Option<String>,
}

/// The request for `storage.defaultObjectAccessControls.get`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDefaultObjectAccessControlRequest {
    pub bucket: String,
    pub entity: String,
    pub user_project: Option<String>,
}

/// The request for `storage.defaultObjectAccessControls.insert`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertDefaultObjectAccessControlRequest {
    pub bucket: String,
    pub acl: ObjectAccessControl,
    pub user_project: Option<String>,
}

/// The request for `storage.defaultObjectAccessControls.patch`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchDefaultObjectAccessControlRequest {
    pub bucket: String,
    pub entity: String,
    pub acl: ObjectAccessControl,
    pub user_project: Option<String>,
}

/// The request for `storage.defaultObjectAccessControls.delete`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDefaultObjectAccessControlRequest {
    pub bucket: String,
    pub entity: String,
    pub user_project: Option<String>,
}

/// The request for `storage.objects.list`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListObjectsRequest {
    pub bucket: String,
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub page_token: Option<String>,
    pub max_results: Option<u32>,
    pub versions: Option<bool>,
    pub user_project: Option<String>,
}

/// The request for `storage.objects.get`, returning the object metadata.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetObjectRequest {
    pub bucket: String,
    pub object: String,
    pub generation: Option<i64>,
    pub encryption_key: Option<EncryptionKey>,
    pub user_project: Option<String>,
}

/// The request for `storage.objects.insert`, using a multipart upload.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertObjectRequest {
    pub bucket: String,
    /// The object metadata, including its name.
    pub metadata: Object,
    /// The object data.
    pub media: bytes::Bytes,
    pub predefined_acl: Option<String>,
    pub if_generation_match: Option<i64>,
    pub encryption_key: Option<EncryptionKey>,
    pub user_project: Option<String>,
}

/// The request for `storage.objects.patch`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchObjectRequest {
    pub bucket: String,
    pub object: String,
    /// The fields to update. Fields that are not set are left unchanged.
    pub metadata: Object,
    pub generation: Option<i64>,
    pub predefined_acl: Option<String>,
    pub if_metageneration_match: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.objects.delete`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteObjectRequest {
    pub bucket: String,
    pub object: String,
    pub generation: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.objects.rewrite`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RewriteObjectRequest {
    pub source_bucket: String,
    pub source_object: String,
    pub destination_bucket: String,
    pub destination_object: String,
    /// Metadata for the destination object. When not set the source metadata
    /// is copied.
    pub metadata: Option<Object>,
    pub source_generation: Option<i64>,
    pub destination_predefined_acl: Option<String>,
    pub rewrite_token: Option<String>,
    /// The key used to decrypt the source object.
    pub source_encryption_key: Option<EncryptionKey>,
    /// The key used to encrypt the destination object.
    pub destination_encryption_key: Option<EncryptionKey>,
    pub user_project: Option<String>,
}

/// The request for `storage.objects.get` with `alt=media`, returning the
/// object data.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DownloadObjectRequest {
    pub bucket: String,
    pub object: String,
    pub generation: Option<i64>,
    pub encryption_key: Option<EncryptionKey>,
    pub user_project: Option<String>,
}

/// The request for `storage.objectAccessControls.list`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListObjectAccessControlsRequest {
    pub bucket: String,
    pub object: String,
    pub generation: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.objectAccessControls.get`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetObjectAccessControlRequest {
    pub bucket: String,
    pub object: String,
    pub entity: String,
    pub generation: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.objectAccessControls.insert`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertObjectAccessControlRequest {
    pub bucket: String,
    pub object: String,
    pub acl: ObjectAccessControl,
    pub generation: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.objectAccessControls.patch`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchObjectAccessControlRequest {
    pub bucket: String,
    pub object: String,
    pub entity: String,
    pub acl: ObjectAccessControl,
    pub generation: Option<i64>,
    pub user_project: Option<String>,
}

/// The request for `storage.objectAccessControls.delete`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteObjectAccessControlRequest {
    pub bucket: String,
    pub object: String,
    pub entity: String,
    pub generation: Option<i64>,
    pub user_project: Option<String>,
}
