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

use crate::Result;
use crate::acl::{AclRule, Role};
use crate::config::{ClientConfig, DEFAULT_RETRIES};
use crate::error::Error;
use crate::mime::mime_type_for;
use crate::model::request::*;
use crate::model::{
    Billing, Bucket, BucketAccessControl, ListBucketAccessControlsResponse, ListBucketsResponse,
    ListObjectAccessControlsResponse, ListObjectsResponse, Logging, Object, ObjectAccessControl,
    RewriteResponse, Versioning, Website,
};
use crate::options::*;
use crate::stub::dynamic::Storage as DynStorage;
use crate::transport::HttpStorage;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;

/// A service adapter for the Cloud Storage JSON API.
///
/// Each method performs exactly one call to the transport and returns its
/// result. Failures are translated into [Error], preserving the HTTP status
/// code and the message returned by the service.
///
/// # Example
/// ```
/// # use google_cloud_storage_service::client::Service;
/// # use google_cloud_storage_service::options::InsertObjectOptions;
/// # async fn sample() -> anyhow::Result<()> {
/// let service = Service::builder("my-project").build().await?;
/// let object = service
///     .insert_object("my-bucket", "greetings/hello.txt", "hello world", InsertObjectOptions::default())
///     .await?;
/// println!("object={object:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// Use the `with_*` methods in the type returned by
/// [builder()][Service::builder]. The default configuration should work for
/// most applications.
///
/// * [with_credentials()][ClientBuilder::with_credentials]: by default the
///   adapter uses [Application Default Credentials].
/// * [with_retries()][ClientBuilder::with_retries]: the number of times a
///   request is retried after a transient failure, `3` by default.
/// * [with_timeout()][ClientBuilder::with_timeout]: the timeout for each
///   attempt. By default no timeout is set.
///
/// # Pooling and Cloning
///
/// `Service` holds a connection pool internally, it is advised to create one
/// and then reuse it. You do not need to wrap `Service` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone)]
pub struct Service {
    project: String,
    retries: u32,
    timeout: Option<Duration>,
    stub: Arc<dyn DynStorage>,
}

impl Service {
    /// Returns a builder for [Service].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::client::Service;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let service = Service::builder("my-project").with_retries(5).build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder<T: Into<String>>(project: T) -> ClientBuilder {
        ClientBuilder::new(project.into())
    }

    /// Creates a new adapter from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// transport.
    pub fn from_stub<T>(project: impl Into<String>, stub: T) -> Self
    where
        T: crate::stub::Storage + 'static,
    {
        Self {
            project: project.into(),
            retries: DEFAULT_RETRIES,
            timeout: None,
            stub: Arc::new(stub),
        }
    }

    async fn new(builder: ClientBuilder) -> crate::client_builder::Result<Self> {
        let retries = builder.config.retries;
        let timeout = builder.config.timeout;
        let stub = HttpStorage::new(builder.config).await?;
        Ok(Self {
            project: builder.project,
            retries,
            timeout,
            stub: Arc::new(stub),
        })
    }

    /// The project used to create buckets and list buckets.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The number of retries configured for the transport.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// The per-attempt timeout configured for the transport, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Lists the buckets in the project.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::client::Service;
    /// # use google_cloud_storage_service::options::ListBucketsOptions;
    /// # async fn sample(service: &Service) -> anyhow::Result<()> {
    /// let mut options = ListBucketsOptions::default().set_prefix("logs-");
    /// loop {
    ///     let page = service.list_buckets(options.clone()).await?;
    ///     for bucket in page.items {
    ///         println!("bucket={:?}", bucket.name);
    ///     }
    ///     match page.next_page_token {
    ///         Some(token) => options = options.set_token(token),
    ///         None => break,
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn list_buckets(&self, opts: ListBucketsOptions) -> Result<ListBucketsResponse> {
        let req = ListBucketsRequest {
            project: self.project.clone(),
            prefix: opts.prefix,
            page_token: opts.token,
            max_results: opts.max,
            user_project: opts.user_project,
        };
        self.execute("list_buckets", self.stub.list_buckets(req))
            .await
    }

    /// Gets the metadata for a bucket.
    pub async fn get_bucket(
        &self,
        bucket: impl Into<String>,
        opts: GetBucketOptions,
    ) -> Result<Bucket> {
        let req = GetBucketRequest {
            bucket: bucket.into(),
            if_metageneration_match: opts.if_metageneration_match,
            user_project: opts.user_project,
        };
        self.execute("get_bucket", self.stub.get_bucket(req)).await
    }

    /// Creates a new bucket in the project.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::client::Service;
    /// # use google_cloud_storage_service::options::InsertBucketOptions;
    /// # async fn sample(service: &Service) -> anyhow::Result<()> {
    /// let options = InsertBucketOptions::default()
    ///     .set_acl("private")
    ///     .set_location("US")
    ///     .set_versioning(true);
    /// let bucket = service.insert_bucket("my-bucket", options).await?;
    /// println!("bucket={bucket:?}");
    /// # Ok(()) }
    /// ```
    pub async fn insert_bucket(
        &self,
        bucket: impl Into<String>,
        opts: InsertBucketOptions,
    ) -> Result<Bucket> {
        let metadata = Bucket {
            name: Some(bucket.into()),
            location: opts.location,
            storage_class: opts.storage_class,
            acl: bucket_acls(opts.acl_rules),
            default_object_acl: object_acls(opts.default_acl_rules),
            versioning: opts.versioning.map(Versioning::new),
            logging: logging(opts.logging_bucket, opts.logging_prefix),
            website: website(opts.website_main, opts.website_404),
            cors: opts.cors,
            billing: opts.requester_pays.map(billing),
            labels: opts.labels,
            ..Default::default()
        };
        let req = InsertBucketRequest {
            project: self.project.clone(),
            bucket: metadata,
            predefined_acl: opts.acl.map(|a| a.to_string()),
            predefined_default_object_acl: opts.default_acl.map(|a| a.to_string()),
            user_project: opts.user_project,
        };
        self.execute("insert_bucket", self.stub.insert_bucket(req))
            .await
    }

    /// Updates the metadata of a bucket. Fields not set in `opts` are left
    /// unchanged.
    pub async fn patch_bucket(
        &self,
        bucket: impl Into<String>,
        opts: PatchBucketOptions,
    ) -> Result<Bucket> {
        let metadata = Bucket {
            storage_class: opts.storage_class,
            acl: bucket_acls(opts.acl_rules),
            default_object_acl: object_acls(opts.default_acl_rules),
            versioning: opts.versioning.map(Versioning::new),
            logging: logging(opts.logging_bucket, opts.logging_prefix),
            website: website(opts.website_main, opts.website_404),
            cors: opts.cors,
            billing: opts.requester_pays.map(billing),
            labels: opts.labels,
            ..Default::default()
        };
        let req = PatchBucketRequest {
            bucket: bucket.into(),
            metadata,
            predefined_acl: opts.acl.map(|a| a.to_string()),
            predefined_default_object_acl: opts.default_acl.map(|a| a.to_string()),
            if_metageneration_match: opts.if_metageneration_match,
            user_project: opts.user_project,
        };
        self.execute("patch_bucket", self.stub.patch_bucket(req))
            .await
    }

    /// Deletes an empty bucket.
    pub async fn delete_bucket(
        &self,
        bucket: impl Into<String>,
        opts: DeleteBucketOptions,
    ) -> Result<()> {
        let req = DeleteBucketRequest {
            bucket: bucket.into(),
            if_metageneration_match: opts.if_metageneration_match,
            user_project: opts.user_project,
        };
        self.execute("delete_bucket", self.stub.delete_bucket(req))
            .await
    }

    /// Lists the access control entries on a bucket.
    pub async fn list_bucket_acls(
        &self,
        bucket: impl Into<String>,
        opts: BucketAclOptions,
    ) -> Result<ListBucketAccessControlsResponse> {
        let req = ListBucketAccessControlsRequest {
            bucket: bucket.into(),
            user_project: opts.user_project,
        };
        self.execute(
            "list_bucket_acls",
            self.stub.list_bucket_access_controls(req),
        )
        .await
    }

    /// Gets the access control entry for `entity` on a bucket.
    pub async fn get_bucket_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        opts: BucketAclOptions,
    ) -> Result<BucketAccessControl> {
        let req = GetBucketAccessControlRequest {
            bucket: bucket.into(),
            entity: entity.into(),
            user_project: opts.user_project,
        };
        self.execute("get_bucket_acl", self.stub.get_bucket_access_control(req))
            .await
    }

    /// Grants `role` to `entity` on a bucket.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::client::Service;
    /// # use google_cloud_storage_service::acl::{Role, entity};
    /// # use google_cloud_storage_service::options::BucketAclOptions;
    /// # async fn sample(service: &Service) -> anyhow::Result<()> {
    /// let acl = service
    ///     .insert_bucket_acl("my-bucket", entity::group("devs@example.com"), Role::Writer, BucketAclOptions::default())
    ///     .await?;
    /// println!("acl={acl:?}");
    /// # Ok(()) }
    /// ```
    pub async fn insert_bucket_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        role: impl Into<Role>,
        opts: BucketAclOptions,
    ) -> Result<BucketAccessControl> {
        let role: Role = role.into();
        let req = InsertBucketAccessControlRequest {
            bucket: bucket.into(),
            acl: BucketAccessControl::new()
                .set_entity(entity)
                .set_role(role.as_str()),
            user_project: opts.user_project,
        };
        self.execute(
            "insert_bucket_acl",
            self.stub.insert_bucket_access_control(req),
        )
        .await
    }

    /// Changes the role granted to `entity` on a bucket.
    pub async fn patch_bucket_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        role: impl Into<Role>,
        opts: BucketAclOptions,
    ) -> Result<BucketAccessControl> {
        let role: Role = role.into();
        let entity = entity.into();
        let req = PatchBucketAccessControlRequest {
            bucket: bucket.into(),
            acl: BucketAccessControl::new()
                .set_entity(entity.clone())
                .set_role(role.as_str()),
            entity,
            user_project: opts.user_project,
        };
        self.execute(
            "patch_bucket_acl",
            self.stub.patch_bucket_access_control(req),
        )
        .await
    }

    /// Removes the access control entry for `entity` from a bucket.
    pub async fn delete_bucket_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        opts: BucketAclOptions,
    ) -> Result<()> {
        let req = DeleteBucketAccessControlRequest {
            bucket: bucket.into(),
            entity: entity.into(),
            user_project: opts.user_project,
        };
        self.execute(
            "delete_bucket_acl",
            self.stub.delete_bucket_access_control(req),
        )
        .await
    }

    /// Lists the default access control entries applied to new objects in a
    /// bucket.
    pub async fn list_default_acls(
        &self,
        bucket: impl Into<String>,
        opts: BucketAclOptions,
    ) -> Result<ListObjectAccessControlsResponse> {
        let req = ListDefaultObjectAccessControlsRequest {
            bucket: bucket.into(),
            user_project: opts.user_project,
        };
        self.execute(
            "list_default_acls",
            self.stub.list_default_object_access_controls(req),
        )
        .await
    }

    /// Gets the default access control entry for `entity` on a bucket.
    pub async fn get_default_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        opts: BucketAclOptions,
    ) -> Result<ObjectAccessControl> {
        let req = GetDefaultObjectAccessControlRequest {
            bucket: bucket.into(),
            entity: entity.into(),
            user_project: opts.user_project,
        };
        self.execute(
            "get_default_acl",
            self.stub.get_default_object_access_control(req),
        )
        .await
    }

    /// Grants `role` to `entity` on new objects created in a bucket.
    pub async fn insert_default_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        role: impl Into<Role>,
        opts: BucketAclOptions,
    ) -> Result<ObjectAccessControl> {
        let role: Role = role.into();
        let req = InsertDefaultObjectAccessControlRequest {
            bucket: bucket.into(),
            acl: ObjectAccessControl::new()
                .set_entity(entity)
                .set_role(role.as_str()),
            user_project: opts.user_project,
        };
        self.execute(
            "insert_default_acl",
            self.stub.insert_default_object_access_control(req),
        )
        .await
    }

    /// Changes the role granted to `entity` on new objects created in a bucket.
    pub async fn patch_default_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        role: impl Into<Role>,
        opts: BucketAclOptions,
    ) -> Result<ObjectAccessControl> {
        let role: Role = role.into();
        let entity = entity.into();
        let req = PatchDefaultObjectAccessControlRequest {
            bucket: bucket.into(),
            acl: ObjectAccessControl::new()
                .set_entity(entity.clone())
                .set_role(role.as_str()),
            entity,
            user_project: opts.user_project,
        };
        self.execute(
            "patch_default_acl",
            self.stub.patch_default_object_access_control(req),
        )
        .await
    }

    /// Removes the default access control entry for `entity` from a bucket.
    pub async fn delete_default_acl(
        &self,
        bucket: impl Into<String>,
        entity: impl Into<String>,
        opts: BucketAclOptions,
    ) -> Result<()> {
        let req = DeleteDefaultObjectAccessControlRequest {
            bucket: bucket.into(),
            entity: entity.into(),
            user_project: opts.user_project,
        };
        self.execute(
            "delete_default_acl",
            self.stub.delete_default_object_access_control(req),
        )
        .await
    }

    /// Lists the objects in a bucket.
    ///
    /// Use `delimiter` to list the objects in a single "folder", the names
    /// of any sub-folders are returned in [prefixes][ListObjectsResponse::prefixes].
    pub async fn list_objects(
        &self,
        bucket: impl Into<String>,
        opts: ListObjectsOptions,
    ) -> Result<ListObjectsResponse> {
        let req = ListObjectsRequest {
            bucket: bucket.into(),
            prefix: opts.prefix,
            delimiter: opts.delimiter,
            page_token: opts.token,
            max_results: opts.max,
            versions: opts.versions,
            user_project: opts.user_project,
        };
        self.execute("list_objects", self.stub.list_objects(req))
            .await
    }

    /// Gets the metadata for an object.
    ///
    /// Objects encrypted with a customer-supplied key require the same key.
    pub async fn get_object(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        opts: GetObjectOptions,
    ) -> Result<Object> {
        let req = GetObjectRequest {
            bucket: bucket.into(),
            object: object.into(),
            generation: opts.generation,
            encryption_key: opts.encryption_key,
            user_project: opts.user_project,
        };
        self.execute("get_object", self.stub.get_object(req)).await
    }

    /// Creates an object with the given contents.
    ///
    /// If the content type is not set, it is guessed from the extension in
    /// `name`. The service picks a default if the extension is not known.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::client::Service;
    /// # use google_cloud_storage_service::encryption::EncryptionKey;
    /// # use google_cloud_storage_service::options::InsertObjectOptions;
    /// # async fn sample(service: &Service) -> anyhow::Result<()> {
    /// let key = EncryptionKey::new(vec![0x42_u8; 32]);
    /// let options = InsertObjectOptions::default().set_encryption_key(key);
    /// let object = service
    ///     .insert_object("my-bucket", "report.json", r#"{"ok": true}"#, options)
    ///     .await?;
    /// assert_eq!(object.content_type.as_deref(), Some("application/json"));
    /// # Ok(()) }
    /// ```
    pub async fn insert_object(
        &self,
        bucket: impl Into<String>,
        name: impl Into<String>,
        data: impl Into<Bytes>,
        opts: InsertObjectOptions,
    ) -> Result<Object> {
        let name = name.into();
        let content_type = opts.content_type.or_else(|| {
            Some(mime_type_for(&name)).filter(|m| !m.is_empty())
        });
        let metadata = Object {
            name: Some(name),
            content_type,
            cache_control: opts.cache_control,
            content_disposition: opts.content_disposition,
            content_encoding: opts.content_encoding,
            content_language: opts.content_language,
            md5_hash: opts.md5,
            crc32c: opts.crc32c,
            metadata: opts.metadata,
            storage_class: opts.storage_class,
            ..Default::default()
        };
        let req = InsertObjectRequest {
            bucket: bucket.into(),
            metadata,
            media: data.into(),
            predefined_acl: opts.acl.map(|a| a.to_string()),
            if_generation_match: opts.if_generation_match,
            encryption_key: opts.encryption_key,
            user_project: opts.user_project,
        };
        self.execute("insert_object", self.stub.insert_object(req))
            .await
    }

    /// Updates the metadata of an object. Fields not set in `opts` are left
    /// unchanged.
    pub async fn patch_object(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        opts: PatchObjectOptions,
    ) -> Result<Object> {
        let metadata = Object {
            content_type: opts.content_type,
            cache_control: opts.cache_control,
            content_disposition: opts.content_disposition,
            content_encoding: opts.content_encoding,
            content_language: opts.content_language,
            metadata: opts.metadata,
            ..Default::default()
        };
        let req = PatchObjectRequest {
            bucket: bucket.into(),
            object: object.into(),
            metadata,
            generation: opts.generation,
            predefined_acl: opts.acl.map(|a| a.to_string()),
            if_metageneration_match: opts.if_metageneration_match,
            user_project: opts.user_project,
        };
        self.execute("patch_object", self.stub.patch_object(req))
            .await
    }

    /// Deletes an object.
    ///
    /// Set a generation in `opts` to delete a specific version of the object.
    pub async fn delete_object(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        opts: DeleteObjectOptions,
    ) -> Result<()> {
        let req = DeleteObjectRequest {
            bucket: bucket.into(),
            object: object.into(),
            generation: opts.generation,
            user_project: opts.user_project,
        };
        self.execute("delete_object", self.stub.delete_object(req))
            .await
    }

    /// Copies an object, possibly across buckets and locations.
    ///
    /// Large copies may need more than one call. If the response is not
    /// [done][RewriteResponse::done], call this function again using the
    /// returned [rewrite_token][RewriteResponse::rewrite_token].
    ///
    /// The [encryption_key][CopyObjectOptions::encryption_key] decrypts the
    /// source object, and also encrypts the destination object unless a
    /// [destination_encryption_key][CopyObjectOptions::destination_encryption_key]
    /// is set.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::client::Service;
    /// # use google_cloud_storage_service::options::CopyObjectOptions;
    /// # async fn sample(service: &Service) -> anyhow::Result<()> {
    /// let mut options = CopyObjectOptions::default();
    /// let object = loop {
    ///     let response = service
    ///         .copy_object("src-bucket", "a.txt", "dst-bucket", "b.txt", options.clone())
    ///         .await?;
    ///     if response.done {
    ///         break response.resource;
    ///     }
    ///     if let Some(token) = response.rewrite_token {
    ///         options = options.set_token(token);
    ///     }
    /// };
    /// println!("object={object:?}");
    /// # Ok(()) }
    /// ```
    pub async fn copy_object(
        &self,
        source_bucket: impl Into<String>,
        source_object: impl Into<String>,
        destination_bucket: impl Into<String>,
        destination_object: impl Into<String>,
        opts: CopyObjectOptions,
    ) -> Result<RewriteResponse> {
        let metadata = if opts.content_type.is_some()
            || opts.cache_control.is_some()
            || !opts.metadata.is_empty()
        {
            Some(Object {
                content_type: opts.content_type,
                cache_control: opts.cache_control,
                metadata: opts.metadata,
                ..Default::default()
            })
        } else {
            None
        };
        let destination_encryption_key = opts
            .destination_encryption_key
            .or_else(|| opts.encryption_key.clone());
        let req = RewriteObjectRequest {
            source_bucket: source_bucket.into(),
            source_object: source_object.into(),
            destination_bucket: destination_bucket.into(),
            destination_object: destination_object.into(),
            metadata,
            source_generation: opts.source_generation,
            destination_predefined_acl: opts.acl.map(|a| a.to_string()),
            rewrite_token: opts.token,
            source_encryption_key: opts.encryption_key,
            destination_encryption_key,
            user_project: opts.user_project,
        };
        self.execute("copy_object", self.stub.rewrite_object(req))
            .await
    }

    /// Downloads the contents of an object.
    pub async fn download_object(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        opts: DownloadObjectOptions,
    ) -> Result<Bytes> {
        let req = DownloadObjectRequest {
            bucket: bucket.into(),
            object: object.into(),
            generation: opts.generation,
            encryption_key: opts.encryption_key,
            user_project: opts.user_project,
        };
        self.execute("download_object", self.stub.download_object(req))
            .await
    }

    /// Lists the access control entries on an object.
    pub async fn list_object_acls(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        opts: ObjectAclOptions,
    ) -> Result<ListObjectAccessControlsResponse> {
        let req = ListObjectAccessControlsRequest {
            bucket: bucket.into(),
            object: object.into(),
            generation: opts.generation,
            user_project: opts.user_project,
        };
        self.execute(
            "list_object_acls",
            self.stub.list_object_access_controls(req),
        )
        .await
    }

    /// Gets the access control entry for `entity` on an object.
    pub async fn get_object_acl(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        entity: impl Into<String>,
        opts: ObjectAclOptions,
    ) -> Result<ObjectAccessControl> {
        let req = GetObjectAccessControlRequest {
            bucket: bucket.into(),
            object: object.into(),
            entity: entity.into(),
            generation: opts.generation,
            user_project: opts.user_project,
        };
        self.execute("get_object_acl", self.stub.get_object_access_control(req))
            .await
    }

    /// Grants `role` to `entity` on an object.
    pub async fn insert_object_acl(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        entity: impl Into<String>,
        role: impl Into<Role>,
        opts: ObjectAclOptions,
    ) -> Result<ObjectAccessControl> {
        let role: Role = role.into();
        let req = InsertObjectAccessControlRequest {
            bucket: bucket.into(),
            object: object.into(),
            acl: ObjectAccessControl::new()
                .set_entity(entity)
                .set_role(role.as_str()),
            generation: opts.generation,
            user_project: opts.user_project,
        };
        self.execute(
            "insert_object_acl",
            self.stub.insert_object_access_control(req),
        )
        .await
    }

    /// Changes the role granted to `entity` on an object.
    pub async fn patch_object_acl(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        entity: impl Into<String>,
        role: impl Into<Role>,
        opts: ObjectAclOptions,
    ) -> Result<ObjectAccessControl> {
        let role: Role = role.into();
        let entity = entity.into();
        let req = PatchObjectAccessControlRequest {
            bucket: bucket.into(),
            object: object.into(),
            acl: ObjectAccessControl::new()
                .set_entity(entity.clone())
                .set_role(role.as_str()),
            entity,
            generation: opts.generation,
            user_project: opts.user_project,
        };
        self.execute(
            "patch_object_acl",
            self.stub.patch_object_access_control(req),
        )
        .await
    }

    /// Removes the access control entry for `entity` from an object.
    pub async fn delete_object_acl(
        &self,
        bucket: impl Into<String>,
        object: impl Into<String>,
        entity: impl Into<String>,
        opts: ObjectAclOptions,
    ) -> Result<()> {
        let req = DeleteObjectAccessControlRequest {
            bucket: bucket.into(),
            object: object.into(),
            entity: entity.into(),
            generation: opts.generation,
            user_project: opts.user_project,
        };
        self.execute(
            "delete_object_acl",
            self.stub.delete_object_access_control(req),
        )
        .await
    }

    /// Awaits a transport call, translating any error.
    async fn execute<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = gax::Result<T>>,
    {
        call.await.map_err(|e| {
            let error = Error::from(e);
            tracing::debug!(
                project = %self.project,
                operation,
                kind = %error.kind(),
                status_code = ?error.status_code(),
                "operation failed: {}",
                error.message()
            );
            error
        })
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Service({})", self.project)
    }
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("project", &self.project)
            .field("retries", &self.retries)
            .field("timeout", &self.timeout)
            .field("stub", &self.stub)
            .finish()
    }
}

/// A builder for [Service].
///
/// ```
/// # use google_cloud_storage_service::client::Service;
/// # async fn sample() -> anyhow::Result<()> {
/// let builder = Service::builder("my-project");
/// let service = builder
///     .with_endpoint("https://storage.googleapis.com")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
pub struct ClientBuilder {
    project: String,
    config: ClientConfig,
}

impl ClientBuilder {
    pub(crate) fn new(project: String) -> Self {
        Self {
            project,
            config: ClientConfig::default(),
        }
    }

    /// Creates a new adapter.
    ///
    /// Loads the default credentials if none are configured, and fails if
    /// they cannot be found.
    pub async fn build(self) -> crate::client_builder::Result<Service> {
        Service::new(self).await
    }

    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Configures the authentication credentials.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_service::client::Service;
    /// # async fn sample() -> anyhow::Result<()> {
    /// use auth::credentials::anonymous::Builder;
    /// let service = Service::builder("my-project")
    ///     .with_credentials(Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_credentials<V: Into<auth::credentials::Credentials>>(mut self, v: V) -> Self {
        self.config.credentials = Some(v.into());
        self
    }

    /// Configures the number of retries after a transient failure.
    ///
    /// Use `0` to disable retries.
    pub fn with_retries(mut self, v: u32) -> Self {
        self.config.retries = v;
        self
    }

    /// Configures the timeout for each attempt.
    pub fn with_timeout(mut self, v: Duration) -> Self {
        self.config.timeout = Some(v);
        self
    }

    /// Logs each request at the `info` level.
    ///
    /// Setting `GOOGLE_CLOUD_RUST_LOGGING=true` in the environment has the
    /// same effect.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }
}

fn bucket_acls(rules: Vec<AclRule>) -> Vec<BucketAccessControl> {
    rules
        .into_iter()
        .map(|r| {
            BucketAccessControl::new()
                .set_entity(r.entity)
                .set_role(r.role.as_str())
        })
        .collect()
}

fn object_acls(rules: Vec<AclRule>) -> Vec<ObjectAccessControl> {
    rules
        .into_iter()
        .map(|r| {
            ObjectAccessControl::new()
                .set_entity(r.entity)
                .set_role(r.role.as_str())
        })
        .collect()
}

fn logging(log_bucket: Option<String>, log_object_prefix: Option<String>) -> Option<Logging> {
    if log_bucket.is_none() && log_object_prefix.is_none() {
        return None;
    }
    Some(Logging {
        log_bucket,
        log_object_prefix,
    })
}

fn website(main_page_suffix: Option<String>, not_found_page: Option<String>) -> Option<Website> {
    if main_page_suffix.is_none() && not_found_page.is_none() {
        return None;
    }
    Some(Website {
        main_page_suffix,
        not_found_page,
    })
}

fn billing(requester_pays: bool) -> Billing {
    Billing { requester_pays }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::entity;
    use crate::model::Cors;
    use std::sync::Mutex;

    // Records the last request sent to a subset of the transport methods.
    #[derive(Debug, Default)]
    struct Recorder {
        insert_bucket: Mutex<Option<InsertBucketRequest>>,
        patch_bucket: Mutex<Option<PatchBucketRequest>>,
        insert_object: Mutex<Option<InsertObjectRequest>>,
    }

    impl crate::stub::Storage for Arc<Recorder> {
        async fn insert_bucket(&self, req: InsertBucketRequest) -> gax::Result<Bucket> {
            let name = req.bucket.name.clone();
            *self.insert_bucket.lock().unwrap() = Some(req);
            Ok(Bucket {
                name,
                ..Default::default()
            })
        }

        async fn patch_bucket(&self, req: PatchBucketRequest) -> gax::Result<Bucket> {
            *self.patch_bucket.lock().unwrap() = Some(req);
            Ok(Bucket::default())
        }

        async fn insert_object(&self, req: InsertObjectRequest) -> gax::Result<Object> {
            let metadata = req.metadata.clone();
            *self.insert_object.lock().unwrap() = Some(req);
            Ok(metadata)
        }
    }

    fn test_service() -> (Service, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let service = Service::from_stub("test-project", recorder.clone());
        (service, recorder)
    }

    #[test]
    fn from_stub_defaults() {
        let (service, _) = test_service();
        assert_eq!(service.project(), "test-project");
        assert_eq!(service.retries(), 3);
        assert_eq!(service.timeout(), None);
    }

    #[test]
    fn display() {
        let (service, _) = test_service();
        assert_eq!(service.to_string(), "Service(test-project)");
        let debug = format!("{service:?}");
        assert!(debug.contains("test-project"), "{debug}");
    }

    #[test]
    fn service_is_send_and_sync() {
        static_assertions::assert_impl_all!(Service: Clone, Send, Sync);
    }

    #[tokio::test]
    async fn builder_defaults() -> anyhow::Result<()> {
        let service = Service::builder("test-project")
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        assert_eq!(service.retries(), 3);
        assert_eq!(service.timeout(), None);
        Ok(())
    }

    #[tokio::test]
    async fn builder_overrides() -> anyhow::Result<()> {
        let service = Service::builder("test-project")
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_retries(5)
            .with_timeout(Duration::from_secs(30))
            .with_endpoint("http://localhost:1")
            .with_tracing()
            .build()
            .await?;
        assert_eq!(service.retries(), 5);
        assert_eq!(service.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(service.to_string(), "Service(test-project)");
        Ok(())
    }

    #[tokio::test]
    async fn insert_bucket_mapping() -> anyhow::Result<()> {
        let (service, recorder) = test_service();
        let options = InsertBucketOptions::default()
            .set_acl("private")
            .set_default_acl("public")
            .set_acl_rules([AclRule::new(entity::user("a@example.com"), Role::Owner)])
            .set_location("US")
            .set_versioning(true)
            .set_logging_bucket("logs")
            .set_website_main("index.html")
            .set_cors([Cors::new().set_origin(["*"]).set_method(["GET"])])
            .set_labels([("env", "test")])
            .set_requester_pays(true);
        let bucket = service.insert_bucket("test-bucket", options).await?;
        assert_eq!(bucket.name.as_deref(), Some("test-bucket"));

        let req = recorder
            .insert_bucket
            .lock()
            .unwrap()
            .take()
            .expect("insert_bucket called");
        assert_eq!(req.project, "test-project");
        assert_eq!(req.predefined_acl.as_deref(), Some("private"));
        assert_eq!(req.predefined_default_object_acl.as_deref(), Some("publicRead"));
        assert_eq!(req.bucket.location.as_deref(), Some("US"));
        assert_eq!(req.bucket.versioning, Some(Versioning::new(true)));
        assert_eq!(
            req.bucket.logging.and_then(|l| l.log_bucket),
            Some("logs".to_string())
        );
        let website = req.bucket.website.expect("website is set");
        assert_eq!(website.main_page_suffix.as_deref(), Some("index.html"));
        assert_eq!(website.not_found_page, None);
        assert_eq!(req.bucket.cors.len(), 1);
        assert_eq!(req.bucket.labels.get("env").map(String::as_str), Some("test"));
        assert_eq!(req.bucket.billing.map(|b| b.requester_pays), Some(true));
        assert_eq!(
            req.bucket.acl,
            vec![
                BucketAccessControl::new()
                    .set_entity("user-a@example.com")
                    .set_role("OWNER")
            ]
        );
        assert!(req.bucket.default_object_acl.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn patch_bucket_mapping() -> anyhow::Result<()> {
        let (service, recorder) = test_service();
        let options = PatchBucketOptions::default()
            .set_acl("project_private")
            .set_if_metageneration_match(7);
        service.patch_bucket("test-bucket", options).await?;

        let req = recorder
            .patch_bucket
            .lock()
            .unwrap()
            .take()
            .expect("patch_bucket called");
        assert_eq!(req.bucket, "test-bucket");
        assert_eq!(req.predefined_acl.as_deref(), Some("projectPrivate"));
        assert_eq!(req.if_metageneration_match, Some(7));
        // Unset fields are not sent.
        assert_eq!(req.metadata, Bucket::default());
        Ok(())
    }

    #[tokio::test]
    async fn insert_object_content_type() -> anyhow::Result<()> {
        let (service, recorder) = test_service();

        let object = service
            .insert_object(
                "test-bucket",
                "a/b/file.json",
                "{}",
                InsertObjectOptions::default(),
            )
            .await?;
        assert_eq!(object.content_type.as_deref(), Some("application/json"));
        let req = recorder
            .insert_object
            .lock()
            .unwrap()
            .take()
            .expect("insert_object called");
        assert_eq!(req.media, Bytes::from_static(b"{}"));

        let object = service
            .insert_object(
                "test-bucket",
                "file.json",
                "{}",
                InsertObjectOptions::default().set_content_type("text/plain"),
            )
            .await?;
        assert_eq!(object.content_type.as_deref(), Some("text/plain"));

        let object = service
            .insert_object(
                "test-bucket",
                "file.unknown-extension",
                "data",
                InsertObjectOptions::default(),
            )
            .await?;
        assert_eq!(object.content_type, None);
        Ok(())
    }

    #[test]
    fn helpers() {
        assert_eq!(logging(None, None), None);
        assert_eq!(website(None, None), None);
        let got = website(None, Some("404.html".into())).expect("website is set");
        assert_eq!(got.not_found_page.as_deref(), Some("404.html"));
        assert!(object_acls(Vec::new()).is_empty());
    }
}
