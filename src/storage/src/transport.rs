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

use crate::client_builder::Error as BuilderError;
use crate::config::{ClientConfig, DEFAULT_ENDPOINT, tracing_enabled};
use crate::encryption::{COPY_SOURCE_KEY_HEADERS, KEY_HEADERS, apply_encryption_headers};
use crate::model::request::*;
use crate::model::{
    Bucket, BucketAccessControl, ListBucketAccessControlsResponse, ListBucketsResponse,
    ListObjectAccessControlsResponse, ListObjectsResponse, Object, ObjectAccessControl,
    RewriteResponse,
};
use auth::credentials::{CacheableResource, Credentials};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::error::Error;
use gax::retry_policy::RetryPolicy;
use gax::retry_throttler::{AdaptiveThrottler, SharedRetryThrottler};
use http::Extensions;
use reqwest::Method;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The default implementation of [stub::Storage][crate::stub::Storage].
///
/// Sends each request to the Cloud Storage JSON API using HTTP. Idempotent
/// requests that fail with a transient error are retried, up to the number of
/// retries in the configuration.
///
/// Applications rarely need to use this type directly,
/// [Service::builder()][crate::client::Service::builder] creates one.
#[derive(Clone, Debug)]
pub struct HttpStorage {
    inner: Arc<HttpStorageInner>,
}

#[derive(Debug)]
struct HttpStorageInner {
    client: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    retry_throttler: SharedRetryThrottler,
    tracing: bool,
}

impl HttpStorage {
    /// Creates a transport from the given configuration.
    ///
    /// Loads the [Application Default Credentials] if the configuration does
    /// not include any credentials.
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
    pub async fn new(config: ClientConfig) -> crate::client_builder::Result<Self> {
        Self::new_with_backoff(config, Arc::new(crate::backoff_policy::default()))
    }

    pub(crate) fn new_with_backoff(
        config: ClientConfig,
        backoff_policy: Arc<dyn BackoffPolicy>,
    ) -> crate::client_builder::Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let tracing = tracing_enabled(&config);
        let cred = match config.credentials {
            Some(c) => c,
            None => auth::credentials::Builder::default()
                .build()
                .map_err(BuilderError::cred)?,
        };
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let inner = HttpStorageInner {
            client,
            cred,
            endpoint,
            timeout: config.timeout,
            retry_policy: Arc::new(crate::retry_policy::with_retries(config.retries)),
            backoff_policy,
            retry_throttler: Arc::new(Mutex::new(AdaptiveThrottler::default())),
            tracing,
        };
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .client
            .request(method, format!("{}/storage/v1/{path}", self.inner.endpoint))
    }

    fn insert_object_request(&self, req: &InsertObjectRequest) -> Result<reqwest::RequestBuilder> {
        let builder = self
            .inner
            .client
            .request(
                Method::POST,
                format!(
                    "{}/upload/storage/v1/b/{}/o",
                    self.inner.endpoint,
                    enc(&req.bucket)
                ),
            )
            .query(&[("uploadType", "multipart")]);
        let builder = match &req.metadata.name {
            Some(name) => builder.query(&[("name", name)]),
            None => builder,
        };
        let builder = query(builder, "predefinedAcl", req.predefined_acl.as_ref());
        let builder = query(builder, "ifGenerationMatch", req.if_generation_match);
        let builder = query(builder, "userProject", req.user_project.as_ref());
        let builder =
            apply_encryption_headers(builder, req.encryption_key.as_ref(), &KEY_HEADERS);

        let metadata = serde_json::to_string(&req.metadata).map_err(Error::ser)?;
        let metadata = reqwest::multipart::Part::text(metadata)
            .mime_str("application/json; charset=UTF-8")
            .map_err(Error::ser)?;
        let media =
            reqwest::multipart::Part::stream_with_length(req.media.clone(), req.media.len() as u64);
        let media = match req.metadata.content_type.as_deref() {
            Some(ct) if !ct.is_empty() => media.mime_str(ct).map_err(Error::ser)?,
            _ => media,
        };
        let form = reqwest::multipart::Form::new()
            .part("metadata", metadata)
            .part("media", media);
        let builder = builder.header(
            "content-type",
            format!("multipart/related; boundary={}", form.boundary()),
        );
        Ok(builder.body(reqwest::Body::wrap_stream(form.into_stream())))
    }

    /// Sends a request and parses the response as JSON.
    async fn execute<O, F>(&self, name: &'static str, idempotent: bool, build: F) -> Result<O>
    where
        O: serde::de::DeserializeOwned + Default,
        F: Fn() -> Result<reqwest::RequestBuilder> + Send + Sync,
    {
        let response = self.send(name, idempotent, build).await?;
        to_json(response).await
    }

    /// Runs the retry loop.
    ///
    /// Only idempotent requests are retried after a failure that may have
    /// reached the service.
    async fn send<F>(
        &self,
        name: &'static str,
        idempotent: bool,
        build: F,
    ) -> Result<reqwest::Response>
    where
        F: Fn() -> Result<reqwest::RequestBuilder> + Send + Sync,
    {
        let build = &build;
        gax::retry_loop_internal::retry_loop(
            async |remaining_time| {
                let builder = self.apply_auth_headers(build()?).await?;
                let builder = match attempt_timeout(self.inner.timeout, remaining_time) {
                    Some(t) => builder.timeout(t),
                    None => builder,
                };
                self.attempt(name, builder).await.inspect_err(|error| {
                    tracing::debug!(operation = name, idempotent, %error, "attempt failed");
                })
            },
            async |delay| tokio::time::sleep(delay).await,
            idempotent,
            self.inner.retry_throttler.clone(),
            self.inner.retry_policy.clone(),
            self.inner.backoff_policy.clone(),
        )
        .await
    }

    async fn attempt(
        &self,
        name: &'static str,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        let request = builder.build().map_err(Error::io)?;
        if self.inner.tracing {
            tracing::info!(
                operation = name,
                method = %request.method(),
                url = %request.url(),
                "sending request"
            );
        }
        let response = self
            .inner
            .client
            .execute(request)
            .await
            .map_err(map_send_error)?;
        if !response.status().is_success() {
            return Err(to_http_error(response).await);
        }
        Ok(response)
    }

    // Helper method to apply authentication headers to the request builder.
    async fn apply_auth_headers(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        let cached_auth_headers = self
            .inner
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;

        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                return Err(Error::authentication(
                    gax::error::CredentialsError::from_msg(
                        false,
                        "credentials returned cached headers for an uncached request",
                    ),
                ));
            }
        };
        Ok(builder.headers(auth_headers))
    }
}

impl crate::stub::Storage for HttpStorage {
    async fn list_buckets(&self, req: ListBucketsRequest) -> Result<ListBucketsResponse> {
        self.execute("list_buckets", true, || {
            let builder = self
                .request(Method::GET, "b")
                .query(&[("project", &req.project)]);
            let builder = query(builder, "prefix", req.prefix.as_ref());
            let builder = query(builder, "pageToken", req.page_token.as_ref());
            let builder = query(builder, "maxResults", req.max_results);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn get_bucket(&self, req: GetBucketRequest) -> Result<Bucket> {
        self.execute("get_bucket", true, || {
            let builder = self.request(Method::GET, &format!("b/{}", enc(&req.bucket)));
            let builder = query(
                builder,
                "ifMetagenerationMatch",
                req.if_metageneration_match,
            );
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn insert_bucket(&self, req: InsertBucketRequest) -> Result<Bucket> {
        self.execute("insert_bucket", false, || {
            let builder = self
                .request(Method::POST, "b")
                .query(&[("project", &req.project)]);
            let builder = query(builder, "predefinedAcl", req.predefined_acl.as_ref());
            let builder = query(
                builder,
                "predefinedDefaultObjectAcl",
                req.predefined_default_object_acl.as_ref(),
            );
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.bucket))
        })
        .await
    }

    async fn patch_bucket(&self, req: PatchBucketRequest) -> Result<Bucket> {
        let idempotent = req.if_metageneration_match.is_some();
        self.execute("patch_bucket", idempotent, || {
            let builder = self.request(Method::PATCH, &format!("b/{}", enc(&req.bucket)));
            let builder = query(builder, "predefinedAcl", req.predefined_acl.as_ref());
            let builder = query(
                builder,
                "predefinedDefaultObjectAcl",
                req.predefined_default_object_acl.as_ref(),
            );
            let builder = query(
                builder,
                "ifMetagenerationMatch",
                req.if_metageneration_match,
            );
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.metadata))
        })
        .await
    }

    async fn delete_bucket(&self, req: DeleteBucketRequest) -> Result<()> {
        self.execute("delete_bucket", true, || {
            let builder = self.request(Method::DELETE, &format!("b/{}", enc(&req.bucket)));
            let builder = query(
                builder,
                "ifMetagenerationMatch",
                req.if_metageneration_match,
            );
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn list_bucket_access_controls(
        &self,
        req: ListBucketAccessControlsRequest,
    ) -> Result<ListBucketAccessControlsResponse> {
        self.execute("list_bucket_access_controls", true, || {
            let builder = self.request(Method::GET, &format!("b/{}/acl", enc(&req.bucket)));
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn get_bucket_access_control(
        &self,
        req: GetBucketAccessControlRequest,
    ) -> Result<BucketAccessControl> {
        self.execute("get_bucket_access_control", true, || {
            let path = format!("b/{}/acl/{}", enc(&req.bucket), enc(&req.entity));
            let builder = self.request(Method::GET, &path);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn insert_bucket_access_control(
        &self,
        req: InsertBucketAccessControlRequest,
    ) -> Result<BucketAccessControl> {
        self.execute("insert_bucket_access_control", false, || {
            let builder = self.request(Method::POST, &format!("b/{}/acl", enc(&req.bucket)));
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.acl))
        })
        .await
    }

    async fn patch_bucket_access_control(
        &self,
        req: PatchBucketAccessControlRequest,
    ) -> Result<BucketAccessControl> {
        self.execute("patch_bucket_access_control", false, || {
            let path = format!("b/{}/acl/{}", enc(&req.bucket), enc(&req.entity));
            let builder = self.request(Method::PATCH, &path);
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.acl))
        })
        .await
    }

    async fn delete_bucket_access_control(
        &self,
        req: DeleteBucketAccessControlRequest,
    ) -> Result<()> {
        self.execute("delete_bucket_access_control", false, || {
            let path = format!("b/{}/acl/{}", enc(&req.bucket), enc(&req.entity));
            let builder = self.request(Method::DELETE, &path);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn list_default_object_access_controls(
        &self,
        req: ListDefaultObjectAccessControlsRequest,
    ) -> Result<ListObjectAccessControlsResponse> {
        self.execute("list_default_object_access_controls", true, || {
            let path = format!("b/{}/defaultObjectAcl", enc(&req.bucket));
            let builder = self.request(Method::GET, &path);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn get_default_object_access_control(
        &self,
        req: GetDefaultObjectAccessControlRequest,
    ) -> Result<ObjectAccessControl> {
        self.execute("get_default_object_access_control", true, || {
            let path = format!(
                "b/{}/defaultObjectAcl/{}",
                enc(&req.bucket),
                enc(&req.entity)
            );
            let builder = self.request(Method::GET, &path);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn insert_default_object_access_control(
        &self,
        req: InsertDefaultObjectAccessControlRequest,
    ) -> Result<ObjectAccessControl> {
        self.execute("insert_default_object_access_control", false, || {
            let path = format!("b/{}/defaultObjectAcl", enc(&req.bucket));
            let builder = self.request(Method::POST, &path);
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.acl))
        })
        .await
    }

    async fn patch_default_object_access_control(
        &self,
        req: PatchDefaultObjectAccessControlRequest,
    ) -> Result<ObjectAccessControl> {
        self.execute("patch_default_object_access_control", false, || {
            let path = format!(
                "b/{}/defaultObjectAcl/{}",
                enc(&req.bucket),
                enc(&req.entity)
            );
            let builder = self.request(Method::PATCH, &path);
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.acl))
        })
        .await
    }

    async fn delete_default_object_access_control(
        &self,
        req: DeleteDefaultObjectAccessControlRequest,
    ) -> Result<()> {
        self.execute("delete_default_object_access_control", false, || {
            let path = format!(
                "b/{}/defaultObjectAcl/{}",
                enc(&req.bucket),
                enc(&req.entity)
            );
            let builder = self.request(Method::DELETE, &path);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn list_objects(&self, req: ListObjectsRequest) -> Result<ListObjectsResponse> {
        self.execute("list_objects", true, || {
            let builder = self.request(Method::GET, &format!("b/{}/o", enc(&req.bucket)));
            let builder = query(builder, "prefix", req.prefix.as_ref());
            let builder = query(builder, "delimiter", req.delimiter.as_ref());
            let builder = query(builder, "pageToken", req.page_token.as_ref());
            let builder = query(builder, "maxResults", req.max_results);
            let builder = query(builder, "versions", req.versions);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn get_object(&self, req: GetObjectRequest) -> Result<Object> {
        self.execute("get_object", true, || {
            let path = format!("b/{}/o/{}", enc(&req.bucket), enc(&req.object));
            let builder = self.request(Method::GET, &path);
            let builder = query(builder, "generation", req.generation);
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(apply_encryption_headers(
                builder,
                req.encryption_key.as_ref(),
                &KEY_HEADERS,
            ))
        })
        .await
    }

    async fn insert_object(&self, req: InsertObjectRequest) -> Result<Object> {
        let idempotent = req.if_generation_match.is_some();
        self.execute("insert_object", idempotent, || {
            self.insert_object_request(&req)
        })
        .await
    }

    async fn patch_object(&self, req: PatchObjectRequest) -> Result<Object> {
        let idempotent = req.if_metageneration_match.is_some();
        self.execute("patch_object", idempotent, || {
            let path = format!("b/{}/o/{}", enc(&req.bucket), enc(&req.object));
            let builder = self.request(Method::PATCH, &path);
            let builder = query(builder, "generation", req.generation);
            let builder = query(builder, "predefinedAcl", req.predefined_acl.as_ref());
            let builder = query(
                builder,
                "ifMetagenerationMatch",
                req.if_metageneration_match,
            );
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.metadata))
        })
        .await
    }

    async fn delete_object(&self, req: DeleteObjectRequest) -> Result<()> {
        self.execute("delete_object", true, || {
            let path = format!("b/{}/o/{}", enc(&req.bucket), enc(&req.object));
            let builder = self.request(Method::DELETE, &path);
            let builder = query(builder, "generation", req.generation);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn rewrite_object(&self, req: RewriteObjectRequest) -> Result<RewriteResponse> {
        self.execute("rewrite_object", false, || {
            let path = format!(
                "b/{}/o/{}/rewriteTo/b/{}/o/{}",
                enc(&req.source_bucket),
                enc(&req.source_object),
                enc(&req.destination_bucket),
                enc(&req.destination_object)
            );
            let builder = self.request(Method::POST, &path);
            let builder = query(builder, "sourceGeneration", req.source_generation);
            let builder = query(
                builder,
                "destinationPredefinedAcl",
                req.destination_predefined_acl.as_ref(),
            );
            let builder = query(builder, "rewriteToken", req.rewrite_token.as_ref());
            let builder = query(builder, "userProject", req.user_project.as_ref());
            let builder = apply_encryption_headers(
                builder,
                req.source_encryption_key.as_ref(),
                &COPY_SOURCE_KEY_HEADERS,
            );
            let builder = apply_encryption_headers(
                builder,
                req.destination_encryption_key.as_ref(),
                &KEY_HEADERS,
            );
            let metadata = req.metadata.clone().unwrap_or_default();
            Ok(builder.json(&metadata))
        })
        .await
    }

    async fn download_object(&self, req: DownloadObjectRequest) -> Result<bytes::Bytes> {
        let response = self
            .send("download_object", true, || {
                let path = format!("b/{}/o/{}", enc(&req.bucket), enc(&req.object));
                let builder = self
                    .request(Method::GET, &path)
                    .query(&[("alt", "media")]);
                let builder = query(builder, "generation", req.generation);
                let builder = query(builder, "userProject", req.user_project.as_ref());
                Ok(apply_encryption_headers(
                    builder,
                    req.encryption_key.as_ref(),
                    &KEY_HEADERS,
                ))
            })
            .await?;
        response.bytes().await.map_err(Error::io)
    }

    async fn list_object_access_controls(
        &self,
        req: ListObjectAccessControlsRequest,
    ) -> Result<ListObjectAccessControlsResponse> {
        self.execute("list_object_access_controls", true, || {
            let path = format!("b/{}/o/{}/acl", enc(&req.bucket), enc(&req.object));
            let builder = self.request(Method::GET, &path);
            let builder = query(builder, "generation", req.generation);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn get_object_access_control(
        &self,
        req: GetObjectAccessControlRequest,
    ) -> Result<ObjectAccessControl> {
        self.execute("get_object_access_control", true, || {
            let path = format!(
                "b/{}/o/{}/acl/{}",
                enc(&req.bucket),
                enc(&req.object),
                enc(&req.entity)
            );
            let builder = self.request(Method::GET, &path);
            let builder = query(builder, "generation", req.generation);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }

    async fn insert_object_access_control(
        &self,
        req: InsertObjectAccessControlRequest,
    ) -> Result<ObjectAccessControl> {
        self.execute("insert_object_access_control", false, || {
            let path = format!("b/{}/o/{}/acl", enc(&req.bucket), enc(&req.object));
            let builder = self.request(Method::POST, &path);
            let builder = query(builder, "generation", req.generation);
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.acl))
        })
        .await
    }

    async fn patch_object_access_control(
        &self,
        req: PatchObjectAccessControlRequest,
    ) -> Result<ObjectAccessControl> {
        self.execute("patch_object_access_control", false, || {
            let path = format!(
                "b/{}/o/{}/acl/{}",
                enc(&req.bucket),
                enc(&req.object),
                enc(&req.entity)
            );
            let builder = self.request(Method::PATCH, &path);
            let builder = query(builder, "generation", req.generation);
            let builder = query(builder, "userProject", req.user_project.as_ref());
            Ok(builder.json(&req.acl))
        })
        .await
    }

    async fn delete_object_access_control(
        &self,
        req: DeleteObjectAccessControlRequest,
    ) -> Result<()> {
        self.execute("delete_object_access_control", false, || {
            let path = format!(
                "b/{}/o/{}/acl/{}",
                enc(&req.bucket),
                enc(&req.object),
                enc(&req.entity)
            );
            let builder = self.request(Method::DELETE, &path);
            let builder = query(builder, "generation", req.generation);
            Ok(query(builder, "userProject", req.user_project.as_ref()))
        })
        .await
    }
}

/// Adds a query parameter, only if `value` is set.
fn query<T: std::fmt::Display>(
    builder: reqwest::RequestBuilder,
    name: &str,
    value: Option<T>,
) -> reqwest::RequestBuilder {
    match value {
        Some(v) => builder.query(&[(name, v.to_string())]),
        None => builder,
    }
}

fn attempt_timeout(
    configured: Option<Duration>,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (configured, remaining_time) {
        (None, None) => None,
        (Some(t), None) | (None, Some(t)) => Some(t),
        (Some(a), Some(r)) => Some(a.min(r)),
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        return Error::timeout(err);
    }
    Error::io(err)
}

async fn to_http_error(response: reqwest::Response) -> Error {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = match response.bytes().await {
        Ok(b) => b,
        Err(e) => return Error::io(e),
    };
    match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    }
}

async fn to_json<O>(response: reqwest::Response) -> Result<O>
where
    O: serde::de::DeserializeOwned + Default,
{
    let status = response.status();
    let body = response.bytes().await.map_err(Error::io)?;
    if status == reqwest::StatusCode::NO_CONTENT || body.is_empty() {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&body).map_err(Error::deser)
}

/// The set of characters that are percent encoded.
///
/// This set is defined at https://cloud.google.com/storage/docs/request-endpoints#encoding:
///
/// Encode the following characters when they appear in either the object name
/// or query string of a request URL:
///     !, #, $, &, ', (, ), *, +, ,, /, :, ;, =, ?, @, [, ], and space characters.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b'!')
    .add(b'#')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b' ')
    .add(b'%');

/// Percent encode a path segment.
pub(crate) fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}
