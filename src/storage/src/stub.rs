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

//! The transport used by the service adapter.
//!
//! [Service][crate::client::Service] does not make HTTP requests directly.
//! Each operation builds a request and makes exactly one call to a type
//! implementing [Storage]. The default implementation is
//! [HttpStorage][crate::client::HttpStorage].
//!
//! Applications may implement this trait to mock the service in their tests,
//! and then use [Service::from_stub][crate::client::Service::from_stub].

use crate::model::request::*;
use crate::model::{
    Bucket, BucketAccessControl, ListBucketAccessControlsResponse, ListBucketsResponse,
    ListObjectAccessControlsResponse, ListObjectsResponse, Object, ObjectAccessControl,
    RewriteResponse,
};
use gax::Result;

/// Defines the trait used to implement [crate::client::Service].
///
/// Application developers may need to implement this trait to mock
/// `client::Service`. In other use-cases, application developers only
/// use `client::Service` and need not be concerned with this trait or
/// its implementations.
///
/// The trait provides a default implementation of each method, so mocks only
/// need to implement the methods used in each test. These default
/// implementations panic.
pub trait Storage: std::fmt::Debug + Send + Sync {
    /// Implements `storage.buckets.list`.
    fn list_buckets(
        &self,
        _req: ListBucketsRequest,
    ) -> impl std::future::Future<Output = Result<ListBucketsResponse>> + Send {
        unimplemented_stub::<ListBucketsResponse>()
    }

    /// Implements `storage.buckets.get`.
    fn get_bucket(
        &self,
        _req: GetBucketRequest,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements `storage.buckets.insert`.
    fn insert_bucket(
        &self,
        _req: InsertBucketRequest,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements `storage.buckets.patch`.
    fn patch_bucket(
        &self,
        _req: PatchBucketRequest,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements `storage.buckets.delete`.
    fn delete_bucket(
        &self,
        _req: DeleteBucketRequest,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements `storage.bucketAccessControls.list`.
    fn list_bucket_access_controls(
        &self,
        _req: ListBucketAccessControlsRequest,
    ) -> impl std::future::Future<Output = Result<ListBucketAccessControlsResponse>> + Send {
        unimplemented_stub::<ListBucketAccessControlsResponse>()
    }

    /// Implements `storage.bucketAccessControls.get`.
    fn get_bucket_access_control(
        &self,
        _req: GetBucketAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<BucketAccessControl>> + Send {
        unimplemented_stub::<BucketAccessControl>()
    }

    /// Implements `storage.bucketAccessControls.insert`.
    fn insert_bucket_access_control(
        &self,
        _req: InsertBucketAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<BucketAccessControl>> + Send {
        unimplemented_stub::<BucketAccessControl>()
    }

    /// Implements `storage.bucketAccessControls.patch`.
    fn patch_bucket_access_control(
        &self,
        _req: PatchBucketAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<BucketAccessControl>> + Send {
        unimplemented_stub::<BucketAccessControl>()
    }

    /// Implements `storage.bucketAccessControls.delete`.
    fn delete_bucket_access_control(
        &self,
        _req: DeleteBucketAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements `storage.defaultObjectAccessControls.list`.
    fn list_default_object_access_controls(
        &self,
        _req: ListDefaultObjectAccessControlsRequest,
    ) -> impl std::future::Future<Output = Result<ListObjectAccessControlsResponse>> + Send {
        unimplemented_stub::<ListObjectAccessControlsResponse>()
    }

    /// Implements `storage.defaultObjectAccessControls.get`.
    fn get_default_object_access_control(
        &self,
        _req: GetDefaultObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<ObjectAccessControl>> + Send {
        unimplemented_stub::<ObjectAccessControl>()
    }

    /// Implements `storage.defaultObjectAccessControls.insert`.
    fn insert_default_object_access_control(
        &self,
        _req: InsertDefaultObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<ObjectAccessControl>> + Send {
        unimplemented_stub::<ObjectAccessControl>()
    }

    /// Implements `storage.defaultObjectAccessControls.patch`.
    fn patch_default_object_access_control(
        &self,
        _req: PatchDefaultObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<ObjectAccessControl>> + Send {
        unimplemented_stub::<ObjectAccessControl>()
    }

    /// Implements `storage.defaultObjectAccessControls.delete`.
    fn delete_default_object_access_control(
        &self,
        _req: DeleteDefaultObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements `storage.objects.list`.
    fn list_objects(
        &self,
        _req: ListObjectsRequest,
    ) -> impl std::future::Future<Output = Result<ListObjectsResponse>> + Send {
        unimplemented_stub::<ListObjectsResponse>()
    }

    /// Implements `storage.objects.get`.
    fn get_object(
        &self,
        _req: GetObjectRequest,
    ) -> impl std::future::Future<Output = Result<Object>> + Send {
        unimplemented_stub::<Object>()
    }

    /// Implements `storage.objects.insert`.
    fn insert_object(
        &self,
        _req: InsertObjectRequest,
    ) -> impl std::future::Future<Output = Result<Object>> + Send {
        unimplemented_stub::<Object>()
    }

    /// Implements `storage.objects.patch`.
    fn patch_object(
        &self,
        _req: PatchObjectRequest,
    ) -> impl std::future::Future<Output = Result<Object>> + Send {
        unimplemented_stub::<Object>()
    }

    /// Implements `storage.objects.delete`.
    fn delete_object(
        &self,
        _req: DeleteObjectRequest,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }

    /// Implements `storage.objects.rewrite`.
    fn rewrite_object(
        &self,
        _req: RewriteObjectRequest,
    ) -> impl std::future::Future<Output = Result<RewriteResponse>> + Send {
        unimplemented_stub::<RewriteResponse>()
    }

    /// Implements `storage.objects.get` with `alt=media`.
    fn download_object(
        &self,
        _req: DownloadObjectRequest,
    ) -> impl std::future::Future<Output = Result<bytes::Bytes>> + Send {
        unimplemented_stub::<bytes::Bytes>()
    }

    /// Implements `storage.objectAccessControls.list`.
    fn list_object_access_controls(
        &self,
        _req: ListObjectAccessControlsRequest,
    ) -> impl std::future::Future<Output = Result<ListObjectAccessControlsResponse>> + Send {
        unimplemented_stub::<ListObjectAccessControlsResponse>()
    }

    /// Implements `storage.objectAccessControls.get`.
    fn get_object_access_control(
        &self,
        _req: GetObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<ObjectAccessControl>> + Send {
        unimplemented_stub::<ObjectAccessControl>()
    }

    /// Implements `storage.objectAccessControls.insert`.
    fn insert_object_access_control(
        &self,
        _req: InsertObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<ObjectAccessControl>> + Send {
        unimplemented_stub::<ObjectAccessControl>()
    }

    /// Implements `storage.objectAccessControls.patch`.
    fn patch_object_access_control(
        &self,
        _req: PatchObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<ObjectAccessControl>> + Send {
        unimplemented_stub::<ObjectAccessControl>()
    }

    /// Implements `storage.objectAccessControls.delete`.
    fn delete_object_access_control(
        &self,
        _req: DeleteObjectAccessControlRequest,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        unimplemented_stub::<()>()
    }
}

async fn unimplemented_stub<T: Send>() -> Result<T> {
    unimplemented!("the stub does not implement this method");
}

/// A dyn-compatible, crate-private version of [Storage].
pub(crate) mod dynamic {
    use super::*;

    #[async_trait::async_trait]
    pub trait Storage: std::fmt::Debug + Send + Sync {
        async fn list_buckets(&self, req: ListBucketsRequest) -> Result<ListBucketsResponse>;
        async fn get_bucket(&self, req: GetBucketRequest) -> Result<Bucket>;
        async fn insert_bucket(&self, req: InsertBucketRequest) -> Result<Bucket>;
        async fn patch_bucket(&self, req: PatchBucketRequest) -> Result<Bucket>;
        async fn delete_bucket(&self, req: DeleteBucketRequest) -> Result<()>;
        async fn list_bucket_access_controls(
            &self,
            req: ListBucketAccessControlsRequest,
        ) -> Result<ListBucketAccessControlsResponse>;
        async fn get_bucket_access_control(
            &self,
            req: GetBucketAccessControlRequest,
        ) -> Result<BucketAccessControl>;
        async fn insert_bucket_access_control(
            &self,
            req: InsertBucketAccessControlRequest,
        ) -> Result<BucketAccessControl>;
        async fn patch_bucket_access_control(
            &self,
            req: PatchBucketAccessControlRequest,
        ) -> Result<BucketAccessControl>;
        async fn delete_bucket_access_control(
            &self,
            req: DeleteBucketAccessControlRequest,
        ) -> Result<()>;
        async fn list_default_object_access_controls(
            &self,
            req: ListDefaultObjectAccessControlsRequest,
        ) -> Result<ListObjectAccessControlsResponse>;
        async fn get_default_object_access_control(
            &self,
            req: GetDefaultObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl>;
        async fn insert_default_object_access_control(
            &self,
            req: InsertDefaultObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl>;
        async fn patch_default_object_access_control(
            &self,
            req: PatchDefaultObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl>;
        async fn delete_default_object_access_control(
            &self,
            req: DeleteDefaultObjectAccessControlRequest,
        ) -> Result<()>;
        async fn list_objects(&self, req: ListObjectsRequest) -> Result<ListObjectsResponse>;
        async fn get_object(&self, req: GetObjectRequest) -> Result<Object>;
        async fn insert_object(&self, req: InsertObjectRequest) -> Result<Object>;
        async fn patch_object(&self, req: PatchObjectRequest) -> Result<Object>;
        async fn delete_object(&self, req: DeleteObjectRequest) -> Result<()>;
        async fn rewrite_object(&self, req: RewriteObjectRequest) -> Result<RewriteResponse>;
        async fn download_object(&self, req: DownloadObjectRequest) -> Result<bytes::Bytes>;
        async fn list_object_access_controls(
            &self,
            req: ListObjectAccessControlsRequest,
        ) -> Result<ListObjectAccessControlsResponse>;
        async fn get_object_access_control(
            &self,
            req: GetObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl>;
        async fn insert_object_access_control(
            &self,
            req: InsertObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl>;
        async fn patch_object_access_control(
            &self,
            req: PatchObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl>;
        async fn delete_object_access_control(
            &self,
            req: DeleteObjectAccessControlRequest,
        ) -> Result<()>;
    }

    /// All implementations of [super::Storage] also implement [Storage].
    #[async_trait::async_trait]
    impl<T: super::Storage> Storage for T {
        async fn list_buckets(&self, req: ListBucketsRequest) -> Result<ListBucketsResponse> {
            <T as super::Storage>::list_buckets(self, req).await
        }

        async fn get_bucket(&self, req: GetBucketRequest) -> Result<Bucket> {
            <T as super::Storage>::get_bucket(self, req).await
        }

        async fn insert_bucket(&self, req: InsertBucketRequest) -> Result<Bucket> {
            <T as super::Storage>::insert_bucket(self, req).await
        }

        async fn patch_bucket(&self, req: PatchBucketRequest) -> Result<Bucket> {
            <T as super::Storage>::patch_bucket(self, req).await
        }

        async fn delete_bucket(&self, req: DeleteBucketRequest) -> Result<()> {
            <T as super::Storage>::delete_bucket(self, req).await
        }

        async fn list_bucket_access_controls(
            &self,
            req: ListBucketAccessControlsRequest,
        ) -> Result<ListBucketAccessControlsResponse> {
            <T as super::Storage>::list_bucket_access_controls(self, req).await
        }

        async fn get_bucket_access_control(
            &self,
            req: GetBucketAccessControlRequest,
        ) -> Result<BucketAccessControl> {
            <T as super::Storage>::get_bucket_access_control(self, req).await
        }

        async fn insert_bucket_access_control(
            &self,
            req: InsertBucketAccessControlRequest,
        ) -> Result<BucketAccessControl> {
            <T as super::Storage>::insert_bucket_access_control(self, req).await
        }

        async fn patch_bucket_access_control(
            &self,
            req: PatchBucketAccessControlRequest,
        ) -> Result<BucketAccessControl> {
            <T as super::Storage>::patch_bucket_access_control(self, req).await
        }

        async fn delete_bucket_access_control(
            &self,
            req: DeleteBucketAccessControlRequest,
        ) -> Result<()> {
            <T as super::Storage>::delete_bucket_access_control(self, req).await
        }

        async fn list_default_object_access_controls(
            &self,
            req: ListDefaultObjectAccessControlsRequest,
        ) -> Result<ListObjectAccessControlsResponse> {
            <T as super::Storage>::list_default_object_access_controls(self, req).await
        }

        async fn get_default_object_access_control(
            &self,
            req: GetDefaultObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl> {
            <T as super::Storage>::get_default_object_access_control(self, req).await
        }

        async fn insert_default_object_access_control(
            &self,
            req: InsertDefaultObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl> {
            <T as super::Storage>::insert_default_object_access_control(self, req).await
        }

        async fn patch_default_object_access_control(
            &self,
            req: PatchDefaultObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl> {
            <T as super::Storage>::patch_default_object_access_control(self, req).await
        }

        async fn delete_default_object_access_control(
            &self,
            req: DeleteDefaultObjectAccessControlRequest,
        ) -> Result<()> {
            <T as super::Storage>::delete_default_object_access_control(self, req).await
        }

        async fn list_objects(&self, req: ListObjectsRequest) -> Result<ListObjectsResponse> {
            <T as super::Storage>::list_objects(self, req).await
        }

        async fn get_object(&self, req: GetObjectRequest) -> Result<Object> {
            <T as super::Storage>::get_object(self, req).await
        }

        async fn insert_object(&self, req: InsertObjectRequest) -> Result<Object> {
            <T as super::Storage>::insert_object(self, req).await
        }

        async fn patch_object(&self, req: PatchObjectRequest) -> Result<Object> {
            <T as super::Storage>::patch_object(self, req).await
        }

        async fn delete_object(&self, req: DeleteObjectRequest) -> Result<()> {
            <T as super::Storage>::delete_object(self, req).await
        }

        async fn rewrite_object(&self, req: RewriteObjectRequest) -> Result<RewriteResponse> {
            <T as super::Storage>::rewrite_object(self, req).await
        }

        async fn download_object(&self, req: DownloadObjectRequest) -> Result<bytes::Bytes> {
            <T as super::Storage>::download_object(self, req).await
        }

        async fn list_object_access_controls(
            &self,
            req: ListObjectAccessControlsRequest,
        ) -> Result<ListObjectAccessControlsResponse> {
            <T as super::Storage>::list_object_access_controls(self, req).await
        }

        async fn get_object_access_control(
            &self,
            req: GetObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl> {
            <T as super::Storage>::get_object_access_control(self, req).await
        }

        async fn insert_object_access_control(
            &self,
            req: InsertObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl> {
            <T as super::Storage>::insert_object_access_control(self, req).await
        }

        async fn patch_object_access_control(
            &self,
            req: PatchObjectAccessControlRequest,
        ) -> Result<ObjectAccessControl> {
            <T as super::Storage>::patch_object_access_control(self, req).await
        }

        async fn delete_object_access_control(
            &self,
            req: DeleteObjectAccessControlRequest,
        ) -> Result<()> {
            <T as super::Storage>::delete_object_access_control(self, req).await
        }
    }
}
