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

#[cfg(test)]
mod tests {
    use gax::error::{
        Error,
        rpc::{Code, Status},
    };
    use gax::Result;
    use gcs::acl::{AclRule, Role, entity};
    use gcs::client::Service;
    use gcs::encryption::EncryptionKey;
    use gcs::error::ErrorKind;
    use gcs::model::request::*;
    use gcs::model::*;
    use gcs::options::*;
    use google_cloud_storage_service as gcs;
    use http::HeaderMap;

    mockall::mock! {
        #[derive(Debug)]
        Storage {}
        impl gcs::stub::Storage for Storage {
            async fn list_buckets(&self, req: ListBucketsRequest) -> Result<ListBucketsResponse>;
            async fn get_bucket(&self, req: GetBucketRequest) -> Result<Bucket>;
            async fn insert_bucket(&self, req: InsertBucketRequest) -> Result<Bucket>;
            async fn delete_bucket(&self, req: DeleteBucketRequest) -> Result<()>;
            async fn patch_bucket(&self, req: PatchBucketRequest) -> Result<Bucket>;
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
    }

    fn service(mock: MockStorage) -> Service {
        Service::from_stub("test-project", mock)
    }

    #[tokio::test]
    async fn list_buckets() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_list_buckets()
            .times(1)
            .withf(|r| {
                r.project == "test-project"
                    && r.prefix.as_deref() == Some("logs-")
                    && r.page_token.as_deref() == Some("page-2")
                    && r.max_results == Some(25)
                    && r.user_project.is_none()
            })
            .return_once(|_| {
                let mut response = ListBucketsResponse::default();
                response.items = vec![Bucket::new().set_name("logs-1")];
                Ok(response)
            });

        let options = ListBucketsOptions::default()
            .set_prefix("logs-")
            .set_token("page-2")
            .set_max(25);
        let response = service(mock).list_buckets(options).await?;
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.next_page_token, None);
        Ok(())
    }

    #[tokio::test]
    async fn insert_bucket_acl_renamed() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_insert_bucket()
            .times(1)
            .withf(|r| {
                r.project == "test-project"
                    && r.bucket.name.as_deref() == Some("test-bucket")
                    && r.predefined_acl.as_deref() == Some("private")
                    && r.predefined_default_object_acl.is_none()
            })
            .return_once(|r| Ok(r.bucket));

        let options = InsertBucketOptions::default().set_acl("private");
        let bucket = service(mock).insert_bucket("test-bucket", options).await?;
        assert_eq!(bucket.name.as_deref(), Some("test-bucket"));
        Ok(())
    }

    // The service decides how to handle a predefined ACL combined with a
    // full list of rules. Both are forwarded unchanged.
    #[tokio::test]
    async fn insert_bucket_predefined_and_rules() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_insert_bucket()
            .times(1)
            .withf(|r| {
                r.predefined_acl.as_deref() == Some("publicRead")
                    && r.bucket.acl.len() == 1
                    && r.bucket.acl[0].entity.as_deref() == Some("group-devs@example.com")
                    && r.bucket.acl[0].role.as_deref() == Some("WRITER")
            })
            .return_once(|r| Ok(r.bucket));

        let options = InsertBucketOptions::default()
            .set_acl("public")
            .set_acl_rules([AclRule::new(entity::group("devs@example.com"), Role::Writer)]);
        service(mock).insert_bucket("test-bucket", options).await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_bucket() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_delete_bucket()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket"
                    && r.if_metageneration_match == Some(3)
                    && r.user_project.as_deref() == Some("billing-project")
            })
            .return_once(|_| Ok(()));

        let options = DeleteBucketOptions::default()
            .set_if_metageneration_match(3)
            .set_user_project("billing-project");
        service(mock).delete_bucket("test-bucket", options).await?;
        Ok(())
    }

    #[tokio::test]
    async fn insert_bucket_acl() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_insert_bucket_access_control()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket"
                    && r.acl.entity.as_deref() == Some("user-jane@example.com")
                    && r.acl.role.as_deref() == Some("READER")
            })
            .return_once(|r| Ok(r.acl));

        let acl = service(mock)
            .insert_bucket_acl(
                "test-bucket",
                entity::user("jane@example.com"),
                "reader",
                BucketAclOptions::default(),
            )
            .await?;
        assert_eq!(acl.role.as_deref(), Some("READER"));
        Ok(())
    }

    #[tokio::test]
    async fn default_acls() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_list_default_object_access_controls()
            .times(1)
            .withf(|r| r.bucket == "test-bucket")
            .return_once(|_| {
                let mut response = ListObjectAccessControlsResponse::default();
                response.items = vec![
                    ObjectAccessControl::new()
                        .set_entity("allUsers")
                        .set_role("READER"),
                ];
                Ok(response)
            });
        mock.expect_patch_default_object_access_control()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket"
                    && r.entity == "allUsers"
                    && r.acl.entity.as_deref() == Some("allUsers")
                    && r.acl.role.as_deref() == Some("OWNER")
            })
            .return_once(|r| Ok(r.acl));

        let service = service(mock);
        let response = service
            .list_default_acls("test-bucket", BucketAclOptions::default())
            .await?;
        assert_eq!(response.items.len(), 1);
        let acl = service
            .patch_default_acl(
                "test-bucket",
                entity::ALL_USERS,
                Role::Owner,
                BucketAclOptions::default(),
            )
            .await?;
        assert_eq!(acl.role.as_deref(), Some("OWNER"));
        Ok(())
    }

    #[tokio::test]
    async fn list_objects() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_list_objects()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket"
                    && r.prefix.as_deref() == Some("photos/")
                    && r.delimiter.as_deref() == Some("/")
                    && r.versions == Some(true)
                    && r.max_results == Some(100)
                    && r.page_token.is_none()
            })
            .return_once(|_| {
                let mut response = ListObjectsResponse::default();
                response.prefixes = vec!["photos/2024/".to_string()];
                response.next_page_token = Some("next".to_string());
                Ok(response)
            });

        let options = ListObjectsOptions::default()
            .set_prefix("photos/")
            .set_delimiter("/")
            .set_versions(true)
            .set_max(100);
        let response = service(mock).list_objects("test-bucket", options).await?;
        assert_eq!(response.prefixes, vec!["photos/2024/".to_string()]);
        assert_eq!(response.next_page_token.as_deref(), Some("next"));
        Ok(())
    }

    #[tokio::test]
    async fn get_object_with_key() -> anyhow::Result<()> {
        let key = EncryptionKey::new(vec![b'a'; 32]);
        let want = key.clone();
        let mut mock = MockStorage::new();
        mock.expect_get_object()
            .times(1)
            .withf(move |r| {
                r.bucket == "test-bucket"
                    && r.object == "test-object"
                    && r.generation == Some(42)
                    && r.encryption_key.as_ref() == Some(&want)
            })
            .return_once(|_| Ok(Object::new().set_name("test-object")));

        let options = GetObjectOptions::default()
            .set_generation(42)
            .set_encryption_key(key);
        let object = service(mock)
            .get_object("test-bucket", "test-object", options)
            .await?;
        assert_eq!(object.name.as_deref(), Some("test-object"));
        Ok(())
    }

    #[tokio::test]
    async fn insert_object() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_insert_object()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket"
                    && r.metadata.name.as_deref() == Some("data/config.json")
                    && r.metadata.content_type.as_deref() == Some("application/json")
                    && r.metadata.cache_control.as_deref() == Some("no-cache")
                    && r.metadata.metadata.get("color").map(String::as_str) == Some("blue")
                    && r.predefined_acl.as_deref() == Some("authenticatedRead")
                    && r.if_generation_match == Some(0)
                    && r.media == bytes::Bytes::from_static(b"{}")
                    && r.encryption_key.is_none()
            })
            .return_once(|r| Ok(r.metadata));

        let options = InsertObjectOptions::default()
            .set_acl("auth")
            .set_cache_control("no-cache")
            .set_metadata([("color", "blue")])
            .set_if_generation_match(0);
        let object = service(mock)
            .insert_object("test-bucket", "data/config.json", "{}", options)
            .await?;
        assert_eq!(object.content_type.as_deref(), Some("application/json"));
        Ok(())
    }

    #[tokio::test]
    async fn patch_object() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_patch_object()
            .times(1)
            .withf(|r| {
                r.object == "test-object"
                    && r.metadata.content_type.as_deref() == Some("text/plain")
                    && r.metadata.name.is_none()
                    && r.predefined_acl.as_deref() == Some("bucketOwnerRead")
                    && r.generation == Some(7)
            })
            .return_once(|r| Ok(r.metadata));

        let options = PatchObjectOptions::default()
            .set_acl("owner_read")
            .set_content_type("text/plain")
            .set_generation(7);
        service(mock)
            .patch_object("test-bucket", "test-object", options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_object() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_delete_object()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket" && r.object == "test-object" && r.generation == Some(9)
            })
            .return_once(|_| Ok(()));

        let options = DeleteObjectOptions::default().set_generation(9);
        service(mock)
            .delete_object("test-bucket", "test-object", options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn copy_object_shared_key() -> anyhow::Result<()> {
        let key = EncryptionKey::new(vec![b'a'; 32]);
        let want = key.clone();
        let mut mock = MockStorage::new();
        mock.expect_rewrite_object()
            .times(1)
            .withf(move |r| {
                r.source_bucket == "src-bucket"
                    && r.source_object == "src-object"
                    && r.destination_bucket == "dst-bucket"
                    && r.destination_object == "dst-object"
                    && r.source_encryption_key.as_ref() == Some(&want)
                    && r.destination_encryption_key.as_ref() == Some(&want)
                    && r.destination_predefined_acl.as_deref() == Some("private")
                    && r.metadata.is_none()
            })
            .return_once(|_| {
                let mut response = RewriteResponse::default();
                response.done = true;
                response.resource = Some(Object::new().set_name("dst-object"));
                Ok(response)
            });

        let options = CopyObjectOptions::default()
            .set_acl("private")
            .set_encryption_key(key);
        let response = service(mock)
            .copy_object("src-bucket", "src-object", "dst-bucket", "dst-object", options)
            .await?;
        assert!(response.done, "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn copy_object_rotate_key() -> anyhow::Result<()> {
        let source = EncryptionKey::new(vec![b'a'; 32]);
        let destination = EncryptionKey::new(vec![b'b'; 32]);
        let (want_source, want_destination) = (source.clone(), destination.clone());
        let mut mock = MockStorage::new();
        mock.expect_rewrite_object()
            .times(1)
            .withf(move |r| {
                r.source_encryption_key.as_ref() == Some(&want_source)
                    && r.destination_encryption_key.as_ref() == Some(&want_destination)
                    && r.rewrite_token.as_deref() == Some("continue")
                    && r.source_generation == Some(11)
                    && r.metadata.as_ref().and_then(|m| m.content_type.as_deref())
                        == Some("image/png")
            })
            .return_once(|_| Ok(RewriteResponse::default()));

        let options = CopyObjectOptions::default()
            .set_token("continue")
            .set_source_generation(11)
            .set_content_type("image/png")
            .set_encryption_key(source)
            .set_destination_encryption_key(destination);
        let response = service(mock)
            .copy_object("b", "a.png", "b", "copy.png", options)
            .await?;
        assert!(!response.done, "{response:?}");
        Ok(())
    }

    #[tokio::test]
    async fn download_object() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_download_object()
            .times(1)
            .withf(|r| r.bucket == "test-bucket" && r.object == "test-object")
            .return_once(|_| Ok(bytes::Bytes::from_static(b"hello world")));

        let data = service(mock)
            .download_object("test-bucket", "test-object", DownloadObjectOptions::default())
            .await?;
        assert_eq!(data, bytes::Bytes::from_static(b"hello world"));
        Ok(())
    }

    #[tokio::test]
    async fn object_acls() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_get_object_access_control()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket"
                    && r.object == "test-object"
                    && r.entity == "allAuthenticatedUsers"
                    && r.generation == Some(5)
            })
            .return_once(|_| {
                Ok(ObjectAccessControl::new()
                    .set_entity("allAuthenticatedUsers")
                    .set_role("READER"))
            });
        mock.expect_delete_object_access_control()
            .times(1)
            .withf(|r| r.entity == "allAuthenticatedUsers" && r.generation.is_none())
            .return_once(|_| Ok(()));

        let service = service(mock);
        let acl = service
            .get_object_acl(
                "test-bucket",
                "test-object",
                entity::ALL_AUTHENTICATED_USERS,
                ObjectAclOptions::default().set_generation(5),
            )
            .await?;
        assert_eq!(acl.role.as_deref(), Some("READER"));
        service
            .delete_object_acl(
                "test-bucket",
                "test-object",
                entity::ALL_AUTHENTICATED_USERS,
                ObjectAclOptions::default(),
            )
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_and_patch_bucket() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_get_bucket()
            .times(1)
            .withf(|r| r.bucket == "test-bucket" && r.if_metageneration_match == Some(2))
            .return_once(|_| Ok(Bucket::new().set_name("test-bucket")));
        mock.expect_patch_bucket()
            .times(1)
            .withf(|r| {
                r.bucket == "test-bucket"
                    && r.metadata.versioning == Some(Versioning::new(false))
                    && r.metadata.labels.get("team").map(String::as_str) == Some("storage")
                    && r.predefined_default_object_acl.as_deref() == Some("bucketOwnerFullControl")
            })
            .return_once(|r| Ok(r.metadata));

        let service = service(mock);
        service
            .get_bucket(
                "test-bucket",
                GetBucketOptions::default().set_if_metageneration_match(2),
            )
            .await?;
        let options = PatchBucketOptions::default()
            .set_versioning(false)
            .set_labels([("team", "storage")])
            .set_default_acl("owner_full");
        let bucket = service.patch_bucket("test-bucket", options).await?;
        assert_eq!(bucket.versioning, Some(Versioning::new(false)));
        Ok(())
    }

    #[tokio::test]
    async fn bucket_acls() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_list_bucket_access_controls()
            .times(1)
            .withf(|r| r.bucket == "test-bucket" && r.user_project.as_deref() == Some("payer"))
            .return_once(|_| Ok(ListBucketAccessControlsResponse::default()));
        mock.expect_get_bucket_access_control()
            .times(1)
            .withf(|r| r.bucket == "test-bucket" && r.entity == "domain-example.com")
            .return_once(|_| Ok(BucketAccessControl::new().set_entity("domain-example.com")));
        mock.expect_patch_bucket_access_control()
            .times(1)
            .withf(|r| {
                r.entity == "domain-example.com"
                    && r.acl.entity.as_deref() == Some("domain-example.com")
                    && r.acl.role.as_deref() == Some("OWNER")
            })
            .return_once(|r| Ok(r.acl));
        mock.expect_delete_bucket_access_control()
            .times(1)
            .withf(|r| r.bucket == "test-bucket" && r.entity == "domain-example.com")
            .return_once(|_| Ok(()));

        let service = service(mock);
        let domain = entity::domain("example.com");
        let response = service
            .list_bucket_acls(
                "test-bucket",
                BucketAclOptions::default().set_user_project("payer"),
            )
            .await?;
        assert!(response.items.is_empty(), "{response:?}");
        service
            .get_bucket_acl("test-bucket", &domain, BucketAclOptions::default())
            .await?;
        service
            .patch_bucket_acl("test-bucket", &domain, Role::Owner, BucketAclOptions::default())
            .await?;
        service
            .delete_bucket_acl("test-bucket", &domain, BucketAclOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn more_default_acls() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_get_default_object_access_control()
            .times(1)
            .withf(|r| r.bucket == "test-bucket" && r.entity == "project-viewers-p-1")
            .return_once(|_| Ok(ObjectAccessControl::new().set_role("READER")));
        mock.expect_insert_default_object_access_control()
            .times(1)
            .withf(|r| {
                r.acl.entity.as_deref() == Some("project-viewers-p-1")
                    && r.acl.role.as_deref() == Some("READER")
            })
            .return_once(|r| Ok(r.acl));
        mock.expect_delete_default_object_access_control()
            .times(1)
            .withf(|r| r.entity == "project-viewers-p-1")
            .return_once(|_| Ok(()));

        let service = service(mock);
        let viewers = entity::project("viewers", "p-1");
        service
            .get_default_acl("test-bucket", &viewers, BucketAclOptions::default())
            .await?;
        service
            .insert_default_acl("test-bucket", &viewers, Role::Reader, BucketAclOptions::default())
            .await?;
        service
            .delete_default_acl("test-bucket", &viewers, BucketAclOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn more_object_acls() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_list_object_access_controls()
            .times(1)
            .withf(|r| r.object == "test-object" && r.generation == Some(3))
            .return_once(|_| Ok(ListObjectAccessControlsResponse::default()));
        mock.expect_insert_object_access_control()
            .times(1)
            .withf(|r| {
                r.object == "test-object"
                    && r.acl.entity.as_deref() == Some("allUsers")
                    && r.acl.role.as_deref() == Some("READER")
            })
            .return_once(|r| Ok(r.acl));
        mock.expect_patch_object_access_control()
            .times(1)
            .withf(|r| {
                r.entity == "allUsers"
                    && r.acl.role.as_deref() == Some("OWNER")
                    && r.generation == Some(3)
            })
            .return_once(|r| Ok(r.acl));

        let service = service(mock);
        let with_generation = ObjectAclOptions::default().set_generation(3);
        service
            .list_object_acls("test-bucket", "test-object", with_generation.clone())
            .await?;
        service
            .insert_object_acl(
                "test-bucket",
                "test-object",
                entity::ALL_USERS,
                Role::Reader,
                ObjectAclOptions::default(),
            )
            .await?;
        let acl = service
            .patch_object_acl(
                "test-bucket",
                "test-object",
                entity::ALL_USERS,
                "owner",
                with_generation,
            )
            .await?;
        assert_eq!(acl.role.as_deref(), Some("OWNER"));
        Ok(())
    }

    #[tokio::test]
    async fn http_error_translated() {
        let mut mock = MockStorage::new();
        mock.expect_get_bucket().times(1).return_once(|_| {
            Err(Error::http(
                404,
                HeaderMap::new(),
                bytes::Bytes::from_static(b"bucket not found"),
            ))
        });

        let err = service(mock)
            .get_bucket("missing", GetBucketOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{err:?}");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.message(), "bucket not found");
        assert_eq!(err.transport_error().http_status_code(), Some(404));
    }

    #[tokio::test]
    async fn service_error_translated() {
        let mut mock = MockStorage::new();
        mock.expect_get_object().times(1).return_once(|_| {
            let status = Status::default()
                .set_code(Code::FailedPrecondition)
                .set_message("generation mismatch");
            Err(Error::service_with_http_metadata(status, Some(412), None))
        });

        let err = service(mock)
            .get_object("test-bucket", "test-object", GetObjectOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FailedPrecondition, "{err:?}");
        assert_eq!(err.status_code(), Some(412));
        assert_eq!(err.message(), "generation mismatch");
        let display = err.to_string();
        assert!(display.contains("generation mismatch"), "{display}");
    }

    #[tokio::test]
    async fn service_error_without_http_status() {
        let mut mock = MockStorage::new();
        mock.expect_delete_object().times(1).return_once(|_| {
            let status = Status::default()
                .set_code(Code::Unavailable)
                .set_message("try again");
            Err(Error::service(status))
        });

        let err = service(mock)
            .delete_object("test-bucket", "test-object", DeleteObjectOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable, "{err:?}");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.message(), "try again");
    }

    #[tokio::test]
    async fn timeout_translated() {
        let mut mock = MockStorage::new();
        mock.expect_download_object()
            .times(1)
            .return_once(|_| Err(Error::timeout("deadline elapsed")));

        let err = service(mock)
            .download_object("test-bucket", "test-object", DownloadObjectOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeadlineExceeded, "{err:?}");
        assert_eq!(err.status_code(), None);
        assert!(err.transport_error().is_timeout());
    }
}
