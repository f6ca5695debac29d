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

//! Access control types.
//!
//! Cloud Storage offers two ways to set the access control list (ACL) of a
//! bucket or object. Applications can use a [PredefinedAcl], which the service
//! expands to a full list, or add individual entries, each granting a [Role] to
//! an entity.

/// A named access control preset recognized by the service.
///
/// Not all presets are valid for all resources, for example,
/// `bucketOwnerRead` only applies to objects. The service rejects invalid
/// combinations.
///
/// Applications can also use the short aliases accepted by `from()`:
///
/// ```
/// # use google_cloud_storage_service::acl::PredefinedAcl;
/// assert_eq!(PredefinedAcl::from("public"), PredefinedAcl::PublicRead);
/// assert_eq!(PredefinedAcl::from("auth").as_str(), "authenticatedRead");
/// // Unknown values are sent to the service unchanged.
/// assert_eq!(PredefinedAcl::from("newPreset").as_str(), "newPreset");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PredefinedAcl {
    /// Owner gets `OWNER` access, `allAuthenticatedUsers` get `READER` access.
    AuthenticatedRead,
    /// Object owner gets `OWNER` access, project team owners get `OWNER` access.
    BucketOwnerFullControl,
    /// Object owner gets `OWNER` access, project team owners get `READER` access.
    BucketOwnerRead,
    /// Owner gets `OWNER` access.
    Private,
    /// Project team members get access according to their roles.
    ProjectPrivate,
    /// Owner gets `OWNER` access, `allUsers` get `READER` access.
    PublicRead,
    /// Owner gets `OWNER` access, `allUsers` get `WRITER` access.
    PublicReadWrite,
    /// A value not known to this library, sent unchanged.
    Custom(String),
}

impl PredefinedAcl {
    /// The value used in the `predefinedAcl` query parameters.
    pub fn as_str(&self) -> &str {
        match self {
            Self::AuthenticatedRead => "authenticatedRead",
            Self::BucketOwnerFullControl => "bucketOwnerFullControl",
            Self::BucketOwnerRead => "bucketOwnerRead",
            Self::Private => "private",
            Self::ProjectPrivate => "projectPrivate",
            Self::PublicRead => "publicRead",
            Self::PublicReadWrite => "publicReadWrite",
            Self::Custom(v) => v,
        }
    }
}

impl From<&str> for PredefinedAcl {
    fn from(value: &str) -> Self {
        match value {
            "auth" | "auth_read" | "authenticated" | "authenticated_read"
            | "authenticatedRead" => Self::AuthenticatedRead,
            "owner_full" | "bucketOwnerFullControl" => Self::BucketOwnerFullControl,
            "owner_read" | "bucketOwnerRead" => Self::BucketOwnerRead,
            "private" => Self::Private,
            "project_private" | "projectPrivate" => Self::ProjectPrivate,
            "public" | "public_read" | "publicRead" => Self::PublicRead,
            "public_write" | "publicReadWrite" => Self::PublicReadWrite,
            _ => Self::Custom(value.to_string()),
        }
    }
}

impl From<String> for PredefinedAcl {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl std::fmt::Display for PredefinedAcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The access granted by an access control entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Role {
    Owner,
    Reader,
    Writer,
    /// A value not known to this library, sent unchanged.
    Custom(String),
}

impl Role {
    /// The value used in the `role` field of access control resources.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Owner => "OWNER",
            Self::Reader => "READER",
            Self::Writer => "WRITER",
            Self::Custom(v) => v,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "OWNER" | "owner" => Self::Owner,
            "READER" | "reader" => Self::Reader,
            "WRITER" | "writer" => Self::Writer,
            _ => Self::Custom(value.to_string()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single access control entry: an entity and the role granted to it.
///
/// The entity uses the formats documented by the service, see the helpers in
/// [entity].
///
/// # Example
/// ```
/// # use google_cloud_storage_service::acl::{AclRule, Role, entity};
/// let rule = AclRule::new(entity::user("jane@example.com"), Role::Reader);
/// assert_eq!(rule.entity, "user-jane@example.com");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AclRule {
    pub entity: String,
    pub role: Role,
}

impl AclRule {
    pub fn new<E: Into<String>, R: Into<Role>>(entity: E, role: R) -> Self {
        Self {
            entity: entity.into(),
            role: role.into(),
        }
    }
}

/// Helpers to format access control entities.
pub mod entity {
    /// All users, authenticated or not.
    pub const ALL_USERS: &str = "allUsers";
    /// All authenticated users.
    pub const ALL_AUTHENTICATED_USERS: &str = "allAuthenticatedUsers";

    /// A user, identified by email.
    pub fn user(email: &str) -> String {
        format!("user-{email}")
    }

    /// A group, identified by email.
    pub fn group(email: &str) -> String {
        format!("group-{email}")
    }

    /// All the users in a domain.
    pub fn domain(domain: &str) -> String {
        format!("domain-{domain}")
    }

    /// A project team, `team` is one of `owners`, `editors`, or `viewers`.
    pub fn project(team: &str, project: &str) -> String {
        format!("project-{team}-{project}")
    }
}
