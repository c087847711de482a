//! Permission catalogue, registry, and role conventions.

#![forbid(unsafe_code)]

mod catalog;
mod permission;
mod registry;
mod role;

pub use catalog::{PermissionCategory, PermissionMetadata, RiskLevel};
pub use permission::{Permission, PermissionId, PermissionSet};
pub use registry::{
    PermissionRegistry, PermissionRegistryBuilder, RegistryError, RegistryRelation,
};
pub use role::{BuiltinRole, RoleCatalog, RoleGrant};
