//! Path templates for REST resource operations.
//!
//! Each resource declares a table of [`ResourcePath`]s, one per operation it
//! supports. A template names the path below `/admin/api/{version}/` and may
//! contain an `{id}` placeholder:
//!
//! - `products` for list and create
//! - `products/{id}` for find and delete
//! - `recurring_application_charges/{id}/activate` for nested actions
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use shopify_rest::clients::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, "products/{id}"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, "products"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find).unwrap();
//! assert_eq!(build_path(path.template, Some(632910392)).unwrap(), "products/632910392");
//! ```

use crate::clients::HttpMethod;
use crate::error::ConfigError;

const ID_PLACEHOLDER: &str = "{id}";

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Trigger an action on a resource (POST /resources/{id}/action).
    Action,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Action => "action",
        }
    }
}

/// A path configuration for a REST resource operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// The path template, optionally holding an `{id}` placeholder.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            template,
        }
    }
}

/// Returns the first path declared for `operation`.
#[must_use]
pub fn get_path(paths: &[ResourcePath], operation: ResourceOperation) -> Option<&ResourcePath> {
    paths.iter().find(|p| p.operation == operation)
}

/// Interpolates `id` into `template`.
///
/// Templates without a placeholder are returned unchanged and ignore `id`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] when the template needs an
/// id and `id` is `None`.
pub fn build_path(template: &str, id: Option<u64>) -> Result<String, ConfigError> {
    if !template.contains(ID_PLACEHOLDER) {
        return Ok(template.to_string());
    }

    let id = id.ok_or(ConfigError::MissingRequiredField { field: "id" })?;
    Ok(template.replace(ID_PLACEHOLDER, &id.to_string()))
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
