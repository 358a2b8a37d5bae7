use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A todo entry.
///
/// The same shape is used for storage, requests, and responses: create and
/// update both take a full item (update is a full replace, not a patch),
/// and the caller supplies the id at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoItem {
    /// Unique identifier, assigned by the caller at creation and immutable
    /// thereafter
    pub id: Uuid,

    /// Human-readable description; never empty once persisted, and unique
    /// (case-insensitively) among incomplete items
    #[serde(default)]
    pub description: String,

    /// Completion flag; completed items are excluded from listing and from
    /// description uniqueness
    #[serde(default)]
    pub is_completed: bool,
}
