use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile entity - per-user metadata keyed by the owning user's id.
///
/// The admin capability is derived from this row at sign-in; it is never
/// asserted by the client. A missing profile means no admin capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
}
