//! User roles and the write-access policy built on them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User privilege level, totally ordered: user < moderator < admin.
///
/// Wire format: snake_case string in API bodies, `u8` inside token claims
/// and the database (0 = User, 1 = Moderator, 2 = Admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User = 0,
    Moderator = 1,
    Admin = 2,
}

impl UserRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::User),
            1 => Some(Self::Moderator),
            2 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// May manage users, categories, genres and title metadata.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// May edit or delete any review/comment regardless of authorship.
    pub fn is_moderator(self) -> bool {
        self >= Self::Moderator
    }
}

impl PartialOrd for UserRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_u8().cmp(&other.as_u8())
    }
}

/// Policy for modifying a review or comment: the author, a moderator, or an
/// admin may update/delete it.
pub fn may_edit_contribution(role: UserRole, actor_id: Uuid, author_id: Uuid) -> bool {
    actor_id == author_id || role >= UserRole::Moderator
}
