//! Frontend Models
//!
//! Data structures matching the groups backend payload.

use serde::{Deserialize, Serialize};

/// Group data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
    pub members_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<Friend>>,
}

impl Group {
    /// Number of friends in the group (0 when the backend sent none)
    pub fn friends_count(&self) -> usize {
        self.friends.as_ref().map_or(0, Vec::len)
    }

    pub fn has_friends(&self) -> bool {
        self.friends_count() > 0
    }
}

/// Friend of the current user who is a member of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub first_name: String,
    pub last_name: String,
}

impl Friend {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
