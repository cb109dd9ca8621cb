//! Static groups fixture served by the mock backend.

use crate::models::Group;

use super::SourceError;

const GROUPS_JSON: &str = include_str!("../../fixtures/groups.json");

/// Decode the embedded fixture
pub fn fixture_groups() -> Result<Vec<Group>, SourceError> {
    Ok(serde_json::from_str(GROUPS_JSON)?)
}
