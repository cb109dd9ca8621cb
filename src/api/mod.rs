//! Groups API
//!
//! Data-source abstraction for loading groups, plus the in-process mock backend.

mod fixture;
mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Group;

pub use fixture::fixture_groups;
pub use mock::MockGroupsSource;

/// `result` value the backend sends for a successful request
pub const RESULT_OK: u8 = 1;
/// `result` value the backend sends for a failed request
pub const RESULT_FAILED: u8 = 0;

/// Unexpected failures while talking to a data source.
///
/// A regular "request failed" answer is not an error: it arrives as a
/// [`GroupsResponse`] with `result == RESULT_FAILED`.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to decode groups payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Response body of the groups endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupsResponse {
    pub result: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Group>>,
}

impl GroupsResponse {
    pub fn success(data: Vec<Group>) -> Self {
        Self {
            result: RESULT_OK,
            data: Some(data),
        }
    }

    pub fn failure() -> Self {
        Self {
            result: RESULT_FAILED,
            data: None,
        }
    }

    /// Collapse the wire shape into a typed outcome.
    ///
    /// Only `result == RESULT_OK` with a payload counts as success; an empty
    /// payload is still a success.
    pub fn into_result(self) -> FetchResult {
        match (self.result, self.data) {
            (RESULT_OK, Some(groups)) => FetchResult::Success(groups),
            _ => FetchResult::Failure,
        }
    }
}

/// Outcome of one fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Success(Vec<Group>),
    Failure,
}

/// Anything that can answer a "fetch groups" request
#[async_trait(?Send)]
pub trait GroupsSource: Send + Sync {
    async fn fetch_groups(&self) -> Result<GroupsResponse, SourceError>;
}
