//! Fetch Coordination
//!
//! Loading/error bookkeeping for a single groups request.

use crate::api::{FetchResult, GroupsSource};
use crate::models::Group;

/// Lifecycle of the groups request owned by a view.
///
/// Loading and error are one enum, so a view can never be both at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Mounted, request not issued yet
    #[default]
    Idle,
    Loading,
    Failed,
    Ready,
}

impl FetchState {
    pub fn is_loading(self) -> bool {
        self == FetchState::Loading
    }

    pub fn is_error(self) -> bool {
        self == FetchState::Failed
    }

    /// Idle and Ready both render filters and the list
    pub fn shows_content(self) -> bool {
        !self.is_loading() && !self.is_error()
    }
}

/// Where a fetch reports its progress and result
pub trait FetchHost {
    /// False once the owning view has been torn down
    fn is_mounted(&self) -> bool;

    fn set_state(&self, state: FetchState);

    /// Overwrite the shared groups list
    fn replace_groups(&self, groups: Vec<Group>);
}

/// Run one request against `source`, reporting into `host`.
///
/// Returns the final state, or `None` when the host was unmounted before
/// the response arrived (nothing is written in that case).
pub async fn run_fetch<S, H>(source: &S, host: &H) -> Option<FetchState>
where
    S: GroupsSource + ?Sized,
    H: FetchHost + ?Sized,
{
    host.set_state(FetchState::Loading);
    log::debug!("requesting groups");

    let response = source.fetch_groups().await;

    if !host.is_mounted() {
        log::debug!("view unmounted before groups arrived, dropping response");
        return None;
    }

    let state = match response.map(|r| r.into_result()) {
        Ok(FetchResult::Success(groups)) => {
            log::info!("loaded {} groups", groups.len());
            host.replace_groups(groups);
            FetchState::Ready
        }
        Ok(FetchResult::Failure) => {
            log::warn!("groups request failed");
            FetchState::Failed
        }
        Err(e) => {
            log::error!("groups request errored: {}", e);
            FetchState::Failed
        }
    };

    host.set_state(state);
    Some(state)
}
