//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filters::{distinct_avatar_colors, filter_groups, FilterState, FilterStateStoreFields};
use crate::models::Group;

/// Global groups state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GroupsState {
    /// Full list from the last successful fetch
    pub groups: Vec<Group>,
    /// Current filter selection
    pub filters: FilterState,
}

/// Type alias for the store
pub type GroupsStore = Store<GroupsState>;

/// Get the groups store from context
pub fn use_groups_store() -> GroupsStore {
    expect_context::<GroupsStore>()
}

// ========================
// Store Writers
// ========================

/// Replace the whole groups list
pub fn store_replace_groups(store: &GroupsStore, groups: Vec<Group>) {
    *store.groups().write() = groups;
}

pub fn store_set_closed_filter(store: &GroupsStore, value: Option<bool>) {
    *store.filters().closed().write() = value;
}

pub fn store_set_friends_filter(store: &GroupsStore, value: Option<bool>) {
    *store.filters().has_friends().write() = value;
}

pub fn store_set_avatar_filter(store: &GroupsStore, value: Option<String>) {
    *store.filters().avatar_color().write() = value;
}

// ========================
// Selectors
// ========================

/// Groups passing the current filters
pub fn use_filtered_groups(store: GroupsStore) -> Memo<Vec<Group>> {
    Memo::new(move |_| {
        let filters = store.filters().get();
        store.groups().with(|groups| filter_groups(groups, &filters))
    })
}

/// Distinct avatar colors across the unfiltered list.
/// Subscribers only rerun when the color list itself changes.
pub fn use_avatar_colors(store: GroupsStore) -> Memo<Vec<String>> {
    Memo::new(move |_| store.groups().with(|groups| distinct_avatar_colors(groups)))
}
