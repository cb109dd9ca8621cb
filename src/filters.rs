//! Group Filters
//!
//! Filter selection, the filtered projection and filter button options.

use std::collections::HashSet;

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::Group;

/// Label of the "no filter" option in every filter group
pub const ALL_LABEL: &str = "ALL";

/// Active filters; `None` means the filter is off
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Store)]
pub struct FilterState {
    pub closed: Option<bool>,
    pub has_friends: Option<bool>,
    pub avatar_color: Option<String>,
}

impl FilterState {
    pub fn matches(&self, group: &Group) -> bool {
        if let Some(closed) = self.closed {
            if group.closed != closed {
                return false;
            }
        }
        if let Some(has_friends) = self.has_friends {
            if group.has_friends() != has_friends {
                return false;
            }
        }
        match &self.avatar_color {
            Some(color) => group.avatar_color.as_ref() == Some(color),
            None => true,
        }
    }
}

/// Groups passing every active filter, in original order
pub fn filter_groups(groups: &[Group], filters: &FilterState) -> Vec<Group> {
    groups.iter().filter(|g| filters.matches(g)).cloned().collect()
}

/// Each avatar color used by `groups` exactly once, first-seen order.
/// Groups without a color contribute nothing.
pub fn distinct_avatar_colors(groups: &[Group]) -> Vec<String> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .filter_map(|g| g.avatar_color.as_ref())
        .filter(|color| seen.insert(color.as_str()))
        .cloned()
        .collect()
}

/// One button of a filter group
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption<T> {
    pub label: String,
    /// `None` = "ALL"
    pub value: Option<T>,
}

impl<T> FilterOption<T> {
    pub fn new(label: impl Into<String>, value: Option<T>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn all() -> Self {
        Self::new(ALL_LABEL, None)
    }
}

pub fn closed_filter_options() -> Vec<FilterOption<bool>> {
    vec![
        FilterOption::all(),
        FilterOption::new("OPEN", Some(false)),
        FilterOption::new("CLOSED", Some(true)),
    ]
}

pub fn friends_filter_options() -> Vec<FilterOption<bool>> {
    vec![
        FilterOption::all(),
        FilterOption::new("WITH FRIENDS", Some(true)),
        FilterOption::new("NO FRIENDS", Some(false)),
    ]
}

/// "ALL" followed by one option per color
pub fn color_filter_options(colors: &[String]) -> Vec<FilterOption<String>> {
    std::iter::once(FilterOption::all())
        .chain(colors.iter().map(|c| FilterOption::new(c.clone(), Some(c.clone()))))
        .collect()
}
