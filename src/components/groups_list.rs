//! Groups List Widget
//!
//! Fetches groups once on mount and renders them with filter controls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Filters, GroupCard, Loader};
use crate::context::use_app_context;
use crate::fetch::{run_fetch, FetchHost, FetchState};
use crate::filters::{
    closed_filter_options, color_filter_options, friends_filter_options, FilterStateStoreFields,
};
use crate::models::Group;
use crate::store::{
    store_replace_groups, store_set_avatar_filter, store_set_closed_filter,
    store_set_friends_filter, use_avatar_colors, use_filtered_groups, use_groups_store,
    GroupsStateStoreFields, GroupsStore,
};

pub const ERROR_MESSAGE: &str = "Something went wrong... Reload the page!";
pub const EMPTY_MESSAGE: &str = "List is empty!";

/// Which of the mutually exclusive outputs the widget shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBranch {
    /// Error message only
    Error,
    /// Loader inside the list container
    Loading,
    /// Filters plus rows or the empty placeholder
    Content,
}

impl From<FetchState> for ViewBranch {
    fn from(state: FetchState) -> Self {
        match state {
            FetchState::Failed => ViewBranch::Error,
            FetchState::Loading => ViewBranch::Loading,
            FetchState::Idle | FetchState::Ready => ViewBranch::Content,
        }
    }
}

/// Text shown instead of rows, if any
pub fn empty_placeholder(groups: &[Group]) -> Option<&'static str> {
    groups.is_empty().then_some(EMPTY_MESSAGE)
}

/// Bridges a fetch to this view's signals and the global store
struct ViewHost {
    mounted: Arc<AtomicBool>,
    set_fetch_state: WriteSignal<FetchState>,
    store: GroupsStore,
}

impl FetchHost for ViewHost {
    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }

    fn set_state(&self, state: FetchState) {
        self.set_fetch_state.set(state);
    }

    fn replace_groups(&self, groups: Vec<Group>) {
        store_replace_groups(&self.store, groups);
    }
}

#[component]
pub fn GroupsList(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_groups_store();
    let (fetch_state, set_fetch_state) = signal(FetchState::Idle);

    let mounted = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.store(false, Ordering::Relaxed)
    });

    // Fetch once on mount; nothing tracked, so the effect never reruns
    Effect::new(move |_| {
        let source = ctx.source.clone();
        let host = ViewHost {
            mounted: mounted.clone(),
            set_fetch_state,
            store,
        };
        spawn_local(async move {
            run_fetch(source.as_ref(), &host).await;
        });
    });

    let filtered = use_filtered_groups(store);
    let colors = use_avatar_colors(store);
    let color_options = Memo::new(move |_| colors.with(|c| color_filter_options(c)));

    let container_class = match class {
        Some(extra) => format!("groups-list {}", extra),
        None => "groups-list".to_string(),
    };

    let branch = Memo::new(move |_| ViewBranch::from(fetch_state.get()));

    move || match branch.get() {
        ViewBranch::Error => view! {
            <div class="groups-list-error">{ERROR_MESSAGE}</div>
        }
        .into_any(),
        ViewBranch::Loading => view! {
            <div class=container_class.clone()>
                <Loader />
            </div>
        }
        .into_any(),
        ViewBranch::Content => view! {
            <div class=container_class.clone()>
                <div class="groups-list-filters">
                    <Filters
                        options=Signal::derive(closed_filter_options)
                        current=Signal::derive(move || store.filters().closed().get())
                        on_select={move |value: Option<bool>| store_set_closed_filter(&store, value)}
                    />
                    <Filters
                        options=Signal::derive(friends_filter_options)
                        current=Signal::derive(move || store.filters().has_friends().get())
                        on_select={move |value: Option<bool>| store_set_friends_filter(&store, value)}
                    />
                    <Filters
                        options=color_options
                        current=Signal::derive(move || store.filters().avatar_color().get())
                        on_select={move |value: Option<String>| store_set_avatar_filter(&store, value)}
                    />
                </div>
                // Rows stay mounted while the list is non-empty, so cards keep their state
                <Show
                    when=move || filtered.with(|groups| empty_placeholder(groups).is_none())
                    fallback=|| EMPTY_MESSAGE
                >
                    <For
                        each=move || filtered.get()
                        key=|group| group.id
                        children=|group| view! { <GroupCard group=group /> }
                    />
                </Show>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GroupsResponse, GroupsSource, SourceError};
    use crate::store::{GroupsState, store_set_closed_filter};
    use async_trait::async_trait;
    use leptos::reactive::owner::Owner;
    use reactive_stores::Store;

    struct FixedSource(GroupsResponse);

    #[async_trait(?Send)]
    impl GroupsSource for FixedSource {
        async fn fetch_groups(&self) -> Result<GroupsResponse, SourceError> {
            Ok(self.0.clone())
        }
    }

    fn group(id: u32, closed: bool) -> Group {
        Group {
            id,
            name: format!("Group {}", id),
            closed,
            avatar_color: None,
            members_count: 3,
            friends: None,
        }
    }

    struct Mounted {
        host: ViewHost,
        fetch_state: ReadSignal<FetchState>,
        branch: Memo<ViewBranch>,
        filtered: Memo<Vec<Group>>,
        store: GroupsStore,
    }

    fn mount(owner: &Owner, initial: Vec<Group>) -> Mounted {
        owner.with(|| {
            let store = Store::new(GroupsState { groups: initial, ..Default::default() });
            let (fetch_state, set_fetch_state) = signal(FetchState::Idle);
            Mounted {
                host: ViewHost {
                    mounted: Arc::new(AtomicBool::new(true)),
                    set_fetch_state,
                    store,
                },
                fetch_state,
                branch: Memo::new(move |_| ViewBranch::from(fetch_state.get())),
                filtered: use_filtered_groups(store),
                store,
            }
        })
    }

    #[test]
    fn test_branch_per_state() {
        assert_eq!(ViewBranch::from(FetchState::Failed), ViewBranch::Error);
        assert_eq!(ViewBranch::from(FetchState::Loading), ViewBranch::Loading);
        assert_eq!(ViewBranch::from(FetchState::Idle), ViewBranch::Content);
        assert_eq!(ViewBranch::from(FetchState::Ready), ViewBranch::Content);
    }

    #[test]
    fn test_placeholder_only_for_empty_list() {
        assert_eq!(empty_placeholder(&[]), Some("List is empty!"));
        assert_eq!(empty_placeholder(&[group(1, false)]), None);
    }

    #[tokio::test]
    async fn test_successful_mount_renders_rows() {
        let owner = Owner::new();
        let view = mount(&owner, Vec::new());
        assert_eq!(view.branch.get_untracked(), ViewBranch::Content);

        let source = FixedSource(GroupsResponse::success(vec![
            group(1, false),
            group(2, true),
            group(3, false),
        ]));
        run_fetch(&source, &view.host).await;

        assert_eq!(view.fetch_state.get_untracked(), FetchState::Ready);
        assert_eq!(view.branch.get_untracked(), ViewBranch::Content);

        let rows = view.filtered.get_untracked();
        let ids: Vec<u32> = rows.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(empty_placeholder(&rows), None);
    }

    #[tokio::test]
    async fn test_failed_mount_shows_only_error() {
        let owner = Owner::new();
        let view = mount(&owner, vec![group(7, false)]);

        run_fetch(&FixedSource(GroupsResponse::failure()), &view.host).await;

        assert_eq!(view.fetch_state.get_untracked(), FetchState::Failed);
        assert_eq!(view.branch.get_untracked(), ViewBranch::Error);
        assert_eq!(view.store.groups().get_untracked(), vec![group(7, false)]);
    }

    #[tokio::test]
    async fn test_filtered_out_rows_show_placeholder() {
        let owner = Owner::new();
        let view = mount(&owner, Vec::new());

        run_fetch(&FixedSource(GroupsResponse::success(vec![group(1, false)])), &view.host).await;
        store_set_closed_filter(&view.store, Some(true));

        let rows = view.filtered.get_untracked();
        assert_eq!(empty_placeholder(&rows), Some(EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn test_unmounted_view_is_not_written() {
        let owner = Owner::new();
        let view = mount(&owner, Vec::new());
        view.host.mounted.store(false, Ordering::Relaxed);

        let result = run_fetch(&FixedSource(GroupsResponse::success(vec![group(1, false)])), &view.host).await;

        assert_eq!(result, None);
        assert!(view.store.groups().get_untracked().is_empty());
        assert_eq!(view.fetch_state.get_untracked(), FetchState::Loading);
    }
}
