//! Groups Widget App
//!
//! Root component: owns the global store and the backend handle.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::MockGroupsSource;
use crate::components::GroupsList;
use crate::config::MockConfig;
use crate::context::AppContext;
use crate::store::GroupsState;

#[component]
pub fn App() -> impl IntoView {
    // Store outlives the widget, so a remounted list keeps its data
    provide_context(Store::new(GroupsState::default()));
    provide_context(AppContext::new(Arc::new(MockGroupsSource::new(MockConfig::default()))));

    view! {
        <main class="app-layout">
            <h1>"Groups"</h1>
            <GroupsList />
        </main>
    }
}
