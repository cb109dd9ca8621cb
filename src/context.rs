//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::GroupsSource;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend the groups widget fetches from
    pub source: Arc<dyn GroupsSource>,
}

impl AppContext {
    pub fn new(source: Arc<dyn GroupsSource>) -> Self {
        Self { source }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
