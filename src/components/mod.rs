//! UI Components
//!
//! Leptos components of the groups widget.

mod filter_buttons;
mod group_card;
mod groups_list;
mod loader;

pub use filter_buttons::Filters;
pub use group_card::GroupCard;
pub use groups_list::GroupsList;
pub use loader::Loader;
