//! Group Card Component
//!
//! One row of the groups list.

use leptos::prelude::*;

use crate::models::Group;

#[component]
pub fn GroupCard(group: Group) -> impl IntoView {
    let (show_friends, set_show_friends) = signal(false);

    let avatar_style = group
        .avatar_color
        .as_ref()
        .map(|color| format!("background-color: {};", color));
    let status = if group.closed { "Closed" } else { "Open" };
    let friends_count = group.friends_count();
    let friend_names: Vec<String> = group
        .friends
        .iter()
        .flatten()
        .map(|friend| friend.full_name())
        .collect();

    view! {
        <div class="group-card">
            <div class="group-avatar" style=avatar_style></div>
            <div class="group-info">
                <span class="group-name">{group.name}</span>
                <span class=if group.closed { "group-status closed" } else { "group-status" }>{status}</span>
                <span class="group-members">{format!("{} members", group.members_count)}</span>
                {(friends_count > 0).then(|| view! {
                    <button
                        class="group-friends-btn"
                        on:click=move |_| set_show_friends.update(|v| *v = !*v)
                    >
                        {format!("Friends: {}", friends_count)}
                    </button>
                })}
            </div>
            <Show when=move || show_friends.get()>
                <ul class="group-friends">
                    {friend_names.iter().map(|name| view! { <li>{name.clone()}</li> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
