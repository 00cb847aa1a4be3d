pub mod sidebar;

use leptos::prelude::*;

/// Two-pane application shell: navigation on the left, content on the right.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <sidebar::Sidebar />
            <main class="app-shell__content">{children()}</main>
        </div>
    }
}
