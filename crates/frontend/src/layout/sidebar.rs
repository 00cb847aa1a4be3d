use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">{"Venue Admin"}</div>
            <ul class="sidebar__nav">
                <li class="sidebar__item">
                    <A href="/">
                        {icon("rooms")}
                        <span>{"Rooms"}</span>
                    </A>
                </li>
                <li class="sidebar__item">
                    <A href="/locations">
                        {icon("locations")}
                        <span>{"Locations"}</span>
                    </A>
                </li>
            </ul>
        </nav>
    }
}
