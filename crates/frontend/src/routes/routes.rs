use crate::domain::a001_location::ui::list::LocationList;
use crate::domain::a002_room::ui::list::RoomList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="error">{"Page not found"}</div> }>
                    <Route path=path!("/") view=RoomList />
                    <Route path=path!("/locations") view=LocationList />
                </Routes>
            </Shell>
        </Router>
    }
}
