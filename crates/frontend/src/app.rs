use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Centralized modal management
    provide_context(ModalStackService::new());
    // Notification sink for the whole app
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ModalHost />
        <ToastHost />
    }
}
