use super::view_model::RoomDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn RoomDetails(
    id: Option<String>,
    locations: Vec<Location>,
    #[prop(optional_no_strip)] default_location_id: Option<String>,
    submitting: RwSignal<bool>,
    on_close: Callback<bool>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = RoomDetailsViewModel::new(id, locations, default_location_id, submitting, toasts);
    vm.load_if_needed();

    let edit_mode = vm.edit_mode;
    let has_locations = vm.has_locations();
    let location_options = vm
        .locations
        .iter()
        .map(|l| (l.base.id.as_string(), l.base.description.clone()))
        .collect::<Vec<_>>();

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container room-details">
            <div class="details-header">
                <h3>{if edit_mode { "Edit room" } else { "New room" }}</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.load_error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="room-name">{"Room name"}</label>
                    <input
                        type="text"
                        id="room-name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_name(event_target_value(&ev))
                        }
                        placeholder="Room name"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().name.map(|e| view! {
                            <div class="form-group__error">{e}</div>
                        })
                    }
                </div>

                <div class="form-group">
                    <label for="room-location">{"Location"}</label>
                    <select
                        id="room-location"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.draft.get().location_id
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_location(event_target_value(&ev))
                        }
                        disabled=!has_locations
                    >
                        {if has_locations {
                            location_options
                                .into_iter()
                                .map(|(value, label)| {
                                    view! { <option value=value>{label}</option> }
                                })
                                .collect_view()
                                .into_any()
                        } else {
                            view! { <option value="">{"No locations available"}</option> }
                                .into_any()
                        }}
                    </select>
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().location_id.map(|e| view! {
                            <div class="form-group__error">{e}</div>
                        })
                    }
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(on_close)
                    }
                    disabled={
                        // In edit mode saving also waits for the target room
                        // to arrive; see the view model's dispatch guard.
                        let vm = vm_clone.clone();
                        move || {
                            vm.submitting.get()
                                || !has_locations
                                || (edit_mode && vm.existing.get().is_none())
                        }
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || {
                            if vm.submitting.get() {
                                "Saving..."
                            } else if edit_mode {
                                "Save"
                            } else {
                                "Create"
                            }
                        }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.cancel_command(on_close)
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.submitting.get()
                    }
                >
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
