use crate::domain::a002_room::ui::details::RoomDetails;
use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::a002_room::aggregate::Room;
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RoomRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub location_id: String,
    pub location_name: String,
    pub created_at: String,
}

fn to_rows(rooms: Vec<Room>, locations: &[Location]) -> Vec<RoomRow> {
    use contracts::domain::common::AggregateId;

    let names: HashMap<String, String> = locations
        .iter()
        .map(|l| (l.base.id.as_string(), l.base.description.clone()))
        .collect();

    rooms
        .into_iter()
        .map(|r| {
            let location_id = r.location_id.as_string();
            let location_name = names
                .get(&location_id)
                .cloned()
                .unwrap_or_else(|| "-".to_string());
            RoomRow {
                id: r.base.id.as_string(),
                code: r.base.code,
                description: r.base.description,
                location_id,
                location_name,
                created_at: format_timestamp(r.base.metadata.created_at),
            }
        })
        .collect()
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn RoomList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<RoomRow>>(Vec::new());
    let (locations, set_locations) = signal::<Vec<Location>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    // None = all locations
    let (filter, set_filter) = signal::<Option<String>>(None);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let locs = match fetch_locations().await {
                Ok(v) => v,
                Err(e) => {
                    set_error.set(Some(e));
                    return;
                }
            };
            match fetch_rooms().await {
                Ok(rooms) => {
                    set_items.set(to_rows(rooms, &locs));
                    set_locations.set(locs);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // The close guard shares the dialog's submitting flag: while a save is in
    // flight neither Escape nor an overlay click can dismiss it.
    let open_details_modal = move |id: Option<String>| {
        let available = locations.get_untracked();
        let default_location_id = filter.get_untracked();
        let submitting = RwSignal::new(false);

        modal_stack.push_guarded(
            Arc::new(move || !submitting.get_untracked()),
            move |handle| {
                let on_close = Callback::new({
                    let handle = handle.clone();
                    move |saved: bool| {
                        handle.close();
                        if saved {
                            fetch();
                        }
                    }
                });

                view! {
                    <RoomDetails
                        id=id.clone()
                        locations=available.clone()
                        default_location_id=default_location_id.clone()
                        submitting=submitting
                        on_close=on_close
                    />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete room \"{}\"?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_room(&id).await {
                Ok(()) => {
                    toasts.success("Deleted", "Room deleted.");
                    fetch();
                }
                Err(e) => toasts.error("Delete failed", e),
            }
        });
    };

    let visible = move || {
        let rows = items.get();
        match filter.get() {
            Some(loc) => rows
                .into_iter()
                .filter(|r| r.location_id == loc)
                .collect::<Vec<_>>(),
            None => rows,
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Rooms"}</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="header__filter"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        <option value="">{"All locations"}</option>
                        {move || {
                            use contracts::domain::common::AggregateId;
                            locations.get().into_iter().map(|l| {
                                let value = l.base.id.as_string();
                                view! { <option value=value>{l.base.description}</option> }
                            }).collect_view()
                        }}
                    </select>
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"New room"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Code"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Location"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                            <th class="table__header-cell">{""}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let name_for_delete = row.description.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                >
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.location_name}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete_row(id_for_delete.clone(), name_for_delete.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_rooms() -> Result<Vec<Room>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/room", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Room> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn fetch_locations() -> Result<Vec<Location>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/location", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Location> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn delete_room(id: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/room/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
