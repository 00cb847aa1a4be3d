use super::model;
use crate::shared::toast::ToastService;
use contracts::domain::a001_location::aggregate::LocationDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for the Location details form
#[derive(Clone)]
pub struct LocationDetailsViewModel {
    pub form: RwSignal<LocationDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl LocationDetailsViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(LocationDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.get().description.trim().is_empty()
    }

    /// Load form data from the server if an ID was provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => {
                        let dto = LocationDto {
                            id: Some(aggregate.base.id.as_string()),
                            code: Some(aggregate.base.code),
                            description: aggregate.base.description,
                            address: aggregate.address,
                            comment: aggregate.base.comment,
                        };
                        form.set(dto);
                    }
                    Err(e) => error.set(Some(format!("Failed to load location: {}", e))),
                }
            });
        }
    }

    /// Save form data to the server
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let current = self.form.get_untracked();
        if current.description.trim().is_empty() {
            self.error.set(Some("Location name is required.".to_string()));
            return;
        }
        self.error.set(None);
        self.saving.set(true);

        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(()) => {
                    vm.toasts.success("Saved", "Location saved.");
                    vm.saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("location save failed: {e}");
                    vm.error.set(Some(format!("Failed to save: {}", e)));
                    vm.saving.set(false);
                }
            }
        });
    }
}
