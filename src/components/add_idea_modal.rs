//! Add Idea Modal Component
//!
//! Form for submitting an idea at the clicked map position.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::api;
use crate::browser;
use crate::components::{GeolocationButton, Notifier, Severity};
use crate::config::CATEGORIES;
use crate::context::AppContext;
use crate::store::{use_map_store, MapStateStoreFields};
use crate::submission::{submit_button_state, IdeaForm, SubmitOutcome};

#[component]
pub fn AddIdeaModal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let notifier = expect_context::<Notifier>();
    let store = use_map_store();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);

    // Follow the selected city
    Effect::new(move |_| {
        let current = store.current_city_id().get();
        city.set(current.map(|id| id.to_string()).unwrap_or_default());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = IdeaForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            latitude: ctx.modal_lat.get_untracked(),
            longitude: ctx.modal_lng.get_untracked(),
            city_id: city.get_untracked(),
        };
        let request = match form.into_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("[SUBMIT] Rejected locally: {:?}", err);
                browser::alert(&err.to_string());
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            let result = api::create_idea(&request).await;
            if let Err(err) = &result {
                tracing::error!("[SUBMIT] {}", err);
            }
            let outcome = SubmitOutcome::from_result(&result);
            tracing::info!("[SUBMIT] Outcome: {:?}", outcome);

            if outcome.closes_modal() {
                ctx.close_modal();
                title.set(String::new());
                description.set(String::new());
            }
            if let Some(message) = outcome.notification() {
                notifier.show(message, Severity::Success);
            }
            if outcome.schedules_refresh() {
                ctx.map.schedule_refresh();
            }
            if let Some(text) = outcome.alert() {
                browser::alert(&text);
            }
            set_submitting.set(false);
        });
    };

    // Clicks on the dimmed area around the dialog close it
    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        let target: Option<JsValue> = ev.target().map(Into::into);
        let current: Option<JsValue> = ev.current_target().map(Into::into);
        if target == current {
            ctx.close_modal();
        }
    };

    view! {
        <Show when=move || ctx.modal_open.get()>
            <div
                class="modal fade show"
                id="addIdeaModal"
                tabindex="-1"
                role="dialog"
                style="display: block;"
                on:click=on_backdrop_click
            >
                <div class="modal-dialog">
                    <div class="modal-content">
                        <form id="addIdeaForm" on:submit=on_submit>
                            <div class="modal-header">
                                <h5 class="modal-title">"Новая идея"</h5>
                                <button
                                    type="button"
                                    class="btn-close"
                                    on:click=move |_| ctx.close_modal()
                                ></button>
                            </div>

                            <div class="modal-body">
                                <div class="mb-3">
                                    <label for="modalTitle" class="form-label">"Название *"</label>
                                    <input
                                        type="text"
                                        id="modalTitle"
                                        class="form-control"
                                        prop:value=move || title.get()
                                        on:input=move |ev| title.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="mb-3">
                                    <label for="modalDescription" class="form-label">"Описание *"</label>
                                    <textarea
                                        id="modalDescription"
                                        class="form-control"
                                        rows="4"
                                        prop:value=move || description.get()
                                        on:input=move |ev| description.set(event_target_value(&ev))
                                    ></textarea>
                                </div>
                                <div class="mb-3">
                                    <label for="modalCategory" class="form-label">"Категория *"</label>
                                    <select
                                        id="modalCategory"
                                        class="form-select"
                                        prop:value=move || category.get()
                                        on:change=move |ev| category.set(event_target_value(&ev))
                                    >
                                        <option value="">"Выберите категорию"</option>
                                        {CATEGORIES.iter().map(|name| view! {
                                            <option value=*name>{*name}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="row mb-3">
                                    <div class="col">
                                        <label for="modalLatitude" class="form-label">"Широта"</label>
                                        <input
                                            type="text"
                                            id="modalLatitude"
                                            class="form-control"
                                            prop:value=move || ctx.modal_lat.get()
                                            on:input=move |ev| ctx.modal_lat.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="col">
                                        <label for="modalLongitude" class="form-label">"Долгота"</label>
                                        <input
                                            type="text"
                                            id="modalLongitude"
                                            class="form-control"
                                            prop:value=move || ctx.modal_lng.get()
                                            on:input=move |ev| ctx.modal_lng.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <GeolocationButton latitude=ctx.modal_lat longitude=ctx.modal_lng />
                                <input type="hidden" id="modalCityId" prop:value=move || city.get() />
                            </div>

                            <div class="modal-footer">
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    on:click=move |_| ctx.close_modal()
                                >
                                    "Отмена"
                                </button>
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || submit_button_state(submitting.get()).0
                                >
                                    <Show when=move || submitting.get()>
                                        <span class="spinner-border spinner-border-sm me-1" role="status"></span>
                                    </Show>
                                    {move || submit_button_state(submitting.get()).1}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop fade show"></div>
        </Show>
    }
}
