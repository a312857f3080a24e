//! Profile Edit Dialog
//!
//! Modal form for changing one profile field.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn EditDialog() -> impl IntoView {
    let state = use_global_state();
    let ui = state.ui();

    let (value, set_value) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    // Prefill whenever the modal opens on a field
    create_effect(move |_| {
        let modal = ui.modal.get();
        set_value.set(modal.initial_value().to_string());
    });

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);

        let raw = value.get_untracked();
        state_for_submit.spawn(move |app| async move {
            app.submit_edit(&raw).await;
            set_saving.set(false);
        });
    };

    let state_for_close = state.clone();
    let close = move || state_for_close.app.close_edit();
    let close_backdrop = close.clone();

    view! {
        <Show when=move || ui.modal.get().is_open()>
            <div
                class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center"
                on:click={
                    let close = close_backdrop.clone();
                    move |_| close()
                }
            >
                <div
                    class="bg-gray-800 rounded-xl p-6 w-full max-w-md"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="text-xl font-semibold mb-4">{move || ui.modal.get().title()}</h2>

                    <form on:submit=on_submit.clone() class="space-y-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">
                                {move || ui.modal.get().label()}
                            </label>
                            <input
                                type="text"
                                prop:value=move || value.get()
                                on:input=move |ev| set_value.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div class="flex justify-end space-x-2">
                            <button
                                type="button"
                                on:click={
                                    let close = close.clone();
                                    move |_| close()
                                }
                                class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg"
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                disabled=move || saving.get()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700 rounded-lg font-medium"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
