//! App Root Component
//!
//! Provides the controller, restores the session and switches sections.

use accountdash::{Alert, Section, Ui};
use leptos::*;

use crate::api;
use crate::components::{Alerts, EditDialog, Nav};
use crate::pages::{Dashboard, Login, Register};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    let ui = state.ui();

    // Restore and validate a saved session
    state.spawn(|app| async move {
        app.start().await;
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Show when=move || ui.view.get().is_visible(Section::Login)>
                    <Login />
                </Show>
                <Show when=move || ui.view.get().is_visible(Section::Register)>
                    <Register />
                </Show>
                <Show when=move || ui.view.get().is_visible(Section::Dashboard)>
                    <Dashboard />
                </Show>
            </main>

            <Footer />

            <Alerts />
            <EditDialog />
        </div>
    }
}

/// Footer with the API server setting
#[component]
fn Footer() -> impl IntoView {
    let state = use_global_state();
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        api::set_api_base(&api_url.get_untracked());
        state
            .app
            .ui()
            .alert(Alert::info("API URL saved. Reload the page to apply it."));
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2 text-gray-400">
                    <span>"API:"</span>
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="w-80 bg-gray-700 rounded px-2 py-1 border border-gray-600"
                    />
                    <button
                        on:click=save_url
                        class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded"
                    >
                        "Save"
                    </button>
                </div>
                <div class="text-gray-400">"Accountdash"</div>
            </div>
        </footer>
    }
}
