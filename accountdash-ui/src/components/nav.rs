//! Navigation Component
//!
//! Header bar with section tabs and the logout button.

use accountdash::{NavControl, Section};
use leptos::*;

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"👤"</span>
                        <span class="text-xl font-bold text-white">"Accountdash"</span>
                    </div>

                    <div class="flex items-center space-x-1">
                        <NavTab control=NavControl::LoginTab label="Login" />
                        <NavTab control=NavControl::RegisterTab label="Register" />
                        <NavTab control=NavControl::DashboardTab label="Dashboard" />
                        <NavTab control=NavControl::LogoutButton label="Logout" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

fn section_for(control: NavControl) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|section| section.nav_control() == control)
}

/// One tab; hidden when the current navigation mode does not offer it
#[component]
fn NavTab(control: NavControl, label: &'static str) -> impl IntoView {
    let state = use_global_state();
    let ui = state.ui();

    let on_click = move |_| match section_for(control) {
        Some(section) => state.app.show_section(section),
        None => state.app.logout(),
    };

    view! {
        <Show when=move || ui.view.get().is_control_shown(control)>
            <button
                on:click=on_click.clone()
                class=move || {
                    if ui.view.get().is_active(control) {
                        "px-4 py-2 rounded-lg bg-gray-700 text-white"
                    } else {
                        "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                    }
                }
            >
                {label}
            </button>
        </Show>
    }
}
