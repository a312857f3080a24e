//! Alert Banners
//!
//! Transient success, error and info messages.

use accountdash::{Alert, AlertKind};
use leptos::*;

use crate::state::use_global_state;

/// Alert container, newest on top
#[component]
pub fn Alerts() -> impl IntoView {
    let ui = use_global_state().ui();

    view! {
        <div class="fixed top-20 right-4 z-50 space-y-2">
            {move || {
                ui.alerts
                    .get()
                    .into_iter()
                    .map(|(id, alert)| view! { <AlertBanner id=id alert=alert /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn AlertBanner(id: u64, alert: Alert) -> impl IntoView {
    let ui = use_global_state().ui();

    let (icon, bg_class) = match alert.kind {
        AlertKind::Success => ("✓", "bg-green-600"),
        AlertKind::Error => ("✕", "bg-red-600"),
        AlertKind::Info => ("ℹ", "bg-blue-600"),
    };

    view! {
        <div class=format!(
            "{} flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            alert.css_class(),
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{alert.message}</span>
            <button
                on:click=move |_| ui.dismiss_alert(id)
                class="ml-2 text-white/70 hover:text-white"
            >
                "×"
            </button>
        </div>
    }
}
