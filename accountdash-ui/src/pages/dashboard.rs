//! Dashboard Page
//!
//! Profile card, user statistics and the activity log.

use accountdash::viewmodel::{LOGS_FAILED_MESSAGE, NO_LOGS_MESSAGE};
use accountdash::{
    validate_meta, Alert, AvatarFile, LogsView, Panel, ProfileField, Ui, DEFAULT_LOGS_LIMIT,
    LOGS_LIMIT_OPTIONS,
};
use leptos::*;
use wasm_bindgen_futures::JsFuture;

use crate::components::{LogRowsSkeleton, ProfileSkeleton, Spinner};
use crate::state::use_global_state;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your account at a glance"</p>
            </div>

            <ProfileCard />
            <StatsPanel />
            <LogsPanel />
        </div>
    }
}

/// Read a picked file into memory
async fn read_file(file: web_sys::File) -> Result<AvatarFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(AvatarFile::new(file.name(), file.type_(), bytes))
}

#[component]
fn ProfileCard() -> impl IntoView {
    let state = use_global_state();
    let ui = state.ui();
    let (uploading, set_uploading) = create_signal(false);

    let state_for_upload = state.clone();
    let on_avatar_change = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Refuse before the contents are buffered
        if let Err(e) = validate_meta(&file.type_(), file.size() as u64) {
            state_for_upload.app.ui().alert(Alert::error(e.to_string()));
            input.set_value("");
            return;
        }
        set_uploading.set(true);

        state_for_upload.spawn(move |app| async move {
            match read_file(file).await {
                Ok(avatar) => {
                    app.upload_avatar(&avatar).await;
                }
                Err(e) => {
                    tracing::error!("Failed to read avatar file: {}", e);
                    app.ui().alert(Alert::error("Failed to read the selected file"));
                }
            }
            input.set_value("");
            set_uploading.set(false);
        });
    };

    let edit_button = move |field: ProfileField| {
        let state = state.clone();
        view! {
            <button
                on:click=move |_| state.app.open_edit(field)
                class="ml-2 text-sm text-primary-400 hover:underline"
            >
                "Edit"
            </button>
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Profile"</h2>

            {move || match ui.profile.get() {
                Panel::Loading => view! { <ProfileSkeleton /> }.into_view(),
                Panel::Failed => view! {
                    <p class="text-red-400">"Profile unavailable"</p>
                }.into_view(),
                Panel::Ready(profile) => view! {
                    <div class="flex items-center space-x-6">
                        <div class="flex flex-col items-center space-y-2">
                            <img
                                src=profile.avatar.src().to_string()
                                alt="Avatar"
                                class="w-24 h-24 rounded-full object-cover bg-gray-700"
                            />
                            <label class="text-sm text-primary-400 hover:underline cursor-pointer">
                                {move || if uploading.get() { "Uploading..." } else { "Change avatar" }}
                                <input
                                    type="file"
                                    accept="image/*"
                                    class="hidden"
                                    on:change=on_avatar_change.clone()
                                />
                            </label>
                        </div>

                        <dl class="space-y-2">
                            <div>
                                <dt class="text-sm text-gray-400">"Username"</dt>
                                <dd class="font-medium">
                                    {profile.username.clone()}
                                    {edit_button(ProfileField::Username)}
                                </dd>
                            </div>
                            <div>
                                <dt class="text-sm text-gray-400">"Email"</dt>
                                <dd class="font-medium">
                                    {profile.email.clone()}
                                    {edit_button(ProfileField::Email)}
                                </dd>
                            </div>
                            <div>
                                <dt class="text-sm text-gray-400">"Member since"</dt>
                                <dd class="font-medium">{profile.created.clone()}</dd>
                            </div>
                        </dl>
                    </div>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <div class="text-sm text-gray-400">{label}</div>
            <div class="text-3xl font-bold mt-1">{value}</div>
        </div>
    }
}

#[component]
fn StatsPanel() -> impl IntoView {
    let state = use_global_state();
    let ui = state.ui();

    let refresh = move |_| {
        state.spawn(|app| async move {
            let _ = app.load_statistics().await;
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Statistics"</h2>
                <button
                    on:click=refresh
                    class="px-3 py-1 text-sm bg-gray-600 hover:bg-gray-500 rounded-lg"
                >
                    "Refresh"
                </button>
            </div>

            {move || match ui.stats.get() {
                Panel::Loading => view! {
                    <div class="flex justify-center py-8"><Spinner size=8 /></div>
                }.into_view(),
                Panel::Failed => view! {
                    <p class="text-red-400">"Statistics unavailable"</p>
                }.into_view(),
                Panel::Ready(stats) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <StatCard label="Total Users" value=stats.total_users />
                        <StatCard label="Active Today" value=stats.today_users />
                        <StatCard label="Log Entries" value=stats.total_logs />
                    </div>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn LogsPanel() -> impl IntoView {
    let state = use_global_state();
    let ui = state.ui();
    let initial_limit = state.app.logs_limit();

    let state_for_limit = state.clone();
    let on_limit_change = move |ev: ev::Event| {
        let limit = event_target_value(&ev)
            .parse()
            .unwrap_or(DEFAULT_LOGS_LIMIT);
        state_for_limit.spawn(move |app| async move {
            app.change_logs_limit(limit).await;
        });
    };

    let refresh = move |_| {
        state.spawn(|app| async move {
            let _ = app.load_logs().await;
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Activity Log"</h2>
                <div class="flex items-center space-x-2">
                    <select
                        on:change=on_limit_change
                        class="bg-gray-700 rounded-lg px-3 py-1 border border-gray-600"
                    >
                        {LOGS_LIMIT_OPTIONS
                            .into_iter()
                            .map(|n| view! {
                                <option value=n.to_string() selected={n == initial_limit}>
                                    {format!("Last {}", n)}
                                </option>
                            })
                            .collect_view()}
                    </select>
                    <button
                        on:click=refresh
                        class="px-3 py-1 text-sm bg-gray-600 hover:bg-gray-500 rounded-lg"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="overflow-x-auto">
                <table class="w-full text-sm">
                    <thead class="text-left text-gray-400">
                        <tr>
                            <th class="py-2">"Time"</th>
                            <th class="py-2">"User"</th>
                            <th class="py-2">"Action"</th>
                            <th class="py-2">"Details"</th>
                            <th class="py-2">"IP"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match ui.logs.get() {
                            Panel::Loading => view! { <LogRowsSkeleton columns=5 /> }.into_view(),
                            Panel::Failed => view! {
                                <tr><td colspan="5" class="py-4 text-center text-red-400">
                                    {LOGS_FAILED_MESSAGE}
                                </td></tr>
                            }.into_view(),
                            Panel::Ready(LogsView::Empty) => view! {
                                <tr><td colspan="5" class="py-4 text-center text-gray-400">
                                    {NO_LOGS_MESSAGE}
                                </td></tr>
                            }.into_view(),
                            Panel::Ready(LogsView::Rows(rows)) => rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr class="log-entry border-t border-gray-700">
                                        <td class="py-2">{row.timestamp}</td>
                                        <td class="py-2">{row.username}</td>
                                        <td class=format!("py-2 font-medium log-action {}", row.action_class.css_class())>
                                            {row.action}
                                        </td>
                                        <td class="py-2">{row.details}</td>
                                        <td class="py-2 text-gray-400">{row.ip_address}</td>
                                    </tr>
                                })
                                .collect_view(),
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
