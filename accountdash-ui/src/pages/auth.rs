//! Login and Registration Pages

use accountdash::{RegistrationForm, Section};
use leptos::*;

use crate::components::Spinner;
use crate::state::use_global_state;

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 \
     border border-gray-600 focus:border-primary-500 focus:outline-none";

const SUBMIT_CLASS: &str = "w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 \
     disabled:bg-gray-700 rounded-lg font-medium transition-colors";

/// Labeled text input bound to a signal
#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=kind
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

#[component]
pub fn Login() -> impl IntoView {
    let state = use_global_state();

    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_busy.set(true);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        state_for_submit.spawn(move |app| async move {
            if app.submit_login(&user, &pass).await {
                password.set(String::new());
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="max-w-md mx-auto bg-gray-800 rounded-xl p-8">
            <h1 class="text-2xl font-bold mb-6">"Login"</h1>

            <form on:submit=on_submit class="space-y-4">
                <Field label="Username" value=username />
                <Field label="Password" kind="password" value=password />

                <button type="submit" disabled=move || busy.get() class=SUBMIT_CLASS>
                    {move || if busy.get() {
                        view! { <span><Spinner size=4 />" Logging in..."</span> }.into_view()
                    } else {
                        "Login".into_view()
                    }}
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-6 text-center">
                "Don't have an account? "
                <a
                    href="#"
                    class="text-primary-400 hover:underline"
                    on:click=move |ev| {
                        ev.prevent_default();
                        state.app.show_section(Section::Register);
                    }
                >
                    "Register here"
                </a>
            </p>
        </section>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let state = use_global_state();

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let reset = move || {
        for field in [username, email, password, confirm] {
            field.set(String::new());
        }
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_busy.set(true);

        let form = RegistrationForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        state_for_submit.spawn(move |app| async move {
            if app.submit_registration(&form).await {
                reset();
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="max-w-md mx-auto bg-gray-800 rounded-xl p-8">
            <h1 class="text-2xl font-bold mb-6">"Create Account"</h1>

            <form on:submit=on_submit class="space-y-4">
                <Field label="Username" value=username />
                <Field label="Email" kind="email" value=email />
                <Field label="Password" kind="password" value=password />
                <Field label="Confirm Password" kind="password" value=confirm />

                <button type="submit" disabled=move || busy.get() class=SUBMIT_CLASS>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-6 text-center">
                "Already have an account? "
                <a
                    href="#"
                    class="text-primary-400 hover:underline"
                    on:click=move |ev| {
                        ev.prevent_default();
                        state.app.show_section(Section::Login);
                    }
                >
                    "Login here"
                </a>
            </p>
        </section>
    }
}
