//! Landing Page
//!
//! Asks for a display name, persists it and hands over to the app page.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::state::session;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = username.get().trim().to_string();
        if name.is_empty() {
            return;
        }

        session::store_username(&name);
        let encoded: String = js_sys::encode_uri_component(&name).into();
        navigate(&format!("/app?user={}", encoded), NavigateOptions::default());
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[70vh] text-center">
            <div class="text-6xl mb-4">"🎬"</div>
            <h1 class="text-3xl font-bold mb-2">"MovieDB"</h1>
            <p class="text-gray-400 mb-8">
                "Des recommandations de films personnalisees, un agent a qui parler."
            </p>

            <form on:submit=on_submit class="w-full max-w-sm space-y-4">
                <input
                    type="text"
                    name="username"
                    placeholder="Ton nom d'utilisateur"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    class="w-full bg-gray-800 rounded-lg px-4 py-3
                           border border-gray-700 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-semibold transition-colors"
                >
                    "Entrer"
                </button>
            </form>
        </div>
    }
}
