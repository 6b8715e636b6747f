//! App Page
//!
//! The main page: chat with the agent on the left, a selectable
//! recommendations/review panel on the right. The username is resolved once
//! at load time and is immutable for the page lifetime.

use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions};

use crate::api;
use crate::components::{ChatPanel, RecommendationsPanel, ReviewPanel};
use crate::state::{session, CatalogIndex};

/// Which view occupies the right-hand panel. The two are mutually
/// exclusive; a switch remounts the target panel, so the review form always
/// comes back with default state and recommendations always reload.
#[derive(Clone, Copy, PartialEq)]
enum RightPanel {
    Recommendations,
    Review,
}

/// App page component
#[component]
pub fn AppPage() -> impl IntoView {
    let query = use_query_map();
    let from_query = query.with_untracked(|q| q.get("user").cloned());
    let resolved = session::resolve(from_query.as_deref(), session::stored_username().as_deref());

    // No session: back to the landing page, nothing renders and no fetch runs
    let Some(username) = resolved else {
        let navigate = use_navigate();
        create_effect(move |_| {
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
        return ().into_view();
    };

    // The catalog index backs review-title resolution; loaded once per page
    // visit. A failed fetch leaves it empty and review submission degrades
    // to title-resolution errors.
    let catalog = create_rw_signal(CatalogIndex::default());
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_movie_catalog().await {
                Ok(response) => catalog.set(CatalogIndex::from_response(response)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load movie catalog: {}", e).into(),
                    );
                }
            }
        });
    });

    let panel = create_rw_signal(RightPanel::Recommendations);

    let rec_username = username.clone();
    let review_username = username.clone();

    view! {
        <div class="space-y-6">
            // Header
            <header class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"MovieDB"</h1>
                    <p class="text-gray-400 text-sm">
                        "Connecte en tant que "
                        <span class="text-white font-medium">{username.clone()}</span>
                    </p>
                </div>

                // Right panel selector
                <select
                    on:change=move |ev| {
                        panel.set(match event_target_value(&ev).as_str() {
                            "review" => RightPanel::Review,
                            _ => RightPanel::Recommendations,
                        });
                    }
                    class="bg-gray-800 rounded-lg px-3 py-2 text-sm
                           border border-gray-700 focus:border-primary-500 focus:outline-none"
                >
                    <option value="recommendations" selected>"Recommandations"</option>
                    <option value="review">"Donner un avis"</option>
                </select>
            </header>

            // Two panel layout
            <div class="grid lg:grid-cols-2 gap-6 items-start">
                <section class="bg-gray-800 rounded-xl p-6">
                    <ChatPanel />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    {move || match panel.get() {
                        RightPanel::Recommendations => view! {
                            <RecommendationsPanel username=rec_username.clone() />
                        }
                        .into_view(),
                        RightPanel::Review => view! {
                            <ReviewPanel username=review_username.clone() catalog=catalog />
                        }
                        .into_view(),
                    }}
                </section>
            </div>
        </div>
    }
    .into_view()
}
