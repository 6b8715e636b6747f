//! Review Panel
//!
//! Form for submitting a movie review. Titles must resolve in the catalog
//! index before anything is sent; error and success messages share one slot
//! and the whole form resets whenever the panel is remounted.

use leptos::*;

use crate::api::{self, ReviewRequest};
use crate::state::CatalogIndex;

const DEFAULT_RATING: f64 = 5.0;

#[derive(Clone, PartialEq)]
enum Feedback {
    Error(String),
    Success(String),
}

/// Review panel component
#[component]
pub fn ReviewPanel(username: String, catalog: RwSignal<CatalogIndex>) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (rating, set_rating) = create_signal(DEFAULT_RATING);
    let (spoiler, set_spoiler) = create_signal(false);
    let (text, set_text) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let feedback = create_rw_signal(None::<Feedback>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let title_value = title.get().trim().to_string();
        let rating_value = rating.get();

        let movie_id = match catalog
            .with_untracked(|c| c.validate_review(&title_value, &rating_value.to_string()))
        {
            Ok(movie_id) => movie_id,
            Err(message) => {
                feedback.set(Some(Feedback::Error(message)));
                return;
            }
        };

        feedback.set(None);
        set_submitting.set(true);

        let review = ReviewRequest {
            movie_id,
            title: title_value,
            rating: rating_value,
            spoiler: spoiler.get(),
            text: text.get().trim().to_string(),
            username: username.clone(),
        };

        spawn_local(async move {
            match api::submit_review(&review).await {
                Ok(()) => {
                    feedback.set(Some(Feedback::Success("Avis envoye avec succes.".to_string())));
                    // Inputs reset to defaults, the banner stays
                    set_title.set(String::new());
                    set_text.set(String::new());
                    set_spoiler.set(false);
                    set_rating.set(DEFAULT_RATING);
                }
                Err(e) => {
                    feedback.set(Some(Feedback::Error(e)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Donner un avis"</h2>

            <form on:submit=on_submit class="space-y-4">
                // Title with catalog-backed autocomplete
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Titre du film"</label>
                    <input
                        type="text"
                        list="movie-suggestions"
                        placeholder="Titre exact du film"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <datalist id="movie-suggestions">
                        {move || {
                            catalog
                                .with(|c| c.suggestions(&title.get()))
                                .into_iter()
                                .map(|suggestion| view! { <option value=suggestion /> })
                                .collect_view()
                        }}
                    </datalist>
                </div>

                // Rating slider mirrored into a label
                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        "Note: "
                        <span class="text-white font-medium">
                            {move || format!("{:.1}", rating.get())}
                        </span>
                        "/10"
                    </label>
                    <input
                        type="range"
                        min="0"
                        max="10"
                        step="0.5"
                        prop:value=move || rating.get().to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                set_rating.set(v);
                            }
                        }
                        class="w-full"
                    />
                </div>

                // Spoiler flag
                <label class="flex items-center space-x-2 text-sm">
                    <input
                        type="checkbox"
                        prop:checked=move || spoiler.get()
                        on:change=move |ev| set_spoiler.set(event_target_checked(&ev))
                    />
                    <span>"Contient des spoilers"</span>
                </label>

                // Review text
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Ton avis"</label>
                    <textarea
                        placeholder="Qu'en as-tu pense ?"
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                        rows="4"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none
                               resize-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    {move || if submitting.get() { "Envoi..." } else { "Envoyer l'avis" }}
                </button>
            </form>

            // One mutually exclusive feedback slot
            {move || {
                feedback.get().map(|fb| match fb {
                    Feedback::Error(message) => view! {
                        <p class="review-feedback text-sm text-red-400">{message}</p>
                    },
                    Feedback::Success(message) => view! {
                        <p class="review-feedback success text-sm text-green-400">{message}</p>
                    },
                })
            }}
        </div>
    }
}
