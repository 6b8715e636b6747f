//! Recommendation Panel
//!
//! Ranked recommendations for the session user, preceded by the reference
//! movies that produced them. Loads on mount, on refresh and on every
//! switch back to this panel; a failed load always leaves the panel in a
//! renderable empty state.

use leptos::*;

use crate::api::{self, Recommendation};

/// Reference pills visible while the list is collapsed
pub const MAX_REF_VISIBLE: usize = 6;

/// Synopsis preview length in the card list
pub const SYNOPSIS_PREVIEW_CHARS: usize = 220;

const LOADING_TEXT: &str = "Chargement des recommandations...";

/// Recommendation panel component
#[component]
pub fn RecommendationsPanel(username: String) -> impl IntoView {
    let status = create_rw_signal(Some(LOADING_TEXT.to_string()));
    let recommendations = create_rw_signal(Vec::<Recommendation>::new());
    let reference_movies = create_rw_signal(Vec::<(String, f64)>::new());
    let loaded = create_rw_signal(false);
    let collapsed = create_rw_signal(true);
    let modal = create_rw_signal(None::<Recommendation>);

    // No cancellation: a refresh does not abort the previous request, so
    // two in-flight loads may finish out of order and the slower one wins.
    let load = move || {
        let username = username.clone();
        status.set(Some(LOADING_TEXT.to_string()));
        recommendations.set(Vec::new());
        reference_movies.set(Vec::new());
        loaded.set(false);
        spawn_local(async move {
            match api::fetch_recommendations(&username).await {
                Ok(data) => {
                    collapsed.set(true);
                    reference_movies.set(data.reference_movies);
                    recommendations.set(data.recommendations);
                    loaded.set(true);
                    status.set(None);
                }
                Err(e) => {
                    recommendations.set(Vec::new());
                    reference_movies.set(Vec::new());
                    status.set(Some(format!("Erreur: {}", e)));
                }
            }
        });
    };

    // Initial load on mount
    let load_on_mount = load.clone();
    create_effect(move |_| load_on_mount());

    let reload = load.clone();

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Recommandations"</h2>
                <button
                    on:click=move |_| reload()
                    class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "Rafraichir"
                </button>
            </div>

            // Loading / error placeholder
            {move || {
                status.get().map(|text| view! {
                    <p class="rec-status text-gray-400 text-sm">{text}</p>
                })
            }}

            // Reference movies
            {move || {
                if !loaded.get() {
                    return ().into_view();
                }
                view! {
                    <div class="ref-block">
                        <h3 class="ref-title text-sm text-gray-400 mb-2">"Films de reference"</h3>
                        {move || {
                            if reference_movies.with(|r| r.is_empty()) {
                                view! {
                                    <p class="text-gray-500 text-sm">
                                        "Aucun film de reference disponible."
                                    </p>
                                }
                                .into_view()
                            } else {
                                view! {
                                    <div class="flex flex-wrap gap-2">
                                        <ReferencePills
                                            reference_movies=reference_movies
                                            collapsed=collapsed
                                        />
                                    </div>
                                    <RefToggle
                                        reference_movies=reference_movies
                                        collapsed=collapsed
                                    />
                                }
                                .into_view()
                            }
                        }}
                    </div>
                }
                .into_view()
            }}

            // Recommendation cards
            <div class="space-y-3">
                {move || {
                    recommendations
                        .get()
                        .into_iter()
                        .map(|rec| view! { <RecommendationCard rec modal /> })
                        .collect_view()
                }}
            </div>

            // Synopsis modal
            <SynopsisModal modal />
        </div>
    }
}

#[component]
fn ReferencePills(
    reference_movies: RwSignal<Vec<(String, f64)>>,
    collapsed: RwSignal<bool>,
) -> impl IntoView {
    move || {
        let hide_tail = collapsed.get();
        reference_movies
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, (title, rating))| {
                let hidden = hide_tail && index >= MAX_REF_VISIBLE;
                view! {
                    <div
                        class="ref-pill bg-gray-700 rounded-full px-3 py-1 text-sm
                               flex items-center space-x-2"
                        class:hidden=hidden
                    >
                        <span class="ref-name">{title}</span>
                        <span class="ref-rating text-gray-400">{format!("{}/10", rating)}</span>
                    </div>
                }
            })
            .collect_view()
    }
}

#[component]
fn RefToggle(
    reference_movies: RwSignal<Vec<(String, f64)>>,
    collapsed: RwSignal<bool>,
) -> impl IntoView {
    move || {
        let total = reference_movies.with(|r| r.len());
        (total > MAX_REF_VISIBLE).then(|| {
            view! {
                <button
                    type="button"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                    class="ref-toggle mt-2 text-sm text-primary-400 hover:text-primary-300"
                >
                    // Recomputed from the live count: the list can be
                    // re-rendered with a different length between toggles
                    {move || {
                        ref_toggle_label(reference_movies.with(|r| r.len()), collapsed.get())
                    }}
                </button>
            }
        })
    }
}

#[component]
fn RecommendationCard(rec: Recommendation, modal: RwSignal<Option<Recommendation>>) -> impl IntoView {
    let heading = format!("{} ({})", rec.title, rec.year.as_deref().unwrap_or("N/A"));
    let meta = card_meta(&rec);
    let synopsis_view = (!rec.synopsis.is_empty()).then(|| {
        let (preview, truncated) = truncate_synopsis(&rec.synopsis);
        let full = rec.clone();
        view! {
            <p class="rec-synopsis text-sm text-gray-300 mt-2">{preview}</p>
            {truncated.then(|| view! {
                <button
                    type="button"
                    on:click=move |_| modal.set(Some(full.clone()))
                    class="rec-more mt-1 text-sm text-primary-400 hover:text-primary-300"
                >
                    "Voir plus"
                </button>
            })}
        }
    });

    view! {
        <div class="rec-card bg-gray-900 rounded-lg p-4">
            <div class="rec-title font-medium">{heading}</div>
            <div class="rec-meta text-xs text-gray-400 mt-1">{meta}</div>
            {synopsis_view}
        </div>
    }
}

#[component]
fn SynopsisModal(modal: RwSignal<Option<Recommendation>>) -> impl IntoView {
    move || {
        modal.get().map(|rec| {
            let title = if rec.title.is_empty() {
                "Synopsis".to_string()
            } else {
                rec.title.clone()
            };
            let meta = modal_meta(&rec);
            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center">
                    <div
                        class="modal-backdrop absolute inset-0 bg-black/60"
                        on:click=move |_| modal.set(None)
                    />
                    <div class="relative bg-gray-800 rounded-xl p-6 max-w-lg w-full mx-4
                                max-h-[80vh] overflow-y-auto">
                        <button
                            on:click=move |_| modal.set(None)
                            class="modal-close absolute top-4 right-4 text-gray-400 hover:text-white"
                        >
                            "✕"
                        </button>
                        <h3 class="text-lg font-semibold pr-8">{title}</h3>
                        <p class="modal-meta text-xs text-gray-400 mt-1">{meta}</p>
                        <p class="modal-body text-sm text-gray-200 mt-4 whitespace-pre-wrap">
                            {rec.synopsis.clone()}
                        </p>
                    </div>
                </div>
            }
        })
    }
}

/// Toggle label for the hidden reference-movie tail
fn ref_toggle_label(total: usize, collapsed: bool) -> String {
    if collapsed {
        format!("▼ {} autres films", total.saturating_sub(MAX_REF_VISIBLE))
    } else {
        "▲ Masquer".to_string()
    }
}

/// Card meta line: score, genres, catalog id
fn card_meta(rec: &Recommendation) -> String {
    format!(
        "Score {:.3} · {} · {}",
        rec.score,
        rec.genres.as_deref().filter(|g| !g.is_empty()).unwrap_or("Genres N/A"),
        rec.tconst.as_deref().unwrap_or("N/A"),
    )
}

/// Modal meta line: year, genres, catalog id and score joined by a
/// separator, skipping missing or `"N/A"` fields
fn modal_meta(rec: &Recommendation) -> String {
    let mut parts = Vec::new();
    for field in [&rec.year, &rec.genres, &rec.tconst] {
        if let Some(value) = field.as_deref() {
            if !value.is_empty() && value != "N/A" {
                parts.push(value.to_string());
            }
        }
    }
    parts.push(format!("Score {:.3}", rec.score));
    parts.join(" · ")
}

/// Truncate a synopsis for the card list.
///
/// Returns the display text and whether it was cut: over the limit, the
/// first [`SYNOPSIS_PREVIEW_CHARS`] characters are kept, right-trimmed and
/// suffixed with an ellipsis.
fn truncate_synopsis(synopsis: &str) -> (String, bool) {
    if synopsis.chars().count() <= SYNOPSIS_PREVIEW_CHARS {
        return (synopsis.to_string(), false);
    }
    let cut: String = synopsis.chars().take(SYNOPSIS_PREVIEW_CHARS).collect();
    (format!("{}...", cut.trim_end()), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(synopsis: &str) -> Recommendation {
        Recommendation {
            title: "Matrix".to_string(),
            year: Some("1999".to_string()),
            genres: Some("Action,Sci-Fi".to_string()),
            tconst: Some("tt0133093".to_string()),
            score: 0.98765,
            synopsis: synopsis.to_string(),
        }
    }

    #[test]
    fn test_short_synopsis_untouched() {
        let text = "a".repeat(220);
        let (display, truncated) = truncate_synopsis(&text);
        assert_eq!(display, text);
        assert!(!truncated);
    }

    #[test]
    fn test_long_synopsis_truncated_with_ellipsis() {
        let text = "b".repeat(221);
        let (display, truncated) = truncate_synopsis(&text);
        assert!(truncated);
        assert_eq!(display, format!("{}...", "b".repeat(220)));
    }

    #[test]
    fn test_truncation_trims_trailing_whitespace() {
        let mut text = "c".repeat(219);
        text.push(' ');
        text.push_str(&"d".repeat(40));
        let (display, truncated) = truncate_synopsis(&text);
        assert!(truncated);
        assert_eq!(display, format!("{}...", "c".repeat(219)));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let text = "é".repeat(230);
        let (display, truncated) = truncate_synopsis(&text);
        assert!(truncated);
        assert_eq!(display, format!("{}...", "é".repeat(220)));
    }

    #[test]
    fn test_ref_toggle_label() {
        assert_eq!(ref_toggle_label(10, true), "▼ 4 autres films");
        assert_eq!(ref_toggle_label(10, false), "▲ Masquer");
        // Live count below the fold never goes negative
        assert_eq!(ref_toggle_label(3, true), "▼ 0 autres films");
    }

    #[test]
    fn test_card_meta_formats_score_three_decimals() {
        assert_eq!(
            card_meta(&rec("")),
            "Score 0.988 · Action,Sci-Fi · tt0133093"
        );
    }

    #[test]
    fn test_card_meta_genre_fallback() {
        let mut r = rec("");
        r.genres = None;
        assert_eq!(card_meta(&r), "Score 0.988 · Genres N/A · tt0133093");
    }

    #[test]
    fn test_modal_meta_joins_fields() {
        assert_eq!(
            modal_meta(&rec("")),
            "1999 · Action,Sci-Fi · tt0133093 · Score 0.988"
        );
    }

    #[test]
    fn test_modal_meta_skips_sentinels() {
        let mut r = rec("");
        r.year = Some("N/A".to_string());
        r.genres = None;
        assert_eq!(modal_meta(&r), "tt0133093 · Score 0.988");
    }
}
