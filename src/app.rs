//! App Root Component
//!
//! Root component with routing between the landing page and the app page.

use leptos::*;
use leptos_router::*;

use crate::pages::{AppPage, Landing};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/app" view=AppPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🎬"</div>
            <h1 class="text-3xl font-bold mb-2">"Page introuvable"</h1>
            <p class="text-gray-400 mb-6">"Cette page n'existe pas."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Retour a l'accueil"
            </A>
        </div>
    }
}
