//! App Root Component
//!
//! Composes the marketing sections, the auth panel and, once a user is
//! present, the dashboard.

use leptos::*;

use crate::components::{AuthPanel, Hero, Nav, Toast};
use crate::pages::Dashboard;
use crate::state::global::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    // Rehydrate the session from the persisted credential on first render
    create_effect(move |_| {
        spawn_local(async move {
            state.restore_session().await;
        });
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-black to-slate-950">
            <Nav />
            <Hero />

            <main class="-mt-24 relative z-10">
                // Auth and feature highlights, side by side
                <div class="max-w-6xl mx-auto px-6 grid md:grid-cols-2 gap-8 items-start">
                    <AuthPanel />
                    <FeaturePanel />
                </div>

                // Dashboard appears only for an authenticated user
                {move || state.user.get().map(|_| view! { <Dashboard /> })}
            </main>

            <Footer />
            <Toast />
        </div>
    }
}

/// Feature-highlight panel shown next to the auth card
#[component]
fn FeaturePanel() -> impl IntoView {
    view! {
        <div id="features" class="bg-white/5 border border-white/10 rounded-2xl p-6 text-white">
            <h3 class="text-xl font-semibold mb-3">"Why SocialHub Pro?"</h3>
            <ul class="space-y-2 text-white/80">
                <li>"• Upload once and publish across 50+ platforms"</li>
                <li>"• Plan-based daily limits with automatic queuing"</li>
                <li>"• Unified ecommerce to sell and track your products"</li>
                <li>"• Ultra Pro unlocks AI video editing tools"</li>
            </ul>
        </div>
    }
}

/// Marketing footer with the current year
#[component]
fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="text-center text-white/60 py-10">
            {format!("© {year} SocialHub Pro Edition")}
        </footer>
    }
}
