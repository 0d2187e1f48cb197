//! Navigation Component
//!
//! Sticky header with brand, section links and the sign-out action.

use leptos::*;

use crate::state::global::AppState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <header class="w-full sticky top-0 z-30 bg-black/40 backdrop-blur border-b border-white/10">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                // Brand
                <div class="flex items-center gap-3 text-white">
                    <div class="w-3 h-3 rounded-full bg-fuchsia-500 animate-pulse" />
                    <span class="font-semibold">"SocialHub Pro"</span>
                </div>

                // Section links and session action
                <nav class="hidden md:flex items-center gap-6 text-white/80">
                    <a href="#features" class="hover:text-white">"Features"</a>
                    <a href="#dashboard" class="hover:text-white">"Dashboard"</a>
                    {move || {
                        match state.user.get() {
                            Some(user) => view! {
                                <span class="flex items-center gap-3">
                                    <span class="text-white/60 text-sm">{user.name}</span>
                                    <button
                                        on:click=move |_| state.sign_out()
                                        class="px-4 py-2 rounded-lg bg-white/10 hover:bg-white/20"
                                    >
                                        "Sign out"
                                    </button>
                                </span>
                            }.into_view(),
                            None => view! {
                                <a href="#signup" class="px-4 py-2 rounded-lg bg-white/10 hover:bg-white/20">
                                    "Login / Sign up"
                                </a>
                            }.into_view(),
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
