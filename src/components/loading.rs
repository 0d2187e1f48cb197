//! Loading Component
//!
//! Skeleton placeholder shown while the dashboard snapshot loads.

use leptos::*;

/// Skeleton loader for the platform grid while the snapshot loads
#[component]
pub fn CardSkeleton(
    #[prop(default = 5)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-5 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="rounded-xl bg-white/5 border border-white/10 h-28" />
            }).collect_view()}
        </div>
    }
}
