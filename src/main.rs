//! SocialHub Pro
//!
//! Marketing landing page plus authenticated dashboard, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Login / signup with client-side validation
//! - Cross-posting uploader targeting linked platforms
//! - Product catalog CRUD with simulated checkout
//! - AI video-edit job submission (Ultra Pro plans)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic lives in the SocialHub backend; this crate
//! renders UI, keeps form state, and mirrors backend responses over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
