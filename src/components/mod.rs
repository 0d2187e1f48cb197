//! UI Components
//!
//! Reusable Leptos components for the landing page and dashboard.

pub mod auth;
pub mod hero;
pub mod loading;
pub mod nav;
pub mod toast;

pub use auth::AuthPanel;
pub use hero::Hero;
pub use loading::CardSkeleton;
pub use nav::Nav;
pub use toast::Toast;
