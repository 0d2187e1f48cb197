//! State Management
//!
//! Global application state and session persistence.

pub mod global;
pub mod session;

pub use global::{provide_app_state, AppState};
pub use session::{Plan, User};
