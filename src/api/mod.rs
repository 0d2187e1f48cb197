//! Backend API
//!
//! HTTP client for the SocialHub REST backend.

pub mod client;

pub use client::*;
