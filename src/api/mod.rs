//! Moodle portal module.
//!
//! This module provides:
//! - Portal endpoint definitions
//! - The cookie-carrying HTTP session
//! - SSO authentication

pub mod auth;
pub mod client;
pub mod portal;

pub use auth::login;
pub use client::MoodleSession;
pub use portal::Portal;
