//! Subscription and payment app.
pub mod config;
