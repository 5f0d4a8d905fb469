//! Billing Webhook - Signed webhook receiver for a billing provider
//!
//! This crate authenticates billing provider webhooks with HMAC-SHA256 over
//! the raw request body and routes verified order, subscription and license
//! events to a pluggable handler.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
