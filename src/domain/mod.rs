//! Domain layer - webhook authentication and event classification.

pub mod billing;
