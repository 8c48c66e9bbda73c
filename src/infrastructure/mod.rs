//! Infrastructure layer - concrete implementations of the domain contracts

pub mod account;
pub mod auth;
pub mod logging;
