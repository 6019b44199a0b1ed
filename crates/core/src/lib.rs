//! Domain logic for the maintenance coordination platform.
//!
//! This crate is pure: no async, no database, no HTTP. It holds the status
//! state machines, partial-update field rules, input validators, listing
//! filter parsing, and pagination helpers shared by the db and api crates.

pub mod action;
pub mod error;
pub mod filter;
pub mod maintenance;
pub mod pagination;
pub mod patch;
pub mod pledge;
pub mod types;
pub mod validation;
