//! newsboard - Local news board
//!
//! Keeps a list of short news posts in a local key-value store. Stored data
//! of any past shape is migrated on load, and every change is persisted as
//! the whole collection.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NewsboardError;
