//! # lingohub-core
//!
//! Core crate for LingoHub. Contains configuration schemas, typed
//! identifiers, scope filter and decision types, domain events, the
//! audit seam trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LingoHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
