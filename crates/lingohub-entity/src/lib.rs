//! # lingohub-entity
//!
//! Domain entity models for LingoHub. Every struct in this crate
//! represents a stored record or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; persistence
//! mapping belongs to the storage collaborator, not to this crate.

pub mod billing;
pub mod branch;
pub mod customer;
pub mod order;
pub mod organization;
pub mod role;
pub mod staff;
