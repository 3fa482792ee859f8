//! Staff entity.

pub mod model;

pub use model::{CreateStaff, Staff, UpdateStaff};
