//! Customer entity.

pub mod model;

pub use model::{Customer, CustomerLanguage};
