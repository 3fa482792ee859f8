//! Organization entity.

pub mod model;

pub use model::{CreateOrganization, Organization, UpdateOrganization};
