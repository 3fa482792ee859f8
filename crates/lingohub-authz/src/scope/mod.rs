//! Tenant scope resolution.

pub mod resolver;
pub mod rules;

pub use resolver::ScopeResolver;
pub use rules::ScopeRule;
