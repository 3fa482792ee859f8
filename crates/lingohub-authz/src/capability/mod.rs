//! Capability vocabulary and the authorization resolver.

pub mod resolver;
pub mod vocabulary;

pub use resolver::CapabilityResolver;
pub use vocabulary::{CapabilityVocabulary, DomainRule};
