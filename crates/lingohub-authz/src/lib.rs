//! # lingohub-authz
//!
//! The LingoHub authorization and scoping engine: given a staff member
//! and a requested action, decides whether the role grants it, whether
//! the organization's subscription entitles and has quota for it, and
//! which subset of tenant data the member may see.
//!
//! ## Modules
//!
//! - `capability` — capability vocabulary and the authorization resolver
//! - `scope` — tenant scope resolution into [`lingohub_core::types::FilterSpec`]
//! - `subscription` — subscription gating and lifecycle transitions
//! - `usage` — atomic quota ledger for the strict-quota mode
//! - `guard` — the policy enforcement point composing all of the above
//! - `directory` — the tenant lookup seam and its in-memory implementation
//! - `audit` — audit sink implementations
//!
//! Every component is synchronous and free of I/O: lookups go through
//! the injected [`directory::TenantDirectory`], and all decisions
//! complete in bounded local computation.

pub mod audit;
pub mod capability;
pub mod directory;
pub mod guard;
pub mod scope;
pub mod subscription;
pub mod usage;

pub use audit::{MemoryAuditSink, TracingAuditSink};
pub use capability::{CapabilityResolver, CapabilityVocabulary, DomainRule};
pub use directory::{InMemoryDirectory, TenantDirectory};
pub use guard::{AccessRequest, CombinationMode, Guard};
pub use scope::{ScopeResolver, ScopeRule};
pub use subscription::SubscriptionGate;
pub use usage::UsageLedger;
