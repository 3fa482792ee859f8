//! Shared type definitions: typed identifiers, scope filters, and
//! authorization decisions.

pub mod decision;
pub mod filter;
pub mod id;

pub use decision::{Decision, DenyReason};
pub use filter::{FilterSpec, QuotaKind, RecordScope, ResourceKind};
pub use id::{
    AuditLogId, BranchId, CustomerId, OrderId, OrganizationId, RoleId, StaffId, SubscriptionId,
    TariffId,
};
