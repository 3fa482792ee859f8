//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lingohub_core::types::{BranchId, CustomerId, OrderId, OrganizationId, RecordScope, StaffId};

use super::status::OrderStatus;

/// A customer order placed at a branch.
///
/// Pricing, documents, and payment records are owned by their respective
/// collaborators; this model carries the fields the scoping and quota
/// engine needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// The organization the order belongs to.
    pub organization_id: OrganizationId,
    /// The branch the order was placed at.
    pub branch_id: BranchId,
    /// The ordering customer.
    pub customer_id: CustomerId,
    /// The staff account that created the order.
    pub created_by: StaffId,
    /// The staff account assigned to process the order.
    pub assigned_to: Option<StaffId>,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Whether the order came in through the chat-bot channel.
    pub from_bot: bool,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order.
    pub fn new(
        organization_id: OrganizationId,
        branch_id: BranchId,
        customer_id: CustomerId,
        created_by: StaffId,
    ) -> Self {
        Self {
            id: OrderId::new(),
            organization_id,
            branch_id,
            customer_id,
            created_by,
            assigned_to: None,
            status: OrderStatus::New,
            from_bot: false,
            created_at: Utc::now(),
        }
    }

    /// The order's tenant coordinates for scope filtering.
    ///
    /// An order is "owned" by its assignee when assigned, otherwise by
    /// its creator, so an `Own` filter shows staff both the orders they
    /// opened and the ones routed to them.
    pub fn record_scope(&self) -> RecordScope {
        RecordScope {
            organization_id: self.organization_id,
            branch_id: Some(self.branch_id),
            owner_id: Some(self.assigned_to.unwrap_or(self.created_by)),
        }
    }
}
