//! Tenant scope filters.
//!
//! A [`FilterSpec`] describes which subset of a resource kind a staff
//! member may see or act on. The engine only computes the descriptor;
//! collaborators translate it into their own storage-layer filter
//! (a query clause, an iterator filter, etc.).

use serde::{Deserialize, Serialize};

use super::id::{BranchId, OrganizationId, StaffId};

/// Resource categories subject to tenant scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Customer orders.
    Orders,
    /// Customer records.
    Customers,
    /// Staff accounts.
    Staff,
    /// Branch records.
    Branches,
}

impl ResourceKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Customers => "customers",
            Self::Staff => "staff",
            Self::Branches => "branches",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = crate::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "orders" => Ok(Self::Orders),
            "customers" => Ok(Self::Customers),
            "staff" => Ok(Self::Staff),
            "branches" => Ok(Self::Branches),
            _ => Err(crate::AppError::validation(format!(
                "Invalid resource kind: '{s}'. Expected one of: orders, customers, staff, branches"
            ))),
        }
    }
}

/// Resource kinds with a numeric tariff limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaKind {
    /// Number of branches in the organization.
    Branches,
    /// Number of active staff accounts in the organization.
    Staff,
    /// Orders created in the current billing month.
    MonthlyOrders,
}

impl QuotaKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Branches => "branches",
            Self::Staff => "staff",
            Self::MonthlyOrders => "monthly_orders",
        }
    }
}

impl std::fmt::Display for QuotaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The visibility filter computed by the scope resolver.
///
/// Ordered from widest to narrowest; `Empty` is an explicit deny-all,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum FilterSpec {
    /// No restriction (platform superuser).
    All,
    /// Every record belonging to the organization, across all of its
    /// branches — including branches created after the filter's role
    /// was assigned.
    Organization {
        /// The organization whose records are visible.
        organization_id: OrganizationId,
    },
    /// Records belonging to a single branch.
    Branch {
        /// The branch whose records are visible.
        branch_id: BranchId,
    },
    /// Only records the staff member created or is assigned to.
    Own {
        /// The staff member whose records are visible.
        staff_id: StaffId,
    },
    /// No records are visible.
    Empty,
}

/// The tenant coordinates of an already-loaded record, used to evaluate
/// a [`FilterSpec`] in-process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordScope {
    /// The organization the record belongs to.
    pub organization_id: OrganizationId,
    /// The branch the record belongs to, if branch-pinned.
    pub branch_id: Option<BranchId>,
    /// The staff member who owns the record (creator or assignee).
    pub owner_id: Option<StaffId>,
}

impl RecordScope {
    /// A record pinned to an organization only.
    pub fn organization(organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            branch_id: None,
            owner_id: None,
        }
    }

    /// Attach a branch to the record's coordinates.
    pub fn in_branch(mut self, branch_id: BranchId) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Attach an owning staff member to the record's coordinates.
    pub fn owned_by(mut self, staff_id: StaffId) -> Self {
        self.owner_id = Some(staff_id);
        self
    }
}

impl FilterSpec {
    /// Check whether a record falls inside this filter.
    ///
    /// `Own` matches on the record's owner; records with no owner are
    /// never visible under an `Own` filter. `Branch` requires the record
    /// to be pinned to exactly that branch.
    pub fn permits(&self, record: &RecordScope) -> bool {
        match self {
            Self::All => true,
            Self::Organization { organization_id } => record.organization_id == *organization_id,
            Self::Branch { branch_id } => record.branch_id == Some(*branch_id),
            Self::Own { staff_id } => record.owner_id == Some(*staff_id),
            Self::Empty => false,
        }
    }

    /// Whether this filter can ever match a record.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
