//! Tenant lookup seam.
//!
//! The engine never performs I/O itself: the guard resolves roles,
//! subscriptions, tariffs, and usage counts through this trait. The
//! calling application backs it with its storage layer; tests and the
//! bot worker use [`InMemoryDirectory`].

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use lingohub_core::types::{BranchId, OrganizationId, RoleId, StaffId, TariffId};
use lingohub_entity::billing::{Subscription, Tariff, UsagePeriod, UsageSnapshot};
use lingohub_entity::branch::Branch;
use lingohub_entity::order::Order;
use lingohub_entity::organization::Organization;
use lingohub_entity::role::Role;
use lingohub_entity::staff::Staff;

/// Synchronous lookups the guard needs to reach a decision.
///
/// Implementations return already-loaded records; all methods must be
/// cheap and non-blocking on the request path.
pub trait TenantDirectory: Send + Sync {
    /// Look up a role by id.
    fn role(&self, id: RoleId) -> Option<Role>;

    /// Look up an organization by id.
    fn organization(&self, id: OrganizationId) -> Option<Organization>;

    /// The organization's current subscription, if any.
    fn subscription_for(&self, organization_id: OrganizationId) -> Option<Subscription>;

    /// Look up a tariff by id.
    fn tariff(&self, id: TariffId) -> Option<Tariff>;

    /// Recompute the organization's usage counters as of `today`.
    fn usage_for(&self, organization_id: OrganizationId, today: NaiveDate) -> UsageSnapshot;

    /// The role assigned to a staff member, if any.
    fn role_of(&self, staff: &Staff) -> Option<Role> {
        staff.role_id.and_then(|id| self.role(id))
    }
}

#[derive(Debug, Default)]
struct Inner {
    organizations: HashMap<OrganizationId, Organization>,
    branches: HashMap<BranchId, Branch>,
    staff: HashMap<StaffId, Staff>,
    roles: HashMap<RoleId, Role>,
    tariffs: HashMap<TariffId, Tariff>,
    subscriptions: HashMap<OrganizationId, Subscription>,
    orders: Vec<Order>,
}

/// Hash-map backed directory for tests, tooling, and bootstrap flows.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    inner: RwLock<Inner>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an organization.
    pub fn insert_organization(&self, organization: Organization) {
        self.write().organizations.insert(organization.id, organization);
    }

    /// Insert or replace a branch.
    pub fn insert_branch(&self, branch: Branch) {
        self.write().branches.insert(branch.id, branch);
    }

    /// Insert or replace a staff account.
    pub fn insert_staff(&self, staff: Staff) {
        self.write().staff.insert(staff.id, staff);
    }

    /// Insert or replace a role.
    pub fn insert_role(&self, role: Role) {
        self.write().roles.insert(role.id, role);
    }

    /// Insert or replace a tariff.
    pub fn insert_tariff(&self, tariff: Tariff) {
        self.write().tariffs.insert(tariff.id, tariff);
    }

    /// Set the organization's current subscription, replacing any
    /// previous one (at most one subscription is current per
    /// organization).
    pub fn insert_subscription(&self, subscription: Subscription) {
        self.write()
            .subscriptions
            .insert(subscription.organization_id, subscription);
    }

    /// Record an order.
    pub fn insert_order(&self, order: Order) {
        self.write().orders.push(order);
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TenantDirectory for InMemoryDirectory {
    fn role(&self, id: RoleId) -> Option<Role> {
        self.read().roles.get(&id).cloned()
    }

    fn organization(&self, id: OrganizationId) -> Option<Organization> {
        self.read().organizations.get(&id).cloned()
    }

    fn subscription_for(&self, organization_id: OrganizationId) -> Option<Subscription> {
        self.read().subscriptions.get(&organization_id).cloned()
    }

    fn tariff(&self, id: TariffId) -> Option<Tariff> {
        self.read().tariffs.get(&id).cloned()
    }

    fn usage_for(&self, organization_id: OrganizationId, today: NaiveDate) -> UsageSnapshot {
        let inner = self.read();
        let period = UsagePeriod::containing(today);

        let branches = inner
            .branches
            .values()
            .filter(|b| b.organization_id == organization_id && b.is_active)
            .count() as u32;
        let staff = inner
            .staff
            .values()
            .filter(|s| s.organization_id == Some(organization_id) && s.is_active)
            .count() as u32;
        let orders_this_period = inner
            .orders
            .iter()
            .filter(|o| {
                o.organization_id == organization_id
                    && UsagePeriod::containing(o.created_at.date_naive()) == period
            })
            .count() as u32;

        UsageSnapshot {
            branches,
            staff,
            orders_this_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lingohub_core::types::CustomerId;

    #[test]
    fn test_usage_counts_only_own_organization() {
        let directory = InMemoryDirectory::new();
        let (org_a, branch_a) = Organization::bootstrap("Alpha");
        let (org_b, branch_b) = Organization::bootstrap("Beta");
        let org_a_id = org_a.id;

        directory.insert_organization(org_a);
        directory.insert_organization(org_b);
        directory.insert_branch(branch_a.clone());
        directory.insert_branch(branch_b);
        directory.insert_branch(Branch::new(org_a_id, "Second"));

        let today = Utc::now().date_naive();
        let usage = directory.usage_for(org_a_id, today);
        assert_eq!(usage.branches, 2);
    }

    #[test]
    fn test_usage_counts_orders_in_current_period_only() {
        let directory = InMemoryDirectory::new();
        let (org, branch) = Organization::bootstrap("Alpha");
        let org_id = org.id;
        let branch_id = branch.id;
        directory.insert_organization(org);
        directory.insert_branch(branch);

        let creator = StaffId::new();
        let mut old_order = Order::new(org_id, branch_id, CustomerId::new(), creator);
        old_order.created_at -= chrono::Duration::days(90);
        directory.insert_order(old_order);
        directory.insert_order(Order::new(org_id, branch_id, CustomerId::new(), creator));

        let today = Utc::now().date_naive();
        let usage = directory.usage_for(org_id, today);
        assert_eq!(usage.orders_this_period, 1);
    }

    #[test]
    fn test_inactive_staff_not_counted() {
        let directory = InMemoryDirectory::new();
        let (org, branch) = Organization::bootstrap("Alpha");
        let org_id = org.id;
        directory.insert_organization(org);
        directory.insert_branch(branch);

        let role = Role::named("r", "R");
        let active = Staff::new(org_id, role.id, "active");
        let mut inactive = Staff::new(org_id, role.id, "inactive");
        inactive.deactivate();
        directory.insert_role(role);
        directory.insert_staff(active);
        directory.insert_staff(inactive);

        let usage = directory.usage_for(org_id, Utc::now().date_naive());
        assert_eq!(usage.staff, 1);
    }
}
