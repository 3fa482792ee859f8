//! Shared fixtures for the authorization engine tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use lingohub_authz::{
    CapabilityVocabulary, Guard, InMemoryDirectory, MemoryAuditSink, TenantDirectory,
};
use lingohub_core::types::{BranchId, OrganizationId};
use lingohub_entity::billing::{Subscription, Tariff};
use lingohub_entity::branch::Branch;
use lingohub_entity::organization::Organization;
use lingohub_entity::role::Role;
use lingohub_entity::staff::Staff;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// One organization with its default branch, a directory, a guard, and
/// a capturing audit sink.
pub struct TestTenant {
    pub directory: Arc<InMemoryDirectory>,
    pub audit: Arc<MemoryAuditSink>,
    pub guard: Guard,
    pub organization_id: OrganizationId,
    pub branch_id: BranchId,
}

impl TestTenant {
    pub fn new(name: &str) -> Self {
        let directory = Arc::new(InMemoryDirectory::new());
        let audit = Arc::new(MemoryAuditSink::new());
        let guard = Guard::new(
            Arc::new(CapabilityVocabulary::default()),
            directory.clone() as Arc<dyn TenantDirectory>,
            audit.clone(),
        );

        let (organization, branch) = Organization::bootstrap(name);
        let organization_id = organization.id;
        let branch_id = branch.id;
        directory.insert_organization(organization);
        directory.insert_branch(branch);

        Self {
            directory,
            audit,
            guard,
            organization_id,
            branch_id,
        }
    }

    /// Register a role and return it.
    pub fn add_role(&self, role: Role) -> Role {
        self.directory.insert_role(role.clone());
        role
    }

    /// Create an organization-wide staff account with the given role.
    pub fn staff_with(&self, role: &Role, name: &str) -> Staff {
        let staff = Staff::new(self.organization_id, role.id, name);
        self.directory.insert_staff(staff.clone());
        staff
    }

    /// Create a branch-pinned staff account with the given role.
    pub fn branch_staff_with(&self, role: &Role, name: &str) -> Staff {
        let staff = Staff::new(self.organization_id, role.id, name).in_branch(self.branch_id);
        self.directory.insert_staff(staff.clone());
        staff
    }

    /// Register a tariff and an already-paid subscription to it for the
    /// given window.
    pub fn subscribe(&self, tariff: Tariff, start: NaiveDate, end: NaiveDate) -> Subscription {
        let mut subscription = Subscription::new(self.organization_id, tariff.id, start, end);
        subscription.activate(Decimal::new(300_000, 0), Utc::now());
        self.directory.insert_tariff(tariff);
        self.directory.insert_subscription(subscription.clone());
        subscription
    }

    /// Add a non-default branch.
    pub fn add_branch(&self, name: &str) -> Branch {
        let branch = Branch::new(self.organization_id, name);
        self.directory.insert_branch(branch.clone());
        branch
    }
}
