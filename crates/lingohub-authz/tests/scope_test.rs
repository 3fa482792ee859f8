//! Integration tests for tenant scope resolution and isolation.

mod helpers;

use std::sync::Arc;

use helpers::TestTenant;

use lingohub_authz::{CapabilityVocabulary, ScopeResolver};
use lingohub_core::types::{FilterSpec, RecordScope, ResourceKind};
use lingohub_entity::customer::Customer;
use lingohub_entity::order::Order;
use lingohub_entity::role::{Role, presets};

fn resolver() -> ScopeResolver {
    ScopeResolver::new(Arc::new(CapabilityVocabulary::default()))
}

#[test]
fn test_cross_tenant_isolation_for_every_resource_kind() {
    // The single most important invariant: whatever filter a staff
    // member of organization A receives, it never matches a record of
    // organization B.
    let tenant_a = TestTenant::new("Alpha Center");
    let tenant_b = TestTenant::new("Beta Center");
    let resolver = resolver();

    let roles = [
        presets::owner(),
        presets::manager(),
        presets::staff(),
        Role::named("empty", "Empty"),
    ];

    for role in &roles {
        let staff_a = tenant_a.branch_staff_with(role, "a");
        for kind in [
            ResourceKind::Orders,
            ResourceKind::Customers,
            ResourceKind::Staff,
            ResourceKind::Branches,
        ] {
            let filter = resolver.scope(&staff_a, Some(role), kind);
            let foreign_record = RecordScope::organization(tenant_b.organization_id)
                .in_branch(tenant_b.branch_id);
            assert!(
                !filter.permits(&foreign_record),
                "role '{}' on {kind} leaked into the other organization",
                role.name
            );
        }
    }
}

#[test]
fn test_organization_scope_covers_branches_created_later() {
    let tenant = TestTenant::new("Alpha Center");
    let role = tenant.add_role(Role::named("manager", "Manager").grant("can_view_all_orders"));
    let staff = tenant.staff_with(&role, "manager");

    let filter = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
    assert_eq!(
        filter,
        FilterSpec::Organization {
            organization_id: tenant.organization_id
        }
    );

    // A branch opened after the role was assigned is covered by the
    // same filter with no re-resolution.
    let new_branch = tenant.add_branch("New Quarter");
    let customer = Customer::new(tenant.organization_id, "Karim", "+998");
    let order = Order::new(tenant.organization_id, new_branch.id, customer.id, staff.id);
    assert!(filter.permits(&order.record_scope()));
}

#[test]
fn test_own_scope_shows_created_and_assigned_orders_only() {
    let tenant = TestTenant::new("Alpha Center");
    let role = tenant.add_role(presets::staff());
    let me = tenant.branch_staff_with(&role, "me");
    let colleague = tenant.branch_staff_with(&role, "colleague");

    let filter = resolver().scope(&me, Some(&role), ResourceKind::Orders);
    assert_eq!(filter, FilterSpec::Own { staff_id: me.id });

    let customer = Customer::new(tenant.organization_id, "Karim", "+998");
    let mine = Order::new(tenant.organization_id, tenant.branch_id, customer.id, me.id);
    let theirs = Order::new(
        tenant.organization_id,
        tenant.branch_id,
        customer.id,
        colleague.id,
    );
    let mut assigned_to_me = Order::new(
        tenant.organization_id,
        tenant.branch_id,
        customer.id,
        colleague.id,
    );
    assigned_to_me.assigned_to = Some(me.id);

    assert!(filter.permits(&mine.record_scope()));
    assert!(!filter.permits(&theirs.record_scope()));
    assert!(filter.permits(&assigned_to_me.record_scope()));
}

#[test]
fn test_view_own_wins_over_branch_pinning() {
    // Branch-pinned staff holding only view-own must not see the whole
    // branch.
    let tenant = TestTenant::new("Alpha Center");
    let role = tenant.add_role(Role::named("s", "S").grant("can_view_own_orders"));
    let staff = tenant.branch_staff_with(&role, "staff");

    let filter = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
    assert_eq!(filter, FilterSpec::Own { staff_id: staff.id });
}

#[test]
fn test_branch_capability_scopes_to_pinned_branch() {
    let tenant = TestTenant::new("Alpha Center");
    let role =
        tenant.add_role(Role::named("reception", "Reception").grant("can_view_branch_customers"));
    let staff = tenant.branch_staff_with(&role, "reception");

    let filter = resolver().scope(&staff, Some(&role), ResourceKind::Customers);
    assert_eq!(
        filter,
        FilterSpec::Branch {
            branch_id: tenant.branch_id
        }
    );

    // Customers of another branch in the same organization stay hidden.
    let other_branch = tenant.add_branch("Other");
    let foreign = RecordScope::organization(tenant.organization_id).in_branch(other_branch.id);
    assert!(!filter.permits(&foreign));
}

#[test]
fn test_branch_capability_without_pinning_is_empty() {
    // The branch-level capability grants nothing to an account that has
    // no branch to anchor it.
    let tenant = TestTenant::new("Alpha Center");
    let role = tenant.add_role(Role::named("r", "R").grant("can_view_branch_orders"));
    let staff = tenant.staff_with(&role, "unpinned");

    let filter = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
    assert_eq!(filter, FilterSpec::Empty);
}

#[test]
fn test_master_flag_confers_view_all_scope() {
    let tenant = TestTenant::new("Alpha Center");
    let role = tenant.add_role(Role::named("boss", "Boss").grant("can_manage_orders"));
    let staff = tenant.staff_with(&role, "boss");

    let filter = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
    assert_eq!(
        filter,
        FilterSpec::Organization {
            organization_id: tenant.organization_id
        }
    );
}

#[test]
fn test_owner_preset_sees_everything_in_organization() {
    let tenant = TestTenant::new("Alpha Center");
    let role = tenant.add_role(presets::owner());
    let owner = tenant.staff_with(&role, "owner");
    let resolver = resolver();

    for kind in [
        ResourceKind::Orders,
        ResourceKind::Customers,
        ResourceKind::Staff,
        ResourceKind::Branches,
    ] {
        assert_eq!(
            resolver.scope(&owner, Some(&role), kind),
            FilterSpec::Organization {
                organization_id: tenant.organization_id
            },
            "owner should have organization scope for {kind}"
        );
    }
}
