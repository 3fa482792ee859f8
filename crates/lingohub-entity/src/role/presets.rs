//! Built-in system roles.
//!
//! Every organization starts from the same three roles. Custom roles can
//! be created on tariffs that include the `custom_roles` feature.

use super::model::Role;

/// Machine name of the owner role.
pub const OWNER: &str = "owner";
/// Machine name of the branch manager role.
pub const MANAGER: &str = "manager";
/// Machine name of the staff-member role.
pub const STAFF: &str = "staff";

/// The three system roles with their default grant sets.
pub fn system_roles() -> Vec<Role> {
    vec![owner(), manager(), staff()]
}

/// Owner: full access to the organization and all of its branches,
/// granted through the per-domain master capabilities.
pub fn owner() -> Role {
    let mut role = Role::named(OWNER, "Owner").grant_all([
        "can_manage_settings",
        "can_manage_branches",
        "can_manage_staff",
        "can_manage_orders",
        "can_manage_financial",
        "can_manage_reports",
        "can_manage_products",
        "can_manage_customers",
        "can_manage_marketing",
    ]);
    role.description =
        "Organization owner. Full access to the organization and all branches.".to_string();
    role.is_system = true;
    role
}

/// Branch manager: runs a single branch's day-to-day order flow.
pub fn manager() -> Role {
    let mut role = Role::named(MANAGER, "Branch Manager").grant_all([
        "can_view_all_orders",
        "can_manage_orders",
        "can_receive_payments",
        "can_view_reports",
        "can_view_staff",
        "can_view_products",
        "can_view_all_customers",
        "can_view_customer_details",
    ]);
    role.description =
        "Branch manager. Manages orders and payments within the assigned branch.".to_string();
    role.is_system = true;
    role
}

/// Staff member: processes their own assigned orders only.
pub fn staff() -> Role {
    let mut role = Role::named(STAFF, "Staff").grant_all([
        "can_view_own_orders",
        "can_update_order_status",
        "can_receive_payments",
        "can_view_products",
        "can_view_branch_customers",
    ]);
    role.description =
        "Staff member. Processes assigned orders and receives payments.".to_string();
    role.is_system = true;
    role
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_roles_are_marked_system() {
        for role in system_roles() {
            assert!(role.is_system, "{} should be a system role", role.name);
        }
    }

    #[test]
    fn test_staff_preset_sees_own_orders_only() {
        let staff = staff();
        assert!(staff.has_grant("can_view_own_orders"));
        assert!(!staff.has_grant("can_view_all_orders"));
        assert!(!staff.has_grant("can_manage_orders"));
    }
}
