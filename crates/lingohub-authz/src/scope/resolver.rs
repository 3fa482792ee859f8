//! Scope resolver — computes the visibility filter for a resource kind.

use std::sync::Arc;

use tracing::trace;

use lingohub_core::types::{FilterSpec, ResourceKind};
use lingohub_entity::role::Role;
use lingohub_entity::staff::Staff;

use crate::capability::{CapabilityResolver, CapabilityVocabulary};

/// Computes which records of a resource kind a staff member may see.
///
/// Resolution order per kind:
/// 1. Superuser — everything.
/// 2. View-all capability with an organization pinning — the whole
///    organization, including branches created after the role was
///    assigned.
/// 3. View-own capability — the member's own records.
/// 4. Branch pinning with the branch-level capability — the branch.
/// 5. Otherwise the empty scope (a legitimate empty result, not an
///    error).
///
/// The resolver is pure: it never touches storage, it only derives a
/// [`FilterSpec`] the caller applies to its own query layer.
#[derive(Debug, Clone)]
pub struct ScopeResolver {
    /// Capability resolver sharing the platform vocabulary.
    resolver: CapabilityResolver,
}

impl ScopeResolver {
    /// Creates a scope resolver over the given vocabulary.
    pub fn new(vocabulary: Arc<CapabilityVocabulary>) -> Self {
        Self {
            resolver: CapabilityResolver::new(vocabulary),
        }
    }

    /// Creates a scope resolver sharing an existing capability resolver.
    pub fn with_resolver(resolver: CapabilityResolver) -> Self {
        Self { resolver }
    }

    /// Computes the visibility filter for `kind`.
    pub fn scope(&self, staff: &Staff, role: Option<&Role>, kind: ResourceKind) -> FilterSpec {
        if staff.is_superuser && staff.is_active {
            return FilterSpec::All;
        }
        if !staff.is_active {
            return FilterSpec::Empty;
        }

        let Some(rule) = self.resolver.vocabulary().scope_rule(kind) else {
            trace!(%kind, "no scope rule for resource kind, denying all");
            return FilterSpec::Empty;
        };

        if self.resolver.resolve(staff, role, &rule.view_all) {
            if let Some(organization_id) = staff.organization_id {
                return FilterSpec::Organization { organization_id };
            }
        }

        if let Some(view_own) = &rule.view_own {
            if self.resolver.resolve(staff, role, view_own) {
                return FilterSpec::Own { staff_id: staff.id };
            }
        }

        if let (Some(branch_id), Some(view_branch)) = (staff.branch_id, &rule.view_branch) {
            if self.resolver.resolve(staff, role, view_branch) {
                return FilterSpec::Branch { branch_id };
            }
        }

        FilterSpec::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingohub_core::types::{BranchId, OrganizationId};

    fn resolver() -> ScopeResolver {
        ScopeResolver::new(Arc::new(CapabilityVocabulary::default()))
    }

    #[test]
    fn test_view_all_gives_organization_scope() {
        let role = Role::named("m", "M").grant("can_view_all_orders");
        let org = OrganizationId::new();
        let staff = Staff::new(org, role.id, "manager");

        let scope = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
        assert_eq!(scope, FilterSpec::Organization { organization_id: org });
    }

    #[test]
    fn test_view_own_beats_branch_pinning() {
        // Holding only view-own yields an Own filter even when the
        // account is pinned to a branch.
        let role = Role::named("s", "S").grant("can_view_own_orders");
        let staff =
            Staff::new(OrganizationId::new(), role.id, "staff").in_branch(BranchId::new());

        let scope = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
        assert_eq!(scope, FilterSpec::Own { staff_id: staff.id });
    }

    #[test]
    fn test_branch_capability_gives_branch_scope() {
        let role = Role::named("b", "B").grant("can_view_branch_orders");
        let branch = BranchId::new();
        let staff = Staff::new(OrganizationId::new(), role.id, "staff").in_branch(branch);

        let scope = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
        assert_eq!(scope, FilterSpec::Branch { branch_id: branch });
    }

    #[test]
    fn test_no_capability_yields_empty_scope() {
        let role = Role::named("none", "None");
        let staff = Staff::new(OrganizationId::new(), role.id, "staff");

        let scope = resolver().scope(&staff, Some(&role), ResourceKind::Orders);
        assert_eq!(scope, FilterSpec::Empty);
    }

    #[test]
    fn test_superuser_sees_all() {
        let root = Staff::superuser("root");
        assert_eq!(
            resolver().scope(&root, None, ResourceKind::Branches),
            FilterSpec::All
        );
    }

    #[test]
    fn test_order_visibility_decoupled_from_branch_capability() {
        // A manager with order visibility but zero branches capabilities
        // still sees the organization's orders.
        let role = Role::named("m", "M").grant("can_view_all_orders");
        let org = OrganizationId::new();
        let staff = Staff::new(org, role.id, "manager");
        let resolver = resolver();

        assert_eq!(
            resolver.scope(&staff, Some(&role), ResourceKind::Orders),
            FilterSpec::Organization { organization_id: org }
        );
        assert_eq!(
            resolver.scope(&staff, Some(&role), ResourceKind::Branches),
            FilterSpec::Empty
        );
    }
}
