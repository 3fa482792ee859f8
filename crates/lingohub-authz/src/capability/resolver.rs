//! Authorization resolver — decides whether a role grants a capability.

use std::sync::Arc;

use tracing::trace;

use lingohub_core::{AppError, AppResult};
use lingohub_entity::role::Role;
use lingohub_entity::staff::Staff;

use super::vocabulary::CapabilityVocabulary;

/// Resolves capability checks against a staff member's role.
///
/// Resolution order, short-circuiting on first match:
/// 1. Superuser bypass (active superusers only).
/// 2. Deactivated account or missing role — deny, fail closed.
/// 3. Exact grant on the role.
/// 4. Master-flag inheritance: the domain's master capability implies
///    every member. The master flag itself is never alias-resolved.
/// 5. Alias fallback: a legacy name resolves to its canonical name,
///    which is then re-checked through steps 3-4.
/// 6. Deny.
#[derive(Debug, Clone)]
pub struct CapabilityResolver {
    /// The capability vocabulary.
    vocabulary: Arc<CapabilityVocabulary>,
}

impl CapabilityResolver {
    /// Creates a resolver over the given vocabulary.
    pub fn new(vocabulary: Arc<CapabilityVocabulary>) -> Self {
        Self { vocabulary }
    }

    /// Returns the vocabulary this resolver consults.
    pub fn vocabulary(&self) -> &Arc<CapabilityVocabulary> {
        &self.vocabulary
    }

    /// Checks whether the staff member may exercise `capability`.
    pub fn resolve(&self, staff: &Staff, role: Option<&Role>, capability: &str) -> bool {
        if staff.is_superuser && staff.is_active {
            return true;
        }
        if !staff.is_active {
            trace!(staff = %staff.id, capability, "deny: account deactivated");
            return false;
        }
        let Some(role) = role else {
            trace!(staff = %staff.id, capability, "deny: no role record");
            return false;
        };

        if self.check_canonical(role, capability) {
            return true;
        }

        if let Some(canonical) = self.vocabulary.canonical_for(capability) {
            if self.check_canonical(role, canonical) {
                trace!(staff = %staff.id, capability, canonical, "allow via alias");
                return true;
            }
        }

        false
    }

    /// Checks a canonical capability name: exact grant, then master-flag
    /// inheritance.
    fn check_canonical(&self, role: &Role, capability: &str) -> bool {
        if role.has_grant(capability) {
            return true;
        }
        if let Some(master) = self.vocabulary.master_of(capability) {
            if role.has_grant(master) {
                return true;
            }
        }
        false
    }

    /// Checks that every listed capability is granted.
    ///
    /// An empty list is vacuously granted, which lets feature-only guard
    /// requests share the same code path.
    pub fn resolve_all<S: AsRef<str>>(
        &self,
        staff: &Staff,
        role: Option<&Role>,
        capabilities: &[S],
    ) -> bool {
        capabilities
            .iter()
            .all(|c| self.resolve(staff, role, c.as_ref()))
    }

    /// Checks that at least one listed capability is granted.
    pub fn resolve_any<S: AsRef<str>>(
        &self,
        staff: &Staff,
        role: Option<&Role>,
        capabilities: &[S],
    ) -> bool {
        capabilities
            .iter()
            .any(|c| self.resolve(staff, role, c.as_ref()))
    }

    /// Checks a capability and returns an authorization error on denial,
    /// for callers that propagate errors instead of decisions.
    pub fn require(&self, staff: &Staff, role: Option<&Role>, capability: &str) -> AppResult<()> {
        if self.resolve(staff, role, capability) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Staff '{}' does not have capability '{capability}'",
                staff.id
            )))
        }
    }
}
