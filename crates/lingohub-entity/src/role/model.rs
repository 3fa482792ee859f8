//! Role entity model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lingohub_core::types::RoleId;

/// A named, reusable bundle of capability grants.
///
/// A role stores the *names* of the capabilities it grants; what those
/// names mean (domain membership, master flags, legacy aliases) is
/// defined by the platform's capability vocabulary, not by the role.
/// Granting a domain's master capability (e.g. `can_manage_orders`)
/// implies every fine-grained capability in that domain without storing
/// them individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: RoleId,
    /// Unique machine name (e.g. `owner`, `branch_manager`).
    pub name: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Free-form description.
    pub description: String,
    /// System roles ship with the platform and cannot be deleted.
    pub is_system: bool,
    /// The capability names this role grants.
    pub grants: BTreeSet<String>,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Create an empty custom role.
    pub fn named(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: RoleId::new(),
            name: name.into(),
            display_name: display_name.into(),
            description: String::new(),
            is_system: false,
            grants: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a capability grant, builder style.
    pub fn grant(mut self, capability: impl Into<String>) -> Self {
        self.grants.insert(capability.into());
        self
    }

    /// Add several capability grants at once.
    pub fn grant_all<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grants.extend(capabilities.into_iter().map(Into::into));
        self
    }

    /// Remove a capability grant.
    pub fn revoke(&mut self, capability: &str) {
        self.grants.remove(capability);
        self.updated_at = Utc::now();
    }

    /// Whether this role stores an explicit grant for the capability.
    ///
    /// This is the raw stored flag only; master-flag inheritance and
    /// alias fallback are applied by the capability resolver.
    pub fn has_grant(&self, capability: &str) -> bool {
        self.grants.contains(capability)
    }
}

/// Data required to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    /// Unique machine name.
    pub name: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Initial capability grants.
    pub grants: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_revoke() {
        let mut role = Role::named("cashier", "Cashier").grant("can_receive_payments");
        assert!(role.has_grant("can_receive_payments"));
        assert!(!role.has_grant("can_view_reports"));

        role.revoke("can_receive_payments");
        assert!(!role.has_grant("can_receive_payments"));
    }
}
