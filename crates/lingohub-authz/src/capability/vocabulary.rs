//! The platform capability vocabulary.
//!
//! The vocabulary is configuration data, not code: which capabilities
//! exist, how they group into domains, which flag is each domain's
//! master, which legacy names alias to which canonical ones, and which
//! capability grants which scope breadth. Adding a capability to a
//! domain here automatically extends every role that already holds the
//! domain's master flag — inheritance is rule-based, not stored.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use lingohub_core::config::authz::AuthzConfig;
use lingohub_core::types::ResourceKind;
use lingohub_core::{AppError, AppResult};

use crate::scope::ScopeRule;

/// One capability domain: a master flag plus its member capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRule {
    /// Domain name (e.g. `orders`).
    pub name: String,
    /// The master capability implying every member.
    pub master: String,
    /// Fine-grained member capabilities.
    pub members: BTreeSet<String>,
}

impl DomainRule {
    fn new<const N: usize>(name: &str, master: &str, members: [&str; N]) -> Self {
        Self {
            name: name.to_string(),
            master: master.to_string(),
            members: members.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

/// The full capability vocabulary: domains, aliases, and scope rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityVocabulary {
    /// Domain rule table.
    pub domains: Vec<DomainRule>,
    /// Legacy capability name → canonical capability name.
    pub aliases: HashMap<String, String>,
    /// Per-resource-kind scope capabilities.
    pub scopes: HashMap<ResourceKind, ScopeRule>,
}

impl Default for CapabilityVocabulary {
    fn default() -> Self {
        let domains = vec![
            DomainRule::new(
                "orders",
                "can_manage_orders",
                [
                    "can_view_all_orders",
                    "can_view_branch_orders",
                    "can_view_own_orders",
                    "can_create_orders",
                    "can_edit_orders",
                    "can_delete_orders",
                    "can_assign_orders",
                    "can_update_order_status",
                    "can_complete_orders",
                    "can_cancel_orders",
                ],
            ),
            DomainRule::new(
                "financial",
                "can_manage_financial",
                [
                    "can_receive_payments",
                    "can_view_financial_reports",
                    "can_apply_discounts",
                    "can_refund_orders",
                ],
            ),
            DomainRule::new(
                "staff",
                "can_manage_staff",
                [
                    "can_view_staff",
                    "can_view_branch_staff",
                    "can_create_staff",
                    "can_edit_staff",
                    "can_delete_staff",
                ],
            ),
            DomainRule::new(
                "branches",
                "can_manage_branches",
                [
                    "can_view_branches",
                    "can_create_branches",
                    "can_edit_branches",
                    "can_delete_branches",
                ],
            ),
            DomainRule::new(
                "reports",
                "can_manage_reports",
                ["can_view_reports", "can_view_analytics", "can_export_data"],
            ),
            DomainRule::new(
                "products",
                "can_manage_products",
                [
                    "can_view_products",
                    "can_create_products",
                    "can_edit_products",
                    "can_delete_products",
                ],
            ),
            DomainRule::new(
                "customers",
                "can_manage_customers",
                [
                    "can_view_all_customers",
                    "can_view_branch_customers",
                    "can_view_customer_details",
                    "can_edit_customers",
                    "can_delete_customers",
                ],
            ),
            DomainRule::new(
                "marketing",
                "can_manage_marketing",
                ["can_create_campaigns", "can_send_broadcasts"],
            ),
            DomainRule::new(
                "settings",
                "can_manage_settings",
                ["can_view_settings", "can_edit_settings"],
            ),
        ];

        let aliases = [
            ("can_manage_center", "can_manage_settings"),
            ("can_manage_centers", "can_manage_settings"),
            ("can_view_orders", "can_view_all_orders"),
            ("can_export_reports", "can_export_data"),
            ("can_manage_users", "can_manage_staff"),
            ("can_view_finances", "can_view_financial_reports"),
        ]
        .into_iter()
        .map(|(old, new)| (old.to_string(), new.to_string()))
        .collect();

        let scopes = HashMap::from([
            (
                ResourceKind::Orders,
                ScopeRule {
                    view_all: "can_view_all_orders".to_string(),
                    view_own: Some("can_view_own_orders".to_string()),
                    view_branch: Some("can_view_branch_orders".to_string()),
                },
            ),
            (
                ResourceKind::Customers,
                ScopeRule {
                    view_all: "can_view_all_customers".to_string(),
                    view_own: None,
                    view_branch: Some("can_view_branch_customers".to_string()),
                },
            ),
            (
                ResourceKind::Staff,
                ScopeRule {
                    view_all: "can_view_staff".to_string(),
                    view_own: None,
                    view_branch: Some("can_view_branch_staff".to_string()),
                },
            ),
            (
                ResourceKind::Branches,
                ScopeRule {
                    view_all: "can_view_branches".to_string(),
                    view_own: None,
                    view_branch: None,
                },
            ),
        ]);

        Self {
            domains,
            aliases,
            scopes,
        }
    }
}

impl CapabilityVocabulary {
    /// Load a vocabulary override from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to read vocabulary: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to parse vocabulary: {e}")))
    }

    /// Build the vocabulary for the configured deployment: the override
    /// file when one is configured, the built-in tables otherwise.
    pub fn from_config(config: &AuthzConfig) -> AppResult<Self> {
        match &config.vocabulary_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The domain a fine-grained capability belongs to, if any.
    pub fn domain_of(&self, capability: &str) -> Option<&DomainRule> {
        self.domains
            .iter()
            .find(|d| d.members.contains(capability))
    }

    /// The master capability implying `capability`, if it has one.
    pub fn master_of(&self, capability: &str) -> Option<&str> {
        self.domain_of(capability).map(|d| d.master.as_str())
    }

    /// Whether `capability` is a domain master flag.
    pub fn is_master(&self, capability: &str) -> bool {
        self.domains.iter().any(|d| d.master == capability)
    }

    /// The canonical name for a legacy capability name, if aliased.
    pub fn canonical_for(&self, capability: &str) -> Option<&str> {
        self.aliases.get(capability).map(String::as_str)
    }

    /// Whether the vocabulary knows this capability (member or master).
    pub fn contains(&self, capability: &str) -> bool {
        self.is_master(capability) || self.domain_of(capability).is_some()
    }

    /// The scope capabilities for a resource kind.
    pub fn scope_rule(&self, kind: ResourceKind) -> Option<&ScopeRule> {
        self.scopes.get(&kind)
    }
}
