//! Customer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lingohub_core::types::{BranchId, CustomerId, OrganizationId};

/// Interface languages offered by the ordering bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerLanguage {
    /// Uzbek.
    Uz,
    /// Russian.
    Ru,
    /// English.
    En,
}

impl Default for CustomerLanguage {
    fn default() -> Self {
        Self::Uz
    }
}

/// A customer who places orders, typically through the chat-bot channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: CustomerId,
    /// The organization the customer belongs to.
    pub organization_id: OrganizationId,
    /// The branch the customer is tied to, if any.
    pub branch_id: Option<BranchId>,
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Chat platform user id, when the customer registered via the bot.
    pub chat_user_id: Option<i64>,
    /// Preferred interface language.
    pub language: CustomerLanguage,
    /// Whether the customer completed registration.
    pub is_active: bool,
    /// When the customer record was created.
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer within an organization.
    pub fn new(
        organization_id: OrganizationId,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            organization_id,
            branch_id: None,
            name: name.into(),
            phone: phone.into(),
            chat_user_id: None,
            language: CustomerLanguage::default(),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
