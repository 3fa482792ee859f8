//! Tariff catalog entity.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lingohub_core::types::{QuotaKind, TariffId};

/// Well-known feature codes gated by tariffs.
///
/// The catalog is platform configuration: tariffs store plain code
/// strings, and new codes can be introduced without touching the engine.
/// These constants exist so collaborators don't scatter string literals.
pub mod codes {
    /// Create, view, and track customer orders.
    pub const ORDERS_BASIC: &str = "orders_basic";
    /// Bulk operations, advanced filters, export.
    pub const ORDERS_ADVANCED: &str = "orders_advanced";
    /// Assign orders to specific staff members.
    pub const ORDER_ASSIGNMENT: &str = "order_assignment";
    /// Process payments across multiple orders.
    pub const BULK_PAYMENTS: &str = "bulk_payments";
    /// View order counts and basic statistics.
    pub const ANALYTICS_BASIC: &str = "analytics_basic";
    /// Detailed reports, financial analytics, trends.
    pub const ANALYTICS_ADVANCED: &str = "analytics_advanced";
    /// Revenue, profit, expense analysis.
    pub const FINANCIAL_REPORTS: &str = "financial_reports";
    /// Track individual staff productivity.
    pub const STAFF_PERFORMANCE: &str = "staff_performance";
    /// Create custom reports with filters.
    pub const CUSTOM_REPORTS: &str = "custom_reports";
    /// Export to spreadsheet and PDF formats.
    pub const EXPORT_REPORTS: &str = "export_reports";
    /// REST API for custom integrations.
    pub const API_ACCESS: &str = "api_access";
    /// Configure and manage chat-bot webhooks.
    pub const WEBHOOKS: &str = "webhooks";
    /// Customer-facing bot for order placement.
    pub const TELEGRAM_BOT: &str = "telegram_bot";
    /// Create and manage marketing posts.
    pub const MARKETING_BASIC: &str = "marketing_basic";
    /// Send targeted broadcasts to customers.
    pub const BROADCAST_MESSAGES: &str = "broadcast_messages";
    /// Manage multiple branch locations.
    pub const MULTI_BRANCH: &str = "multi_branch";
    /// Create custom staff roles.
    pub const CUSTOM_ROLES: &str = "custom_roles";
    /// Customize settings per branch.
    pub const BRANCH_SETTINGS: &str = "branch_settings";
    /// Access compressed archives of completed orders.
    pub const ARCHIVE_ACCESS: &str = "archive_access";
    /// Multi-currency pricing support.
    pub const MULTI_CURRENCY: &str = "multi_currency";
    /// Manual payment recording and receipt verification.
    pub const PAYMENT_MANAGEMENT: &str = "payment_management";
    /// Track business expenses by branch.
    pub const EXPENSE_TRACKING: &str = "expense_tracking";
    /// Comprehensive audit logs.
    pub const AUDIT_LOGS: &str = "audit_logs";
    /// Manage services and basic pricing.
    pub const PRODUCTS_BASIC: &str = "products_basic";
    /// Complex pricing, categories, customization.
    pub const PRODUCTS_ADVANCED: &str = "products_advanced";
    /// Different pricing per language combination.
    pub const LANGUAGE_PRICING: &str = "language_pricing";
}

/// Supported billing currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Uzbek sum.
    UZS,
    /// US dollar.
    USD,
    /// Russian ruble.
    RUB,
}

impl Default for Currency {
    fn default() -> Self {
        Self::UZS
    }
}

/// Numeric resource ceilings attached to a tariff.
///
/// `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffLimits {
    /// Maximum number of branches.
    pub max_branches: Option<u32>,
    /// Maximum number of active staff accounts.
    pub max_staff: Option<u32>,
    /// Maximum orders created per billing month.
    pub max_monthly_orders: Option<u32>,
}

impl TariffLimits {
    /// A limit set with every ceiling removed.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// The ceiling for a quota kind, `None` = unlimited.
    pub fn limit_for(&self, kind: QuotaKind) -> Option<u32> {
        match kind {
            QuotaKind::Branches => self.max_branches,
            QuotaKind::Staff => self.max_staff,
            QuotaKind::MonthlyOrders => self.max_monthly_orders,
        }
    }
}

/// A tariff plan: feature entitlements plus resource limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tariff {
    /// Unique tariff identifier.
    pub id: TariffId,
    /// URL-safe unique name (e.g. `starter`, `business`).
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Whether the tariff can be subscribed to.
    pub is_active: bool,
    /// Free trial tariff flag.
    pub is_trial: bool,
    /// Trial length in days (trial tariffs only).
    pub trial_days: Option<u32>,
    /// Ordering on pricing pages.
    pub display_order: i32,
    /// Resource ceilings.
    pub limits: TariffLimits,
    /// Enabled feature codes.
    pub features: BTreeSet<String>,
    /// Monthly price in `currency`.
    pub monthly_price: Decimal,
    /// Billing currency.
    pub currency: Currency,
    /// When the tariff was created.
    pub created_at: DateTime<Utc>,
    /// When the tariff was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Tariff {
    /// Create a tariff with no features and unlimited resources.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TariffId::new(),
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            is_active: true,
            is_trial: false,
            trial_days: None,
            display_order: 0,
            limits: TariffLimits::unlimited(),
            features: BTreeSet::new(),
            monthly_price: Decimal::ZERO,
            currency: Currency::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Enable a feature, builder style.
    pub fn with_feature(mut self, code: impl Into<String>) -> Self {
        self.features.insert(code.into());
        self
    }

    /// Set the resource limits, builder style.
    pub fn with_limits(mut self, limits: TariffLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Mark as a trial tariff with the given length.
    pub fn as_trial(mut self, trial_days: u32) -> Self {
        self.is_trial = true;
        self.trial_days = Some(trial_days);
        self
    }

    /// Whether the tariff includes a feature code.
    pub fn has_feature(&self, code: &str) -> bool {
        self.features.contains(code)
    }

    /// The ceiling for a quota kind, `None` = unlimited.
    pub fn limit_for(&self, kind: QuotaKind) -> Option<u32> {
        self.limits.limit_for(kind)
    }
}
