//! Usage counters for quota checks.
//!
//! Counters are derived data: the authoritative numbers come from the
//! tenant hierarchy and order records at check time. [`UsageRecord`] is
//! the monthly rollup a reconciling collaborator maintains for reporting.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lingohub_core::types::{OrganizationId, QuotaKind};

/// A billing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UsagePeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

impl UsagePeriod {
    /// The billing period containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for UsagePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Point-in-time usage counts for one organization.
///
/// Recomputed at every quota check — never cached, because each creation
/// changes the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Current number of branches.
    pub branches: u32,
    /// Current number of active staff accounts.
    pub staff: u32,
    /// Orders created in the current billing month.
    pub orders_this_period: u32,
}

impl UsageSnapshot {
    /// The current count for a quota kind.
    pub fn count_for(&self, kind: QuotaKind) -> u32 {
        match kind {
            QuotaKind::Branches => self.branches,
            QuotaKind::Staff => self.staff,
            QuotaKind::MonthlyOrders => self.orders_this_period,
        }
    }
}

/// Monthly usage rollup for an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The organization the rollup belongs to.
    pub organization_id: OrganizationId,
    /// The billing month covered.
    pub period: UsagePeriod,
    /// Orders created during the period.
    pub orders_created: u32,
    /// Orders placed through the chat-bot channel.
    pub bot_orders: u32,
    /// Orders entered manually by staff.
    pub manual_orders: u32,
    /// Branch count at last reconciliation.
    pub branches_count: u32,
    /// Staff count at last reconciliation.
    pub staff_count: u32,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UsageRecord {
    /// Create an empty rollup for a period.
    pub fn new(organization_id: OrganizationId, period: UsagePeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id,
            period,
            orders_created: 0,
            bot_orders: 0,
            manual_orders: 0,
            branches_count: 0,
            staff_count: 0,
            updated_at: Utc::now(),
        }
    }

    /// Count one created order.
    pub fn increment_orders(&mut self, from_bot: bool) {
        self.orders_created += 1;
        if from_bot {
            self.bot_orders += 1;
        } else {
            self.manual_orders += 1;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_containing() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date");
        let period = UsagePeriod::containing(date);
        assert_eq!(period, UsagePeriod { year: 2025, month: 7 });
        assert_eq!(period.to_string(), "2025-07");
    }

    #[test]
    fn test_increment_orders_splits_by_channel() {
        let mut record = UsageRecord::new(
            OrganizationId::new(),
            UsagePeriod { year: 2025, month: 7 },
        );
        record.increment_orders(true);
        record.increment_orders(false);
        record.increment_orders(false);
        assert_eq!(record.orders_created, 3);
        assert_eq!(record.bot_orders, 1);
        assert_eq!(record.manual_orders, 2);
    }

    #[test]
    fn test_snapshot_count_for() {
        let snapshot = UsageSnapshot {
            branches: 2,
            staff: 5,
            orders_this_period: 40,
        };
        assert_eq!(snapshot.count_for(QuotaKind::Branches), 2);
        assert_eq!(snapshot.count_for(QuotaKind::Staff), 5);
        assert_eq!(snapshot.count_for(QuotaKind::MonthlyOrders), 40);
    }
}
