//! Subscription entity and its time-derived status.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lingohub_core::types::{OrganizationId, SubscriptionId, TariffId};

/// The stored lifecycle state of a subscription.
///
/// Expiry is *not* stored: it is derived from the end date on every
/// read, so no background job has to run for statuses to be correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    /// Created, awaiting payment.
    Pending,
    /// Payment recorded (or trial started).
    Active,
    /// Explicitly cancelled. Terminal.
    Cancelled,
}

/// The effective status of a subscription at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Awaiting payment.
    Pending,
    /// Entitles the organization to its tariff's features.
    Active,
    /// The end date has passed. Terminal.
    Expired,
    /// Explicitly cancelled. Terminal.
    Cancelled,
}

impl SubscriptionStatus {
    /// Whether this status is terminal for the subscription record.
    /// Renewal and trial conversion always create a new record.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Expired | Self::Cancelled)
    }
}

/// A time-bounded binding of an organization to a tariff.
///
/// At most one subscription is active per organization at any instant;
/// the storage collaborator enforces that uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique subscription identifier.
    pub id: SubscriptionId,
    /// The subscribing organization.
    pub organization_id: OrganizationId,
    /// The tariff this subscription binds to.
    pub tariff_id: TariffId,
    /// First day of the entitlement window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the entitlement window (inclusive).
    pub end_date: NaiveDate,
    /// Whether this is a free trial.
    pub is_trial: bool,
    /// Stored lifecycle state.
    pub state: SubscriptionState,
    /// Whether a renewal should be offered when the window closes.
    pub auto_renew: bool,
    /// Amount paid for this subscription, if any.
    pub amount_paid: Option<Decimal>,
    /// When payment was recorded.
    pub payment_date: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// Create a pending subscription for the given window.
    pub fn new(
        organization_id: OrganizationId,
        tariff_id: TariffId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SubscriptionId::new(),
            organization_id,
            tariff_id,
            start_date,
            end_date,
            is_trial: false,
            state: SubscriptionState::Pending,
            auto_renew: true,
            amount_paid: None,
            payment_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a trial subscription. Trials are active immediately and
    /// free of charge.
    pub fn trial(
        organization_id: OrganizationId,
        tariff_id: TariffId,
        start_date: NaiveDate,
        trial_days: u32,
    ) -> Self {
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(trial_days)))
            .unwrap_or(start_date);
        let mut sub = Self::new(organization_id, tariff_id, start_date, end_date);
        sub.is_trial = true;
        sub.state = SubscriptionState::Active;
        sub.amount_paid = Some(Decimal::ZERO);
        sub
    }

    /// The effective status at `today`, derived from the stored state
    /// and the entitlement window.
    pub fn status_on(&self, today: NaiveDate) -> SubscriptionStatus {
        match self.state {
            SubscriptionState::Cancelled => SubscriptionStatus::Cancelled,
            _ if today > self.end_date => SubscriptionStatus::Expired,
            SubscriptionState::Active if today >= self.start_date => SubscriptionStatus::Active,
            _ => SubscriptionStatus::Pending,
        }
    }

    /// Whether the subscription entitles its organization at `today`.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.status_on(today) == SubscriptionStatus::Active
    }

    /// Days left in the entitlement window, 0 when not active.
    pub fn days_remaining_on(&self, today: NaiveDate) -> i64 {
        if !self.is_active_on(today) {
            return 0;
        }
        (self.end_date - today).num_days()
    }

    /// Record payment and activate the subscription.
    pub fn activate(&mut self, amount: Decimal, paid_at: DateTime<Utc>) {
        self.state = SubscriptionState::Active;
        self.amount_paid = Some(amount);
        self.payment_date = Some(paid_at);
        self.updated_at = Utc::now();
    }

    /// Cancel the subscription. Cancellation is sticky: the record never
    /// becomes active again, a replacement subscription takes over.
    pub fn cancel(&mut self) {
        self.state = SubscriptionState::Cancelled;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn paid_subscription() -> Subscription {
        let mut sub = Subscription::new(
            OrganizationId::new(),
            TariffId::new(),
            date(2025, 1, 1),
            date(2025, 12, 31),
        );
        sub.activate(Decimal::new(500_000, 0), Utc::now());
        sub
    }

    #[test]
    fn test_pending_until_payment() {
        let sub = Subscription::new(
            OrganizationId::new(),
            TariffId::new(),
            date(2025, 1, 1),
            date(2025, 12, 31),
        );
        assert_eq!(sub.status_on(date(2025, 6, 1)), SubscriptionStatus::Pending);
        assert!(!sub.is_active_on(date(2025, 6, 1)));
    }

    #[test]
    fn test_active_within_window() {
        let sub = paid_subscription();
        assert_eq!(sub.status_on(date(2025, 6, 1)), SubscriptionStatus::Active);
        assert_eq!(sub.status_on(date(2025, 12, 31)), SubscriptionStatus::Active);
    }

    #[test]
    fn test_expired_the_day_after_end_without_any_writer() {
        let sub = paid_subscription();
        assert_eq!(sub.status_on(date(2026, 1, 1)), SubscriptionStatus::Expired);
        assert!(!sub.is_active_on(date(2026, 1, 1)));
    }

    #[test]
    fn test_cancelled_is_sticky() {
        let mut sub = paid_subscription();
        sub.cancel();
        assert_eq!(
            sub.status_on(date(2025, 6, 1)),
            SubscriptionStatus::Cancelled
        );
        // Even past the end date, cancellation wins over expiry.
        assert_eq!(
            sub.status_on(date(2026, 6, 1)),
            SubscriptionStatus::Cancelled
        );
    }

    #[test]
    fn test_trial_is_active_immediately() {
        let sub = Subscription::trial(
            OrganizationId::new(),
            TariffId::new(),
            date(2025, 3, 1),
            10,
        );
        assert!(sub.is_trial);
        assert_eq!(sub.amount_paid, Some(Decimal::ZERO));
        assert!(sub.is_active_on(date(2025, 3, 1)));
        assert!(sub.is_active_on(date(2025, 3, 11)));
        assert!(!sub.is_active_on(date(2025, 3, 12)));
    }

    #[test]
    fn test_days_remaining() {
        let sub = paid_subscription();
        assert_eq!(sub.days_remaining_on(date(2025, 12, 30)), 1);
        assert_eq!(sub.days_remaining_on(date(2026, 1, 2)), 0);
    }
}
