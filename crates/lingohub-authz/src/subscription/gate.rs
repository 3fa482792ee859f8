//! Subscription gate — feature entitlement and quota checks.

use chrono::NaiveDate;
use tracing::debug;

use lingohub_core::types::{DenyReason, QuotaKind};
use lingohub_entity::billing::{Subscription, Tariff, UsageSnapshot};

/// Checks feature entitlement and resource quotas against an
/// organization's subscription.
///
/// The gate works on already-loaded records — it performs no I/O. A
/// missing subscription or tariff fails closed as an inactive
/// subscription.
///
/// Quota checks read the usage snapshot the caller computed at call
/// time. Two concurrent creations can both observe `current < limit`
/// and overshoot the quota by one; the limit is soft and reconciled on
/// the next read. Collaborators needing the strict mode reserve through
/// [`crate::usage::UsageLedger`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriptionGate;

impl SubscriptionGate {
    /// Creates a new gate.
    pub fn new() -> Self {
        Self
    }

    /// Checks that the subscription entitles the organization at all on
    /// `today`.
    pub fn subscription_check(
        &self,
        subscription: Option<&Subscription>,
        today: NaiveDate,
    ) -> Result<(), DenyReason> {
        match subscription {
            Some(sub) if sub.is_active_on(today) => Ok(()),
            Some(sub) => {
                debug!(subscription = %sub.id, status = ?sub.status_on(today), "subscription not active");
                Err(DenyReason::InactiveSubscription)
            }
            None => Err(DenyReason::InactiveSubscription),
        }
    }

    /// Checks that the active subscription's tariff includes `feature`.
    ///
    /// An expired or cancelled subscription denies every feature
    /// regardless of the tariff's stored flags. A subscription whose
    /// tariff record cannot be produced is treated as inactive.
    pub fn feature_check(
        &self,
        subscription: Option<&Subscription>,
        tariff: Option<&Tariff>,
        feature: &str,
        today: NaiveDate,
    ) -> Result<(), DenyReason> {
        self.subscription_check(subscription, today)?;
        let Some(tariff) = tariff else {
            return Err(DenyReason::InactiveSubscription);
        };
        if tariff.has_feature(feature) {
            Ok(())
        } else {
            debug!(tariff = %tariff.slug, feature, "feature not in tariff");
            Err(DenyReason::FeatureNotEntitled)
        }
    }

    /// Boolean form of [`Self::feature_check`].
    pub fn feature_allowed(
        &self,
        subscription: Option<&Subscription>,
        tariff: Option<&Tariff>,
        feature: &str,
        today: NaiveDate,
    ) -> bool {
        self.feature_check(subscription, tariff, feature, today)
            .is_ok()
    }

    /// Checks that one more unit of `kind` may be created.
    ///
    /// A `None` limit is unlimited; otherwise the current count must be
    /// strictly below the limit. Must be evaluated against a snapshot
    /// taken at the moment of creation, never a cached one.
    pub fn quota_check(
        &self,
        subscription: Option<&Subscription>,
        tariff: Option<&Tariff>,
        usage: &UsageSnapshot,
        kind: QuotaKind,
        today: NaiveDate,
    ) -> Result<(), DenyReason> {
        self.subscription_check(subscription, today)?;
        let Some(tariff) = tariff else {
            return Err(DenyReason::InactiveSubscription);
        };
        match tariff.limit_for(kind) {
            None => Ok(()),
            Some(limit) if usage.count_for(kind) < limit => Ok(()),
            Some(limit) => {
                debug!(
                    tariff = %tariff.slug,
                    %kind,
                    current = usage.count_for(kind),
                    limit,
                    "quota exhausted"
                );
                Err(DenyReason::QuotaExceeded)
            }
        }
    }

    /// Boolean form of [`Self::quota_check`].
    pub fn quota_allows(
        &self,
        subscription: Option<&Subscription>,
        tariff: Option<&Tariff>,
        usage: &UsageSnapshot,
        kind: QuotaKind,
        today: NaiveDate,
    ) -> bool {
        self.quota_check(subscription, tariff, usage, kind, today)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lingohub_core::types::{OrganizationId, TariffId};
    use lingohub_entity::billing::TariffLimits;
    use lingohub_entity::billing::tariff::codes;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn active_subscription(tariff: &Tariff) -> Subscription {
        let mut sub = Subscription::new(
            OrganizationId::new(),
            tariff.id,
            date(2025, 1, 1),
            date(2025, 12, 31),
        );
        sub.activate(Decimal::new(300_000, 0), Utc::now());
        sub
    }

    #[test]
    fn test_feature_denied_without_subscription() {
        let gate = SubscriptionGate::new();
        assert_eq!(
            gate.feature_check(None, None, codes::MULTI_BRANCH, date(2025, 6, 1)),
            Err(DenyReason::InactiveSubscription)
        );
    }

    #[test]
    fn test_feature_denied_the_day_after_expiry() {
        let tariff = Tariff::new("business", "Business").with_feature(codes::MULTI_BRANCH);
        let sub = active_subscription(&tariff);
        let gate = SubscriptionGate::new();

        assert!(gate.feature_allowed(
            Some(&sub),
            Some(&tariff),
            codes::MULTI_BRANCH,
            date(2025, 12, 31)
        ));
        // No status-update job has run; the stored state still says
        // active, but the window has closed.
        assert_eq!(
            gate.feature_check(
                Some(&sub),
                Some(&tariff),
                codes::MULTI_BRANCH,
                date(2026, 1, 1)
            ),
            Err(DenyReason::InactiveSubscription)
        );
    }

    #[test]
    fn test_feature_not_entitled_on_active_subscription() {
        let tariff = Tariff::new("starter", "Starter");
        let sub = active_subscription(&tariff);
        let gate = SubscriptionGate::new();

        assert_eq!(
            gate.feature_check(
                Some(&sub),
                Some(&tariff),
                codes::BROADCAST_MESSAGES,
                date(2025, 6, 1)
            ),
            Err(DenyReason::FeatureNotEntitled)
        );
    }

    #[test]
    fn test_missing_tariff_fails_closed() {
        let tariff = Tariff::new("starter", "Starter");
        let sub = active_subscription(&tariff);
        let gate = SubscriptionGate::new();

        assert_eq!(
            gate.feature_check(Some(&sub), None, codes::ORDERS_BASIC, date(2025, 6, 1)),
            Err(DenyReason::InactiveSubscription)
        );
    }

    #[test]
    fn test_quota_unlimited_ignores_usage() {
        let tariff = Tariff::new("enterprise", "Enterprise");
        let sub = active_subscription(&tariff);
        let usage = UsageSnapshot {
            branches: 999,
            ..UsageSnapshot::default()
        };

        assert!(SubscriptionGate::new().quota_allows(
            Some(&sub),
            Some(&tariff),
            &usage,
            QuotaKind::Branches,
            date(2025, 6, 1)
        ));
    }

    #[test]
    fn test_quota_boundary() {
        let tariff = Tariff::new("starter", "Starter").with_limits(TariffLimits {
            max_branches: Some(3),
            ..TariffLimits::unlimited()
        });
        let sub = active_subscription(&tariff);
        let gate = SubscriptionGate::new();
        let today = date(2025, 6, 1);

        let below = UsageSnapshot {
            branches: 2,
            ..UsageSnapshot::default()
        };
        let at_limit = UsageSnapshot {
            branches: 3,
            ..UsageSnapshot::default()
        };

        assert!(gate.quota_allows(Some(&sub), Some(&tariff), &below, QuotaKind::Branches, today));
        assert_eq!(
            gate.quota_check(
                Some(&sub),
                Some(&tariff),
                &at_limit,
                QuotaKind::Branches,
                today
            ),
            Err(DenyReason::QuotaExceeded)
        );
    }

    #[test]
    fn test_quota_requires_active_subscription() {
        let tariff = Tariff::new("starter", "Starter");
        let mut sub = active_subscription(&tariff);
        sub.cancel();

        assert_eq!(
            SubscriptionGate::new().quota_check(
                Some(&sub),
                Some(&tariff),
                &UsageSnapshot::default(),
                QuotaKind::MonthlyOrders,
                date(2025, 6, 1)
            ),
            Err(DenyReason::InactiveSubscription)
        );
    }

    #[test]
    fn test_trial_subscription_is_entitled() {
        let tariff = Tariff::new("trial", "Trial")
            .as_trial(10)
            .with_feature(codes::ORDERS_BASIC);
        let sub = Subscription::trial(OrganizationId::new(), tariff.id, date(2025, 3, 1), 10);

        assert!(SubscriptionGate::new().feature_allowed(
            Some(&sub),
            Some(&tariff),
            codes::ORDERS_BASIC,
            date(2025, 3, 5)
        ));
    }

    #[test]
    fn test_tariff_id_mismatch_is_callers_problem_not_checked_here() {
        // The gate trusts the caller to pair the subscription with its
        // tariff record; the guard resolves the pair via the directory.
        let tariff = Tariff::new("starter", "Starter").with_feature(codes::ORDERS_BASIC);
        let mut sub = active_subscription(&tariff);
        sub.tariff_id = TariffId::new();

        assert!(SubscriptionGate::new().feature_allowed(
            Some(&sub),
            Some(&tariff),
            codes::ORDERS_BASIC,
            date(2025, 6, 1)
        ));
    }
}
