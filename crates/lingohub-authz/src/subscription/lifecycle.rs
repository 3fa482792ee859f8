//! Subscription lifecycle transitions.
//!
//! All transitions are pure: they take owned/borrowed records and return
//! the updated and newly-created records plus the history entries and
//! billing event to persist. Storage and event dispatch stay with the
//! caller, in one transaction.
//!
//! Expired and cancelled subscriptions are terminal. Renewal and trial
//! conversion always create a *new* subscription record; an old record
//! is never resurrected.

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;

use lingohub_core::events::BillingEvent;
use lingohub_core::types::StaffId;
use lingohub_core::{AppError, AppResult};
use lingohub_entity::billing::{
    Subscription, SubscriptionAction, SubscriptionHistoryEntry, Tariff,
};

/// The outcome of a single-record transition.
#[derive(Debug, Clone)]
pub struct SubscriptionTransition {
    /// The updated subscription record.
    pub subscription: Subscription,
    /// The history entry to append.
    pub history: SubscriptionHistoryEntry,
    /// The billing event to raise.
    pub event: BillingEvent,
}

/// The outcome of a trial-to-paid conversion.
#[derive(Debug, Clone)]
pub struct TrialConversion {
    /// The trial record, now cancelled.
    pub cancelled_trial: Subscription,
    /// The new paid subscription, pending payment.
    pub paid: Subscription,
    /// History entries for both records.
    pub history: Vec<SubscriptionHistoryEntry>,
    /// The billing event to raise.
    pub event: BillingEvent,
}

/// Record payment and activate a pending subscription.
pub fn activate_subscription(
    mut subscription: Subscription,
    amount: Decimal,
    paid_at: DateTime<Utc>,
    performed_by: Option<StaffId>,
) -> AppResult<SubscriptionTransition> {
    let today = paid_at.date_naive();
    if subscription.status_on(today).is_terminal() {
        return Err(AppError::subscription(format!(
            "Subscription '{}' is terminal and cannot be activated",
            subscription.id
        )));
    }

    subscription.activate(amount, paid_at);
    info!(subscription = %subscription.id, %amount, "subscription activated");

    let history = SubscriptionHistoryEntry::new(
        subscription.id,
        SubscriptionAction::Activated,
        format!("Payment of {amount} recorded"),
        performed_by,
    );
    let event = BillingEvent::SubscriptionActivated {
        organization_id: subscription.organization_id,
        subscription_id: subscription.id,
    };

    Ok(SubscriptionTransition {
        subscription,
        history,
        event,
    })
}

/// Explicitly cancel a subscription.
pub fn cancel_subscription(
    mut subscription: Subscription,
    performed_by: Option<StaffId>,
) -> AppResult<SubscriptionTransition> {
    if subscription.state == lingohub_entity::billing::SubscriptionState::Cancelled {
        return Err(AppError::subscription(format!(
            "Subscription '{}' is already cancelled",
            subscription.id
        )));
    }

    subscription.cancel();
    info!(subscription = %subscription.id, "subscription cancelled");

    let history = SubscriptionHistoryEntry::new(
        subscription.id,
        SubscriptionAction::Cancelled,
        "Subscription cancelled",
        performed_by,
    );
    let event = BillingEvent::SubscriptionCancelled {
        organization_id: subscription.organization_id,
        subscription_id: subscription.id,
    };

    Ok(SubscriptionTransition {
        subscription,
        history,
        event,
    })
}

/// Create the follow-up subscription for a closing window.
///
/// The replacement starts the day after the current window ends, binds
/// to the same tariff, and awaits payment. The current record is left
/// untouched — it expires on its own end date.
pub fn renew_subscription(
    current: &Subscription,
    months: u32,
    performed_by: Option<StaffId>,
) -> (Subscription, SubscriptionHistoryEntry, BillingEvent) {
    let start = current
        .end_date
        .checked_add_days(Days::new(1))
        .unwrap_or(current.end_date);
    let end = start
        .checked_add_months(Months::new(months))
        .unwrap_or(start);

    let mut replacement =
        Subscription::new(current.organization_id, current.tariff_id, start, end);
    replacement.auto_renew = current.auto_renew;
    info!(
        previous = %current.id,
        replacement = %replacement.id,
        "renewal subscription created"
    );

    let history = SubscriptionHistoryEntry::new(
        current.id,
        SubscriptionAction::Renewed,
        format!("Renewed for {months} month(s) as subscription {}", replacement.id),
        performed_by,
    );
    let event = BillingEvent::SubscriptionRenewed {
        organization_id: current.organization_id,
        previous_subscription_id: current.id,
        new_subscription_id: replacement.id,
    };

    (replacement, history, event)
}

/// Convert a trial subscription to a paid one.
///
/// The trial is cancelled (terminal), and a new non-trial subscription
/// is created for the paid tariff starting `today`, pending payment.
pub fn convert_trial(
    mut trial: Subscription,
    paid_tariff: &Tariff,
    months: u32,
    today: NaiveDate,
    performed_by: Option<StaffId>,
) -> AppResult<TrialConversion> {
    if !trial.is_trial {
        return Err(AppError::subscription(format!(
            "Subscription '{}' is not a trial",
            trial.id
        )));
    }
    if trial.status_on(today).is_terminal() {
        return Err(AppError::subscription(format!(
            "Trial '{}' already ended; subscribe to a tariff instead",
            trial.id
        )));
    }

    let end = today
        .checked_add_months(Months::new(months))
        .unwrap_or(today);
    let paid = Subscription::new(trial.organization_id, paid_tariff.id, today, end);

    trial.cancel();
    info!(
        trial = %trial.id,
        paid = %paid.id,
        tariff = %paid_tariff.slug,
        "trial converted to paid subscription"
    );

    let history = vec![
        SubscriptionHistoryEntry::new(
            trial.id,
            SubscriptionAction::TrialConverted,
            format!(
                "Trial converted to {} - {months} month(s)",
                paid_tariff.title
            ),
            performed_by,
        ),
        SubscriptionHistoryEntry::new(
            paid.id,
            SubscriptionAction::Created,
            format!("Created from trial {}", trial.id),
            performed_by,
        ),
    ];
    let event = BillingEvent::TrialConverted {
        organization_id: trial.organization_id,
        trial_subscription_id: trial.id,
        paid_subscription_id: paid.id,
    };

    Ok(TrialConversion {
        cancelled_trial: trial,
        paid,
        history,
        event,
    })
}
