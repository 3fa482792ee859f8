//! Billing entities: tariffs, subscriptions, history, and usage.

pub mod history;
pub mod subscription;
pub mod tariff;
pub mod usage;

pub use history::{SubscriptionAction, SubscriptionHistoryEntry};
pub use subscription::{Subscription, SubscriptionState, SubscriptionStatus};
pub use tariff::{Currency, Tariff, TariffLimits};
pub use usage::{UsagePeriod, UsageRecord, UsageSnapshot};
