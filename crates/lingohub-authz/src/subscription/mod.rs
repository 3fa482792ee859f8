//! Subscription gating and lifecycle transitions.

pub mod gate;
pub mod lifecycle;

pub use gate::SubscriptionGate;
pub use lifecycle::{
    SubscriptionTransition, TrialConversion, activate_subscription, cancel_subscription,
    convert_trial, renew_subscription,
};
