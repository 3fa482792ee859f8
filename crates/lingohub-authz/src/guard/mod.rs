//! The policy enforcement point.
//!
//! Every external entry point — views, bot command handlers, report
//! generators — calls [`Guard::check`] before acting. The guard composes
//! the capability resolver, the subscription gate, and the scope
//! resolver into one decision, and raises audit events for every deny
//! and every quota-affecting allow.

pub mod request;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use lingohub_core::events::{AccessDecision, AccessEvent, DomainEvent, EventPayload};
use lingohub_core::traits::AuditSink;
use lingohub_core::types::{Decision, DenyReason, FilterSpec};
use lingohub_entity::billing::{Subscription, Tariff};
use lingohub_entity::staff::Staff;

use crate::capability::{CapabilityResolver, CapabilityVocabulary};
use crate::directory::TenantDirectory;
use crate::scope::ScopeResolver;
use crate::subscription::SubscriptionGate;

pub use request::{AccessRequest, CombinationMode};

/// The policy enforcement point.
///
/// Evaluation order, short-circuiting on the first denial:
/// 1. Superuser bypass (active superusers skip every other check).
/// 2. Subscription and feature entitlement, when a feature code or
///    quota kind is on the request.
/// 3. Capability combination (all-of / any-of).
/// 4. Quota, when a quota kind is on the request.
/// 5. Scope resolution, attached to the allow.
///
/// The guard never partially applies a decision: if any axis denies,
/// no scope is computed and no side effect occurs.
pub struct Guard {
    resolver: CapabilityResolver,
    scopes: ScopeResolver,
    gate: SubscriptionGate,
    directory: Arc<dyn TenantDirectory>,
    audit: Arc<dyn AuditSink>,
}

impl Guard {
    /// Creates a guard over a vocabulary, a tenant directory, and an
    /// audit sink.
    pub fn new(
        vocabulary: Arc<CapabilityVocabulary>,
        directory: Arc<dyn TenantDirectory>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        let resolver = CapabilityResolver::new(vocabulary);
        let scopes = ScopeResolver::with_resolver(resolver.clone());
        Self {
            resolver,
            scopes,
            gate: SubscriptionGate::new(),
            directory,
            audit,
        }
    }

    /// The capability resolver used by this guard.
    pub fn resolver(&self) -> &CapabilityResolver {
        &self.resolver
    }

    /// The scope resolver used by this guard.
    pub fn scopes(&self) -> &ScopeResolver {
        &self.scopes
    }

    /// Checks a request as of the current date.
    pub fn check(&self, staff: &Staff, request: &AccessRequest) -> Decision {
        self.check_on(staff, request, Utc::now().date_naive())
    }

    /// Checks a request as of `today`. Split out so tests and batch
    /// jobs can pin the clock.
    pub fn check_on(&self, staff: &Staff, request: &AccessRequest, today: NaiveDate) -> Decision {
        let decision = self.evaluate(staff, request, today);

        match decision {
            Decision::Deny { reason } => {
                self.emit(staff, request, AccessDecision::Denied { reason });
            }
            // State-changing allows (quota-affecting creations) are
            // audited; plain reads are not.
            Decision::Allow { .. } if request.quota.is_some() => {
                self.emit(staff, request, AccessDecision::Allowed);
            }
            Decision::Allow { .. } => {}
        }

        decision
    }

    fn evaluate(&self, staff: &Staff, request: &AccessRequest, today: NaiveDate) -> Decision {
        if staff.is_superuser && staff.is_active {
            return Decision::allow(FilterSpec::All);
        }

        // Subscription axes are evaluated before capabilities.
        let billing = self.load_billing(staff, request);
        if let Some(feature) = &request.feature {
            let (subscription, tariff) = match &billing {
                Some((s, t)) => (Some(s), t.as_ref()),
                None => (None, None),
            };
            if let Err(reason) = self.gate.feature_check(subscription, tariff, feature, today) {
                return Decision::deny(reason);
            }
        } else if request.quota.is_some() {
            let subscription = billing.as_ref().map(|(s, _)| s);
            if let Err(reason) = self.gate.subscription_check(subscription, today) {
                return Decision::deny(reason);
            }
        }

        let role = self.directory.role_of(staff);
        let granted = match request.mode {
            CombinationMode::AllOf => {
                self.resolver
                    .resolve_all(staff, role.as_ref(), &request.capabilities)
            }
            CombinationMode::AnyOf => {
                self.resolver
                    .resolve_any(staff, role.as_ref(), &request.capabilities)
            }
        };
        if !granted {
            debug!(staff = %staff.id, capabilities = ?request.capabilities, "capability check failed");
            return Decision::deny(DenyReason::NoPermission);
        }

        if let Some(kind) = request.quota {
            let Some(organization_id) = staff.organization_id else {
                return Decision::deny(DenyReason::InactiveSubscription);
            };
            let (subscription, tariff) = match &billing {
                Some((s, t)) => (Some(s), t.as_ref()),
                None => (None, None),
            };
            let usage = self.directory.usage_for(organization_id, today);
            if let Err(reason) = self
                .gate
                .quota_check(subscription, tariff, &usage, kind, today)
            {
                return Decision::deny(reason);
            }
        }

        let scope = match request.scope_of {
            Some(kind) => self.scopes.scope(staff, role.as_ref(), kind),
            None => FilterSpec::All,
        };

        Decision::allow(scope)
    }

    /// Loads the subscription and its tariff when the request gates on
    /// either. A staff account with no organization has no subscription
    /// to check and fails closed downstream.
    fn load_billing(
        &self,
        staff: &Staff,
        request: &AccessRequest,
    ) -> Option<(Subscription, Option<Tariff>)> {
        if request.feature.is_none() && request.quota.is_none() {
            return None;
        }
        let organization_id = staff.organization_id?;
        let subscription = self.directory.subscription_for(organization_id)?;
        let tariff = self.directory.tariff(subscription.tariff_id);
        Some((subscription, tariff))
    }

    fn emit(&self, staff: &Staff, request: &AccessRequest, decision: AccessDecision) {
        let event = AccessEvent {
            actor_id: staff.id,
            capabilities: request.capabilities.clone(),
            feature: request.feature.clone(),
            target: request.target.clone(),
            decision,
        };
        self.audit.record(DomainEvent::new(
            Some(staff.id),
            EventPayload::Access(event),
        ));
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish()
    }
}
