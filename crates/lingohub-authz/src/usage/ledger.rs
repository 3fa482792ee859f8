//! In-memory atomic usage ledger.
//!
//! The default quota check in the guard is best-effort: it reads a usage
//! snapshot and compares it to the limit, so two concurrent creations
//! can overshoot the quota by one. Collaborators that cannot tolerate
//! the overshoot route creations through this ledger instead: the
//! check-and-increment happens under the map entry's lock, so at most
//! `limit` reservations ever succeed between reconciliations.
//!
//! Suitable for single-node deployments only; a multi-node deployment
//! needs a conditional update against the shared store.

use dashmap::DashMap;
use tracing::{info, warn};

use lingohub_core::types::{OrganizationId, QuotaKind};
use lingohub_entity::billing::UsageSnapshot;

/// Atomic per-organization usage counters.
#[derive(Debug, Default)]
pub struct UsageLedger {
    /// (organization, kind) → reserved count.
    counters: DashMap<(OrganizationId, QuotaKind), u32>,
}

impl UsageLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically reserve one unit of `kind` if the limit allows it.
    ///
    /// Returns `true` when the reservation succeeded. A `None` limit is
    /// unlimited and always succeeds.
    pub fn try_reserve(
        &self,
        organization_id: OrganizationId,
        kind: QuotaKind,
        limit: Option<u32>,
    ) -> bool {
        let mut count = self
            .counters
            .entry((organization_id, kind))
            .or_insert(0);

        match limit {
            Some(limit) if *count >= limit => false,
            _ => {
                *count += 1;
                true
            }
        }
    }

    /// Release a reservation (e.g. the creation failed downstream).
    pub fn release(&self, organization_id: OrganizationId, kind: QuotaKind) {
        match self.counters.get_mut(&(organization_id, kind)) {
            Some(mut count) if *count > 0 => *count -= 1,
            _ => {
                warn!(%organization_id, %kind, "release without matching reservation");
            }
        }
    }

    /// Current reserved count for an organization and kind.
    pub fn current(&self, organization_id: OrganizationId, kind: QuotaKind) -> u32 {
        self.counters
            .get(&(organization_id, kind))
            .map(|c| *c)
            .unwrap_or(0)
    }

    /// Overwrite the counters from an authoritative snapshot.
    ///
    /// Run at startup and whenever drift against the store is detected.
    pub fn reconcile(&self, organization_id: OrganizationId, snapshot: &UsageSnapshot) {
        for kind in [QuotaKind::Branches, QuotaKind::Staff, QuotaKind::MonthlyOrders] {
            let actual = snapshot.count_for(kind);
            let previous = self
                .counters
                .insert((organization_id, kind), actual)
                .unwrap_or(0);
            if previous != actual {
                info!(%organization_id, %kind, previous, actual, "ledger reconciled");
            }
        }
    }
}
