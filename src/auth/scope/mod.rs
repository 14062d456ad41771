//! Tenant scope resolution
//!
//! Two views of one ownership rule set: a single-entity predicate
//! ([`TenantScope::can_access`]) and a declarative collection filter
//! ([`TenantScope::scope_filter`]). Both encode the same business rule and
//! must never diverge; `tests/scope_equivalence.rs` holds them to that.
//!
//! The rules, in precedence order:
//!
//! 1. An independent practitioner may access an entity iff the entity's
//!    owner is the practitioner. No role overrides this, administrator
//!    included; each independent practice is a tenant of one.
//! 2. An entity created by an independent practitioner is never visible to
//!    clinic staff.
//! 3. When both the actor and the entity carry a clinic id, they must match.
//! 4. Otherwise every recognized staff role is granted access; an
//!    unrecognized role is denied.

mod filter;

pub use filter::ScopeFilter;

use tracing::debug;

use crate::config::ScopeConfig;
use crate::core::models::{ActorContext, EntityOwnership};
use crate::utils::error::{AuthzError, Result};

/// Row-level ownership resolver
#[derive(Debug, Clone)]
pub struct TenantScope {
    /// Fail-closed reading of rule 3: deny when either side lacks clinic
    /// attribution instead of falling through to rule 4
    strict_clinic_attribution: bool,
}

impl TenantScope {
    /// Create a resolver from scope configuration
    pub fn new(config: &ScopeConfig) -> Self {
        Self {
            strict_clinic_attribution: config.strict_clinic_attribution,
        }
    }

    /// Whether this resolver denies ambiguously attributed records
    pub fn is_strict(&self) -> bool {
        self.strict_clinic_attribution
    }

    /// Single-entity predicate: may this actor touch this entity?
    ///
    /// Pure and short-circuiting on the first matching rule, in the
    /// precedence order documented on the module.
    pub fn can_access(&self, actor: &ActorContext, entity: &EntityOwnership) -> bool {
        // Rule 1: independent practitioners see exactly their own entities.
        // The flag is the acting actor's, so an external actor with an
        // elevated role still lands here.
        if actor.is_external() {
            return entity.owner == Some(actor.actor_id());
        }

        // Rule 2: the wall between independent practices and clinics.
        if entity.created_by_external {
            return false;
        }

        // Rule 3: clinic-to-clinic isolation.
        match (actor.clinic_id(), entity.clinic_id) {
            (Some(actor_clinic), Some(entity_clinic)) => {
                if actor_clinic != entity_clinic {
                    return false;
                }
            }
            _ => {
                if self.strict_clinic_attribution {
                    return false;
                }
            }
        }

        // Rule 4: all recognized staff roles pass; anything else is denied.
        actor.role().is_clinic_staff()
    }

    /// Collection filter: which entities may this actor list?
    ///
    /// Produces a filter for which [`ScopeFilter::matches`] agrees with
    /// [`TenantScope::can_access`] on every entity.
    pub fn scope_filter(&self, actor: &ActorContext) -> ScopeFilter {
        if actor.is_external() {
            return ScopeFilter::OwnedBy(actor.actor_id());
        }

        if !actor.role().is_clinic_staff() {
            return ScopeFilter::DenyAll;
        }

        if self.strict_clinic_attribution {
            match actor.clinic_id() {
                Some(clinic_id) => ScopeFilter::ClinicStaff {
                    clinic_id: Some(clinic_id),
                    include_unattributed: false,
                },
                // A staff actor without clinic attribution sees nothing
                // under the strict policy.
                None => ScopeFilter::DenyAll,
            }
        } else {
            ScopeFilter::ClinicStaff {
                clinic_id: actor.clinic_id(),
                include_unattributed: true,
            }
        }
    }

    /// Entity-level authorization with existence masking
    ///
    /// Denial is reported as [`AuthzError::NotFound`], the same answer the
    /// caller would get for a record that does not exist, so an inaccessible
    /// record cannot be probed into confirming its existence.
    pub fn authorize_entity(&self, actor: &ActorContext, entity: &EntityOwnership) -> Result<()> {
        if self.can_access(actor, entity) {
            Ok(())
        } else {
            debug!(
                actor_id = %actor.actor_id(),
                role = %actor.role(),
                "entity access denied, reporting as not found"
            );
            Err(AuthzError::NotFound)
        }
    }
}

impl Default for TenantScope {
    fn default() -> Self {
        Self::new(&ScopeConfig::default())
    }
}
