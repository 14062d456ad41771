//! Declarative collection scope filter

use serde::{Deserialize, Serialize};

use crate::core::models::{ActorId, ClinicId, EntityOwnership};

/// Declarative description of which entities an actor may list
///
/// The persistence collaborator translates this into its own query bounds;
/// [`ScopeFilter::matches`] is the reference semantics the translation must
/// agree with, and the evaluator the equivalence tests run against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeFilter {
    /// No entity is visible
    DenyAll,
    /// Only entities owned by the given actor are visible
    OwnedBy(ActorId),
    /// Clinic-staff view: entities created by independent practitioners are
    /// always excluded; clinic attribution bounds the rest
    ClinicStaff {
        /// The actor's clinic, `None` when the actor carries no attribution
        clinic_id: Option<ClinicId>,
        /// Whether entities with ambiguous clinic attribution are included
        /// (the legacy-permissive policy); under the strict policy this is
        /// `false` and only exact clinic matches pass
        include_unattributed: bool,
    },
}

impl ScopeFilter {
    /// Reference evaluation of the filter against one entity's attributes
    pub fn matches(&self, entity: &EntityOwnership) -> bool {
        match self {
            Self::DenyAll => false,
            Self::OwnedBy(owner) => entity.owner == Some(*owner),
            Self::ClinicStaff {
                clinic_id,
                include_unattributed,
            } => {
                if entity.created_by_external {
                    return false;
                }
                match (clinic_id, entity.clinic_id) {
                    (Some(required), Some(attributed)) => *required == attributed,
                    // Either side lacks attribution; the policy flag decides.
                    _ => *include_unattributed,
                }
            }
        }
    }
}
