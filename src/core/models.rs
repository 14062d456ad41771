//! Core identity types and enums
//!
//! Everything the authorization decisions are computed from: actor and
//! clinic identifiers, the closed role enumeration, the authenticated
//! principal handed over by the authentication collaborator, the normalized
//! per-request actor context, and the ownership attributes read from a
//! target entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an actor (practitioner, staff member)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(Uuid);

impl ActorId {
    /// Generate a fresh actor identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a clinic tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClinicId(Uuid);

impl ClinicId {
    /// Generate a fresh clinic identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ClinicId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClinicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Actor role
///
/// Exactly one role per actor, fixed for the lifetime of a request. The
/// enumeration is closed; `Unknown` exists only as the landing variant for
/// genuinely dynamic input (e.g. a role string deserialized from a token
/// issued by an older deployment) and is denied everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Clinic administrator
    Administrator,
    /// Staff clinician
    Clinician,
    /// Hygienist / clinical assistant
    Hygienist,
    /// Front-desk staff
    FrontDesk,
    /// Independent practitioner not employed by a clinic
    ExternalPractitioner,
    /// Unrecognized role value from dynamic input; always denied
    #[serde(other)]
    Unknown,
}

impl Role {
    /// All recognized roles, in matrix order
    ///
    /// `Unknown` is deliberately absent: it is not a grantable role.
    pub fn enumerated() -> [Role; 5] {
        [
            Role::Administrator,
            Role::Clinician,
            Role::Hygienist,
            Role::FrontDesk,
            Role::ExternalPractitioner,
        ]
    }

    /// Stable string name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Clinician => "clinician",
            Role::Hygienist => "hygienist",
            Role::FrontDesk => "front_desk",
            Role::ExternalPractitioner => "external_practitioner",
            Role::Unknown => "unknown",
        }
    }

    /// Whether this role belongs to the clinic staff tenant space
    pub fn is_clinic_staff(&self) -> bool {
        matches!(
            self,
            Role::Administrator | Role::Clinician | Role::Hygienist | Role::FrontDesk
        )
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Strict parse for construction sites inside the process. Dynamic
    /// input should go through serde instead, where an unrecognized value
    /// lands on [`Role::Unknown`] and is denied at evaluation time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Role::Administrator),
            "clinician" => Ok(Role::Clinician),
            "hygienist" => Ok(Role::Hygienist),
            "front_desk" => Ok(Role::FrontDesk),
            "external_practitioner" => Ok(Role::ExternalPractitioner),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Authenticated principal resolved by the authentication collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Actor identifier
    pub actor_id: ActorId,
    /// Actor role
    pub role: Role,
    /// Whether the actor practices independently of any clinic
    pub external: bool,
    /// Clinic membership, absent only for unattached independent practitioners
    pub clinic_id: Option<ClinicId>,
    /// Display name for logs and audit metadata
    pub display_name: Option<String>,
}

/// Normalized actor identity used throughout a request
///
/// Constructed once by the access gate after authentication succeeds, never
/// mutated afterward, and owned by the request's lifetime. The external flag
/// is normalized at construction: an actor is external if the principal was
/// flagged external or carries the dedicated external role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    actor_id: ActorId,
    role: Role,
    external: bool,
    clinic_id: Option<ClinicId>,
}

impl ActorContext {
    /// Build a context, normalizing the external flag from flag-or-role
    pub fn new(actor_id: ActorId, role: Role, external: bool, clinic_id: Option<ClinicId>) -> Self {
        Self {
            actor_id,
            role,
            external: external || role == Role::ExternalPractitioner,
            clinic_id,
        }
    }

    /// Build a context from an authenticated principal
    pub fn from_principal(principal: &Principal) -> Self {
        Self::new(
            principal.actor_id,
            principal.role,
            principal.external,
            principal.clinic_id,
        )
    }

    /// Actor identifier
    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    /// Actor role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the actor is an independent/external practitioner
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Clinic membership, if any
    pub fn clinic_id(&self) -> Option<ClinicId> {
        self.clinic_id
    }
}

/// Ownership attributes of a target entity, read-only for authorization
///
/// Set once by the creating operation and never altered by this core. The
/// owner is optional because legacy records may lack attribution; a missing
/// owner denies any ownership-based access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityOwnership {
    /// Identifier of the creating/owning actor
    pub owner: Option<ActorId>,
    /// Whether the entity was created by an independent practitioner
    pub created_by_external: bool,
    /// Clinic the entity is attributed to, if any
    pub clinic_id: Option<ClinicId>,
}

impl EntityOwnership {
    /// Assemble ownership attributes as loaded from the persistence layer
    pub fn new(
        owner: Option<ActorId>,
        created_by_external: bool,
        clinic_id: Option<ClinicId>,
    ) -> Self {
        Self {
            owner,
            created_by_external,
            clinic_id,
        }
    }
}
