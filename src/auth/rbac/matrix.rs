//! Role grant matrix
//!
//! The complete, static `Role -> granted permission set` mapping. Changing
//! the matrix is a deployment-time data change; there is no grant/revoke
//! API anywhere in this crate. There is also no inheritance between roles:
//! every role's set is spelled out in full and the matrix is the single
//! source of truth.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::core::models::Role;
use crate::utils::error::{AuthzError, Result};

use super::catalog::Permission;

/// Fail-closed fallback for roles without a matrix entry
static EMPTY_GRANTS: Lazy<HashSet<Permission>> = Lazy::new(HashSet::new);

/// Immutable role-to-permission mapping, built once at process start
#[derive(Debug, Clone)]
pub struct RoleMatrix {
    grants: HashMap<Role, HashSet<Permission>>,
}

impl RoleMatrix {
    /// The product's shipped authorization policy
    pub fn standard() -> Self {
        let mut grants: HashMap<Role, HashSet<Permission>> = HashMap::new();

        // The administrator holds the full catalog.
        grants.insert(
            Role::Administrator,
            Permission::catalog().iter().copied().collect(),
        );

        grants.insert(
            Role::Clinician,
            [
                Permission::PatientsRead,
                Permission::PatientsWrite,
                Permission::AppointmentsRead,
                Permission::AppointmentsWrite,
                Permission::PrescriptionsCreate,
                Permission::DocumentsCreate,
                Permission::DocumentsFinalize,
                Permission::BillingRead,
                Permission::SettingsRead,
                Permission::ReportsRead,
            ]
            .into_iter()
            .collect(),
        );

        grants.insert(
            Role::Hygienist,
            [
                Permission::PatientsRead,
                Permission::PatientsWrite,
                Permission::AppointmentsRead,
                Permission::AppointmentsWrite,
                Permission::DocumentsCreate,
                Permission::SettingsRead,
            ]
            .into_iter()
            .collect(),
        );

        // Front desk is the minimal "standard" subset.
        grants.insert(
            Role::FrontDesk,
            [
                Permission::PatientsRead,
                Permission::AppointmentsRead,
                Permission::AppointmentsWrite,
                Permission::BillingRead,
                Permission::SettingsRead,
            ]
            .into_iter()
            .collect(),
        );

        // Independent practitioners get the clinical surface; row-level
        // isolation to their own patients is the scope resolver's job.
        grants.insert(
            Role::ExternalPractitioner,
            [
                Permission::PatientsRead,
                Permission::PatientsWrite,
                Permission::AppointmentsRead,
                Permission::AppointmentsWrite,
                Permission::PrescriptionsCreate,
                Permission::DocumentsCreate,
                Permission::DocumentsFinalize,
                Permission::SettingsRead,
            ]
            .into_iter()
            .collect(),
        );

        Self { grants }
    }

    /// Build a matrix from explicit grants, for tests and fixture policies
    pub fn with_grants(grants: HashMap<Role, HashSet<Permission>>) -> Self {
        Self { grants }
    }

    /// Granted permission set for a role
    ///
    /// A role without an entry (notably [`Role::Unknown`]) yields the empty
    /// set rather than an error or a privileged default.
    pub fn granted(&self, role: Role) -> &HashSet<Permission> {
        self.grants.get(&role).unwrap_or(&EMPTY_GRANTS)
    }

    /// Verify the matrix is total over the recognized role enumeration
    ///
    /// A missing entry for a known role is a programming error and must
    /// abort loudly at startup, before any request is evaluated.
    pub fn validate(&self) -> Result<()> {
        for role in Role::enumerated() {
            if !self.grants.contains_key(&role) {
                return Err(AuthzError::config(format!(
                    "role matrix is missing an entry for role '{}'",
                    role
                )));
            }
        }
        Ok(())
    }
}

impl Default for RoleMatrix {
    fn default() -> Self {
        Self::standard()
    }
}
