//! Permission catalog
//!
//! The full, fixed universe of capability tokens. Permissions are named
//! `resource.action` and carry no structure the core interprets beyond
//! identity; the split accessors exist for display and audit metadata only.

use serde::{Deserialize, Serialize};

/// Capability token required by a guarded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Read patient records
    #[serde(rename = "patients.read")]
    PatientsRead,
    /// Create and update patient records
    #[serde(rename = "patients.write")]
    PatientsWrite,
    /// Delete patient records
    #[serde(rename = "patients.delete")]
    PatientsDelete,
    /// Read the appointment agenda
    #[serde(rename = "appointments.read")]
    AppointmentsRead,
    /// Create and update appointments
    #[serde(rename = "appointments.write")]
    AppointmentsWrite,
    /// Create a prescription
    #[serde(rename = "prescriptions.create")]
    PrescriptionsCreate,
    /// Create a clinical document
    #[serde(rename = "documents.create")]
    DocumentsCreate,
    /// Finalize a clinical document
    #[serde(rename = "documents.finalize")]
    DocumentsFinalize,
    /// Read billing information
    #[serde(rename = "billing.read")]
    BillingRead,
    /// Create and update billing entries
    #[serde(rename = "billing.write")]
    BillingWrite,
    /// Read practice settings
    #[serde(rename = "settings.read")]
    SettingsRead,
    /// Change practice settings
    #[serde(rename = "settings.write")]
    SettingsWrite,
    /// Manage staff accounts
    #[serde(rename = "users.manage")]
    UsersManage,
    /// Read activity reports
    #[serde(rename = "reports.read")]
    ReportsRead,
}

impl Permission {
    /// The full enumerable permission universe
    pub fn catalog() -> &'static [Permission] {
        &[
            Permission::PatientsRead,
            Permission::PatientsWrite,
            Permission::PatientsDelete,
            Permission::AppointmentsRead,
            Permission::AppointmentsWrite,
            Permission::PrescriptionsCreate,
            Permission::DocumentsCreate,
            Permission::DocumentsFinalize,
            Permission::BillingRead,
            Permission::BillingWrite,
            Permission::SettingsRead,
            Permission::SettingsWrite,
            Permission::UsersManage,
            Permission::ReportsRead,
        ]
    }

    /// Stable `resource.action` name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::PatientsRead => "patients.read",
            Permission::PatientsWrite => "patients.write",
            Permission::PatientsDelete => "patients.delete",
            Permission::AppointmentsRead => "appointments.read",
            Permission::AppointmentsWrite => "appointments.write",
            Permission::PrescriptionsCreate => "prescriptions.create",
            Permission::DocumentsCreate => "documents.create",
            Permission::DocumentsFinalize => "documents.finalize",
            Permission::BillingRead => "billing.read",
            Permission::BillingWrite => "billing.write",
            Permission::SettingsRead => "settings.read",
            Permission::SettingsWrite => "settings.write",
            Permission::UsersManage => "users.manage",
            Permission::ReportsRead => "reports.read",
        }
    }

    /// Resource part of the permission name
    pub fn resource(&self) -> &'static str {
        self.as_str()
            .split_once('.')
            .map(|(resource, _)| resource)
            .unwrap_or_default()
    }

    /// Action part of the permission name
    pub fn action(&self) -> &'static str {
        self.as_str()
            .split_once('.')
            .map(|(_, action)| action)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::catalog()
            .iter()
            .find(|permission| permission.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid permission: {}", s))
    }
}
