//! Authorization configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authorization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Tenant scope configuration
    #[serde(default)]
    pub scope: ScopeConfig,
    /// Audit emission configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl AuthzConfig {
    /// Merge authorization configurations
    pub fn merge(mut self, other: Self) -> Self {
        self.scope = self.scope.merge(other.scope);
        self.audit = self.audit.merge(other.audit);
        self
    }
}

/// Tenant scope configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Deny access when clinic attribution is ambiguous (either the actor
    /// or the entity carries no clinic id) instead of the legacy-permissive
    /// fallback that grants it
    #[serde(default)]
    pub strict_clinic_attribution: bool,
}

impl ScopeConfig {
    /// Merge scope configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.strict_clinic_attribution {
            self.strict_clinic_attribution = other.strict_clinic_attribution;
        }
        self
    }
}

/// Audit emission configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Record an event for every denial
    #[serde(default = "default_true")]
    pub record_denials: bool,
    /// Also record sensitive grants
    #[serde(default)]
    pub record_grants: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            record_denials: true,
            record_grants: false,
        }
    }
}

impl AuditConfig {
    /// Merge audit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.record_denials {
            self.record_denials = other.record_denials;
        }
        if other.record_grants {
            self.record_grants = other.record_grants;
        }
        self
    }
}

fn default_true() -> bool {
    true
}

/// Warn about the permissive legacy scope policy at startup
///
/// Under the legacy fallback, records without clinic attribution remain
/// visible to every clinic staff member once the external wall and the
/// clinic match rules pass. Deployments with fully attributed data should
/// switch to the strict policy.
pub fn warn_permissive_scope(config: &AuthzConfig) {
    if !config.scope.strict_clinic_attribution {
        warn!(
            "tenant scope is running the legacy-permissive clinic fallback; \
             records without clinic attribution are visible to all clinic staff"
        );
    }
}
