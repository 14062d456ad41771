//! Authorization system
//!
//! This module wires the permission evaluator, the tenant scope resolver,
//! and the access gate into one facade the request-handling layer consumes.

pub mod audit;
pub mod gate;
pub mod rbac;
pub mod scope;

use std::sync::Arc;

use tracing::info;

use crate::config::{warn_permissive_scope, AuthzConfig};
use crate::utils::error::Result;

use self::audit::{AuditSink, TracingAuditSink};
use self::gate::AccessGate;
use self::rbac::{PermissionEvaluator, RoleMatrix};
use self::scope::TenantScope;

/// Main authorization system
///
/// Built once at process start; everything inside is immutable afterward
/// and shared across request-handling tasks without synchronization.
#[derive(Clone)]
pub struct AuthzSystem {
    /// Authorization configuration
    config: AuthzConfig,
    /// Permission evaluator over the role matrix
    evaluator: Arc<PermissionEvaluator>,
    /// Tenant scope resolver
    scope: Arc<TenantScope>,
    /// Audit sink shared by the gates this system produces
    audit: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for AuthzSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthzSystem")
            .field("config", &self.config)
            .field("evaluator", &self.evaluator)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl AuthzSystem {
    /// Create an authorization system over the shipped standard matrix
    pub fn new(config: AuthzConfig) -> Result<Self> {
        Self::with_matrix(config, RoleMatrix::standard())
    }

    /// Create an authorization system over an explicit matrix
    ///
    /// Fails loudly when the matrix lacks an entry for a recognized role;
    /// that is a deployment defect, not a request error.
    pub fn with_matrix(config: AuthzConfig, matrix: RoleMatrix) -> Result<Self> {
        info!("initializing authorization system");

        matrix.validate()?;
        warn_permissive_scope(&config);

        let evaluator = Arc::new(PermissionEvaluator::new(matrix));
        let scope = Arc::new(TenantScope::new(&config.scope));

        Ok(Self {
            config,
            evaluator,
            scope,
            audit: Arc::new(TracingAuditSink),
        })
    }

    /// Replace the audit sink handed to gates
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = sink;
        self
    }

    /// Permission evaluator
    pub fn evaluator(&self) -> &PermissionEvaluator {
        &self.evaluator
    }

    /// Tenant scope resolver
    pub fn scope(&self) -> &TenantScope {
        &self.scope
    }

    /// Authorization configuration
    pub fn config(&self) -> &AuthzConfig {
        &self.config
    }

    /// Build an access gate over the given authentication collaborator
    pub fn gate<A>(&self, authenticator: Arc<A>) -> AccessGate<A> {
        AccessGate::new(authenticator, Arc::clone(&self.evaluator))
            .with_audit(Arc::clone(&self.audit), self.config.audit.clone())
    }
}
