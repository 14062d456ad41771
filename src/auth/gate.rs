//! Access gate
//!
//! Wraps an operation with an authorization check: delegates authentication
//! to the external collaborator, evaluates the operation's declared
//! permission requirement, and on success hands a normalized
//! [`ActorContext`] to the operation. Denials are typed results, never
//! panics; the caller-facing message is always generic.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::AuditConfig;
use crate::core::models::{ActorContext, Principal};
use crate::utils::error::{AuthzError, Result};

use super::audit::{AuditEvent, AuditOutcome, AuditSink, TracingAuditSink};
use super::rbac::{Permission, PermissionEvaluator};

/// External authentication collaborator
///
/// Resolves a request into an authenticated principal, or `None` when no
/// credentials are present or valid. May perform I/O (session or token
/// lookup); the gate imposes no timeout of its own and abandons work if the
/// caller's future is dropped.
#[async_trait]
pub trait Authenticator<R: Send + Sync>: Send + Sync {
    /// Resolve the request's principal, if any
    async fn authenticate(&self, request: &R) -> Result<Option<Principal>>;
}

/// Static permission requirement declared by a guarded operation
///
/// Built once at route-registration time. An empty requirement is only
/// constructible through [`PermissionRequirement::authenticated`]; handing
/// an empty list to `all_of`/`any_of` is a programming error and fails
/// loudly right there instead of silently allowing every caller.
#[derive(Debug, Clone)]
pub struct PermissionRequirement {
    permissions: Vec<Permission>,
    require_all: bool,
}

impl PermissionRequirement {
    /// Authentication alone suffices; no permission constraint
    pub fn authenticated() -> Self {
        Self {
            permissions: Vec::new(),
            require_all: true,
        }
    }

    /// Require a single permission
    pub fn of(permission: Permission) -> Self {
        Self {
            permissions: vec![permission],
            require_all: true,
        }
    }

    /// Require every listed permission
    pub fn all_of(permissions: Vec<Permission>) -> Result<Self> {
        if permissions.is_empty() {
            return Err(AuthzError::misconfigured(
                "all_of requires a non-empty permission list; use authenticated() \
                 when no permission constraint is intended",
            ));
        }
        Ok(Self {
            permissions,
            require_all: true,
        })
    }

    /// Require at least one of the listed permissions
    pub fn any_of(permissions: Vec<Permission>) -> Result<Self> {
        if permissions.is_empty() {
            return Err(AuthzError::misconfigured(
                "any_of requires a non-empty permission list; use authenticated() \
                 when no permission constraint is intended",
            ));
        }
        Ok(Self {
            permissions,
            require_all: false,
        })
    }

    /// Declared permissions
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// Whether every permission is required, as opposed to any one
    pub fn requires_all(&self) -> bool {
        self.require_all
    }

    fn is_satisfied_by(&self, evaluator: &PermissionEvaluator, context: &ActorContext) -> bool {
        if self.permissions.is_empty() {
            return true;
        }
        if self.require_all {
            evaluator.has_all(context.role(), &self.permissions)
        } else {
            evaluator.has_any(context.role(), &self.permissions)
        }
    }
}

/// Authorization gate in front of guarded operations
///
/// Stateless per request; safe to share across request-handling tasks.
pub struct AccessGate<A> {
    authenticator: Arc<A>,
    evaluator: Arc<PermissionEvaluator>,
    audit: Arc<dyn AuditSink>,
    audit_config: AuditConfig,
}

impl<A> AccessGate<A> {
    /// Create a gate over an authenticator and evaluator
    pub fn new(authenticator: Arc<A>, evaluator: Arc<PermissionEvaluator>) -> Self {
        Self {
            authenticator,
            evaluator,
            audit: Arc::new(TracingAuditSink),
            audit_config: AuditConfig::default(),
        }
    }

    /// Replace the audit sink and emission policy
    pub fn with_audit(mut self, sink: Arc<dyn AuditSink>, config: AuditConfig) -> Self {
        self.audit = sink;
        self.audit_config = config;
        self
    }

    /// Authorize one request against an operation's requirement
    ///
    /// Returns the normalized actor context to proceed with, or a typed
    /// rejection: [`AuthzError::Unauthenticated`] when no principal
    /// resolves, [`AuthzError::Forbidden`] when the permission requirement
    /// is not met. The rejection never names the missing permission.
    pub async fn authorize<R>(
        &self,
        action: &str,
        requirement: &PermissionRequirement,
        request: &R,
    ) -> Result<ActorContext>
    where
        A: Authenticator<R>,
        R: Send + Sync,
    {
        let principal = self.authenticator.authenticate(request).await?;

        let Some(principal) = principal else {
            debug!(action, "request rejected: no authenticated principal");
            self.emit(AuditEvent::unauthenticated(action));
            return Err(AuthzError::Unauthenticated);
        };

        let context = ActorContext::from_principal(&principal);

        if !requirement.is_satisfied_by(&self.evaluator, &context) {
            warn!(
                actor_id = %context.actor_id(),
                action,
                "request rejected: permission requirement not satisfied"
            );
            // Which permissions were missing travels to the audit trail
            // only, never back to the caller.
            self.emit(
                AuditEvent::denied(context.actor_id(), action).with_metadata(json!({
                    "role": context.role().as_str(),
                    "required": requirement
                        .permissions()
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>(),
                    "require_all": requirement.requires_all(),
                })),
            );
            return Err(AuthzError::Forbidden);
        }

        if self.audit_config.record_grants {
            self.emit(AuditEvent::granted(context.actor_id(), action));
        }

        Ok(context)
    }

    /// Decorator form: authorize, then run the operation with the context
    pub async fn guard<R, Op, Fut, T>(
        &self,
        action: &str,
        requirement: &PermissionRequirement,
        request: &R,
        operation: Op,
    ) -> Result<T>
    where
        A: Authenticator<R>,
        R: Send + Sync,
        Op: FnOnce(ActorContext) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let context = self.authorize(action, requirement, request).await?;
        operation(context).await
    }

    /// Best-effort audit emission; a failing sink never alters the decision
    fn emit(&self, event: AuditEvent) {
        let enabled = match event.outcome {
            AuditOutcome::Granted => self.audit_config.record_grants,
            AuditOutcome::Denied | AuditOutcome::Unauthenticated => {
                self.audit_config.record_denials
            }
        };
        if !enabled {
            return;
        }
        if let Err(err) = self.audit.record(event) {
            warn!(%err, "audit sink failed to record authorization event");
        }
    }
}
