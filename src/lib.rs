//! # clinic-authz
//!
//! Authorization and multi-tenant access control core for a clinic practice
//! management platform.
//!
//! ## Features
//!
//! - **Fixed role matrix**: a static, enumerable permission catalog with a
//!   closed role enumeration; changing policy is a deployment-time data
//!   change, not a runtime API
//! - **Pure permission evaluation**: `has_permission` / `has_any` /
//!   `has_all` over an injected matrix, fail-closed for unknown roles
//! - **Access gate**: wraps operations with authentication and permission
//!   checks, producing typed rejections with generic caller-facing messages
//! - **Tenant scope resolution**: one ownership rule set rendered as both a
//!   single-entity predicate and a declarative collection filter, kept
//!   provably equivalent
//! - **Best-effort audit**: denial (and optionally grant) events toward a
//!   pluggable sink that can never affect the decision
//!
//! ## Quick Start
//!
//! ```rust
//! use clinic_authz::{
//!     ActorContext, ActorId, AuthzConfig, AuthzSystem, ClinicId, EntityOwnership,
//!     Permission, Role,
//! };
//!
//! let system = AuthzSystem::new(AuthzConfig::default()).expect("standard policy");
//!
//! // Coarse-grained permission checks.
//! assert!(system
//!     .evaluator()
//!     .has_permission(Role::Clinician, Permission::PrescriptionsCreate));
//! assert!(!system
//!     .evaluator()
//!     .has_permission(Role::FrontDesk, Permission::PrescriptionsCreate));
//!
//! // Row-level tenant scoping.
//! let clinic = ClinicId::new();
//! let clinician = ActorContext::new(ActorId::new(), Role::Clinician, false, Some(clinic));
//! let record = EntityOwnership::new(Some(ActorId::new()), false, Some(clinic));
//! assert!(system.scope().can_access(&clinician, &record));
//!
//! // The collection filter agrees with the predicate.
//! assert!(system.scope().scope_filter(&clinician).matches(&record));
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::audit::{AuditEvent, AuditOutcome, AuditSink, MemoryAuditSink, TracingAuditSink};
pub use auth::gate::{AccessGate, Authenticator, PermissionRequirement};
pub use auth::rbac::{Permission, PermissionEvaluator, RoleMatrix};
pub use auth::scope::{ScopeFilter, TenantScope};
pub use auth::AuthzSystem;
pub use config::{AuditConfig, AuthzConfig, ScopeConfig};
pub use crate::core::models::{ActorContext, ActorId, ClinicId, EntityOwnership, Principal, Role};
pub use utils::error::{AuthzError, Result};
