//! Permission checking methods

use crate::core::models::Role;

use super::catalog::Permission;
use super::matrix::RoleMatrix;

/// Pure permission evaluator over an injected role matrix
///
/// Side-effect-free and safe to share across any number of request-handling
/// tasks: the matrix is immutable after construction.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    matrix: RoleMatrix,
}

impl PermissionEvaluator {
    /// Create an evaluator over the given matrix
    pub fn new(matrix: RoleMatrix) -> Self {
        Self { matrix }
    }

    /// Create an evaluator over the shipped standard policy
    pub fn standard() -> Self {
        Self::new(RoleMatrix::standard())
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &RoleMatrix {
        &self.matrix
    }

    /// Whether the role holds the permission
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.matrix.granted(role).contains(&permission)
    }

    /// Whether the role holds at least one of the permissions
    ///
    /// An empty slice yields `false`: there is nothing to satisfy "any of".
    pub fn has_any(&self, role: Role, permissions: &[Permission]) -> bool {
        let granted = self.matrix.granted(role);
        permissions
            .iter()
            .any(|permission| granted.contains(permission))
    }

    /// Whether the role holds every one of the permissions
    ///
    /// An empty slice yields `true` (vacuous truth). Call sites that build
    /// requirement lists dynamically rely on this asymmetry with `has_any`.
    pub fn has_all(&self, role: Role, permissions: &[Permission]) -> bool {
        let granted = self.matrix.granted(role);
        permissions
            .iter()
            .all(|permission| granted.contains(permission))
    }
}
