//! Role-Based Access Control (RBAC)
//!
//! Static permission catalog, the role grant matrix, and the pure evaluator
//! that answers coarse-grained permission questions over them.

mod catalog;
mod evaluator;
mod matrix;

// Re-export public types and structs
pub use catalog::Permission;
pub use evaluator::PermissionEvaluator;
pub use matrix::RoleMatrix;
