//! Database repositories.
//!
//! Repositories own the SQL for a single table and expose typed query
//! methods to the service layer.

/// Credit table queries
pub mod credit_repo;
