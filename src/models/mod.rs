//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Credit entity and API request/response types
pub mod credit;
