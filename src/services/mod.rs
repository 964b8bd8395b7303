//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! Handlers depend on the `CreditService` trait, never on a concrete
//! implementation, so the storage backend can be swapped (and mocked
//! in tests).

pub mod credit_service;
