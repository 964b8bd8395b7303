//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Delegates to the credit service
//! 3. Translates the result (value / absence / error) into an HTTP response

/// Credit endpoints
pub mod credits;
/// Health check endpoint
pub mod health;
