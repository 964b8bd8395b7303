//! Credit data models and API request/response types.
//!
//! This module defines:
//! - `Credit`: Database entity representing a credit record
//! - `CreditType`: Enumeration of supported credit products
//! - Request types for creating, updating, and operating on credits
//! - `CreditResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of credit product a customer can hold.
///
/// Stored as a Postgres enum (`credit_type`). Serialized in JSON as
/// lowercase strings: `"personal"`, `"business"`, `"card"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "credit_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CreditType {
    /// Personal loan; a customer may hold at most one active personal credit
    Personal,
    /// Business loan
    Business,
    /// Revolving credit card line
    Card,
}

/// Represents a credit record from the database.
///
/// # Database Table
///
/// Maps to the `credits` table. Each credit:
/// - Belongs to one customer (via `customer_id`)
/// - Carries a unique business key (`credit_number`)
/// - Stores amounts in cents (never floats!)
///
/// # Debt
///
/// A credit is in debt (overdue) when `balance_cents > 0` and `due_date`
/// is in the past. Debt queries filter on exactly that predicate.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Credit {
    /// Unique identifier for this credit
    pub id: Uuid,

    /// Customer that holds this credit
    pub customer_id: Uuid,

    /// Unique business key assigned at creation (e.g. contract number)
    pub credit_number: String,

    /// Product kind (personal, business, card)
    pub credit_type: CreditType,

    /// Maximum drawable amount in cents
    pub credit_limit_cents: i64,

    /// Outstanding amount owed in cents
    ///
    /// Must be >= 0 and <= credit_limit_cents (enforced by the service
    /// layer and a database CHECK constraint).
    pub balance_cents: i64,

    /// Deadline for paying the outstanding balance
    pub due_date: DateTime<Utc>,

    /// Timestamp when the credit was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last balance or detail update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new credit.
///
/// # JSON Example
///
/// ```json
/// {
///   "customer_id": "550e8400-e29b-41d4-a716-446655440000",
///   "credit_number": "CR-2026-0001",
///   "credit_type": "personal",
///   "credit_limit_cents": 500000,
///   "balance_cents": 0,
///   "due_date": "2026-09-30T00:00:00Z"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateCreditRequest {
    /// Customer that will own the credit
    pub customer_id: Uuid,

    /// Unique business key for the new credit
    pub credit_number: String,

    /// Product kind
    pub credit_type: CreditType,

    /// Maximum drawable amount in cents
    pub credit_limit_cents: i64,

    /// Initial outstanding balance in cents (defaults to 0)
    #[serde(default)]
    pub balance_cents: i64,

    /// Payment deadline for the opening balance
    pub due_date: DateTime<Utc>,
}

/// Request body for updating an existing credit.
///
/// The id and customer ownership are immutable; only the product kind,
/// limit, balance, and due date can be replaced.
#[derive(Debug, Deserialize)]
pub struct UpdateCreditRequest {
    pub credit_type: CreditType,
    pub credit_limit_cents: i64,
    pub balance_cents: i64,
    pub due_date: DateTime<Utc>,
}

/// Request to pay down a credit, addressed by credit number.
///
/// # JSON Example
///
/// ```json
/// {
///   "credit_number": "CR-2026-0001",
///   "amount_cents": 25000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// Business key of the credit to pay
    pub credit_number: String,

    /// Amount to pay in cents (must be positive)
    pub amount_cents: i64,
}

/// What a generic transaction does to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Reduce the outstanding balance
    Payment,
    /// Draw against the credit line, increasing the balance
    Consumption,
}

/// Request body for the generic transaction endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "kind": "consumption",
///   "amount_cents": 12000,
///   "description": "POS purchase"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    /// Whether this transaction pays down or draws against the credit
    pub kind: TransactionKind,

    /// Amount in cents (must be positive)
    pub amount_cents: i64,

    /// Optional description
    pub description: Option<String>,
}

/// Response body for credit endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "660e8400-e29b-41d4-a716-446655440001",
///   "customer_id": "550e8400-e29b-41d4-a716-446655440000",
///   "credit_number": "CR-2026-0001",
///   "credit_type": "personal",
///   "credit_limit_cents": 500000,
///   "balance_cents": 25000,
///   "due_date": "2026-09-30T00:00:00Z",
///   "created_at": "2026-08-01T10:00:00Z",
///   "updated_at": "2026-08-15T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CreditResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub credit_number: String,
    pub credit_type: CreditType,
    pub credit_limit_cents: i64,
    pub balance_cents: i64,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert database Credit to API CreditResponse.
impl From<Credit> for CreditResponse {
    fn from(credit: Credit) -> Self {
        Self {
            id: credit.id,
            customer_id: credit.customer_id,
            credit_number: credit.credit_number,
            credit_type: credit.credit_type,
            credit_limit_cents: credit.credit_limit_cents,
            balance_cents: credit.balance_cents,
            due_date: credit.due_date,
            created_at: credit.created_at,
            updated_at: credit.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CreditType::Personal).unwrap(),
            "\"personal\""
        );
        assert_eq!(
            serde_json::to_string(&CreditType::Card).unwrap(),
            "\"card\""
        );
    }

    #[test]
    fn create_request_defaults_balance_to_zero() {
        let request: CreateCreditRequest = serde_json::from_value(serde_json::json!({
            "customer_id": "550e8400-e29b-41d4-a716-446655440000",
            "credit_number": "CR-2026-0001",
            "credit_type": "personal",
            "credit_limit_cents": 500000,
            "due_date": "2026-09-30T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(request.balance_cents, 0);
        assert_eq!(request.credit_type, CreditType::Personal);
    }

    #[test]
    fn transaction_request_parses_kind() {
        let request: TransactionRequest = serde_json::from_value(serde_json::json!({
            "kind": "consumption",
            "amount_cents": 12000
        }))
        .unwrap();

        assert_eq!(request.kind, TransactionKind::Consumption);
        assert!(request.description.is_none());
    }
}
