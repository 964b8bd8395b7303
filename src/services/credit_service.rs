//! Credit service - business rules for credit records.
//!
//! The `CreditService` trait is the seam between the HTTP layer and
//! everything below it. `PgCreditService` is the production
//! implementation, backed by `CreditRepo`.
//!
//! # Business Rules
//!
//! - A credit number is unique across all credits.
//! - A customer may hold at most one active personal credit.
//! - Payments and consumptions must be positive.
//! - A payment may not exceed the outstanding balance.
//! - A consumption may not push the balance over the credit limit.
//!
//! Rule violations surface as `ServiceError::Rejected`; callers decide
//! the HTTP mapping.

use async_trait::async_trait;

use crate::{
    models::credit::{
        CreateCreditRequest, Credit, CreditType, PaymentRequest, TransactionKind,
        TransactionRequest, UpdateCreditRequest,
    },
    repo::credit_repo::CreditRepo,
};
use uuid::Uuid;

/// Maximum number of active personal credits a customer may hold.
const MAX_PERSONAL_CREDITS: i64 = 1;

/// Errors the service layer can produce.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A business rule refused the operation. The message says which one.
    #[error("{0}")]
    Rejected(String),
}

/// Business operations over credit records.
///
/// Handlers receive this as `Arc<dyn CreditService>`. Lookup operations
/// model absence as `Ok(None)` / an empty `Vec`, never as an error;
/// failures of the operation itself are `Err`.
#[async_trait]
pub trait CreditService: Send + Sync {
    /// All credits in the system.
    async fn find_all(&self) -> Result<Vec<Credit>, ServiceError>;

    /// A single credit by id, if it exists.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Credit>, ServiceError>;

    /// All credits held by a customer, optionally narrowed to one
    /// product kind.
    async fn find_by_customer_id(
        &self,
        customer_id: Uuid,
        credit_type: Option<CreditType>,
    ) -> Result<Vec<Credit>, ServiceError>;

    /// Whether the credit exists and belongs to the customer.
    async fn belongs_to_customer(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<bool, ServiceError>;

    /// Register a new credit.
    async fn create(&self, request: CreateCreditRequest) -> Result<Credit, ServiceError>;

    /// Replace the mutable fields of a credit. `None` when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        request: UpdateCreditRequest,
    ) -> Result<Option<Credit>, ServiceError>;

    /// Pay down a credit addressed by credit number. `None` when no
    /// credit carries that number.
    async fn make_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<Option<Credit>, ServiceError>;

    /// Draw against a credit line. `None` when the id is unknown.
    async fn charge_consumption(
        &self,
        id: Uuid,
        amount_cents: i64,
    ) -> Result<Option<Credit>, ServiceError>;

    /// Generic balance transaction, dispatched on the request kind.
    async fn transaction(
        &self,
        id: Uuid,
        request: TransactionRequest,
    ) -> Result<Option<Credit>, ServiceError>;

    /// Remove a credit. Succeeds whether or not the record existed.
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;

    /// A customer's overdue credits (outstanding balance past its due date).
    async fn find_debt_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Credit>, ServiceError>;

    /// Backend connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// PostgreSQL-backed implementation of `CreditService`.
#[derive(Clone)]
pub struct PgCreditService {
    repo: CreditRepo,
}

impl PgCreditService {
    pub fn new(repo: CreditRepo) -> Self {
        Self { repo }
    }

    /// Apply a payment to a located credit and persist the new balance.
    async fn apply_payment(
        &self,
        credit: Credit,
        amount_cents: i64,
    ) -> Result<Option<Credit>, ServiceError> {
        if amount_cents <= 0 {
            return Err(ServiceError::Rejected(
                "Payment amount must be positive".to_string(),
            ));
        }

        if amount_cents > credit.balance_cents {
            return Err(ServiceError::Rejected(
                "Payment exceeds outstanding balance".to_string(),
            ));
        }

        let updated = self
            .repo
            .set_balance(credit.id, credit.balance_cents - amount_cents)
            .await?;

        Ok(updated)
    }

    /// Apply a consumption charge to a located credit and persist the
    /// new balance.
    async fn apply_consumption(
        &self,
        credit: Credit,
        amount_cents: i64,
    ) -> Result<Option<Credit>, ServiceError> {
        if amount_cents <= 0 {
            return Err(ServiceError::Rejected(
                "Consumption amount must be positive".to_string(),
            ));
        }

        // Client-supplied amount; the sum must not wrap
        let new_balance = credit
            .balance_cents
            .checked_add(amount_cents)
            .ok_or_else(|| {
                ServiceError::Rejected("Consumption amount out of range".to_string())
            })?;
        if new_balance > credit.credit_limit_cents {
            return Err(ServiceError::Rejected(
                "Consumption would exceed the credit limit".to_string(),
            ));
        }

        let updated = self.repo.set_balance(credit.id, new_balance).await?;

        Ok(updated)
    }
}

#[async_trait]
impl CreditService for PgCreditService {
    async fn find_all(&self) -> Result<Vec<Credit>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Credit>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    async fn find_by_customer_id(
        &self,
        customer_id: Uuid,
        credit_type: Option<CreditType>,
    ) -> Result<Vec<Credit>, ServiceError> {
        match credit_type {
            Some(credit_type) => Ok(self
                .repo
                .find_by_customer_id_and_type(customer_id, credit_type)
                .await?),
            None => Ok(self.repo.find_by_customer_id(customer_id).await?),
        }
    }

    async fn belongs_to_customer(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<bool, ServiceError> {
        let credit = self.repo.find_by_id_and_customer_id(id, customer_id).await?;

        Ok(credit.is_some())
    }

    async fn create(&self, request: CreateCreditRequest) -> Result<Credit, ServiceError> {
        // Credit numbers are a unique business key
        if self
            .repo
            .exists_by_credit_number(&request.credit_number)
            .await?
        {
            return Err(ServiceError::Rejected(
                "Credit number already registered".to_string(),
            ));
        }

        // Personal credits are limited per customer
        if request.credit_type == CreditType::Personal {
            let held = self
                .repo
                .count_by_customer_id_and_type(request.customer_id, CreditType::Personal)
                .await?;

            if held >= MAX_PERSONAL_CREDITS {
                return Err(ServiceError::Rejected(
                    "Customer already holds a personal credit".to_string(),
                ));
            }
        }

        let credit = self.repo.insert(&request).await?;
        tracing::info!(credit_id = %credit.id, customer_id = %credit.customer_id, "credit created");

        Ok(credit)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateCreditRequest,
    ) -> Result<Option<Credit>, ServiceError> {
        Ok(self.repo.update(id, &request).await?)
    }

    async fn make_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<Option<Credit>, ServiceError> {
        let Some(credit) = self
            .repo
            .find_by_credit_number(&request.credit_number)
            .await?
        else {
            return Ok(None);
        };

        self.apply_payment(credit, request.amount_cents).await
    }

    async fn charge_consumption(
        &self,
        id: Uuid,
        amount_cents: i64,
    ) -> Result<Option<Credit>, ServiceError> {
        let Some(credit) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        self.apply_consumption(credit, amount_cents).await
    }

    async fn transaction(
        &self,
        id: Uuid,
        request: TransactionRequest,
    ) -> Result<Option<Credit>, ServiceError> {
        let Some(credit) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        tracing::debug!(
            credit_id = %credit.id,
            kind = ?request.kind,
            description = request.description.as_deref().unwrap_or(""),
            "applying transaction"
        );

        match request.kind {
            TransactionKind::Payment => self.apply_payment(credit, request.amount_cents).await,
            TransactionKind::Consumption => {
                self.apply_consumption(credit, request.amount_cents).await
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;

        Ok(())
    }

    async fn find_debt_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Credit>, ServiceError> {
        Ok(self.repo.find_overdue_by_customer_id(customer_id).await?)
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.repo.ping().await?)
    }
}
