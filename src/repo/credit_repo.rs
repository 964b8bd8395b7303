//! Credit repository - typed queries over the `credits` table.
//!
//! One method per query the service layer needs. No business logic lives
//! here; callers decide what an empty result or a count means.

use crate::{
    db::DbPool,
    models::credit::{CreateCreditRequest, Credit, CreditType, UpdateCreditRequest},
};
use uuid::Uuid;

#[derive(Clone)]
pub struct CreditRepo {
    pub pool: DbPool,
}

impl CreditRepo {
    /// Fetch every credit, newest first.
    pub async fn find_all(&self) -> Result<Vec<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>("SELECT * FROM credits ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    /// Fetch a single credit by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>("SELECT * FROM credits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fetch all credits held by a customer, newest first.
    pub async fn find_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>(
            "SELECT * FROM credits WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Fetch a customer's credits of one product kind.
    pub async fn find_by_customer_id_and_type(
        &self,
        customer_id: Uuid,
        credit_type: CreditType,
    ) -> Result<Vec<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>(
            r#"
            SELECT * FROM credits
            WHERE customer_id = $1 AND credit_type = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(customer_id)
        .bind(credit_type)
        .fetch_all(&self.pool)
        .await
    }

    /// Fetch a credit by its unique business key.
    pub async fn find_by_credit_number(
        &self,
        credit_number: &str,
    ) -> Result<Option<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>("SELECT * FROM credits WHERE credit_number = $1")
            .bind(credit_number)
            .fetch_optional(&self.pool)
            .await
    }

    /// Fetch a credit only if it belongs to the given customer.
    ///
    /// Ownership check materialized as a lookup: a miss means either the
    /// credit does not exist or it belongs to someone else.
    pub async fn find_by_id_and_customer_id(
        &self,
        id: Uuid,
        customer_id: Uuid,
    ) -> Result<Option<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>("SELECT * FROM credits WHERE id = $1 AND customer_id = $2")
            .bind(id)
            .bind(customer_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Whether a credit with this business key already exists.
    pub async fn exists_by_credit_number(
        &self,
        credit_number: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM credits WHERE credit_number = $1)")
            .bind(credit_number)
            .fetch_one(&self.pool)
            .await
    }

    /// Count a customer's credits of one product kind.
    pub async fn count_by_customer_id_and_type(
        &self,
        customer_id: Uuid,
        credit_type: CreditType,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM credits WHERE customer_id = $1 AND credit_type = $2",
        )
        .bind(customer_id)
        .bind(credit_type)
        .fetch_one(&self.pool)
        .await
    }

    /// Fetch a customer's overdue credits: outstanding balance with a
    /// due date in the past.
    pub async fn find_overdue_by_customer_id(
        &self,
        customer_id: Uuid,
    ) -> Result<Vec<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>(
            r#"
            SELECT * FROM credits
            WHERE customer_id = $1 AND balance_cents > 0 AND due_date < NOW()
            ORDER BY due_date ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a new credit and return the stored row.
    pub async fn insert(&self, request: &CreateCreditRequest) -> Result<Credit, sqlx::Error> {
        sqlx::query_as::<_, Credit>(
            r#"
            INSERT INTO credits (
                customer_id,
                credit_number,
                credit_type,
                credit_limit_cents,
                balance_cents,
                due_date
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.customer_id)
        .bind(&request.credit_number)
        .bind(request.credit_type)
        .bind(request.credit_limit_cents)
        .bind(request.balance_cents)
        .bind(request.due_date)
        .fetch_one(&self.pool)
        .await
    }

    /// Replace the mutable fields of a credit. Returns `None` when no row
    /// matched the id.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateCreditRequest,
    ) -> Result<Option<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>(
            r#"
            UPDATE credits
            SET credit_type = $1,
                credit_limit_cents = $2,
                balance_cents = $3,
                due_date = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(request.credit_type)
        .bind(request.credit_limit_cents)
        .bind(request.balance_cents)
        .bind(request.due_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Set a credit's outstanding balance in a single statement.
    ///
    /// Returns `None` when no row matched the id. A single UPDATE keeps
    /// the balance write atomic without an explicit transaction.
    pub async fn set_balance(
        &self,
        id: Uuid,
        balance_cents: i64,
    ) -> Result<Option<Credit>, sqlx::Error> {
        sqlx::query_as::<_, Credit>(
            r#"
            UPDATE credits
            SET balance_cents = $1,
                updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(balance_cents)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a credit by id. No-op when the row does not exist.
    pub async fn delete(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM credits WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Verify database connectivity with a trivial query.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}
