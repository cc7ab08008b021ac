use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{NewPayment, Payment, PaymentStatus};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

#[derive(Debug, Serialize)]
struct PaymentStatusUpdate {
    status: PaymentStatus,
}

#[derive(Debug, Serialize)]
struct ProofUpload<'a> {
    #[serde(rename = "filePath")]
    file_path: &'a str,
}

/// Supplier payments: create (Pending), settle or reject, attach a transfer
/// proof, delete.
#[derive(Clone)]
pub struct PaymentService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl PaymentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            in_flight: SingleFlight::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Payment>, ClientError> {
        let payload = self.api.get(paths::PAYMENTS).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Payment, ClientError> {
        let payload = self.api.get(&paths::payment(id)).await?;
        decode_record(payload)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewPayment) -> Result<Vec<Payment>, ClientError> {
        if input.supplier_id <= 0 {
            return Err(ClientError::validation("a supplier must be selected"));
        }
        if input.total <= Decimal::ZERO {
            return Err(ClientError::validation(
                "total amount must be greater than zero",
            ));
        }
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::PAYMENTS, &input).await?;
        info!(supplier_id = input.supplier_id, "payment created");
        self.list().await
    }

    /// Settles (Paid) or rejects a pending payment; either way the change
    /// is terminal and gated behind a confirmation.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: i64,
        status: PaymentStatus,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<Payment>>, ClientError> {
        if !matches!(status, PaymentStatus::Paid | PaymentStatus::Rejected) {
            return Err(ClientError::InvalidOperation(format!(
                "a payment can only move to paid or rejected, not {}",
                status
            )));
        }
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api
            .put(&paths::payment_status(id), &PaymentStatusUpdate { status })
            .await?;
        info!(payment_id = id, status = %status, "payment status updated");
        Ok(Outcome::Applied(self.list().await?))
    }

    #[instrument(skip(self, file_path))]
    pub async fn upload_proof(
        &self,
        id: i64,
        file_path: &str,
    ) -> Result<Vec<Payment>, ClientError> {
        if file_path.trim().is_empty() {
            return Err(ClientError::validation("a proof file path is required"));
        }
        let _permit = self.in_flight.acquire()?;
        self.api
            .post(&paths::payment_upload_proof(id), &ProofUpload { file_path })
            .await?;
        info!(payment_id = id, "transfer proof uploaded");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<Payment>>, ClientError> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api.delete(&paths::payment(id)).await?;
        info!(payment_id = id, "payment deleted");
        Ok(Outcome::Applied(self.list().await?))
    }
}
