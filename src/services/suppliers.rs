use std::sync::Arc;

use tracing::{info, instrument};

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{NewSupplier, Supplier};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

/// CRUD over suppliers; structurally the same contract as items.
#[derive(Clone)]
pub struct SupplierService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl SupplierService {
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
    pub async fn list(&self) -> Result<Vec<Supplier>, ClientError> {
        let payload = self.api.get(paths::SUPPLIERS).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Supplier, ClientError> {
        let payload = self.api.get(&paths::supplier(id)).await?;
        decode_record(payload)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewSupplier) -> Result<Vec<Supplier>, ClientError> {
        if input.name.trim().is_empty() {
            return Err(ClientError::validation("a supplier name is required"));
        }
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::SUPPLIERS_BULK, &[input]).await?;
        info!("supplier created");
        self.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: NewSupplier) -> Result<Vec<Supplier>, ClientError> {
        if input.name.trim().is_empty() {
            return Err(ClientError::validation("a supplier name is required"));
        }
        let _permit = self.in_flight.acquire()?;
        self.api.put(&paths::supplier(id), &input).await?;
        info!(supplier_id = id, "supplier updated");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<Supplier>>, ClientError> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api.delete(&paths::supplier(id)).await?;
        info!(supplier_id = id, "supplier deleted");
        Ok(Outcome::Applied(self.list().await?))
    }
}
