use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{IncomingStock, NewIncomingStock};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

/// CRUD over incoming-stock records. The stock increment on the referenced
/// item happens server-side; this service only re-fetches afterwards.
#[derive(Clone)]
pub struct IncomingStockService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl IncomingStockService {
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
    pub async fn list(&self) -> Result<Vec<IncomingStock>, ClientError> {
        let payload = self.api.get(paths::INCOMING_STOCK).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<IncomingStock, ClientError> {
        let payload = self.api.get(&paths::incoming_stock(id)).await?;
        decode_record(payload)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewIncomingStock) -> Result<Vec<IncomingStock>, ClientError> {
        validate_incoming(&input)?;
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::INCOMING_STOCK, &input).await?;
        info!(item_id = input.item_id, quantity = input.quantity, "incoming stock recorded");
        self.list().await
    }

    #[instrument(skip(self, inputs))]
    pub async fn create_bulk(
        &self,
        inputs: Vec<NewIncomingStock>,
    ) -> Result<Vec<IncomingStock>, ClientError> {
        if inputs.is_empty() {
            return Err(ClientError::validation("at least one record is required"));
        }
        for input in &inputs {
            validate_incoming(input)?;
        }
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::INCOMING_STOCK_BULK, &inputs).await?;
        info!(count = inputs.len(), "incoming stock recorded in bulk");
        self.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i64,
        input: NewIncomingStock,
    ) -> Result<Vec<IncomingStock>, ClientError> {
        validate_incoming(&input)?;
        let _permit = self.in_flight.acquire()?;
        self.api.put(&paths::incoming_stock(id), &input).await?;
        info!(record_id = id, "incoming stock updated");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<IncomingStock>>, ClientError> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api.delete(&paths::incoming_stock(id)).await?;
        info!(record_id = id, "incoming stock deleted");
        Ok(Outcome::Applied(self.list().await?))
    }
}

fn validate_incoming(input: &NewIncomingStock) -> Result<(), ClientError> {
    if input.item_id <= 0 {
        return Err(ClientError::validation("an item must be selected"));
    }
    if input.quantity <= 0 {
        return Err(ClientError::validation(
            "incoming quantity must be greater than zero",
        ));
    }
    if input.unit_price <= Decimal::ZERO {
        return Err(ClientError::validation(
            "unit price must be greater than zero",
        ));
    }
    Ok(())
}
