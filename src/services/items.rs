use std::sync::Arc;

use tracing::{info, instrument};

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{Item, NewItem};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

/// CRUD over inventory items. Creation goes through the bulk endpoint;
/// every mutation re-fetches and returns the fresh list.
#[derive(Clone)]
pub struct ItemService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl ItemService {
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
    pub async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let payload = self.api.get(paths::ITEMS).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Item, ClientError> {
        let payload = self.api.get(&paths::item(id)).await?;
        decode_record(payload)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewItem) -> Result<Vec<Item>, ClientError> {
        validate_item(&input)?;
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::ITEMS_BULK, &[input]).await?;
        info!("item created");
        self.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: NewItem) -> Result<Vec<Item>, ClientError> {
        validate_item(&input)?;
        let _permit = self.in_flight.acquire()?;
        self.api.put(&paths::item(id), &input).await?;
        info!(item_id = id, "item updated");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<Item>>, ClientError> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api.delete(&paths::item(id)).await?;
        info!(item_id = id, "item deleted");
        Ok(Outcome::Applied(self.list().await?))
    }
}

fn validate_item(input: &NewItem) -> Result<(), ClientError> {
    if input.code.trim().is_empty() {
        return Err(ClientError::validation("an item code is required"));
    }
    if input.name.trim().is_empty() {
        return Err(ClientError::validation("an item name is required"));
    }
    if input.unit.trim().is_empty() {
        return Err(ClientError::validation("a unit is required"));
    }
    if input.stock < 0 {
        return Err(ClientError::validation("stock cannot be negative"));
    }
    Ok(())
}
