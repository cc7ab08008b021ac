use std::sync::Arc;

use tracing::{info, instrument};

use crate::client::{decode_list, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{Division, NewDivision};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

/// CRUD over organizational divisions.
#[derive(Clone)]
pub struct DivisionService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl DivisionService {
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
    pub async fn list(&self) -> Result<Vec<Division>, ClientError> {
        let payload = self.api.get(paths::DIVISIONS).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewDivision) -> Result<Vec<Division>, ClientError> {
        if input.name.trim().is_empty() {
            return Err(ClientError::validation("a division name is required"));
        }
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::DIVISIONS, &input).await?;
        info!("division created");
        self.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: NewDivision) -> Result<Vec<Division>, ClientError> {
        if input.name.trim().is_empty() {
            return Err(ClientError::validation("a division name is required"));
        }
        let _permit = self.in_flight.acquire()?;
        self.api.put(&paths::division(id), &input).await?;
        info!(division_id = id, "division updated");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<Division>>, ClientError> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api.delete(&paths::division(id)).await?;
        info!(division_id = id, "division deleted");
        Ok(Outcome::Applied(self.list().await?))
    }
}
