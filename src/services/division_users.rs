use std::sync::Arc;

use tracing::{info, instrument};

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{DivisionUser, DivisionUserUpdate, NewDivisionUser};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

/// CRUD over division-side accounts.
#[derive(Clone)]
pub struct DivisionUserService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl DivisionUserService {
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
    pub async fn list(&self) -> Result<Vec<DivisionUser>, ClientError> {
        let payload = self.api.get(paths::DIVISION_USERS).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<DivisionUser, ClientError> {
        let payload = self.api.get(&paths::division_user(id)).await?;
        decode_record(payload)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewDivisionUser) -> Result<Vec<DivisionUser>, ClientError> {
        if input.username.trim().is_empty() {
            return Err(ClientError::validation("a username is required"));
        }
        if input.password.is_empty() {
            return Err(ClientError::validation("a password is required"));
        }
        if input.name.trim().is_empty() {
            return Err(ClientError::validation("a display name is required"));
        }
        if input.division_name.trim().is_empty() {
            return Err(ClientError::validation("a division is required"));
        }
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::DIVISION_USERS, &input).await?;
        info!("division user created");
        self.list().await
    }

    /// Update; a `None` password keeps the current one.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i64,
        input: DivisionUserUpdate,
    ) -> Result<Vec<DivisionUser>, ClientError> {
        if input.username.trim().is_empty() {
            return Err(ClientError::validation("a username is required"));
        }
        if input.name.trim().is_empty() {
            return Err(ClientError::validation("a display name is required"));
        }
        let _permit = self.in_flight.acquire()?;
        self.api.put(&paths::division_user(id), &input).await?;
        info!(user_id = id, "division user updated");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<DivisionUser>>, ClientError> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api.delete(&paths::division_user(id)).await?;
        info!(user_id = id, "division user deleted");
        Ok(Outcome::Applied(self.list().await?))
    }
}
