use std::sync::Arc;

use tracing::{info, instrument};

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::{NewProcurement, Procurement};
use crate::services::single_flight::SingleFlight;
use crate::services::{Confirmation, Outcome};

/// CRUD over procurement proposals (pengadaan).
#[derive(Clone)]
pub struct ProcurementService {
    api: Arc<ApiClient>,
    in_flight: SingleFlight,
}

impl ProcurementService {
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
    pub async fn list(&self) -> Result<Vec<Procurement>, ClientError> {
        let payload = self.api.get(paths::PROCUREMENT).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Procurement, ClientError> {
        let payload = self.api.get(&paths::procurement(id)).await?;
        decode_record(payload)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewProcurement) -> Result<Vec<Procurement>, ClientError> {
        validate_procurement(&input)?;
        let _permit = self.in_flight.acquire()?;
        self.api.post(paths::PROCUREMENT_BULK, &[input]).await?;
        info!("procurement proposal created");
        self.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i64,
        input: NewProcurement,
    ) -> Result<Vec<Procurement>, ClientError> {
        validate_procurement(&input)?;
        let _permit = self.in_flight.acquire()?;
        self.api.put(&paths::procurement(id), &input).await?;
        info!(procurement_id = id, "procurement proposal updated");
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        id: i64,
        confirmation: Confirmation,
    ) -> Result<Outcome<Vec<Procurement>>, ClientError> {
        if !confirmation.is_confirmed() {
            return Ok(Outcome::Cancelled);
        }
        let _permit = self.in_flight.acquire()?;
        self.api.delete(&paths::procurement(id)).await?;
        info!(procurement_id = id, "procurement proposal deleted");
        Ok(Outcome::Applied(self.list().await?))
    }
}

fn validate_procurement(input: &NewProcurement) -> Result<(), ClientError> {
    if input.item_name.trim().is_empty() {
        return Err(ClientError::validation("an item name is required"));
    }
    if input.quantity <= 0 {
        return Err(ClientError::validation(
            "proposed quantity must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn proposal_requires_item_name_and_positive_quantity() {
        let valid = NewProcurement {
            item_name: "Kertas A4".to_string(),
            unit: "Rim".to_string(),
            quantity: 20,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            note: String::new(),
            supplier_id: None,
        };
        assert!(validate_procurement(&valid).is_ok());

        let mut unnamed = valid.clone();
        unnamed.item_name = "  ".to_string();
        assert!(validate_procurement(&unnamed).is_err());

        let mut empty = valid;
        empty.quantity = 0;
        assert!(validate_procurement(&empty).is_err());
    }
}
