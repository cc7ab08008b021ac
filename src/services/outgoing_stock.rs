use std::sync::Arc;

use tracing::instrument;

use crate::client::{decode_list, decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::OutgoingStock;

/// Read-only access to outgoing-stock records. The server produces them
/// when a request is approved; there are no mutations here at all.
#[derive(Clone)]
pub struct OutgoingStockService {
    api: Arc<ApiClient>,
}

impl OutgoingStockService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<OutgoingStock>, ClientError> {
        let payload = self.api.get(paths::OUTGOING_STOCK).await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<OutgoingStock, ClientError> {
        let payload = self.api.get(&paths::outgoing_stock(id)).await?;
        decode_record(payload)
    }

    #[instrument(skip(self))]
    pub async fn by_request(&self, request_id: i64) -> Result<Vec<OutgoingStock>, ClientError> {
        let payload = self
            .api
            .get(&paths::outgoing_stock_by_request(request_id))
            .await?;
        Ok(decode_list(payload))
    }

    #[instrument(skip(self))]
    pub async fn by_item(&self, item_id: i64) -> Result<Vec<OutgoingStock>, ClientError> {
        let payload = self.api.get(&paths::outgoing_stock_by_item(item_id)).await?;
        Ok(decode_list(payload))
    }
}
