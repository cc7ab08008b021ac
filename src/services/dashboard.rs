use std::sync::Arc;

use tracing::instrument;

use crate::client::{decode_record, paths, ApiClient};
use crate::errors::ClientError;
use crate::models::DashboardData;

/// The admin dashboard aggregate read.
#[derive(Clone)]
pub struct DashboardService {
    api: Arc<ApiClient>,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<DashboardData, ClientError> {
        let payload = self.api.get(paths::ADMIN_DASHBOARD).await?;
        decode_record(payload)
    }
}
