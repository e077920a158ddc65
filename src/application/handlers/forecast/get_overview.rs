//! GetForecastOverviewHandler - Dashboard read of the wave forecast.

use std::sync::Arc;

use tracing::warn;

use crate::ports::{ForecastClient, ForecastError, ForecastOverview};

/// Handler that fetches the reshaped forecast overview.
pub struct GetForecastOverviewHandler {
    client: Arc<dyn ForecastClient>,
}

impl GetForecastOverviewHandler {
    pub fn new(client: Arc<dyn ForecastClient>) -> Self {
        Self { client }
    }

    pub async fn handle(&self) -> Result<ForecastOverview, ForecastError> {
        match self.client.fetch_overview().await {
            Ok(overview) => Ok(overview),
            Err(e) => {
                warn!(error = %e, "forecast overview fetch failed");
                Err(e)
            }
        }
    }
}
