//! Inventory endpoints

use super::{AuthenticatedClient, ClientError};
use crate::types::{StockAdjustmentRequest, StockAdjustmentResponse};

impl AuthenticatedClient {
    /// Record a stock adjustment
    pub async fn adjust_stock(
        &self,
        request: &StockAdjustmentRequest,
    ) -> Result<StockAdjustmentResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/inventory/adjustments")
            .json(request);
        self.execute(req).await
    }
}
