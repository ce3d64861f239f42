//! Store onboarding requests

use super::{AuthenticatedClient, ClientError};
use crate::types::{StoreRequest, StoreRequestResponse};

impl AuthenticatedClient {
    /// Ask for a new store to be provisioned for the company
    pub async fn request_store(
        &self,
        request: &StoreRequest,
    ) -> Result<StoreRequestResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/store-requests")
            .json(request);
        self.execute(req).await
    }
}
