//! Product category endpoints

use super::{AuthenticatedClient, ClientError};
use crate::types::{Category, CategoryRequest};

impl AuthenticatedClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/categories");
        self.execute(req).await
    }

    pub async fn create_category(&self, request: &CategoryRequest) -> Result<Category, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/categories")
            .json(request);
        self.execute(req).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        request: &CategoryRequest,
    ) -> Result<Category, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/categories/{id}"))
            .json(request);
        self.execute(req).await
    }

    /// Delete a category.
    ///
    /// The backend refuses while products still reference it; the error then
    /// carries [`ErrorCode::CategoryHasProducts`](tillpoint_core::ErrorCode::CategoryHasProducts).
    pub async fn delete_category(&self, id: &str) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/categories/{id}"));
        self.execute_empty(req).await
    }
}
