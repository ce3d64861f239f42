//! Login and logout endpoints

use super::{AuthenticatedClient, ClientError, PublicClient};
use crate::types::{
    CompanyLoginRequest, CompanyLoginResponse, MessageResponse, StaffLoginRequest,
    StaffLoginResponse,
};

impl PublicClient {
    /// Company or super admin login
    pub async fn company_login(
        &self,
        request: &CompanyLoginRequest,
    ) -> Result<CompanyLoginResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(request);
        self.execute(req).await
    }

    /// Store terminal staff login
    pub async fn staff_login(
        &self,
        request: &StaffLoginRequest,
    ) -> Result<StaffLoginResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/staff/login")
            .json(request);
        self.execute(req).await
    }
}

impl AuthenticatedClient {
    /// Invalidate the session server-side
    pub async fn logout(&self) -> Result<Option<MessageResponse>, ClientError> {
        let req = self.request(reqwest::Method::POST, "/auth/logout");
        self.execute(req).await
    }
}
