//! Staff management endpoints

use super::{AuthenticatedClient, ClientError};
use crate::types::{ManagerOverrideRequest, ManagerOverrideResponse, RoleChangeRequest};
use tillpoint_core::StaffRole;

impl AuthenticatedClient {
    /// Ask a manager to approve a restricted action at the terminal
    pub async fn manager_override(
        &self,
        request: &ManagerOverrideRequest,
    ) -> Result<ManagerOverrideResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/staff/manager-override")
            .json(request);
        self.execute(req).await
    }

    pub async fn change_role(&self, staff_id: &str, role: StaffRole) -> Result<(), ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/staff/{staff_id}/role"))
            .json(&RoleChangeRequest { role });
        self.execute_empty(req).await
    }
}
