//! Request and response bodies exchanged with the backend API

use serde::{Deserialize, Serialize};
use tillpoint_core::{AdminPrincipal, StaffPrincipal, StaffRole};

/// Credentials accepted by the two login surfaces
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Company(CompanyLoginRequest),
    Staff(StaffLoginRequest),
}

impl Credentials {
    pub fn company(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Company(CompanyLoginRequest {
            email: email.into(),
            password: password.into(),
        })
    }

    pub fn staff(
        staff_id: impl Into<String>,
        store_id: impl Into<String>,
        passcode: impl Into<String>,
    ) -> Self {
        Self::Staff(StaffLoginRequest {
            staff_id: staff_id.into(),
            store_id: store_id.into(),
            passcode: passcode.into(),
        })
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Company(req) => f.debug_struct("Company").field("email", &req.email).finish_non_exhaustive(),
            Self::Staff(req) => f
                .debug_struct("Staff")
                .field("staff_id", &req.staff_id)
                .field("store_id", &req.store_id)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffLoginRequest {
    pub staff_id: String,
    pub store_id: String,
    pub passcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyLoginResponse {
    pub token: String,
    pub user: AdminPrincipal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffLoginResponse {
    pub token: String,
    pub staff: StaffPrincipal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// Categories

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// Inventory

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentReason {
    Received,
    Damaged,
    Recount,
    Returned,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustmentRequest {
    pub product_id: String,
    pub store_id: String,
    /// Signed change in units
    pub quantity_change: i64,
    pub reason: AdjustmentReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Token from a prior manager override, when the change needs one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustmentResponse {
    pub product_id: String,
    pub store_id: String,
    pub quantity: i64,
}

// Staff

/// A higher-privileged staff member approving a restricted action
#[derive(Clone, Serialize, Deserialize)]
pub struct ManagerOverrideRequest {
    pub manager_id: String,
    pub passcode: String,
    /// Identifier of the action being approved, e.g. `stock_adjustment`
    pub action: String,
}

impl std::fmt::Debug for ManagerOverrideRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagerOverrideRequest")
            .field("manager_id", &self.manager_id)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerOverrideResponse {
    pub approved: bool,
    #[serde(default)]
    pub override_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChangeRequest {
    pub role: StaffRole,
}

// Stores

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRequest {
    pub store_name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRequestResponse {
    pub id: String,
    pub status: String,
}
