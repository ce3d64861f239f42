//! Session data model: tokens, principals and roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque bearer credential issued by the backend at login.
///
/// The client assumes no structure beyond "present and non-empty"; validity is
/// learned from API responses, never from inspecting the token.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token, rejecting empty or whitespace-only values
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens end up in logs through Debug derives on containing types.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Discriminator persisted next to the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    SuperAdmin,
    Company,
    Staff,
}

impl UserType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Company => "company",
            Self::Staff => "staff",
        }
    }

    /// Company-side users, as opposed to in-store staff
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Company)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "company" => Ok(Self::Company),
            "staff" => Ok(Self::Staff),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Role of a staff member inside a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Staff,
    Supervisor,
    Manager,
}

impl StaffRole {
    pub const ALL: [Self; 3] = [Self::Staff, Self::Supervisor, Self::Manager];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Supervisor => "supervisor",
            Self::Manager => "manager",
        }
    }

    /// Position in the manager > supervisor > staff ordering.
    ///
    /// Only consulted by [`RolePolicy::Hierarchical`](crate::access::RolePolicy).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Staff => 0,
            Self::Supervisor => 1,
            Self::Manager => 2,
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(Self::Staff),
            "supervisor" => Ok(Self::Supervisor),
            "manager" => Ok(Self::Manager),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Returned when parsing a closed enum from an unknown string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown variant: {0}")]
pub struct UnknownVariant(pub String);

/// A company or platform administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPrincipal {
    pub id: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A staff member logged in at a store terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPrincipal {
    pub staff_id: String,
    pub store_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: StaffRole,
}

/// The authenticated identity associated with a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Admin(AdminPrincipal),
    Staff(StaffPrincipal),
}

impl Principal {
    pub const fn user_type(&self) -> UserType {
        match self {
            Self::Admin(admin) => admin.user_type,
            Self::Staff(_) => UserType::Staff,
        }
    }

    pub const fn staff_role(&self) -> Option<StaffRole> {
        match self {
            Self::Admin(_) => None,
            Self::Staff(staff) => Some(staff.role),
        }
    }

    /// Stable identifier, used for log fields
    pub fn id(&self) -> &str {
        match self {
            Self::Admin(admin) => &admin.id,
            Self::Staff(staff) => &staff.staff_id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Admin(admin) => admin.name.as_deref(),
            Self::Staff(staff) => staff.name.as_deref(),
        }
    }

    /// Serialize the snapshot persisted next to the token
    pub fn to_snapshot(&self) -> serde_json::Result<String> {
        match self {
            Self::Admin(admin) => serde_json::to_string(admin),
            Self::Staff(staff) => serde_json::to_string(staff),
        }
    }

    /// Decode a persisted snapshot; the discriminator picks the shape
    pub fn from_snapshot(user_type: UserType, snapshot: &str) -> serde_json::Result<Self> {
        match user_type {
            UserType::Staff => serde_json::from_str(snapshot).map(Self::Staff),
            UserType::SuperAdmin | UserType::Company => {
                let admin: AdminPrincipal = serde_json::from_str(snapshot)?;
                if admin.user_type == user_type {
                    Ok(Self::Admin(admin))
                } else {
                    Err(serde::de::Error::custom(format!(
                        "snapshot user_type {} does not match stored {user_type}",
                        admin.user_type
                    )))
                }
            }
        }
    }
}

impl From<AdminPrincipal> for Principal {
    fn from(admin: AdminPrincipal) -> Self {
        Self::Admin(admin)
    }
}

impl From<StaffPrincipal> for Principal {
    fn from(staff: StaffPrincipal) -> Self {
        Self::Staff(staff)
    }
}

/// Token and principal written together at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: SessionToken,
    pub principal: Principal,
}
