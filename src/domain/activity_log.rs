use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What a recorded activity did.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogAction {
    Create,
    Update,
    Delete,
    Login,
    Logout,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

impl From<&str> for LogAction {
    fn from(value: &str) -> Self {
        match value {
            "update" => Self::Update,
            "delete" => Self::Delete,
            "login" => Self::Login,
            "logout" => Self::Logout,
            _ => Self::Create,
        }
    }
}

/// Audit trail row describing one successful operation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActivityLog {
    pub id: i32,
    /// User who performed the action.
    pub user_id: i32,
    pub action: LogAction,
    /// Entity kind touched, e.g. "order" or "auth".
    pub entity: String,
    pub entity_id: Option<i32>,
    /// JSON snapshot of the request payload, when available.
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Payload for a new audit trail row.
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub user_id: i32,
    pub action: LogAction,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
}

impl NewActivityLog {
    pub fn new(user_id: i32, action: LogAction, entity: impl Into<String>) -> Self {
        Self {
            user_id,
            action,
            entity: entity.into(),
            entity_id: None,
            details: None,
            ip_address: None,
        }
    }

    pub fn with_entity_id(mut self, entity_id: i32) -> Self {
        self.entity_id = Some(entity_id);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_ip_address(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }
}
