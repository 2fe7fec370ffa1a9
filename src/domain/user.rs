use chrono::NaiveDateTime;
use serde::Serialize;

/// Domain representation of an account: staff, customer, supplier or shopkeeper.
///
/// The bcrypt hash never leaves the service: it is skipped during
/// serialization so responses cannot leak it.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Login name, unique across the system.
    pub username: String,
    /// Contact email, unique across the system.
    pub email: String,
    /// Bcrypt hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role name: one of the `crate::ROLE_*` constants.
    pub role: String,
    /// Display name.
    pub full_name: String,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// Optional delivery address (customers).
    pub address: Option<String>,
    /// Deactivated accounts cannot log in.
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewUser {
    /// Build a new user payload with the current timestamp.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into().to_lowercase(),
            password_hash: password_hash.into(),
            role: role.into(),
            full_name: full_name.into(),
            phone: None,
            address: None,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Partial update applied to an existing user. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub is_active: Option<bool>,
}
