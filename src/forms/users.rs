use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::user::{NewUser, UpdateUser};
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the user form helpers.
pub type UserFormResult<T> = Result<T, UserFormError>;

/// Errors that can occur while processing user forms.
#[derive(Debug, Error)]
pub enum UserFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided full name is empty after sanitization.
    #[error("full name cannot be empty")]
    EmptyName,
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    match role {
        crate::ROLE_ADMIN | crate::ROLE_CUSTOMER | crate::ROLE_SUPPLIER | crate::ROLE_SHOPKEEPER => {
            Ok(())
        }
        _ => Err(ValidationError::new("unknown_role")),
    }
}

/// Payload for creating a user account.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserForm {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    /// Plain-text password; hashed by the service before storage.
    #[validate(length(min = 8, max = 72))]
    pub password: String,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CreateUserForm {
    /// Validates and sanitizes the payload into a domain `NewUser`.
    ///
    /// The caller supplies the bcrypt hash; the plain password never reaches
    /// the domain layer.
    pub fn into_new_user(self, password_hash: String) -> UserFormResult<NewUser> {
        self.validate()?;

        let full_name = sanitize_inline_text(&self.full_name);
        if full_name.is_empty() {
            return Err(UserFormError::EmptyName);
        }

        let mut new_user = NewUser::new(
            self.username.trim(),
            self.email.trim(),
            password_hash,
            self.role,
            full_name,
        );

        if let Some(phone) = nonempty(self.phone) {
            new_user = new_user.with_phone(phone);
        }
        if let Some(address) = nonempty(self.address) {
            new_user = new_user.with_address(address);
        }

        Ok(new_user)
    }
}

/// Payload for partially updating a user account.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserForm {
    #[validate(email)]
    pub email: Option<String>,
    /// New plain-text password, when rotating it.
    #[validate(length(min = 8, max = 72))]
    pub password: Option<String>,
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserForm {
    /// Validates and sanitizes the payload into a domain `UpdateUser`.
    ///
    /// `password_hash` is the hash of the submitted password, when one was
    /// submitted. An empty `phone` or `address` clears the stored value.
    pub fn into_update_user(self, password_hash: Option<String>) -> UserFormResult<UpdateUser> {
        self.validate()?;

        let full_name = match self.full_name {
            Some(full_name) => {
                let sanitized = sanitize_inline_text(&full_name);
                if sanitized.is_empty() {
                    return Err(UserFormError::EmptyName);
                }
                Some(sanitized)
            }
            None => None,
        };

        Ok(UpdateUser {
            email: self.email.map(|email| email.trim().to_lowercase()),
            password_hash,
            role: self.role,
            full_name,
            phone: self.phone.map(nonempty_owned),
            address: self.address.map(nonempty_owned),
            is_active: self.is_active,
        })
    }
}

fn nonempty(value: Option<String>) -> Option<String> {
    value.and_then(nonempty_owned)
}

fn nonempty_owned(value: String) -> Option<String> {
    let sanitized = sanitize_inline_text(&value);
    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized)
    }
}
