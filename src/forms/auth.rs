use serde::Deserialize;
use validator::Validate;

/// Credentials submitted to the login endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 72))]
    pub password: String,
}
