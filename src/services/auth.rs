use serde::Serialize;

use crate::auth::{AuthConfig, AuthenticatedUser, verify_password};
use crate::domain::activity_log::{LogAction, NewActivityLog};
use crate::domain::user::User;
use crate::forms::auth::LoginForm;
use crate::repository::{ActivityLogWriter, UserReader};
use crate::services::{ServiceError, ServiceResult, record_activity};

/// Body returned by a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Verifies credentials and issues a signed token.
///
/// Wrong username and wrong password are indistinguishable to the caller;
/// a deactivated account fails with `Forbidden` instead.
pub fn login<R>(
    repo: &R,
    config: &AuthConfig,
    form: LoginForm,
    ip: Option<&str>,
) -> ServiceResult<LoginResponse>
where
    R: UserReader + ActivityLogWriter + ?Sized,
{
    use validator::Validate;
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let user = repo
        .get_user_by_username(form.username.trim())?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&form.password, &user.password_hash)? {
        return Err(ServiceError::Unauthorized);
    }
    if !user.is_active {
        return Err(ServiceError::Forbidden);
    }

    let claims = AuthenticatedUser::new(&user);
    let token = claims.to_jwt(&config.secret)?;

    record_activity(
        repo,
        NewActivityLog::new(user.id, LogAction::Login, "auth")
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(LoginResponse { token, user })
}

/// Returns the full user record behind a set of verified claims.
pub fn current_user<R>(repo: &R, claims: &AuthenticatedUser) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(claims.sub)?
        .ok_or(ServiceError::NotFound)
}

/// Records a logout in the activity log. Token invalidation is up to the
/// client; the server is stateless.
pub fn logout<R>(repo: &R, claims: &AuthenticatedUser, ip: Option<&str>)
where
    R: ActivityLogWriter + ?Sized,
{
    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Logout, "auth")
            .with_ip_address(ip.map(str::to_string)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::repository::mock::MockAuthRepository;

    fn sample_user(password_hash: &str, is_active: bool) -> User {
        let now = Utc::now().naive_utc();
        User {
            id: 7,
            username: "bilal".to_string(),
            email: "bilal@example.com".to_string(),
            password_hash: password_hash.to_string(),
            role: "customer".to_string(),
            full_name: "Bilal Ahmed".to_string(),
            phone: None,
            address: None,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn login_form(password: &str) -> LoginForm {
        LoginForm {
            username: "bilal".to_string(),
            password: password.to_string(),
        }
    }

    fn config() -> AuthConfig {
        AuthConfig::new("test-secret")
    }

    #[test]
    fn login_issues_token_and_logs_activity() {
        let hash = bcrypt::hash("hunter42water", 4).unwrap();
        let mut repo = MockAuthRepository::new();
        repo.expect_get_user_by_username()
            .withf(|username| username == "bilal")
            .returning(move |_| Ok(Some(sample_user(&hash, true))));
        repo.expect_log_activity()
            .withf(|entry| {
                entry.user_id == 7
                    && entry.action == LogAction::Login
                    && entry.entity == "auth"
                    && entry.ip_address.as_deref() == Some("10.0.0.1")
            })
            .returning(|_| Ok(()));

        let response = login(&repo, &config(), login_form("hunter42water"), Some("10.0.0.1"))
            .expect("expected login to succeed");

        assert_eq!(response.user.id, 7);
        let claims = AuthenticatedUser::from_jwt(&response.token, "test-secret")
            .expect("token should verify");
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.role, "customer");
    }

    #[test]
    fn login_rejects_wrong_password() {
        let hash = bcrypt::hash("hunter42water", 4).unwrap();
        let mut repo = MockAuthRepository::new();
        repo.expect_get_user_by_username()
            .returning(move |_| Ok(Some(sample_user(&hash, true))));

        let result = login(&repo, &config(), login_form("wrong"), None);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn login_rejects_unknown_username() {
        let mut repo = MockAuthRepository::new();
        repo.expect_get_user_by_username().returning(|_| Ok(None));

        let result = login(&repo, &config(), login_form("whatever"), None);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn login_rejects_deactivated_account() {
        let hash = bcrypt::hash("hunter42water", 4).unwrap();
        let mut repo = MockAuthRepository::new();
        repo.expect_get_user_by_username()
            .returning(move |_| Ok(Some(sample_user(&hash, false))));

        let result = login(&repo, &config(), login_form("hunter42water"), None);

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn current_user_maps_missing_row_to_not_found() {
        let mut repo = MockAuthRepository::new();
        repo.expect_get_user_by_id().returning(|_| Ok(None));

        let claims = AuthenticatedUser {
            sub: 99,
            username: "ghost".to_string(),
            role: "customer".to_string(),
            exp: 0,
        };

        let result = current_user(&repo, &claims);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
