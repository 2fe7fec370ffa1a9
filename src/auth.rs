use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, error, web};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::repository::{DieselRepository, UserReader};

/// Issued tokens expire after this many hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Server-side secret used to sign and verify tokens.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

/// JWT claims carried by every authenticated request.
///
/// Doubles as the actix extractor: handlers taking an `AuthenticatedUser`
/// argument reject requests without a valid `Bearer` token, or whose account
/// has been removed or deactivated since the token was issued, with 401.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// User id the token was issued for.
    pub sub: i32,
    pub username: String,
    pub role: String,
    /// Expiration as a unix timestamp.
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Build claims for a user with the default TTL.
    pub fn new(user: &User) -> Self {
        let exp = Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS);
        Self {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            exp: exp.timestamp() as usize,
        }
    }

    /// Sign the claims into a compact HS256 token.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Verify a token and return its claims.
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;
        Ok(data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let config = match req.app_data::<web::Data<AuthConfig>>() {
            Some(config) => config,
            None => {
                return ready(Err(error::ErrorInternalServerError(
                    "authentication is not configured",
                )));
            }
        };

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let Some(token) = token else {
            return ready(Err(error::ErrorUnauthorized(
                "missing authentication token",
            )));
        };

        let claims = match Self::from_jwt(token, &config.secret) {
            Ok(claims) => claims,
            Err(_) => return ready(Err(error::ErrorUnauthorized("invalid token"))),
        };

        // A token outlives account changes; the account must still exist and
        // be active on every request.
        let repo = match req.app_data::<web::Data<DieselRepository>>() {
            Some(repo) => repo,
            None => {
                return ready(Err(error::ErrorInternalServerError(
                    "authentication is not configured",
                )));
            }
        };

        match repo.get_user_by_id(claims.sub) {
            Ok(Some(user)) if user.is_active => ready(Ok(claims)),
            Ok(_) => ready(Err(error::ErrorUnauthorized("account is not active"))),
            Err(err) => {
                log::error!("failed to load account for token check: {err}");
                ready(Err(error::ErrorInternalServerError("database error")))
            }
        }
    }
}

/// Returns true when the user's role is in the allowed set.
pub fn check_role(allowed: &[&str], role: &str) -> bool {
    allowed.contains(&role)
}

/// Hash a plain-text password with the default bcrypt cost.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Verify a plain-text password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

/// Best-effort client address for the activity log.
pub fn client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        let now = Utc::now().naive_utc();
        User {
            id: 42,
            username: "ayesha".to_string(),
            email: "ayesha@example.com".to_string(),
            password_hash: "$2b$04$invalid".to_string(),
            role: "admin".to_string(),
            full_name: "Ayesha Khan".to_string(),
            phone: None,
            address: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn jwt_round_trip_preserves_claims() {
        let claims = AuthenticatedUser::new(&sample_user());
        let token = claims.to_jwt("test-secret").expect("encoding should succeed");

        let decoded =
            AuthenticatedUser::from_jwt(&token, "test-secret").expect("decoding should succeed");

        assert_eq!(decoded, claims);
        assert_eq!(decoded.sub, 42);
        assert_eq!(decoded.role, "admin");
    }

    #[test]
    fn jwt_rejects_wrong_secret() {
        let claims = AuthenticatedUser::new(&sample_user());
        let token = claims.to_jwt("test-secret").expect("encoding should succeed");

        assert!(AuthenticatedUser::from_jwt(&token, "other-secret").is_err());
    }

    #[test]
    fn jwt_rejects_expired_token() {
        let mut claims = AuthenticatedUser::new(&sample_user());
        claims.exp = (Utc::now() - chrono::Duration::hours(1)).timestamp() as usize;
        let token = claims.to_jwt("test-secret").expect("encoding should succeed");

        assert!(AuthenticatedUser::from_jwt(&token, "test-secret").is_err());
    }

    #[test]
    fn check_role_matches_allowed_set() {
        assert!(check_role(&["admin"], "admin"));
        assert!(check_role(&["admin", "supplier"], "supplier"));
        assert!(!check_role(&["admin"], "customer"));
        assert!(!check_role(&[], "admin"));
    }

    #[test]
    fn password_hash_verifies() {
        let hash = bcrypt::hash("hunter42water", 4).expect("hashing should succeed");

        assert!(verify_password("hunter42water", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }
}
