use serde::Deserialize;

use crate::auth::{AuthenticatedUser, check_role, hash_password};
use crate::domain::activity_log::{LogAction, NewActivityLog};
use crate::domain::user::User;
use crate::forms::users::{CreateUserForm, UpdateUserForm};
use crate::repository::{ActivityLogWriter, UserListQuery, UserReader, UserWriter};
use crate::ROLE_ADMIN;
use crate::services::{ServiceError, ServiceResult, record_activity};

/// Query parameters accepted by the user listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    /// Restrict the results to one role.
    pub role: Option<String>,
    /// Substring match on username, email or full name.
    pub search: Option<String>,
}

/// Lists user accounts. Admin only.
pub fn list_users<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    query: UserQuery,
) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let mut list_query = UserListQuery::new();
    if let Some(role) = query.role {
        list_query = list_query.role(role);
    }
    if let Some(term) = query.search {
        list_query = list_query.search(term);
    }

    let (_total, users) = repo.list_users(list_query)?;
    Ok(users)
}

/// Creates a user account. Admin only; the password is bcrypt-hashed here.
pub fn create_user<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    form: CreateUserForm,
    ip: Option<&str>,
) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let password_hash = hash_password(&form.password)?;
    let new_user = form
        .into_new_user(password_hash)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_user_by_username(&new_user.username)?.is_some() {
        return Err(ServiceError::Conflict("username already taken".to_string()));
    }
    if repo.get_user_by_email(&new_user.email)?.is_some() {
        return Err(ServiceError::Conflict("email already taken".to_string()));
    }

    let user = repo.create_user(&new_user)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Create, "user")
            .with_entity_id(user.id)
            .with_details(format!("{} account {}", user.role, user.username))
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(user)
}

/// Partially updates a user account. Admin only; a supplied password is
/// re-hashed.
pub fn update_user<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    user_id: i32,
    form: UpdateUserForm,
    ip: Option<&str>,
) -> ServiceResult<User>
where
    R: UserWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let password_hash = match &form.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };
    let update = form
        .into_update_user(password_hash)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let user = repo.update_user(user_id, &update)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Update, "user")
            .with_entity_id(user_id)
            .with_details(format!("changed {}", changed_user_fields(&update)))
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(user)
}

fn changed_user_fields(update: &crate::domain::user::UpdateUser) -> String {
    let mut fields = Vec::new();
    if update.email.is_some() {
        fields.push("email");
    }
    if update.password_hash.is_some() {
        fields.push("password");
    }
    if update.role.is_some() {
        fields.push("role");
    }
    if update.full_name.is_some() {
        fields.push("full_name");
    }
    if update.phone.is_some() {
        fields.push("phone");
    }
    if update.address.is_some() {
        fields.push("address");
    }
    if update.is_active.is_some() {
        fields.push("is_active");
    }
    fields.join(", ")
}

/// Deletes a user account. Admin only; removing the caller's own account is
/// rejected.
pub fn delete_user<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    user_id: i32,
    ip: Option<&str>,
) -> ServiceResult<()>
where
    R: UserWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }
    if user_id == claims.sub {
        return Err(ServiceError::Forbidden);
    }

    repo.delete_user(user_id)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Delete, "user")
            .with_entity_id(user_id)
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(())
}
