use serde::{Deserialize, Serialize};

use crate::ROLE_ADMIN;
use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::activity_log::ActivityLog;
use crate::repository::{ActivityLogReader, LogListQuery};
use crate::services::{ServiceError, ServiceResult};

const USER_ACTIVITY_LIMIT: usize = 50;

/// Pagination parameters accepted by the log listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    /// Page size, defaults to 100.
    pub limit: Option<usize>,
    /// Rows to skip, defaults to 0.
    pub skip: Option<usize>,
}

/// A page of the activity log with the unpaged total.
#[derive(Debug, Serialize)]
pub struct LogPage {
    pub logs: Vec<ActivityLog>,
    pub total: usize,
}

/// Pages through the activity log, newest first. Admin only.
pub fn list_logs<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    query: LogQuery,
) -> ServiceResult<LogPage>
where
    R: ActivityLogReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let mut list_query = LogListQuery::new();
    if let Some(limit) = query.limit {
        list_query = list_query.limit(limit);
    }
    if let Some(skip) = query.skip {
        list_query = list_query.offset(skip);
    }

    let (total, logs) = repo.list_logs(list_query)?;
    Ok(LogPage { logs, total })
}

/// The most recent activity of one user. Admin only.
pub fn user_activity<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    user_id: i32,
) -> ServiceResult<Vec<ActivityLog>>
where
    R: ActivityLogReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let (_total, logs) =
        repo.list_logs(LogListQuery::new().user(user_id).limit(USER_ACTIVITY_LIMIT))?;
    Ok(logs)
}
