use chrono::{NaiveDateTime, Utc};

use crate::domain::activity_log::NewActivityLog;
use crate::repository::{ActivityLogWriter, DateRange};

pub mod errors;

pub mod auth;
pub mod dashboard;
pub mod deliveries;
pub mod finance;
pub mod logs;
pub mod orders;
pub mod routes;
pub mod shop_sales;
pub mod users;

pub use errors::{ServiceError, ServiceResult};

/// Records an audit trail entry. A failed write is logged and swallowed so it
/// never fails the operation being audited.
pub(crate) fn record_activity<R>(repo: &R, entry: NewActivityLog)
where
    R: ActivityLogWriter + ?Sized,
{
    if let Err(err) = repo.log_activity(&entry) {
        log::warn!(
            "failed to record {} activity on {}: {err}",
            entry.action.as_str(),
            entry.entity
        );
    }
}

/// Midnight UTC at the start of the given moment's day.
pub(crate) fn start_of_day(at: NaiveDateTime) -> NaiveDateTime {
    at.date().and_hms_opt(0, 0, 0).unwrap_or(at)
}

/// The current UTC day as a half-open range.
pub(crate) fn today_range() -> DateRange {
    let start = start_of_day(Utc::now().naive_utc());
    DateRange::new(start, start + chrono::Duration::days(1))
}
