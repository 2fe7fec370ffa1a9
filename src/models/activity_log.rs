use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::activity_log::{
    ActivityLog as DomainActivityLog, NewActivityLog as DomainNewActivityLog,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct ActivityLog {
    pub id: i32,
    pub user_id: i32,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct NewActivityLog<'a> {
    pub user_id: i32,
    pub action: &'a str,
    pub entity: &'a str,
    pub entity_id: Option<i32>,
    pub details: Option<&'a str>,
    pub ip_address: Option<&'a str>,
}

impl From<ActivityLog> for DomainActivityLog {
    fn from(value: ActivityLog) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            action: value.action.as_str().into(),
            entity: value.entity,
            entity_id: value.entity_id,
            details: value.details,
            ip_address: value.ip_address,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewActivityLog> for NewActivityLog<'a> {
    fn from(value: &'a DomainNewActivityLog) -> Self {
        Self {
            user_id: value.user_id,
            action: value.action.as_str(),
            entity: value.entity.as_str(),
            entity_id: value.entity_id,
            details: value.details.as_deref(),
            ip_address: value.ip_address.as_deref(),
        }
    }
}
