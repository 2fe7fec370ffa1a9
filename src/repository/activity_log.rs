use diesel::prelude::*;

use crate::{
    domain::activity_log::{ActivityLog as DomainActivityLog, NewActivityLog as DomainNewActivityLog},
    models::activity_log::{ActivityLog as DbActivityLog, NewActivityLog as DbNewActivityLog},
    repository::{ActivityLogReader, ActivityLogWriter, DieselRepository, LogListQuery,
        errors::RepositoryResult},
};

impl ActivityLogReader for DieselRepository {
    fn list_logs(&self, query: LogListQuery) -> RepositoryResult<(usize, Vec<DomainActivityLog>)> {
        use crate::schema::activity_logs;

        let mut conn = self.conn()?;

        let mut count_query = activity_logs::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(user_id) = query.user_id {
            count_query = count_query.filter(activity_logs::user_id.eq(user_id));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = activity_logs::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(user_id) = query.user_id {
            items = items.filter(activity_logs::user_id.eq(user_id));
        }

        let rows = items
            .order(activity_logs::created_at.desc())
            .then_order_by(activity_logs::id.desc())
            .offset(query.offset as i64)
            .limit(query.limit as i64)
            .load::<DbActivityLog>(&mut conn)?;

        Ok((total, rows.into_iter().map(Into::into).collect()))
    }
}

impl ActivityLogWriter for DieselRepository {
    fn log_activity(&self, entry: &DomainNewActivityLog) -> RepositoryResult<()> {
        use crate::schema::activity_logs;

        let mut conn = self.conn()?;
        let db_new = DbNewActivityLog::from(entry);

        diesel::insert_into(activity_logs::table)
            .values(&db_new)
            .execute(&mut conn)?;

        Ok(())
    }
}
