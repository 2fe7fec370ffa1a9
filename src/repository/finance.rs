use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};

use crate::{
    domain::finance::{
        IncomingTransaction as DomainIncoming, NewIncomingTransaction as DomainNewIncoming,
        NewOutgoingTransaction as DomainNewOutgoing, OutgoingTransaction as DomainOutgoing,
    },
    models::finance::{
        IncomingTransaction as DbIncoming, NewIncomingTransaction as DbNewIncoming,
        NewOutgoingTransaction as DbNewOutgoing, OutgoingTransaction as DbOutgoing,
    },
    repository::{
        DateRange, DieselRepository, FinanceReader, FinanceWriter, IncomingListQuery,
        OutgoingListQuery, errors::RepositoryResult,
    },
};

impl FinanceReader for DieselRepository {
    fn list_incoming(&self, query: IncomingListQuery) -> RepositoryResult<Vec<DomainIncoming>> {
        use crate::schema::finance_incoming;

        let mut conn = self.conn()?;

        let mut items = finance_incoming::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(customer_id) = query.customer_id {
            items = items.filter(finance_incoming::customer_id.eq(Some(customer_id)));
        }

        if let Some(range) = query.range {
            items = items
                .filter(finance_incoming::occurred_at.ge(range.start))
                .filter(finance_incoming::occurred_at.lt(range.end));
        }

        items = items.order(finance_incoming::occurred_at.desc());

        if let Some(limit) = query.limit {
            items = items.limit(limit as i64);
        }

        let rows = items.load::<DbIncoming>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_outgoing(&self, query: OutgoingListQuery) -> RepositoryResult<Vec<DomainOutgoing>> {
        use crate::schema::finance_outgoing;

        let mut conn = self.conn()?;

        let mut items = finance_outgoing::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = query.category {
            items = items.filter(finance_outgoing::category.eq(category.as_str()));
        }

        if let Some(range) = query.range {
            items = items
                .filter(finance_outgoing::occurred_at.ge(range.start))
                .filter(finance_outgoing::occurred_at.lt(range.end));
        }

        let rows = items
            .order(finance_outgoing::occurred_at.desc())
            .load::<DbOutgoing>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn sum_incoming_by_source(
        &self,
        range: Option<DateRange>,
    ) -> RepositoryResult<Vec<(String, i64)>> {
        use crate::schema::finance_incoming;

        let mut conn = self.conn()?;

        // group_by is unavailable on boxed queries, hence the two branches.
        let rows: Vec<(String, Option<i64>)> = match range {
            Some(range) => finance_incoming::table
                .filter(finance_incoming::occurred_at.ge(range.start))
                .filter(finance_incoming::occurred_at.lt(range.end))
                .group_by(finance_incoming::source)
                .select((
                    finance_incoming::source,
                    sql::<Nullable<BigInt>>("SUM(amount_cents)"),
                ))
                .load(&mut conn)?,
            None => finance_incoming::table
                .group_by(finance_incoming::source)
                .select((
                    finance_incoming::source,
                    sql::<Nullable<BigInt>>("SUM(amount_cents)"),
                ))
                .load(&mut conn)?,
        };

        Ok(rows
            .into_iter()
            .map(|(source, total)| (source, total.unwrap_or(0)))
            .collect())
    }

    fn sum_outgoing_by_category(
        &self,
        range: Option<DateRange>,
    ) -> RepositoryResult<Vec<(String, i64)>> {
        use crate::schema::finance_outgoing;

        let mut conn = self.conn()?;

        let rows: Vec<(String, Option<i64>)> = match range {
            Some(range) => finance_outgoing::table
                .filter(finance_outgoing::occurred_at.ge(range.start))
                .filter(finance_outgoing::occurred_at.lt(range.end))
                .group_by(finance_outgoing::category)
                .select((
                    finance_outgoing::category,
                    sql::<Nullable<BigInt>>("SUM(amount_cents)"),
                ))
                .load(&mut conn)?,
            None => finance_outgoing::table
                .group_by(finance_outgoing::category)
                .select((
                    finance_outgoing::category,
                    sql::<Nullable<BigInt>>("SUM(amount_cents)"),
                ))
                .load(&mut conn)?,
        };

        Ok(rows
            .into_iter()
            .map(|(category, total)| (category, total.unwrap_or(0)))
            .collect())
    }

    fn total_incoming(&self, range: Option<DateRange>) -> RepositoryResult<i64> {
        use crate::schema::finance_incoming;

        let mut conn = self.conn()?;

        let total: Option<i64> = match range {
            Some(range) => finance_incoming::table
                .filter(finance_incoming::occurred_at.ge(range.start))
                .filter(finance_incoming::occurred_at.lt(range.end))
                .select(sql::<Nullable<BigInt>>("SUM(amount_cents)"))
                .first(&mut conn)?,
            None => finance_incoming::table
                .select(sql::<Nullable<BigInt>>("SUM(amount_cents)"))
                .first(&mut conn)?,
        };

        Ok(total.unwrap_or(0))
    }

    fn total_outgoing(&self, range: Option<DateRange>) -> RepositoryResult<i64> {
        use crate::schema::finance_outgoing;

        let mut conn = self.conn()?;

        let total: Option<i64> = match range {
            Some(range) => finance_outgoing::table
                .filter(finance_outgoing::occurred_at.ge(range.start))
                .filter(finance_outgoing::occurred_at.lt(range.end))
                .select(sql::<Nullable<BigInt>>("SUM(amount_cents)"))
                .first(&mut conn)?,
            None => finance_outgoing::table
                .select(sql::<Nullable<BigInt>>("SUM(amount_cents)"))
                .first(&mut conn)?,
        };

        Ok(total.unwrap_or(0))
    }

    fn total_incoming_for_customer(&self, customer_id: i32) -> RepositoryResult<i64> {
        use crate::schema::finance_incoming;

        let mut conn = self.conn()?;

        let total: Option<i64> = finance_incoming::table
            .filter(finance_incoming::customer_id.eq(Some(customer_id)))
            .select(sql::<Nullable<BigInt>>("SUM(amount_cents)"))
            .first(&mut conn)?;

        Ok(total.unwrap_or(0))
    }
}

impl FinanceWriter for DieselRepository {
    fn create_incoming(&self, tx: &DomainNewIncoming) -> RepositoryResult<DomainIncoming> {
        use crate::schema::finance_incoming;

        let mut conn = self.conn()?;
        let db_new = DbNewIncoming::from(tx);

        let created = diesel::insert_into(finance_incoming::table)
            .values(&db_new)
            .get_result::<DbIncoming>(&mut conn)?;

        Ok(created.into())
    }

    fn create_outgoing(&self, tx: &DomainNewOutgoing) -> RepositoryResult<DomainOutgoing> {
        use crate::schema::finance_outgoing;

        let mut conn = self.conn()?;
        let db_new = DbNewOutgoing::from(tx);

        let created = diesel::insert_into(finance_outgoing::table)
            .values(&db_new)
            .get_result::<DbOutgoing>(&mut conn)?;

        Ok(created.into())
    }
}
