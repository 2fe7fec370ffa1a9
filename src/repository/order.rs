use diesel::prelude::*;

use crate::{
    domain::order::{
        NewOrder as DomainNewOrder, Order as DomainOrder, UpdateOrder as DomainUpdateOrder,
    },
    models::order::{NewOrder as DbNewOrder, Order as DbOrder, UpdateOrder as DbUpdateOrder},
    repository::{DieselRepository, OrderListQuery, OrderReader, OrderWriter,
        errors::RepositoryResult},
};

fn apply_filters<'a>(
    query: &OrderListQuery,
    mut items: crate::schema::orders::BoxedQuery<'a, diesel::sqlite::Sqlite>,
) -> crate::schema::orders::BoxedQuery<'a, diesel::sqlite::Sqlite> {
    use crate::schema::orders;

    if let Some(customer_id) = query.customer_id {
        items = items.filter(orders::customer_id.eq(customer_id));
    }

    if let Some(supplier_id) = query.supplier_id {
        items = items.filter(orders::supplier_id.eq(Some(supplier_id)));
    }

    if let Some(status) = query.status {
        items = items.filter(orders::status.eq(status.as_str()));
    }

    if let Some(since) = query.since {
        items = items.filter(orders::created_at.ge(since));
    }

    items
}

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let mut items = apply_filters(&query, orders::table.into_boxed());
        items = items.order(orders::created_at.desc());

        if let Some(limit) = query.limit {
            items = items.limit(limit as i64);
        }

        let db_orders = items.load::<DbOrder>(&mut conn)?;

        Ok(db_orders.into_iter().map(Into::into).collect())
    }

    fn count_orders(&self, query: OrderListQuery) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let count_query = apply_filters(&query, orders::table.into_boxed());
        let total = count_query.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_new = DbNewOrder::from(new_order);

        let created = diesel::insert_into(orders::table)
            .values(&db_new)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(created.into())
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrder,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateOrder::from(updates);

        let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set(&db_updates)
            .get_result::<DbOrder>(&mut conn)?;

        Ok(updated.into())
    }
}
