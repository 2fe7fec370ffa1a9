use diesel::prelude::*;

use crate::{
    domain::delivery::{
        Delivery as DomainDelivery, NewDelivery as DomainNewDelivery,
        UpdateDelivery as DomainUpdateDelivery,
    },
    models::delivery::{
        Delivery as DbDelivery, NewDelivery as DbNewDelivery, UpdateDelivery as DbUpdateDelivery,
    },
    repository::{DeliveryListQuery, DeliveryReader, DeliveryWriter, DieselRepository,
        errors::RepositoryResult},
};

fn apply_filters<'a>(
    query: &DeliveryListQuery,
    mut items: crate::schema::deliveries::BoxedQuery<'a, diesel::sqlite::Sqlite>,
) -> crate::schema::deliveries::BoxedQuery<'a, diesel::sqlite::Sqlite> {
    use crate::schema::deliveries;

    if let Some(supplier_id) = query.supplier_id {
        items = items.filter(deliveries::supplier_id.eq(supplier_id));
    }

    if let Some(status) = query.status {
        items = items.filter(deliveries::status.eq(status.as_str()));
    }

    if let Some(since) = query.since {
        items = items.filter(deliveries::delivery_date.ge(since));
    }

    items
}

impl DeliveryReader for DieselRepository {
    fn get_delivery_by_id(&self, id: i32) -> RepositoryResult<Option<DomainDelivery>> {
        use crate::schema::deliveries;

        let mut conn = self.conn()?;
        let delivery = deliveries::table
            .filter(deliveries::id.eq(id))
            .first::<DbDelivery>(&mut conn)
            .optional()?;

        Ok(delivery.map(Into::into))
    }

    fn list_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<Vec<DomainDelivery>> {
        use crate::schema::deliveries;

        let mut conn = self.conn()?;

        let items = apply_filters(&query, deliveries::table.into_boxed());
        let db_deliveries = items
            .order(deliveries::delivery_date.desc())
            .load::<DbDelivery>(&mut conn)?;

        Ok(db_deliveries.into_iter().map(Into::into).collect())
    }

    fn count_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<usize> {
        use crate::schema::deliveries;

        let mut conn = self.conn()?;

        let count_query = apply_filters(&query, deliveries::table.into_boxed());
        let total = count_query.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl DeliveryWriter for DieselRepository {
    fn create_delivery(
        &self,
        new_delivery: &DomainNewDelivery,
    ) -> RepositoryResult<DomainDelivery> {
        use crate::schema::deliveries;

        let mut conn = self.conn()?;
        let db_new = DbNewDelivery::from(new_delivery);

        let created = diesel::insert_into(deliveries::table)
            .values(&db_new)
            .get_result::<DbDelivery>(&mut conn)?;

        Ok(created.into())
    }

    fn update_delivery(
        &self,
        delivery_id: i32,
        updates: &DomainUpdateDelivery,
    ) -> RepositoryResult<DomainDelivery> {
        use crate::schema::deliveries;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateDelivery::from(updates);

        let updated = diesel::update(deliveries::table.filter(deliveries::id.eq(delivery_id)))
            .set(&db_updates)
            .get_result::<DbDelivery>(&mut conn)?;

        Ok(updated.into())
    }
}
