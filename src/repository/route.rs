use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::route::{
        NewRoute as DomainNewRoute, Route as DomainRoute, UpdateRoute as DomainUpdateRoute,
    },
    models::route::{
        NewRoute as DbNewRoute, NewRouteStop as DbNewRouteStop, Route as DbRoute,
        RouteStop as DbRouteStop, UpdateRoute as DbUpdateRoute,
    },
    repository::{
        DieselRepository, RouteListQuery, RouteReader, RouteWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl RouteReader for DieselRepository {
    fn get_route_by_id(&self, id: i32) -> RepositoryResult<Option<DomainRoute>> {
        use crate::schema::{route_stops, routes};

        let mut conn = self.conn()?;
        let route = routes::table
            .filter(routes::id.eq(id))
            .first::<DbRoute>(&mut conn)
            .optional()?;

        let Some(route) = route else {
            return Ok(None);
        };

        let route_id = route.id;

        let stops = route_stops::table
            .filter(route_stops::route_id.eq(route_id))
            .order(route_stops::id.asc())
            .load::<DbRouteStop>(&mut conn)?;

        Ok(Some(DomainRoute::from((route, stops))))
    }

    fn list_routes(&self, query: RouteListQuery) -> RepositoryResult<Vec<DomainRoute>> {
        use crate::schema::{route_stops, routes};

        let mut conn = self.conn()?;

        let mut items = routes::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(supplier_id) = query.supplier_id {
            items = items.filter(routes::supplier_id.eq(supplier_id));
        }

        if let Some(range) = query.range {
            items = items
                .filter(routes::route_date.ge(range.start))
                .filter(routes::route_date.lt(range.end));
        }

        let db_routes = items
            .order(routes::route_date.desc())
            .load::<DbRoute>(&mut conn)?;

        if db_routes.is_empty() {
            return Ok(Vec::new());
        }

        let route_ids: Vec<i32> = db_routes.iter().map(|route| route.id).collect();

        let mut stops_by_route: HashMap<i32, Vec<DbRouteStop>> = HashMap::new();

        let rows = route_stops::table
            .filter(route_stops::route_id.eq_any(&route_ids))
            .order(route_stops::id.asc())
            .load::<DbRouteStop>(&mut conn)?;

        for stop in rows {
            stops_by_route.entry(stop.route_id).or_default().push(stop);
        }

        let routes = db_routes
            .into_iter()
            .map(|route| {
                let route_id = route.id;
                let stops = stops_by_route.remove(&route_id).unwrap_or_default();
                DomainRoute::from((route, stops))
            })
            .collect();

        Ok(routes)
    }
}

impl RouteWriter for DieselRepository {
    fn create_route(&self, new_route: &DomainNewRoute) -> RepositoryResult<DomainRoute> {
        use crate::schema::{route_stops, routes};

        let mut conn = self.conn()?;

        conn.transaction::<DomainRoute, RepositoryError, _>(|conn| {
            let db_new = DbNewRoute::from(new_route);

            let created = diesel::insert_into(routes::table)
                .values(&db_new)
                .get_result::<DbRoute>(conn)?;

            let route_id = created.id;

            if !new_route.stops.is_empty() {
                let payload: Vec<DbNewRouteStop> = new_route
                    .stops
                    .iter()
                    .map(|stop| DbNewRouteStop::from_domain(route_id, stop))
                    .collect();

                diesel::insert_into(route_stops::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let stops = route_stops::table
                .filter(route_stops::route_id.eq(route_id))
                .order(route_stops::id.asc())
                .load::<DbRouteStop>(conn)?;

            Ok(DomainRoute::from((created, stops)))
        })
    }

    fn update_route(
        &self,
        route_id: i32,
        updates: &DomainUpdateRoute,
    ) -> RepositoryResult<DomainRoute> {
        use crate::schema::{route_stops, routes};

        let mut conn = self.conn()?;

        conn.transaction::<DomainRoute, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateRoute::from(updates);

            let updated = diesel::update(routes::table.filter(routes::id.eq(route_id)))
                .set(&db_updates)
                .get_result::<DbRoute>(conn)?;

            if let Some(stops) = updates.stops.as_ref() {
                diesel::delete(route_stops::table.filter(route_stops::route_id.eq(route_id)))
                    .execute(conn)?;

                if !stops.is_empty() {
                    let payload: Vec<DbNewRouteStop> = stops
                        .iter()
                        .map(|stop| DbNewRouteStop::from_domain(route_id, stop))
                        .collect();

                    diesel::insert_into(route_stops::table)
                        .values(&payload)
                        .execute(conn)?;
                }
            }

            let stops = route_stops::table
                .filter(route_stops::route_id.eq(route_id))
                .order(route_stops::id.asc())
                .load::<DbRouteStop>(conn)?;

            Ok(DomainRoute::from((updated, stops)))
        })
    }
}
