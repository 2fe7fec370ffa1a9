use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::route::{
    NewRoute as DomainNewRoute, Route as DomainRoute, RouteStop as DomainRouteStop,
    UpdateRoute as DomainUpdateRoute,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::routes)]
pub struct Route {
    pub id: i32,
    pub supplier_id: i32,
    pub route_date: NaiveDateTime,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::route_stops)]
#[diesel(belongs_to(Route, foreign_key = route_id))]
pub struct RouteStop {
    pub id: i32,
    pub route_id: i32,
    pub customer_id: i32,
    pub address: Option<String>,
    pub scheduled_time: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::routes)]
pub struct NewRoute<'a> {
    pub supplier_id: i32,
    pub route_date: NaiveDateTime,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::route_stops)]
pub struct NewRouteStop<'a> {
    pub route_id: i32,
    pub customer_id: i32,
    pub address: Option<&'a str>,
    pub scheduled_time: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::routes)]
pub struct UpdateRoute<'a> {
    pub supplier_id: Option<i32>,
    pub route_date: Option<NaiveDateTime>,
    pub status: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl Route {
    pub fn into_domain(self, stops: Vec<RouteStop>) -> DomainRoute {
        DomainRoute {
            id: self.id,
            supplier_id: self.supplier_id,
            route_date: self.route_date,
            status: self.status.as_str().into(),
            stops: stops.into_iter().map(RouteStop::into_domain).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl RouteStop {
    pub fn into_domain(self) -> DomainRouteStop {
        DomainRouteStop {
            customer_id: self.customer_id,
            address: self.address,
            scheduled_time: self.scheduled_time,
        }
    }
}

impl From<(Route, Vec<RouteStop>)> for DomainRoute {
    fn from(value: (Route, Vec<RouteStop>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewRoute> for NewRoute<'a> {
    fn from(value: &'a DomainNewRoute) -> Self {
        Self {
            supplier_id: value.supplier_id,
            route_date: value.route_date,
            status: value.status.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewRouteStop<'a> {
    pub fn from_domain(route_id: i32, stop: &'a DomainRouteStop) -> Self {
        Self {
            route_id,
            customer_id: stop.customer_id,
            address: stop.address.as_deref(),
            scheduled_time: stop.scheduled_time.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateRoute> for UpdateRoute<'a> {
    fn from(value: &'a DomainUpdateRoute) -> Self {
        Self {
            supplier_id: value.supplier_id,
            route_date: value.route_date,
            status: value.status.as_ref().map(|status| status.as_str()),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
