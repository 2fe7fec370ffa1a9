use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::route::{NewRoute, RouteStatus, RouteStop, UpdateRoute};
use crate::forms::sanitize_inline_text;

pub type RouteFormResult<T> = Result<T, RouteFormError>;

#[derive(Debug, Error)]
pub enum RouteFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A route needs at least one stop.
    #[error("route must have at least one stop")]
    NoStops,
}

/// One customer visit within a route payload.
#[derive(Debug, Deserialize, Validate)]
pub struct RouteStopForm {
    #[validate(range(min = 1))]
    pub customer_id: i32,
    pub address: Option<String>,
    pub scheduled_time: Option<String>,
}

impl RouteStopForm {
    fn into_stop(self) -> RouteStop {
        RouteStop {
            customer_id: self.customer_id,
            address: self.address.and_then(|address| {
                let sanitized = sanitize_inline_text(&address);
                if sanitized.is_empty() {
                    None
                } else {
                    Some(sanitized)
                }
            }),
            scheduled_time: self
                .scheduled_time
                .map(|time| time.trim().to_string())
                .filter(|time| !time.is_empty()),
        }
    }
}

/// Payload for planning a new route.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteForm {
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    pub route_date: NaiveDateTime,
    #[validate(nested)]
    pub stops: Vec<RouteStopForm>,
}

impl CreateRouteForm {
    /// Validates and sanitizes the payload into a scheduled `NewRoute`.
    pub fn into_new_route(self) -> RouteFormResult<NewRoute> {
        self.validate()?;
        if self.stops.is_empty() {
            return Err(RouteFormError::NoStops);
        }

        let stops = self.stops.into_iter().map(RouteStopForm::into_stop).collect();
        Ok(NewRoute::new(self.supplier_id, self.route_date).with_stops(stops))
    }
}

/// Payload for partially updating a route. `Some(stops)` replaces the whole
/// stop list.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteForm {
    #[validate(range(min = 1))]
    pub supplier_id: Option<i32>,
    pub route_date: Option<NaiveDateTime>,
    pub status: Option<RouteStatus>,
    #[validate(nested)]
    pub stops: Option<Vec<RouteStopForm>>,
}

impl UpdateRouteForm {
    /// Validates and sanitizes the payload into a domain `UpdateRoute`.
    pub fn into_update_route(self) -> RouteFormResult<UpdateRoute> {
        self.validate()?;
        if let Some(stops) = &self.stops {
            if stops.is_empty() {
                return Err(RouteFormError::NoStops);
            }
        }

        Ok(UpdateRoute {
            supplier_id: self.supplier_id,
            route_date: self.route_date,
            status: self.status,
            stops: self
                .stops
                .map(|stops| stops.into_iter().map(RouteStopForm::into_stop).collect()),
        })
    }
}
