use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states of a planned delivery route.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl Default for RouteStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl From<&str> for RouteStatus {
    fn from(value: &str) -> Self {
        match value {
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Scheduled,
        }
    }
}

/// A day's customer grouping assigned to one supplier, with its stops.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Route {
    pub id: i32,
    pub supplier_id: i32,
    /// Day the route is driven.
    pub route_date: NaiveDateTime,
    pub status: RouteStatus,
    pub stops: Vec<RouteStop>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A customer visit within a route, in insertion order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RouteStop {
    pub customer_id: i32,
    /// Address override for this visit; the customer record holds the default.
    pub address: Option<String>,
    /// Free-form time hint, e.g. "09:30".
    pub scheduled_time: Option<String>,
}

/// Payload required to plan a new route.
#[derive(Debug, Clone)]
pub struct NewRoute {
    pub supplier_id: i32,
    pub route_date: NaiveDateTime,
    pub status: RouteStatus,
    pub stops: Vec<RouteStop>,
    pub updated_at: NaiveDateTime,
}

impl NewRoute {
    pub fn new(supplier_id: i32, route_date: NaiveDateTime) -> Self {
        Self {
            supplier_id,
            route_date,
            status: RouteStatus::default(),
            stops: Vec::new(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_stops(mut self, stops: Vec<RouteStop>) -> Self {
        self.stops = stops;
        self
    }
}

/// Partial update applied to an existing route. `Some(stops)` replaces the
/// whole stop list.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoute {
    pub supplier_id: Option<i32>,
    pub route_date: Option<NaiveDateTime>,
    pub status: Option<RouteStatus>,
    pub stops: Option<Vec<RouteStop>>,
}
