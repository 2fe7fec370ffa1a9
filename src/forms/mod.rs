pub mod auth;
pub mod deliveries;
pub mod finance;
pub mod orders;
pub mod routes;
pub mod shop_sales;
pub mod users;

/// Collapses inner whitespace runs and trims the ends.
pub(crate) fn sanitize_inline_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
