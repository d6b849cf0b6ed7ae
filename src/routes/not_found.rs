use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::integrations::Integrations;
use crate::pages::not_found_page;
use crate::routing_helpers::html;

/// Fallback for every path the router does not know.
pub async fn not_found(integrations: web::Data<Integrations>) -> HttpResponse {
    html(StatusCode::NOT_FOUND, not_found_page(&integrations))
}
