use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::integrations::Integrations;
use crate::pages::home_page;
use crate::routing_helpers::html;

pub async fn home(integrations: web::Data<Integrations>) -> HttpResponse {
    html(StatusCode::OK, home_page(&integrations))
}
