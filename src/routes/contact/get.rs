use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};

use crate::integrations::Integrations;
use crate::pages::{contact_page, ContactView, ToastView};
use crate::routing_helpers::html;
use crate::submission::ToastLevel;

pub async fn contact_form(
    flash_messages: IncomingFlashMessages,
    integrations: web::Data<Integrations>,
) -> HttpResponse {
    let toasts: Vec<ToastView> = flash_messages
        .iter()
        .map(|message| ToastView {
            level: match message.level() {
                Level::Error | Level::Warning => ToastLevel::Error,
                _ => ToastLevel::Success,
            },
            message: message.content().to_string(),
        })
        .collect();
    let view = ContactView {
        toasts,
        ..ContactView::default()
    };
    html(StatusCode::OK, contact_page(&integrations, &view))
}
