use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

use crate::domain::LeadForm;
use crate::integrations::Integrations;
use crate::notification_client::NotificationClient;
use crate::pages::{contact_page, ContactView, ToastView};
use crate::routing_helpers::{html, see_other};
use crate::submission::{ControllerState, SubmissionController, SubmitOutcome, Toast};

/// Runs one submission of the contact form.
///
/// Invalid input and failed deliveries re-render the form with what the visitor
/// typed. A delivered lead redirects back to an empty form with a success toast.
#[tracing::instrument(
    name = "Receive a lead",
    skip(form, notification_client, integrations),
    fields(
        lead_name = ?form.name,
        lead_company = ?form.company
    )
)]
pub async fn submit_lead(
    form: web::Form<LeadForm>,
    notification_client: web::Data<NotificationClient>,
    integrations: web::Data<Integrations>,
) -> HttpResponse {
    let controller = SubmissionController::with_form(&notification_client, form.0);

    let outcome = controller.submit().await;
    let toasts: Vec<ToastView> = outcome.toast().into_iter().map(Into::into).collect();
    let view = ContactView {
        form: controller.form(),
        errors: None,
        toasts,
        submitting: controller.state() == ControllerState::Submitting,
    };

    match &outcome {
        SubmitOutcome::Invalid(errors) => {
            let view = ContactView {
                errors: Some(errors),
                ..view
            };
            html(StatusCode::BAD_REQUEST, contact_page(&integrations, &view))
        }
        SubmitOutcome::Delivered => {
            FlashMessage::success(Toast::DELIVERED.message).send();
            see_other("/contact")
        }
        SubmitOutcome::DeliveryFailed(_) => html(
            StatusCode::INTERNAL_SERVER_ERROR,
            contact_page(&integrations, &view),
        ),
        SubmitOutcome::AlreadySubmitting => {
            html(StatusCode::CONFLICT, contact_page(&integrations, &view))
        }
    }
}
