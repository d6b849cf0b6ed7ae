mod lead_email;
mod lead_form;
mod lead_message;
mod lead_name;
mod lead_submission;
mod owner_notification;

pub use lead_email::LeadEmail;
pub use lead_form::{FieldErrors, LeadField, LeadForm};
pub use lead_message::LeadMessage;
pub use lead_name::LeadName;
pub use lead_submission::{validate, LeadSubmission, Validation};
pub use owner_notification::OwnerNotification;
