mod get;
mod post;

pub use get::contact_form;
pub use post::submit_lead;
