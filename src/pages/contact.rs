use maud::{html, Markup};

use crate::domain::{FieldErrors, LeadField, LeadForm};
use crate::integrations::Integrations;
use crate::pages::render_page;
use crate::seo::PageMeta;
use crate::submission::{Toast, ToastLevel};

const FAQ: [(&str, &str); 4] = [
    (
        "What types of projects do you work on?",
        "We specialize in AI systems architecture and digital strategy consulting. Our experience \
         spans startups, scale-ups, and enterprise organizations across various industries.",
    ),
    (
        "How long does a typical engagement take?",
        "Project timelines vary based on scope and complexity. Initial consultations are typically \
         1-2 weeks, while larger strategic initiatives can span 3-6 months.",
    ),
    (
        "Do you offer ongoing support?",
        "Yes, we offer both project-based and ongoing retainer arrangements. We can discuss the \
         best approach for your specific needs.",
    ),
    (
        "What is your pricing model?",
        "We customize pricing based on project scope, complexity, and your organization's needs. \
         We'll provide a detailed proposal after our initial consultation.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub level: ToastLevel,
    pub message: String,
}

impl From<Toast> for ToastView {
    fn from(toast: Toast) -> Self {
        Self {
            level: toast.level,
            message: toast.message.to_string(),
        }
    }
}

/// Everything the contact form needs to render one state of the submission flow.
#[derive(Debug, Default)]
pub struct ContactView<'a> {
    pub form: LeadForm,
    pub errors: Option<&'a FieldErrors>,
    pub toasts: Vec<ToastView>,
    pub submitting: bool,
}

fn meta() -> PageMeta {
    PageMeta::new(
        "Contact Zinara Digital - AI Strategy & Systems Architecture",
        "Get in touch with our team for consultation on AI systems architecture and digital \
         strategy. We respond within 24 hours.",
    )
    .canonical("https://zinara.digital/contact")
}

fn field_error(view: &ContactView<'_>, field: LeadField) -> Markup {
    html! {
        @if let Some(message) = view.errors.and_then(|errors| errors.get(field)) {
            p class="field-error" id={ (field.as_str()) "-error" } { (message) }
        }
    }
}

fn text_input(
    view: &ContactView<'_>,
    field: LeadField,
    label: &str,
    input_type: &str,
    placeholder: &str,
) -> Markup {
    html! {
        div class="field" {
            label for=(field.as_str()) { (label) }
            input id=(field.as_str()) name=(field.as_str()) type=(input_type) placeholder=(placeholder)
                value=(view.form.get(field).unwrap_or_default())
                disabled[view.submitting];
            (field_error(view, field))
        }
    }
}

fn lead_form(view: &ContactView<'_>) -> Markup {
    // the inline handler only greys out the button; the server refuses overlapping submits itself
    html! {
        form action="/contact" method="post"
            onsubmit="var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Sending...';" {
            (text_input(view, LeadField::Name, "Full Name", "text", "Your name"))
            (text_input(view, LeadField::Email, "Email Address", "email", "your@email.com"))
            (text_input(view, LeadField::Company, "Company (Optional)", "text", "Your company name"))
            div class="field" {
                label for=(LeadField::Message.as_str()) { "Message" }
                textarea id=(LeadField::Message.as_str()) name=(LeadField::Message.as_str()) rows="5"
                    placeholder="Tell us about your project or inquiry..."
                    disabled[view.submitting] {
                    (view.form.get(LeadField::Message).unwrap_or_default())
                }
                (field_error(view, LeadField::Message))
            }
            button type="submit" disabled[view.submitting] {
                @if view.submitting { "Sending..." } @else { "Send Message" }
            }
            p class="muted" {
                small {
                    "We respect your privacy. Your information will only be used to respond to \
                     your inquiry."
                }
            }
        }
    }
}

fn toasts(view: &ContactView<'_>) -> Markup {
    html! {
        @for toast in &view.toasts {
            @let class = match toast.level {
                ToastLevel::Success => "toast toast-success",
                ToastLevel::Error => "toast toast-error",
            };
            div class=(class) role="status" { (toast.message) }
        }
    }
}

pub fn contact_page(integrations: &Integrations, view: &ContactView<'_>) -> Markup {
    let content = html! {
        section class="container" {
            h1 { "Let's Work Together" }
            p class="muted" {
                "Have a project in mind or want to discuss how AI systems and digital strategy can \
                 drive growth? We'd love to hear from you."
            }
        }
        section class="container" {
            h3 { "Get in Touch" }
            h4 { "Email" }
            p { a href="mailto:hello@zinara.digital" class="muted" { "hello@zinara.digital" } }
            h4 { "Response Time" }
            p class="muted" { "We typically respond within 24 hours during business days." }
            h4 { "Service Areas" }
            p class="muted" {
                "We work globally with organizations of all sizes, from startups to enterprises."
            }
            div class="card" {
                h3 { "Send us a Message" }
                (lead_form(view))
            }
        }
        section class="container" {
            h2 { "Frequently Asked Questions" }
            @for (question, answer) in &FAQ {
                h4 { (question) }
                p class="muted" { (answer) }
            }
        }
        (toasts(view))
    };
    render_page(&meta(), integrations, content)
}
