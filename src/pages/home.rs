use maud::{html, Markup};

use crate::integrations::Integrations;
use crate::pages::render_page;
use crate::seo::PageMeta;

const AI_SYSTEMS: [(&str, &str); 3] = [
    ("Intelligent Systems Design", "Architecture that learns and adapts"),
    ("Performance Optimization", "Speed and efficiency at scale"),
    ("Precision Implementation", "Exact solutions for complex problems"),
];

const DIGITAL_STRATEGY: [(&str, &str); 3] = [
    ("Market Positioning", "Authority-driven market entry"),
    ("Strategic Planning", "Long-term competitive advantage"),
    ("Execution Architecture", "Systematic implementation"),
];

fn meta() -> PageMeta {
    PageMeta::new(
        "Zinara Digital - AI Systems Architecture & Digital Strategy",
        "Authority-driven digital strategy and AI systems architecture for transformative \
         business growth. Strategic consulting for decision advantage.",
    )
    .canonical("https://zinara.digital")
    .og_image("https://zinara.digital/og-image.png")
    .structured_data(serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Zinara Digital",
        "description": "Authority-driven AI systems architecture and digital strategy consulting",
        "url": "https://zinara.digital",
        "logo": "https://zinara.digital/logo.svg",
        "sameAs": [
            "https://linkedin.com/company/zinara-digital",
            "https://twitter.com/zinara-digital"
        ],
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "Customer Service",
            "email": "hello@zinara.digital"
        }
    }))
}

fn feature_list(items: &[(&str, &str)]) -> Markup {
    html! {
        ul {
            @for (title, description) in items {
                li { strong { (title) } " " span class="muted" { (description) } }
            }
        }
    }
}

pub fn home_page(integrations: &Integrations) -> Markup {
    let content = html! {
        section class="container" {
            p class="accent" { "STRATEGIC AUTHORITY" }
            h1 { "AI Systems Architecture for Strategic Advantage" }
            p class="muted" {
                "We build decision-advantage through precision AI systems and authority-driven \
                 digital strategy. No trend participation, only compounding strategic assets."
            }
            p { a href="/contact" class="accent" { "Schedule a Consultation" } }
        }
        section id="ai-systems" class="container" {
            h2 { "AI Systems Architecture That Scales" }
            (feature_list(&AI_SYSTEMS))
        }
        section id="digital-strategy" class="container" {
            p class="accent" { "Strategic Positioning" }
            h2 { "Digital Strategy for Authority Building" }
            (feature_list(&DIGITAL_STRATEGY))
        }
        section id="case-studies" class="container" {
            h2 { "Ready to Build Strategic Advantage?" }
            p class="muted" { "Trusted by forward-thinking organizations." }
            p { a href="/contact" class="accent" { "Start the conversation" } }
        }
    };
    render_page(&meta(), integrations, content)
}
