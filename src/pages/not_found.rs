use maud::{html, Markup};

use crate::integrations::Integrations;
use crate::pages::render_page;
use crate::seo::PageMeta;

pub fn not_found_page(integrations: &Integrations) -> Markup {
    let meta = PageMeta::new(
        "Page Not Found - Zinara Digital",
        "The page you are looking for does not exist.",
    );
    let content = html! {
        section class="container" {
            h1 { "404" }
            p class="muted" { "Sorry, the page you are looking for doesn't exist." }
            p { a href="/" class="accent" { "Go Home" } }
        }
    };
    render_page(&meta, integrations, content)
}
