//! Server-rendered pages. Each page mounts its metadata and the site-wide
//! integrations on a fresh [`Document`], then wraps its content in the layout.

mod contact;
mod home;
mod not_found;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::document::{Document, PageHook, Slot};
use crate::integrations::Integrations;
use crate::seo::PageMeta;

pub use contact::{contact_page, ContactView, ToastView};
pub use home::home_page;
pub use not_found::not_found_page;

const PAGE_CSS: &str = r#"
:root { color-scheme: dark; --accent: #d4a24c; --muted: #9a9a9a; --card: #161616; --border: #2a2a2a; --destructive: #e5484d; }
body { margin: 0; font-family: system-ui, sans-serif; background: #0d0d0d; color: #ededed; display: flex; flex-direction: column; min-height: 100vh; }
main { flex: 1; }
.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
header, footer { border-color: var(--border); border-style: solid; border-width: 0; }
header { border-bottom-width: 1px; } footer { border-top-width: 1px; color: var(--muted); }
nav a { color: inherit; margin-right: 1.5rem; text-decoration: none; }
.muted { color: var(--muted); } .accent { color: var(--accent); }
.card { background: var(--card); border: 1px solid var(--border); border-radius: .5rem; padding: 2rem; }
label { display: block; font-size: .875rem; margin-bottom: .5rem; }
input, textarea { width: 100%; box-sizing: border-box; padding: .5rem; background: var(--card); color: inherit; border: 1px solid var(--border); border-radius: .25rem; }
.field { margin-bottom: 1.5rem; } .field-error { color: var(--destructive); font-size: .875rem; margin-top: .25rem; }
button { width: 100%; padding: .75rem; background: var(--accent); border: 0; border-radius: .25rem; font-weight: 600; cursor: pointer; }
button:disabled { opacity: .6; cursor: wait; }
.toast { position: fixed; bottom: 1.5rem; right: 1.5rem; padding: 1rem 1.5rem; border-radius: .5rem; border: 1px solid var(--border); background: var(--card); }
.toast-success { border-color: #30a46c; } .toast-error { border-color: var(--destructive); }
"#;

pub(crate) fn render_page(meta: &PageMeta, integrations: &Integrations, content: Markup) -> Markup {
    let mut document = Document::new();
    meta.mount(&mut document);
    integrations.mount(&mut document);
    layout(&document, content)
}

fn layout(document: &Document, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (document.title()) }
                (document.render_slot(Slot::Head))
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (site_header())
                main { (content) }
                (site_footer())
                (document.render_slot(Slot::BodyEnd))
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header {
            div class="container" {
                p { a href="/" class="accent" { strong { "Zinara Digital" } } }
                nav {
                    a href="/#ai-systems" { "AI Systems" }
                    a href="/#digital-strategy" { "Digital Strategy" }
                    a href="/#case-studies" { "Case Studies" }
                    a href="/contact" { "Contact" }
                }
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer {
            div class="container" {
                p { strong { "Zinara Digital" } }
                p class="muted" {
                    "Authority-driven AI systems architecture and digital strategy."
                }
                p {
                    a href="mailto:hello@zinara.digital" class="muted" { "hello@zinara.digital" }
                }
            }
        }
    }
}
