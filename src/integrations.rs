use crate::configuration::IntegrationSettings;
use crate::document::{Document, PageHook, Slot, Tag, TagKey};

const GTAG_SCRIPT: &str = "https://www.googletagmanager.com/gtag/js";
const GTM_NOSCRIPT: &str = "https://www.googletagmanager.com/ns.html";
const TIDIO_SCRIPT: &str = "https://cdn.tidio.co/js/embed.js";

/// Google Tag Manager / GA4 tags.
#[derive(Debug, Clone, Default)]
pub struct Analytics {
    pub gtm_id: Option<String>,
    pub ga4_id: Option<String>,
}

impl Analytics {
    const INIT: &'static str = "gtag-init";
    const NOSCRIPT: &'static str = "gtm-noscript";

    fn gtag_src(&self) -> Option<String> {
        let id = self.ga4_id.as_deref().or(self.gtm_id.as_deref())?;
        Some(format!("{}?id={}", GTAG_SCRIPT, id))
    }

    fn init_script(&self) -> Option<Tag> {
        let id = self.ga4_id.as_deref().or(self.gtm_id.as_deref())?;
        Some(Tag::InlineScript {
            id: Self::INIT,
            code: format!(
                "window.dataLayer = window.dataLayer || [];\
                 function gtag(){{dataLayer.push(arguments);}}\
                 gtag('js', new Date());\
                 gtag('config', {}, {{'page_path': window.location.pathname, 'page_title': document.title}});",
                js_string(id)
            ),
        })
    }
}

impl PageHook for Analytics {
    fn mount(&self, document: &mut Document) {
        let Some(src) = self.gtag_src() else {
            return;
        };
        document.upsert(Slot::Head, Tag::ExternalScript { src });
        if let Some(gtm_id) = &self.gtm_id {
            document.upsert(
                Slot::BodyEnd,
                Tag::NoScriptFrame {
                    id: Self::NOSCRIPT,
                    src: format!("{}?id={}", GTM_NOSCRIPT, gtm_id),
                },
            );
        }
        if let Some(init) = self.init_script() {
            document.upsert(Slot::Head, init);
        }
    }

    fn unmount(&self, document: &mut Document) {
        if let Some(src) = self.gtag_src() {
            document.remove(&TagKey::ScriptSrc(src));
        }
        document.remove(&TagKey::Inline(Self::NOSCRIPT));
        document.remove(&TagKey::Inline(Self::INIT));
    }
}

/// The Tidio chat widget.
#[derive(Debug, Clone, Default)]
pub struct ChatWidget {
    pub project_id: Option<String>,
}

impl ChatWidget {
    const INIT: &'static str = "tidio-init";
}

impl PageHook for ChatWidget {
    fn mount(&self, document: &mut Document) {
        let Some(project_id) = &self.project_id else {
            return;
        };
        document.upsert(
            Slot::BodyEnd,
            Tag::ExternalScript {
                src: TIDIO_SCRIPT.to_string(),
            },
        );
        document.upsert(
            Slot::BodyEnd,
            Tag::InlineScript {
                id: Self::INIT,
                code: format!(
                    "window.addEventListener('load', function () {{\
                     if (window.tidioChatApi) {{ window.tidioChatApi.init({{ projectId: {} }}); }}\
                     }});",
                    js_string(project_id)
                ),
            },
        );
    }

    fn unmount(&self, document: &mut Document) {
        document.remove(&TagKey::ScriptSrc(TIDIO_SCRIPT.to_string()));
        document.remove(&TagKey::Inline(Self::INIT));
    }
}

/// Every third-party embed the site loads, built from configuration.
#[derive(Debug, Clone, Default)]
pub struct Integrations {
    pub analytics: Analytics,
    pub chat: ChatWidget,
}

impl From<IntegrationSettings> for Integrations {
    fn from(settings: IntegrationSettings) -> Self {
        // blank ids in yaml or env vars mean "off"
        let non_blank = |id: Option<String>| id.filter(|id| !id.trim().is_empty());
        Self {
            analytics: Analytics {
                gtm_id: non_blank(settings.gtm_id),
                ga4_id: non_blank(settings.ga4_id),
            },
            chat: ChatWidget {
                project_id: non_blank(settings.tidio_project_id),
            },
        }
    }
}

impl PageHook for Integrations {
    fn mount(&self, document: &mut Document) {
        self.analytics.mount(document);
        self.chat.mount(document);
    }

    fn unmount(&self, document: &mut Document) {
        self.chat.unmount(document);
        self.analytics.unmount(document);
    }
}

// a JSON string literal is a valid JS string literal; `</` is split so it cannot end the script
fn js_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace("</", "<\\/")
}
