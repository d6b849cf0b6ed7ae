use crate::document::{Document, PageHook, Slot, Tag};

/// Search and social metadata for one page.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub structured_data: Option<serde_json::Value>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }

    pub fn og_image(mut self, url: impl Into<String>) -> Self {
        self.og_image = Some(url.into());
        self
    }

    pub fn structured_data(mut self, data: serde_json::Value) -> Self {
        self.structured_data = Some(data);
        self
    }
}

fn meta(name: &str, content: &str) -> Tag {
    Tag::Meta {
        name: name.to_string(),
        content: content.to_string(),
    }
}

fn property(property: &str, content: &str) -> Tag {
    Tag::MetaProperty {
        property: property.to_string(),
        content: content.to_string(),
    }
}

impl PageHook for PageMeta {
    fn mount(&self, document: &mut Document) {
        let title = self.title.as_str();
        let description = self.description.as_str();

        document.set_title(title);
        document.upsert(Slot::Head, meta("description", description));

        document.upsert(
            Slot::Head,
            property("og:title", self.og_title.as_deref().unwrap_or(title)),
        );
        document.upsert(
            Slot::Head,
            property(
                "og:description",
                self.og_description.as_deref().unwrap_or(description),
            ),
        );
        document.upsert(
            Slot::Head,
            property("og:type", self.og_type.as_deref().unwrap_or("website")),
        );
        if let Some(image) = &self.og_image {
            document.upsert(Slot::Head, property("og:image", image));
        }

        document.upsert(
            Slot::Head,
            meta(
                "twitter:card",
                self.twitter_card.as_deref().unwrap_or("summary_large_image"),
            ),
        );
        document.upsert(
            Slot::Head,
            meta("twitter:title", self.twitter_title.as_deref().unwrap_or(title)),
        );
        document.upsert(
            Slot::Head,
            meta(
                "twitter:description",
                self.twitter_description.as_deref().unwrap_or(description),
            ),
        );
        if let Some(image) = &self.twitter_image {
            document.upsert(Slot::Head, meta("twitter:image", image));
        }

        if let Some(href) = &self.canonical {
            document.upsert(Slot::Head, Tag::Canonical { href: href.clone() });
        }
        if let Some(data) = &self.structured_data {
            document.upsert(Slot::Head, Tag::StructuredData(data.clone()));
        }
    }
}
