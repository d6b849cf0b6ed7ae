//! Server-side model of the tags a page carries outside its body content.
//!
//! Every tag has a stable [`TagKey`]. Writing a tag whose key is already
//! present replaces it in place, so mounting the same hook twice leaves the
//! document unchanged.

use maud::{html, Markup, PreEscaped};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// `meta[name=..]`
    MetaName(String),
    /// `meta[property=..]`
    MetaProperty(String),
    /// `link[rel=canonical]`
    Canonical,
    /// `script[type=application/ld+json]`
    StructuredData,
    /// `script[src=..]`
    ScriptSrc(String),
    /// An inline script or noscript block, named by its owner.
    Inline(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Meta { name: String, content: String },
    MetaProperty { property: String, content: String },
    Canonical { href: String },
    StructuredData(serde_json::Value),
    ExternalScript { src: String },
    InlineScript { id: &'static str, code: String },
    NoScriptFrame { id: &'static str, src: String },
}

impl Tag {
    pub fn key(&self) -> TagKey {
        match self {
            Tag::Meta { name, .. } => TagKey::MetaName(name.clone()),
            Tag::MetaProperty { property, .. } => TagKey::MetaProperty(property.clone()),
            Tag::Canonical { .. } => TagKey::Canonical,
            Tag::StructuredData(_) => TagKey::StructuredData,
            Tag::ExternalScript { src } => TagKey::ScriptSrc(src.clone()),
            Tag::InlineScript { id, .. } | Tag::NoScriptFrame { id, .. } => TagKey::Inline(id),
        }
    }

    pub fn render(&self) -> Markup {
        match self {
            Tag::Meta { name, content } => html! { meta name=(name) content=(content); },
            Tag::MetaProperty { property, content } => {
                html! { meta property=(property) content=(content); }
            }
            Tag::Canonical { href } => html! { link rel="canonical" href=(href); },
            // `</` cannot appear inside the script body, or it would close the tag early
            Tag::StructuredData(data) => html! {
                script type="application/ld+json" {
                    (PreEscaped(data.to_string().replace("</", "<\\/")))
                }
            },
            Tag::ExternalScript { src } => html! { script async src=(src) {} },
            Tag::InlineScript { id, code } => html! {
                script data-key=(id) { (PreEscaped(code)) }
            },
            Tag::NoScriptFrame { id, src } => html! {
                noscript data-key=(id) {
                    iframe src=(src) height="0" width="0" style="display:none;visibility:hidden" {}
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Head,
    BodyEnd,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    title: String,
    head: Vec<Tag>,
    body_end: Vec<Tag>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Creates the tag if its key is absent from `slot`, else updates it in place.
    pub fn upsert(&mut self, slot: Slot, tag: Tag) {
        let tags = self.slot_mut(slot);
        let key = tag.key();
        match tags.iter_mut().find(|existing| existing.key() == key) {
            Some(existing) => *existing = tag,
            None => tags.push(tag),
        }
    }

    /// Removes the tag with `key` from whichever slot holds it.
    pub fn remove(&mut self, key: &TagKey) -> Option<Tag> {
        for slot in [Slot::Head, Slot::BodyEnd] {
            let tags = self.slot_mut(slot);
            if let Some(index) = tags.iter().position(|tag| tag.key() == *key) {
                return Some(tags.remove(index));
            }
        }
        None
    }

    pub fn get(&self, key: &TagKey) -> Option<&Tag> {
        self.head
            .iter()
            .chain(self.body_end.iter())
            .find(|tag| tag.key() == *key)
    }

    pub fn tags(&self, slot: Slot) -> &[Tag] {
        match slot {
            Slot::Head => &self.head,
            Slot::BodyEnd => &self.body_end,
        }
    }

    pub fn render_slot(&self, slot: Slot) -> Markup {
        html! {
            @for tag in self.tags(slot) {
                (tag.render())
            }
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Vec<Tag> {
        match slot {
            Slot::Head => &mut self.head,
            Slot::BodyEnd => &mut self.body_end,
        }
    }
}

/// Per-render setup run against a page's [`Document`].
pub trait PageHook {
    fn mount(&self, document: &mut Document);

    fn unmount(&self, _document: &mut Document) {}
}
