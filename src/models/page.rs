//! Page descriptors handed to the document shell.

use serde::{Deserialize, Serialize};

use super::content::Block;

/// Metadata a page declares for the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Attributes of a `<link>` element injected into the head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    #[serde(default = "default_rel")]
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

fn default_rel() -> String {
    "stylesheet".to_string()
}

impl LinkDescriptor {
    /// Stylesheet link applying to all media.
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self {
            rel: default_rel(),
            href: href.into(),
            media: None,
        }
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }
}

/// A routed page: its declared head metadata, links and body content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub meta: PageMeta,
    pub links: Vec<LinkDescriptor>,
    /// Optional class of the wrapper element around the body.
    pub class: Option<String>,
    pub body: Vec<Block>,
}

impl Page {
    pub fn new(body: Vec<Block>) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn with_link(mut self, link: LinkDescriptor) -> Self {
        self.links.push(link);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Visible body text, one line per block.
    pub fn text(&self) -> String {
        self.body
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What a render path hands to the document shell.
///
/// `title` is the shell's explicit title (boundary pages set one); a
/// successfully routed page leaves it empty and relies on its own
/// [`PageMeta::title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: Option<String>,
    pub page: Page,
}

impl Screen {
    pub fn page(page: Page) -> Self {
        Self { title: None, page }
    }

    pub fn titled(title: impl Into<String>, page: Page) -> Self {
        Self {
            title: Some(title.into()),
            page,
        }
    }

    /// Title the browser ends up showing for this screen.
    pub fn document_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or(self.page.meta.title.as_deref())
    }
}
