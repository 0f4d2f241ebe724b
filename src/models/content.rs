//! Structured page content.
//!
//! Pages are described as a flat list of [`Block`]s so the same content can
//! be rendered by the prerender templates and by the client views.

use serde::Serialize;

/// A block-level piece of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Top-level heading (`<h1>`).
    Heading { text: String },
    /// Section heading (`<h2>`).
    Subheading { text: String },
    /// Paragraph made of inline runs.
    Paragraph { inlines: Vec<Inline> },
    /// Thematic break (`<hr>`).
    Rule,
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Self::Subheading { text: text.into() }
    }

    /// Paragraph containing a single plain text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            inlines: vec![Inline::text(text)],
        }
    }

    /// Paragraph built from arbitrary inline runs.
    pub fn rich(inlines: Vec<Inline>) -> Self {
        Self::Paragraph { inlines }
    }

    /// Visible text of this block, without markup.
    pub fn text(&self) -> String {
        match self {
            Self::Heading { text } | Self::Subheading { text } => text.clone(),
            Self::Paragraph { inlines } => inlines.iter().map(Inline::text_content).collect(),
            Self::Rule => String::new(),
        }
    }
}

/// An inline run inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Strong { text: String },
    /// Hyperlink. Root-relative hrefs are routed client-side.
    Link {
        href: String,
        label: String,
        strong: bool,
    },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::Strong { text: text.into() }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            label: label.into(),
            strong: false,
        }
    }

    /// Link rendered inside `<strong>`.
    pub fn strong_link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            label: label.into(),
            strong: true,
        }
    }

    fn text_content(&self) -> &str {
        match self {
            Self::Text { text } | Self::Strong { text } => text,
            Self::Link { label, .. } => label,
        }
    }
}
