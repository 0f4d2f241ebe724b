//! Client rendering of structured page content.

use leptos::prelude::*;

use crate::components::router::SiteLink;
use crate::models::{Block, Inline, Page};

/// Body blocks of a page, inside the page's wrapper class if it has one.
#[component]
pub fn Content(page: Page) -> impl IntoView {
    let blocks = page.body.into_iter().map(block_view).collect_view();
    match page.class {
        Some(class) => view! { <div class=class>{blocks}</div> }.into_any(),
        None => blocks.into_any(),
    }
}

fn block_view(block: Block) -> AnyView {
    match block {
        Block::Heading { text } => view! { <h1>{text}</h1> }.into_any(),
        Block::Subheading { text } => view! { <h2>{text}</h2> }.into_any(),
        Block::Paragraph { inlines } => {
            let inlines = inlines.into_iter().map(inline_view).collect_view();
            view! { <p>{inlines}</p> }.into_any()
        }
        Block::Rule => view! { <hr /> }.into_any(),
    }
}

fn inline_view(inline: Inline) -> AnyView {
    match inline {
        Inline::Text { text } => text.into_any(),
        Inline::Strong { text } => view! { <strong>{text}</strong> }.into_any(),
        Inline::Link {
            href,
            label,
            strong: true,
        } => view! {
            <strong>
                <SiteLink href=href>{label}</SiteLink>
            </strong>
        }
        .into_any(),
        Inline::Link { href, label, .. } => {
            view! { <SiteLink href=href>{label}</SiteLink> }.into_any()
        }
    }
}
