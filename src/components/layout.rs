//! Site chrome: header with logo and main navigation, content area, footer.
//!
//! Class names match `assets/templates/layout.html` so prerendered and
//! client-rendered pages share one stylesheet.

use leptos::prelude::*;

use crate::app::SiteContext;
use crate::components::router::SiteLink;
use crate::config::{HOME_PATH, LOGO_SVG};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext must be provided at root");
    let (name, footer, nav) = site
        .config
        .with_value(|c| (c.name.clone(), c.footer.clone(), c.nav.clone()));

    let nav_items = nav
        .into_iter()
        .map(|item| {
            view! {
                <li>
                    <SiteLink href=item.href>{item.label}</SiteLink>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="site">
            <header class="site__header">
                <div class="container site__header-content">
                    <SiteLink href=HOME_PATH title=name class="site__header-home-link">
                        <Logo />
                    </SiteLink>
                    <nav aria-label="Main navigation" class="site__header-nav">
                        <ul>{nav_items}</ul>
                    </nav>
                </div>
            </header>
            <div class="site__main">
                <div class="container site__main-content">{children()}</div>
            </div>
            <footer class="site__footer">
                <div class="container site__footer-content">
                    <p>{footer}</p>
                </div>
            </footer>
        </div>
    }
}

/// Inline SVG logo.
#[component]
pub fn Logo() -> impl IntoView {
    view! { <span class="site__logo" inner_html=LOGO_SVG></span> }
}
