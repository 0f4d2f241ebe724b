//! Document shell rendering.
//!
//! The [`Renderer`] owns a `minijinja` environment with the bundled
//! templates and wraps rendered content in the full HTML envelope: head
//! metadata, stylesheet links, the client mount root, scroll restoration,
//! the client bootstrap and, in development, the live-reload socket.
//!
//! The route-change live region has no server-rendered form; the client
//! mounts it after takeover.

use minijinja::{Environment, Value, context};
use serde::Serialize;

use crate::config::{
    APP_ROOT_ID, ClientAssets, LOGO_SVG, SCROLL_STORAGE_KEY, ShellOptions, SiteConfig,
};
use crate::core::error::RenderError;
use crate::models::{LinkDescriptor, Page, PageMeta, Screen};

const DOCUMENT_TEMPLATE: &str = include_str!("../../assets/templates/document.html");
const LAYOUT_TEMPLATE: &str = include_str!("../../assets/templates/layout.html");
const CONTENT_TEMPLATE: &str = include_str!("../../assets/templates/content.html");

const SCROLL_RESTORATION_JS: &str = r#"(function () {
  if (!("scrollRestoration" in window.history)) return;
  window.history.scrollRestoration = "manual";
  try {
    var saved = JSON.parse(window.sessionStorage.getItem({key}) || "{}");
    var path = window.location.pathname.replace(/\/+$/, "") || "/";
    var offset = saved[path];
    if (typeof offset === "number") window.scrollTo(0, offset);
  } catch (error) {}
})();"#;

const BOOTSTRAP_JS: &str = r#"import init from {script};
init({ module_or_path: {wasm} });"#;

const LIVE_RELOAD_JS: &str = r#"(function () {
  var socket = new WebSocket("ws://" + window.location.hostname + ":{port}/socket");
  socket.onmessage = function (message) {
    var event = JSON.parse(message.data);
    if (event.type === "LOG") console.log(event.message);
    if (event.type === "RELOAD") {
      console.log("Reloading window ...");
      window.location.reload();
    }
  };
  socket.onerror = function (error) {
    console.log("Live reload socket error:");
    console.error(error);
  };
})();"#;

// ============================================================================
// DocumentShell
// ============================================================================

/// Page envelope around already rendered child markup.
#[derive(Debug, Clone, Default)]
pub struct DocumentShell {
    title: Option<String>,
    meta: PageMeta,
    links: Vec<LinkDescriptor>,
    children: String,
}

impl DocumentShell {
    /// `children` is trusted markup and is emitted verbatim.
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            ..Self::default()
        }
    }

    /// Explicit `<title>`; without one the page meta title (if any) is used.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn meta(mut self, meta: PageMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Page-specific links, emitted after the site's root stylesheets.
    pub fn links(mut self, links: Vec<LinkDescriptor>) -> Self {
        self.links = links;
        self
    }

    pub fn render(&self, renderer: &Renderer) -> Result<String, RenderError> {
        renderer.document(self)
    }
}

// ============================================================================
// Renderer
// ============================================================================

pub struct Renderer {
    env: Environment<'static>,
    site: SiteConfig,
    options: ShellOptions,
}

impl Renderer {
    pub fn new(site: SiteConfig, options: ShellOptions) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for (name, template) in [
            ("document.html", DOCUMENT_TEMPLATE),
            ("layout.html", LAYOUT_TEMPLATE),
            ("content.html", CONTENT_TEMPLATE),
        ] {
            env.add_template(name, template)
                .map_err(|source| RenderError { name, source })?;
        }
        Ok(Self { env, site, options })
    }

    /// Render a full document for a screen: content, layout chrome, shell.
    pub fn screen(&self, screen: &Screen) -> Result<String, RenderError> {
        let content = self.content(&screen.page)?;
        let body = self.layout(content)?;
        let mut shell = DocumentShell::new(body)
            .meta(screen.page.meta.clone())
            .links(screen.page.links.clone());
        if let Some(title) = &screen.title {
            shell = shell.title(title.clone());
        }
        shell.render(self)
    }

    /// Render a page's body blocks.
    pub fn content(&self, page: &Page) -> Result<String, RenderError> {
        self.render("content.html", context! { page => page })
    }

    /// Wrap content markup in the header, navigation and footer.
    pub fn layout(&self, content: String) -> Result<String, RenderError> {
        self.render(
            "layout.html",
            context! {
                site => &self.site,
                logo => Value::from_safe_string(LOGO_SVG.to_string()),
                content => Value::from_safe_string(content),
            },
        )
    }

    pub fn document(&self, shell: &DocumentShell) -> Result<String, RenderError> {
        let links: Vec<&LinkDescriptor> =
            self.site.stylesheets.iter().chain(&shell.links).collect();
        let live_reload_script = if self.options.enable_live_reload {
            Value::from_safe_string(live_reload_script(self.options.live_reload_port))
        } else {
            Value::UNDEFINED
        };

        self.render(
            "document.html",
            context! {
                lang => &self.site.lang,
                title => &shell.title,
                meta => &shell.meta,
                links => links,
                preload => &self.site.assets.script,
                mount_id => APP_ROOT_ID,
                children => Value::from_safe_string(shell.children.clone()),
                scroll_script => Value::from_safe_string(scroll_restoration_script()),
                bootstrap_script => Value::from_safe_string(bootstrap_script(&self.site.assets)),
                live_reload_script => live_reload_script,
            },
        )
    }

    fn render<S: Serialize>(&self, name: &'static str, ctx: S) -> Result<String, RenderError> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|source| RenderError { name, source })
    }
}

// ============================================================================
// Inline Scripts
// ============================================================================

/// JS string literal that is also safe inside a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace("</", "<\\/")
}

fn scroll_restoration_script() -> String {
    SCROLL_RESTORATION_JS.replace("{key}", &js_string(SCROLL_STORAGE_KEY))
}

fn bootstrap_script(assets: &ClientAssets) -> String {
    BOOTSTRAP_JS
        .replace("{script}", &js_string(&assets.script))
        .replace("{wasm}", &js_string(&assets.wasm))
}

fn live_reload_script(port: u16) -> String {
    LIVE_RELOAD_JS.replace("{port}", &port.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Block;

    fn renderer(options: ShellOptions) -> Renderer {
        Renderer::new(SiteConfig::bundled().unwrap(), options).unwrap()
    }

    fn head(html: &str) -> &str {
        let end = html.find("</head>").unwrap();
        &html[..end]
    }

    #[test]
    fn test_title_rendered_when_given() {
        let html = DocumentShell::new("<p>x</p>")
            .title("Error!")
            .render(&renderer(ShellOptions::default()))
            .unwrap();
        assert!(head(&html).contains("<title>Error!</title>"));
        assert_eq!(html.matches("<title>").count(), 1);
    }

    #[test]
    fn test_no_title_without_one() {
        let html = DocumentShell::new("<p>x</p>")
            .render(&renderer(ShellOptions::default()))
            .unwrap();
        assert!(!html.contains("<title>"));
    }

    #[test]
    fn test_meta_slot() {
        let meta = PageMeta {
            title: Some("About tubone24".to_string()),
            description: Some("Who I am".to_string()),
        };
        let html = DocumentShell::new("")
            .meta(meta)
            .render(&renderer(ShellOptions::default()))
            .unwrap();
        let head = head(&html);
        assert!(head.contains("<title>About tubone24</title>"));
        assert!(head.contains(r#"<meta name="description" content="Who I am">"#));
        assert!(head.contains(r#"<meta charset="utf-8">"#));
        assert!(head.contains(r#"name="viewport""#));
    }

    #[test]
    fn test_root_links_precede_page_links() {
        let html = DocumentShell::new("")
            .links(vec![
                LinkDescriptor::stylesheet("/styles/about.css"),
                LinkDescriptor::stylesheet("/styles/print.css").with_media("print"),
            ])
            .render(&renderer(ShellOptions::default()))
            .unwrap();
        let global = html.find("global.css").unwrap();
        let dark = html.find("dark.css").unwrap();
        let about = html.find("about.css").unwrap();
        let print = html.find("print.css").unwrap();
        assert!(global < dark && dark < about && about < print);
        assert!(html.contains(r#"media="(prefers-color-scheme: dark)""#));
        assert!(html.contains(r#"media="print""#));
    }

    #[test]
    fn test_children_emitted_verbatim_inside_mount_root() {
        let html = DocumentShell::new("<main><h1>Hi & bye</h1></main>")
            .render(&renderer(ShellOptions::default()))
            .unwrap();
        assert!(html.contains(r#"<div id="app"><main><h1>Hi & bye</h1></main></div>"#));
    }

    #[test]
    fn test_client_bootstrap_and_scroll_restoration() {
        let html = DocumentShell::new("")
            .render(&renderer(ShellOptions::default()))
            .unwrap();
        assert!(html.contains(r#"import init from "/pkg/tubone_site.js";"#));
        assert!(html.contains(r#"module_or_path: "/pkg/tubone_site_bg.wasm""#));
        assert!(html.contains(r#"scrollRestoration = "manual""#));
        assert!(html.contains(r#"getItem("scroll-positions")"#));
    }

    #[test]
    fn test_live_reload_only_in_development() {
        let html = DocumentShell::new("")
            .render(&renderer(ShellOptions::resolve(Some("production"), 8002)))
            .unwrap();
        assert!(!html.contains("WebSocket"));

        let html = DocumentShell::new("")
            .render(&renderer(ShellOptions::resolve(Some("development"), 3001)))
            .unwrap();
        assert!(html.contains("WebSocket"));
        assert!(html.contains(r#"":3001/socket""#));
    }

    #[test]
    fn test_content_is_escaped() {
        let page = Page::new(vec![Block::paragraph("<script>alert(1)</script>")]);
        let html = renderer(ShellOptions::default()).content(&page).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_screen_includes_layout_chrome() {
        let screen = Screen::titled("Error!", Page::new(vec![Block::heading("There was an error")]));
        let html = renderer(ShellOptions::default()).screen(&screen).unwrap();
        assert!(html.contains(r#"aria-label="Main navigation""#));
        assert!(html.contains("<h1>There was an error</h1>"));
        assert!(html.contains("© tubone24"));
        assert!(html.contains("tubone Logo"));
        assert!(html.contains(">GitHub Stats</a>"));
        assert!(!html.contains(crate::config::ROUTE_REGION_ID));
    }

    /// Key the inline restore script derives from `location.pathname`.
    fn restore_key(pathname: &str) -> String {
        let trimmed = pathname.trim_end_matches('/');
        if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() }
    }

    #[test]
    fn test_scroll_restore_key_matches_saved_key() {
        let script = scroll_restoration_script();
        assert!(script.contains(r#"pathname.replace(/\/+$/, "") || "/""#));
        assert!(script.contains("saved[path]"));

        for pathname in ["/", "///", "/about", "/about/", "/about//"] {
            assert_eq!(restore_key(pathname), crate::core::routes::normalize_path(pathname));
        }
    }

    #[test]
    fn test_js_string_escapes_script_close() {
        assert_eq!(js_string("a</script>"), r#""a<\/script>""#);
    }
}
