use std::fs;

use tubone_site::config::{ShellOptions, SiteConfig};
use tubone_site::core::Renderer;
use tubone_site::prerender::{NOT_FOUND_FILE, prerender_site};

fn renderer(options: ShellOptions) -> Renderer {
    Renderer::new(SiteConfig::bundled().unwrap(), options).unwrap()
}

#[test]
fn test_prerender_writes_every_document() {
    let dir = tempfile::tempdir().unwrap();
    let written = prerender_site(&renderer(ShellOptions::default()), dir.path()).unwrap();

    assert_eq!(written.len(), 3);
    assert!(dir.path().join("index.html").is_file());
    assert!(dir.path().join("about").join("index.html").is_file());
    assert!(dir.path().join(NOT_FOUND_FILE).is_file());
}

#[test]
fn test_prerendered_pages() {
    let dir = tempfile::tempdir().unwrap();
    prerender_site(&renderer(ShellOptions::default()), dir.path()).unwrap();

    let home = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(home.contains("<title>tubone24</title>"));
    assert!(home.contains(r#"aria-label="Main navigation""#));
    assert!(!home.contains("WebSocket"));

    let about = fs::read_to_string(dir.path().join("about").join("index.html")).unwrap();
    assert!(about.contains("<title>About tubone24</title>"));
    assert!(about.contains("<h2>About tubone24</h2>"));
    assert!(about.contains(r#"<div class="about">"#));
    assert!(about.contains("about.css"));

    let not_found = fs::read_to_string(dir.path().join(NOT_FOUND_FILE)).unwrap();
    assert!(not_found.contains("<title>404 Not Found</title>"));
    assert!(not_found.contains("<h1>404: Not Found</h1>"));
    assert!(not_found.contains("a page that does not exist"));
}

#[test]
fn test_prerender_in_development_includes_live_reload() {
    let dir = tempfile::tempdir().unwrap();
    let options = ShellOptions::resolve(Some("development"), 8002);
    prerender_site(&renderer(options), dir.path()).unwrap();

    let home = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(home.contains("WebSocket"));
    assert!(home.contains(":8002/socket"));
}
