//! Static prerendering of every route.
//!
//! Produces the server-rendered pass of the site: one document per route
//! plus the 404 page served for unknown paths. The client takes over from
//! these documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::{PrerenderError, Renderer, Route, catch_boundary, render_outcome, resolve};
use crate::models::CaughtRouteFailure;

/// File served by static hosts for unknown paths.
pub const NOT_FOUND_FILE: &str = "404.html";

/// Render all documents into `out_dir`, returning the written paths.
pub fn prerender_site(renderer: &Renderer, out_dir: &Path) -> Result<Vec<PathBuf>, PrerenderError> {
    let mut written = Vec::new();

    for route in Route::ALL {
        let screen = render_outcome(resolve(route.path()));
        let html = renderer.screen(&screen)?;
        written.push(write_document(out_dir, &output_path(route.path()), &html)?);
    }

    let not_found = catch_boundary(CaughtRouteFailure::not_found());
    let html = renderer.screen(&not_found)?;
    written.push(write_document(out_dir, Path::new(NOT_FOUND_FILE), &html)?);

    info!(
        documents = written.len(),
        out_dir = %out_dir.display(),
        "prerender complete"
    );
    Ok(written)
}

/// Relative output file for a route path: `/` → `index.html`,
/// `/about` → `about/index.html`.
pub fn output_path(route_path: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in route_path.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    path
}

fn write_document(out_dir: &Path, relative: &Path, html: &str) -> Result<PathBuf, PrerenderError> {
    let path = out_dir.join(relative);
    let write_error = |source| PrerenderError::Write {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(&path, html).map_err(write_error)?;

    debug!(path = %path.display(), bytes = html.len(), "wrote document");
    Ok(path)
}
