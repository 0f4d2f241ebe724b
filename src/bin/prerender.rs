//! Prerenders every route of the site into static HTML documents.
//!
//! ```text
//! tubone-prerender --out dist
//! SITE_ENV=development tubone-prerender --out dist --live-reload-port 8002
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing::info;
    use tracing_subscriber::EnvFilter;
    use tubone_site::config::{ShellOptions, SiteConfig};
    use tubone_site::core::Renderer;
    use tubone_site::prerender::prerender_site;

    #[derive(Parser, Debug)]
    #[command(name = "tubone-prerender", about = "Render the site's static documents")]
    struct Args {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Site configuration file (defaults to the bundled one)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Build environment; `development` enables live reload
        #[arg(long, env = "SITE_ENV", default_value = "production")]
        env: String,

        /// Live-reload socket port (defaults to the site configuration)
        #[arg(long)]
        live_reload_port: Option<u16>,
    }

    pub fn run() -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();

        let args = Args::parse();

        let site = match &args.config {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::bundled()?,
        };
        let port = args.live_reload_port.unwrap_or(site.live_reload_port);
        let options = ShellOptions::resolve(Some(&args.env), port);
        info!(
            env = %args.env,
            live_reload = options.enable_live_reload,
            "configuration loaded"
        );

        let renderer = Renderer::new(site, options)?;
        prerender_site(&renderer, &args.out)
            .with_context(|| format!("prerendering into {}", args.out.display()))?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
