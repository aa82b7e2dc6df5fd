#[cfg(target_arch = "wasm32")]
fn main() {
    use folio_logger::Logger;

    // Nothing to report to when the browser console cannot be attached.
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init().ok();

    dioxus::LaunchBuilder::web().with_context(folio_site::embedded_config()).launch(folio_site::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    prerender::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod prerender {
    use anyhow::{Context, Result};
    use clap::Parser;
    use folio::kernel::config::load_config;
    use folio::prelude::SiteConfig;
    use folio_logger::Logger;
    use std::path::{Path, PathBuf};
    use tracing::{info, warn};

    /// Prerenders the portfolio page to a static HTML file.
    #[derive(Debug, Parser)]
    #[command(name = "folio-site")]
    #[command(version = env!("CARGO_PKG_VERSION"))]
    #[command(about = "Prerenders the portfolio site to static HTML")]
    struct Cli {
        /// Site configuration file. Defaults to `site.*` in the working directory, then to
        /// the configuration embedded at build time.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Where to write the page
        #[arg(short, long, default_value = "dist/index.html")]
        out: PathBuf,
        /// Also write logs to daily rotated files in this directory
        #[arg(long)]
        log_dir: Option<PathBuf>,
    }

    pub(crate) fn run() -> Result<()> {
        let cli = Cli::parse();

        let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true);
        let _logger = match &cli.log_dir {
            Some(dir) => builder.path(dir).init()?,
            None => builder.init()?,
        };

        let config = resolve_config(cli.config.as_deref())?;
        let html = folio_site::prerender(config);

        if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&cli.out, html)
            .with_context(|| format!("Failed to write {}", cli.out.display()))?;

        info!(out = %cli.out.display(), "site prerendered");
        Ok(())
    }

    fn resolve_config(path: Option<&Path>) -> Result<SiteConfig> {
        if let Some(path) = path {
            return Ok(load_config(Some(path))?);
        }

        Ok(load_config(None::<&Path>).unwrap_or_else(|err| {
            warn!(%err, "no site config in the working directory, using the embedded one");
            folio_site::embedded_config()
        }))
    }
}
