//! Video Portfolio CLI
//!
//! Thin wrapper around portfolio-core for working with a catalog file
//! outside the browser.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a catalog and report what it contains
//! portfolio check videodata.json
//!
//! # List what the home page would feature
//! portfolio featured videodata.json --kind video
//!
//! # Prerender the grids for a page as an HTML fragment
//! portfolio render videodata.json --view all-shorts
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use portfolio_core::render::render_section;
use portfolio_core::{
    build_grid, load_catalog, section_view, CardStyle, Catalog, CatalogSource, EntryKind,
    FetchResponse, LoadState, MarkupTarget, PageContext, PortfolioConfig, RenderTarget, ViewMode,
};

/// Video Portfolio - catalog tooling
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Video Portfolio - catalog tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Portfolio config file (JSON); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog and summarize its entries
    Check {
        /// Catalog file (default: the configured catalog url)
        catalog: Option<PathBuf>,
    },

    /// List the entries the home page features
    Featured {
        /// Catalog file (default: the configured catalog url)
        catalog: Option<PathBuf>,

        /// Only list one kind
        #[arg(short, long)]
        kind: Option<KindArg>,
    },

    /// Prerender the grids of a page as an HTML fragment
    Render {
        /// Catalog file (default: the configured catalog url)
        catalog: Option<PathBuf>,

        /// Page view: featured, all-videos or all-shorts
        #[arg(long, default_value = "featured")]
        view: ViewMode,

        /// Render as if the page were opened from disk
        #[arg(long)]
        unserved: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Video,
    Short,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Video => EntryKind::Video,
            KindArg::Short => EntryKind::Short,
        }
    }
}

/// Reads catalog resources from the local filesystem.
///
/// A missing file answers like a 404 so the pipeline classifies it the
/// same way the browser would.
struct FileSource;

impl CatalogSource for FileSource {
    async fn fetch(&self, resource: &str) -> Result<FetchResponse, String> {
        tracing::debug!(resource, "Reading catalog file");
        match tokio::fs::read_to_string(resource).await {
            Ok(body) => {
                tracing::debug!(resource, bytes = body.len(), "Read catalog file");
                Ok(FetchResponse::ok(body))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(resource, "Catalog file not found");
                Ok(FetchResponse::status(404, "Not Found"))
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<PortfolioConfig> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading config");
            PortfolioConfig::load(path)
                .with_context(|| format!("Failed to read config {}", path.display()))
        }
        None => Ok(PortfolioConfig::default()),
    }
}

fn resource_for(catalog: Option<PathBuf>, config: &PortfolioConfig) -> String {
    catalog
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| config.catalog_url.clone())
}

/// Load a catalog that must succeed for the command to make sense.
async fn require_catalog(resource: &str) -> Result<Catalog> {
    let page = PageContext::new("http:", "index.html");
    match load_catalog(&page, &FileSource, resource).await {
        Ok(catalog) => Ok(catalog),
        Err(failure) => bail!("{}\n  cause: {}", failure.user_message(), failure),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let style = CardStyle::from(&config);

    match cli.command {
        Commands::Check { catalog } => {
            let resource = resource_for(catalog, &config);
            let catalog = require_catalog(&resource).await?;

            println!("Catalog: {}", resource);
            println!("  Entries: {}", catalog.len());
            println!("  Videos: {}", catalog.count(&EntryKind::Video));
            println!("  Shorts: {}", catalog.count(&EntryKind::Short));

            let mut warnings = 0;
            for (position, entry) in catalog.entries().iter().enumerate() {
                if entry.kind == EntryKind::Other {
                    println!("  warning: entry #{} (id {}) has no known type", position, entry.id);
                    warnings += 1;
                }
                if entry.embed_id.trim().is_empty() {
                    println!("  warning: entry #{} (id {}) has no embed id", position, entry.id);
                    warnings += 1;
                }
                if entry.id.numeric().is_none() {
                    println!(
                        "  warning: entry #{} (id {}) has a non-numeric id and sorts last",
                        position, entry.id
                    );
                    warnings += 1;
                }
            }

            if warnings == 0 {
                println!("OK");
            } else {
                println!("{} warning(s)", warnings);
            }
        }

        Commands::Featured { catalog, kind } => {
            let resource = resource_for(catalog, &config);
            let catalog = require_catalog(&resource).await?;

            let kinds: Vec<EntryKind> = match kind {
                Some(kind) => vec![kind.into()],
                None => ViewMode::Featured.kinds().to_vec(),
            };

            for kind in kinds {
                let grid = build_grid(&catalog, &kind, ViewMode::Featured, &style);
                println!("Featured {}:", kind.plural());
                if grid.cards().is_empty() {
                    println!("  (none)");
                }
                for card in grid.cards() {
                    println!("  [{}] {}", card.id, card.title);
                    println!("      {}", card.summary);
                    println!("      {}", card.embed_url);
                }
                if let Some(more) = grid.more() {
                    println!("  {} -> {}", more.label, more.href());
                }
                println!();
            }
        }

        Commands::Render {
            catalog,
            view,
            unserved,
        } => {
            let resource = resource_for(catalog, &config);
            let protocol = if unserved { "file:" } else { "http:" };
            let page = PageContext::new(protocol, view.href());

            // Render failures into the page like the browser does
            let state = LoadState::from_result(load_catalog(&page, &FileSource, &resource).await);

            tracing::info!(%view, unserved, ready = state.catalog().is_some(), "Prerendering page");

            let mut target = MarkupTarget::new();
            for kind in view.kinds() {
                let section = section_view(&state, kind, view, &style);
                render_section(&mut target, &section);
                println!(
                    "<div id=\"{}Grid\" class=\"video-grid\">{}</div>",
                    kind.plural(),
                    target.to_html()
                );
                target.clear();
            }
        }
    }

    Ok(())
}
