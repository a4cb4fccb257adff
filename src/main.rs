//! Sitemap-Detector main entry point
//!
//! Runs the HTTP service, or a single detection from the command line.

use anyhow::Context;
use clap::Parser;
use sitemap_detector::config::{apply_overrides, load_config_with_hash, Config};
use sitemap_detector::server::{self, AppState, DetectResponse};
use sitemap_detector::SitemapDetector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitemap-Detector: finds the sitemaps a website publishes
///
/// Serves `GET /detect_sitemap?url=<site>`, trying robots.txt, well-known
/// sitemap paths and `<link rel="sitemap">` tags in that order.
#[derive(Parser, Debug)]
#[command(name = "sitemap-detector")]
#[command(version)]
#[command(about = "Sitemap discovery service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Interface address to bind (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and print the effective settings without serving
    #[arg(long, conflicts_with = "detect")]
    dry_run: bool,

    /// Detect sitemaps for one URL, print the JSON result and exit
    #[arg(long, value_name = "URL")]
    detect: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    apply_overrides(&mut config, cli.host, cli.port)
        .context("invalid --host/--port override")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let detector = SitemapDetector::from_config(&config)?;

    match cli.detect {
        Some(url) => handle_detect(detector, url).await,
        None => handle_serve(&config, detector).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG`, when set, takes precedence over the flags.
fn setup_logging(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "sitemap_detector=info,tower_http=info,warn",
            1 => "sitemap_detector=debug,tower_http=debug,info",
            2 => "sitemap_detector=trace,tower_http=trace,debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Sitemap-Detector Dry Run ===\n");

    println!("Server:");
    println!("  Listen address: {}", config.server.bind_address());

    println!("\nHTTP client:");
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);
    println!("  Max redirects: {}", config.http.max_redirects);
    println!("  User agent: {}", config.http.user_agent);

    println!("\nCache:");
    println!("  Max entries: {}", config.cache.max_entries);
    match config.cache.ttl_secs {
        Some(ttl) => println!("  TTL: {}s", ttl),
        None => println!("  TTL: none (entries kept until evicted)"),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --detect mode: one lookup, JSON on stdout
async fn handle_detect(detector: SitemapDetector, url: String) -> anyhow::Result<()> {
    let sitemaps = detector.detect_sitemap(&url).await;
    let response = DetectResponse { url, sitemaps };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Handles the default mode: serve until Ctrl-C
async fn handle_serve(config: &Config, detector: SitemapDetector) -> anyhow::Result<()> {
    let listener = server::bind(&config.server)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?;

    let app = server::router(AppState::new(detector));
    server::serve(listener, app, server::shutdown_signal()).await?;

    Ok(())
}
