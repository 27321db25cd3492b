//! jobdeck - job-board front end server and CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobdeck_core::SiteConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jobdeck",
    version,
    about = "Job-board front end",
    long_about = "Serves the jobdeck SPA (Leptos/WASM) and its small JSON API.\n\
                  \n\
                  Examples:\n\
                    jobdeck                          # Serve on the configured port\n\
                    jobdeck web --port 8080          # Custom port\n\
                    jobdeck web --open               # Open the browser after binding\n\
                    jobdeck config                   # Print the effective site config\n\
                  \n\
                  Environment Variables:\n\
                    JOBDECK_CONFIG                   # Override config file path\n\
                    JOBDECK_PORT                     # Override web server port"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Path to the site config file (default: <config_dir>/jobdeck/config.json)
    #[arg(long, env = "JOBDECK_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server (default)
    Web {
        /// Port for the web server (default: from config)
        #[arg(long, env = "JOBDECK_PORT")]
        port: Option<u16>,
        /// Open the browser after the server starts
        #[arg(long)]
        open: bool,
    },
    /// Print the effective site config and exit
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .or_else(|| dirs::config_dir().map(|dir| dir.join("jobdeck/config.json")))
        .context("Could not determine config directory")?;
    let config = SiteConfig::load(&config_path);

    match cli.mode.unwrap_or(Mode::Web {
        port: None,
        open: false,
    }) {
        Mode::Web { port, open } => {
            let port = port.unwrap_or(config.default_port);
            tracing::info!(config = %config_path.display(), port, "starting web server");
            if open {
                let url = format!("http://127.0.0.1:{}", port);
                open::that(&url).with_context(|| format!("Failed to open {}", url))?;
            }
            jobdeck_web::run(config, port).await?;
        }
        Mode::Config { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("config file:      {}", config_path.display());
                println!("brand:            {}", config.brand);
                println!("tagline:          {}", config.tagline);
                println!("auth origin:      {}", config.auth_origin);
                println!("sign-in redirect: {}", config.sign_in_redirect);
                println!("default port:     {}", config.default_port);
            }
        }
    }

    Ok(())
}
