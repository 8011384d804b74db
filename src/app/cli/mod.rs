//! CLI Adapter.

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::app::api::NewSiteOptions;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "siteup")]
#[command(version)]
#[command(
    about = "Provision nginx virtual hosts and Let's Encrypt certificates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold siteup.toml, the default templates and the sites directory
    #[clap(visible_alias = "i")]
    Init,
    /// Provision a site: challenge config, certificate, backend proxy
    #[clap(visible_alias = "n")]
    New {
        /// Primary domain (prompted for when omitted)
        #[arg(long)]
        domain: Option<String>,
        /// Serve www.<domain> too, without asking
        #[arg(long, conflicts_with = "no_www")]
        www: bool,
        /// Skip the www alias, without asking
        #[arg(long, conflicts_with = "www")]
        no_www: bool,
        /// Certificate account email (prompted for when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Backend URL to proxy to (prompted for when omitted)
        #[arg(long)]
        proxy_host: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => run_init(),
        Commands::New { domain, www, no_www, email, proxy_host } => {
            run_new(domain, www, no_www, email, proxy_host)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init() -> Result<(), AppError> {
    let outcome = api::init()?;
    for path in &outcome.written {
        println!("✅ Wrote {}", path.display());
    }
    for path in &outcome.skipped {
        println!("⚠️ Skipped {} (already exists)", path.display());
    }
    println!("✅ Done");
    Ok(())
}

fn run_new(
    domain: Option<String>,
    www: bool,
    no_www: bool,
    email: Option<String>,
    proxy_host: Option<String>,
) -> Result<(), AppError> {
    let www_alias = match (www, no_www) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let options = NewSiteOptions { domain, www_alias, email, proxy_target: proxy_host };

    let outcome = api::new_site(&options)?;
    match &outcome.backend {
        Some(target) => {
            println!("✅ {} now proxies to {}", outcome.request.primary_domain(), target);
        }
        None => println!("✅ Certificate ready for {}", outcome.request.server_names()),
    }
    println!("✅ Done");
    Ok(())
}
