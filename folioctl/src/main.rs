//! Folio CLI
//!
//! Command-line client for the live portfolio backend: renders the public
//! view, submits contact messages, and drives the admin editing round
//! trip.

use anyhow::Result;
use clap::Parser;
use folioctl::cli::{
    generate_completion, handle_admin, handle_contact, handle_open, handle_show, Cli, Commands,
    OutputFormat,
};
use folioctl::client::ApiClient;
use folioctl::config::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build configuration, highest priority first: CLI args, then env
    // overrides, then the config file, then defaults at build time.
    let mut builder = CliConfig::builder();
    if let Some(ref server) = cli.server {
        builder = builder.with_server_url(server)?;
    }
    if let Some(ref format) = cli.format {
        let format_str = match format {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        };
        builder = builder.with_output_format(format_str)?;
    }
    if let Some(verbose) = cli.verbose {
        builder = builder.with_verbose(verbose);
    }
    builder = builder.with_env_overrides();
    builder = builder.with_config_file(!cli.no_config)?;

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.verbose);

    let output_format = match config.output_format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    // Client construction is local; the first request is the first
    // network contact, and any failure surfaces there.
    let client = ApiClient::new(&config.server_url)?;

    let result = match cli.command {
        Commands::Show => handle_show(&client, &output_format).await,
        Commands::Open { ref path } => handle_open(&client, path, &output_format).await,
        Commands::Contact {
            name,
            email,
            message,
        } => handle_contact(&client, name, email, message).await,
        Commands::Admin { command } => handle_admin(&client, command, &output_format).await,
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if config.verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
