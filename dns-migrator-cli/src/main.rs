//! CLI entry point for the DNS migrator
//!
//! Moves every eligible domain's zone from Neostrada to Openprovider. All
//! settings come from the environment (see `MigrationConfig`); the command line
//! only selects what to do.
//!
//! Exit code is `0` when every domain was published or had nothing to migrate,
//! `1` when any domain failed or the configuration is invalid.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dns_migrator_core::services::{
    write_listing_file, DomainLister, FileZoneCache, MigrationOptions, MigrationService,
};
use dns_migrator_core::{MigrationConfig, ServiceContext};
use dns_migrator_provider::log_sanitizer::mask_secret;
use dns_migrator_provider::{create_destination_provider, create_source_provider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "dns-migrator", version)]
#[command(about = "Migrate DNS zones from Neostrada to Openprovider")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Migrate every eligible domain (default)
    Migrate(MigrateArgs),
    /// Write the eligible domains to a listing file usable as JSON_FILE
    ListDomains {
        /// Output file (default: {OUTPUT_DIR}/all-domains.json)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct MigrateArgs {
    /// Fetch, transform and persist zone files without creating zones
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Migrate(MigrateArgs::default()));

    let result = match command {
        Command::Migrate(args) => run_migrate(&args).await,
        Command::ListDomains { output } => run_list_domains(output).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_migrate(args: &MigrateArgs) -> anyhow::Result<ExitCode> {
    let config = MigrationConfig::from_env()?;

    // dry-run 不会调用目标注册商，token 可以缺省
    let destination_key = if args.dry_run {
        config.destination_api_key.clone().unwrap_or_default()
    } else {
        config.require_destination_key()?.to_string()
    };

    tracing::debug!(
        "Source token {}, destination token {}",
        mask_secret(&config.source_api_key),
        mask_secret(&destination_key)
    );

    let source = create_source_provider(
        config.source_api_key.clone(),
        &config.source_client_options(),
    )
    .context("Failed to create source provider")?;
    let destination = create_destination_provider(
        destination_key,
        &config.destination_client_options(),
        config.disable_spamexperts,
    )
    .context("Failed to create destination provider")?;
    let zone_cache = Arc::new(FileZoneCache::new(config.output_dir.clone()));

    let domains = DomainLister::new(Arc::clone(&source))
        .list(&config.domain_source())
        .await;
    if domains.is_empty() {
        tracing::warn!("No domains to migrate");
        return Ok(ExitCode::SUCCESS);
    }

    tracing::info!("Writing zone files to {}", config.output_dir.display());

    let ctx = Arc::new(ServiceContext::new(source, destination, zone_cache));
    let service = MigrationService::new(
        ctx,
        MigrationOptions {
            transform: config.transform_options(),
            dry_run: args.dry_run,
            concurrency: config.concurrency,
        },
    );
    let summary = service.migrate_all(&domains).await;

    Ok(if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn run_list_domains(output: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let config = MigrationConfig::from_env()?;
    let output = output.unwrap_or_else(|| config.default_listing_output());

    let source = create_source_provider(
        config.source_api_key.clone(),
        &config.source_client_options(),
    )
    .context("Failed to create source provider")?;

    let domains = DomainLister::new(source).list_from_api().await;
    write_listing_file(&output, &domains)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("{} domains written to {}", domains.len(), output.display());
    Ok(ExitCode::SUCCESS)
}
