//! authz - resolve policy fields of a resource
//!
//! Usage:
//!   authz resolve -t corpuser -u urn:li:corpuser:alice -f entities.json
//!   authz resolve -t corpuser -u urn:li:corpuser:alice --group urn:li:corpGroup:eng
//!   authz field-types         - List resolvable field types

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{FieldTypesCommand, ResolveCommand};

#[derive(Parser)]
#[command(name = "authz")]
#[command(about = "Resolve policy-relevant fields (group membership, ...) of a resource")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Authorizer config file (JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the groups a resource belongs to
    Resolve(ResolveCommand),
    /// List field types that can be resolved
    FieldTypes(FieldTypesCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Resolve(cmd) => cmd.run(config, cli.json).await,
        Commands::FieldTypes(cmd) => cmd.run(config, cli.json),
    }
}
