use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use studio_kernel::settings::Settings;
use studio_storage::{MemStorage, Storage};

#[derive(Debug, Parser)]
#[command(name = "studio-cli", version, about = "Operate the studio site API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the site API using the layered settings
    Serve,
    /// Print the merged OpenAPI document
    Openapi,
    /// Print the seeded collections as JSON
    Fixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;

    match cli.command {
        Command::Serve => {
            let settings = Settings::load().with_context(|| "failed to load studio settings")?;
            studio_telemetry::init(&settings.telemetry)?;
            runtime.block_on(studio_app::run(settings))
        }
        Command::Openapi => {
            let store = std::sync::Arc::new(MemStorage::new());
            let registry = studio_app::build_registry(store)?;
            let document = studio_http::router::openapi_document(&registry);
            print_json(&document)
        }
        Command::Fixtures => {
            let store = MemStorage::with_seed_data();
            let fixtures = runtime.block_on(async {
                json!({
                    "portfolio_items": store.get_portfolio_items().await,
                    "team_members": store.get_team_members().await,
                    "services": store.get_services().await,
                })
            });
            print_json(&fixtures)
        }
    }
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("failed to write JSON")?;
    writeln!(stdout).context("failed to write JSON")?;
    Ok(())
}
