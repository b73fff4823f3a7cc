/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: One engine operation against the service, state snapshot as JSON
[POS]:    Binary entry point
[UPDATE]: When changing CLI commands, startup flow, or logging setup
*/

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use todoboard_adapter::ItemStatus;
use todoboard_sync::{Filter, ItemPatch, SyncEngine, SyncError, TodoboardConfig};

#[derive(Parser, Debug)]
#[command(name = "todoboard", version, about = "Todo list client driven by the sync engine")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long = "log-dir", value_name = "DIR")]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resync every list and its items
    Lists,
    AddList { title: String },
    RenameList { list_id: String, title: String },
    RemoveList { list_id: String },
    /// Local filter, shown in the printed snapshot
    SetFilter { list_id: String, filter: Filter },
    Items { list_id: String },
    AddItem { list_id: String, title: String },
    RemoveItem { list_id: String, item_id: String },
    SetStatus {
        list_id: String,
        item_id: String,
        status: ItemStatus,
    },
    /// Only bootstrap the session
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let _guard = init_tracing(&args.log_level, args.log_dir.as_deref())?;

    let config = load_config(&args.config_path)?;
    info!(base_url = %config.base_url, "configuration loaded");

    let client = config.build_client()?;
    let engine = SyncEngine::new(Arc::new(client));

    let logged_in = engine.initialize().await;
    info!(logged_in, "session bootstrap complete");

    let outcome = run(&engine, args.command).await;

    let snapshot = engine.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("serialize state snapshot")?
    );

    outcome.map_err(|err| {
        for field_error in err.field_errors() {
            warn!(field = %field_error.field, error = %field_error.error, "field rejected");
        }
        anyhow!(err)
    })
}

async fn run(engine: &SyncEngine, command: Command) -> std::result::Result<(), SyncError> {
    if matches!(command, Command::Whoami) {
        return Ok(());
    }

    engine.resync_all().await?;

    match command {
        Command::Lists | Command::Whoami => Ok(()),
        Command::AddList { title } => engine.create_list(&title).await.map(|_| ()),
        Command::RenameList { list_id, title } => engine.rename_list(&list_id, &title).await,
        Command::RemoveList { list_id } => engine.remove_list(&list_id).await,
        Command::SetFilter { list_id, filter } => {
            engine.set_filter(&list_id, filter);
            Ok(())
        }
        Command::Items { list_id } => engine.resync_items(&list_id).await,
        Command::AddItem { list_id, title } => engine.create_item(&list_id, &title).await.map(|_| ()),
        Command::RemoveItem { list_id, item_id } => engine.remove_item(&list_id, &item_id).await,
        Command::SetStatus {
            list_id,
            item_id,
            status,
        } => {
            engine
                .update_item(&list_id, &item_id, &ItemPatch::status(status))
                .await
        }
    }
}

fn init_tracing(log_level: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "todoboard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(None)
        }
    }
}

fn load_config(path: &Path) -> Result<TodoboardConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    TodoboardConfig::from_file(path_str).context("load config")
}
