use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ytmcp_demo::ui::terminal_guard::install_panic_hook;
use ytmcp_demo::{util, App, Config, Script};

#[derive(Parser)]
#[command(
    name = "ytmcp-demo",
    version,
    about = "Interactive terminal demo of the YouTube Connector MCP server",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Directory for config and logs (defaults to ~/.ytmcp-demo)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Play scenarios in the terminal (default)
    Run(RunArgs),
    /// Print the scenarios contained in a script
    List {
        /// Script to inspect instead of the bundled one
        #[arg(long, value_name = "PATH")]
        script: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Script to play instead of the bundled one
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Start this scenario immediately
    #[arg(long, value_name = "KEY")]
    scenario: Option<String>,

    /// Don't fetch the GitHub star count
    #[arg(long)]
    no_stars: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir);

    match cli.command {
        Some(Command::List { script }) => list(script),
        Some(Command::Run(args)) => run(args).await,
        None => run(cli.run).await,
    }
}

fn init_logging() -> Result<()> {
    // Log to a file; the terminal belongs to the TUI
    fs::create_dir_all(util::logs_dir()).context("Failed to create log directory")?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    Ok(())
}

fn load_script(path: Option<&PathBuf>) -> Result<Script> {
    match path {
        Some(path) => Script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display())),
        None => Script::bundled().context("Bundled demo script is invalid"),
    }
}

fn list(script: Option<PathBuf>) -> Result<()> {
    let script = load_script(script.as_ref())?;
    for (key, scenario) in &script.scenarios {
        println!(
            "{}\t{}\t{}",
            key, scenario.meta.title, scenario.meta.description
        );
    }
    Ok(())
}

async fn run(args: RunArgs) -> Result<()> {
    init_logging()?;
    install_panic_hook();

    let mut config = Config::load();
    if let Some(path) = args.script {
        config = config.with_script_path(path);
    }
    if args.no_stars {
        config = config.without_stars();
    }

    let script = load_script(config.script_path.as_ref())?;
    tracing::info!(version = %script.version, "Starting demo player");

    let mut app = App::new(config, Arc::new(script));
    app.run(args.scenario.as_deref()).await
}
