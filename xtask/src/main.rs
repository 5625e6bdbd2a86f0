mod web;

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for frankenpenguin")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle the browser front end; with NODE_ENV=development, serve and watch it
    Web(web::WebArgs),
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    let root = workspace_root();

    match command {
        Commands::Web(args) => {
            let mode = args.mode();
            web::run(&args, &root).with_context(|| format!("web task failed ({mode})"))?;
        }
        Commands::Check => {
            cargo(&root, &["fmt", "--all", "--", "--check"])?;
            cargo(&root, &clippy_args())?;
            cargo(&root, &["test", "--workspace"])?;
            cargo(&root, &["doc", "--workspace", "--no-deps"])?;
        }
        Commands::Fmt => cargo(&root, &["fmt", "--all", "--", "--check"])?,
        Commands::Clippy => cargo(&root, &clippy_args())?,
        Commands::Test => cargo(&root, &["test", "--workspace"])?,
        Commands::Doc => cargo(&root, &["doc", "--workspace", "--no-deps"])?,
    }

    Ok(())
}

fn clippy_args() -> [&'static str; 6] {
    [
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ]
}

/// Run `cargo <args>` in the workspace root, failing on a non-zero exit.
fn cargo(root: &Path, args: &[&str]) -> Result<()> {
    let program = std::env::var("CARGO").unwrap_or_else(|_| "cargo".into());
    tracing::info!("==> cargo {}", args.join(" "));
    let status = Command::new(&program)
        .current_dir(root)
        .args(args)
        .status()
        .with_context(|| format!("failed to launch {program}"))?;
    if !status.success() {
        anyhow::bail!("cargo {} failed", args[0]);
    }
    Ok(())
}

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
}
