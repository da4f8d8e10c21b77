//! iterm-splitter CLI entry point.
//!
//! This binary provides the `iterm-splitter` command, which opens a terminal
//! tab and runs each given command in its own pane.

use clap::Parser;
use iterm_splitter::cli::Cli;
use iterm_splitter::error::Result;
use iterm_splitter::iterm2::ITerm2;
use iterm_splitter::tmux::Tmux;
use iterm_splitter::{
    Backend, Plan, Settings, SplitterError, driver, dry_run, init, input, loader, plan,
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const USAGE_HINT: &str = "\
Usage:
    iterm-splitter [--max-v-pane N] <command1> <command2> ...
    iterm-splitter [--file path/to/commands.txt]
    iterm-splitter --init

Commands can be provided as arguments or read from a file, one per line.
Run `iterm-splitter --init` to create its.txt interactively.";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        if matches!(e, SplitterError::NoCommands(_)) {
            eprintln!("\n{}", USAGE_HINT);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic.
async fn run(cli: Cli) -> Result<()> {
    let config = loader::load_default_config()?;
    let cwd = std::env::current_dir()?;
    let settings = Settings::resolve(cli.max_v_pane, cli.file, cli.backend, &config, &cwd);

    if cli.init {
        let stdin = std::io::stdin();
        init::run(&settings.file, stdin.lock(), std::io::stdout())?;
        return Ok(());
    }

    let commands = input::resolve(&cli.commands, &settings.file)?;
    let plan = plan::plan(&commands, plan::clamp_max_v_pane(settings.max_v_pane))?;

    if cli.dry_run {
        let mut terminal = dry_run::DryRun::new(std::io::stdout());
        driver::execute(&mut terminal, &plan).await?;
        return Ok(());
    }

    eprintln!("Connecting to {}...", settings.backend.display_name());
    let start = Instant::now();

    execute_on(settings.backend, &plan).await?;

    let elapsed = start.elapsed().as_secs_f64();
    if elapsed > 1.0 {
        eprintln!("Done in {:.1}s", elapsed);
    }
    Ok(())
}

/// Connect to the chosen backend and run the plan on it.
async fn execute_on(backend: Backend, plan: &Plan) -> Result<()> {
    match backend {
        Backend::Iterm2 => {
            let mut terminal = ITerm2::connect().await?;
            driver::execute(&mut terminal, plan).await?;
        }
        Backend::Tmux => {
            let mut terminal = Tmux::connect().await?;
            driver::execute(&mut terminal, plan).await?;
        }
    }
    Ok(())
}
