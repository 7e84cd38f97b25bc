//! stepform CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use stepform::cli::{Cli, CommandDispatcher, Commands};
use stepform::config::load_config;
use stepform::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stepform=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stepform=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("stepform starting with args: {:?}", cli);

    let project_root = std::env::current_dir().unwrap_or_default();
    let config = match load_config(&project_root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(false, OutputMode::Normal);
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Flags win over the config file
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        config.settings.output
    };

    if cli.no_color || !config.settings.color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_ci = std::env::var_os("CI").is_some();
    let is_interactive = match &cli.command {
        Some(Commands::Fill(args)) => !args.non_interactive && !is_ci,
        _ => !is_ci,
    };

    let mut ui = create_ui(is_interactive, output_mode);
    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
