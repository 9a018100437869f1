//! Binary entry point. All logic lives in the library.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use refiner_widget::clipboard::{ClipboardHandler, ClipboardWriter};
use refiner_widget::config::Config;
use refiner_widget::host::Theme;
use refiner_widget::logging::{init_tracing, LogTarget};

#[derive(Parser, Debug)]
#[command(name = "refiner-widget", version)]
#[command(about = "Terminal prompt refiner embedded in a host program", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/refiner-widget/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial theme until the host sends one
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Read props and user commands as JSON lines on stdin, no TUI
    #[arg(long)]
    headless: bool,

    /// Host program and its arguments
    #[arg(last = true, value_name = "HOST_COMMAND")]
    host: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    apply_overrides(&mut config, &cli);

    let target = if cli.headless {
        LogTarget::Stderr
    } else {
        LogTarget::file_from(&config.logging)
    };
    init_tracing(&config.logging, target).context("failed to initialise logging")?;
    tracing::info!(headless = cli.headless, "Starting refiner-widget");

    if cli.headless {
        let clipboard = ClipboardHandler::new()
            .ok()
            .map(|handler| Box::new(handler) as Box<dyn ClipboardWriter>);
        refiner_widget::headless::run(
            io::stdin().lock(),
            io::stdout().lock(),
            config.ui.theme,
            config.ui.headless_width,
            clipboard,
        )?;
        return Ok(());
    }

    refiner_widget::ui::runtime::run(&config)
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.into();
    }
    if let Some((command, args)) = cli.host.split_first() {
        config.host.command = command.clone();
        config.host.args = args.to_vec();
    }
}
