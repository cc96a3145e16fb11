use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use memomate_config::Config;
use memomate_core::TimeOfDay;
use tracing::info;

mod app;
mod content;
mod loading;
mod logging;
mod panel;
mod ui;

use app::App;

/// A terminal cityscape where product features are buildings you can click.
#[derive(Debug, Parser)]
#[command(name = "memomate", version, about)]
struct Cli {
    /// Config file to read instead of the platform default.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the loading-screen progress.
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs here instead of the platform cache directory.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Seconds between day/night flips.
    #[arg(long)]
    cycle_secs: Option<f64>,
    /// Start in day mode.
    #[arg(long)]
    day: bool,
    /// Go straight to the city.
    #[arg(long)]
    skip_loading: bool,
    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.loading.seed = Some(seed);
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(secs) = self.cycle_secs {
            config.cycle_period_secs = secs;
        }
        if self.day {
            config.start_mode = TimeOfDay::Day;
        }
        if self.skip_loading {
            config.loading.skip = true;
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    logging::init(config.log_path().as_deref())?;
    info!(?config, "starting memomate");

    let app = App::new(config)?;
    let terminal = ratatui::init();
    with_mouse_capture(&mut io::stdout(), ratatui::restore, || app.run(terminal))
}

/// Run `body` with mouse capture enabled on `out`.
///
/// Capture is released and `restore` called on every path, including when
/// enabling capture fails and `body` never runs.
fn with_mouse_capture<W: Write>(
    out: &mut W,
    restore: impl FnOnce(),
    body: impl FnOnce() -> color_eyre::Result<()>,
) -> color_eyre::Result<()> {
    let result = execute!(out, EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| body());
    let released = execute!(out, DisableMouseCapture);
    restore();
    result?;
    released?;
    Ok(())
}
