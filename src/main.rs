mod app;
mod cli;
mod color;
mod config;
mod event;
mod library;
mod palette;
mod store;
mod tui;
mod types;
mod ui;

use std::fs::OpenOptions;

use anyhow::Result;
use clap::Parser;

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or("SWATCHR_LOG", "info"));
    builder.format_timestamp_millis();
    // Keep log lines off the alternate screen.
    match OpenOptions::new().create(true).append(true).open(config::log_path()) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => eprintln!("swatchr: logging to stderr, cannot open log file: {e}"),
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    init_logging();

    let db_path = cli_opts.db.unwrap_or_else(config::default_db_path);
    let conn = store::init(&db_path)?;
    if let Some(command) = cli_opts.command {
        return cli::run(command, &conn);
    }

    let settings = config::Settings::load();
    let mut app = app::App::new(conn, settings);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
