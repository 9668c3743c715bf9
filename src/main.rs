use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use termfolio::core::config::{self, TermfolioConfig};

#[derive(Parser)]
#[command(name = "termfolio", version, about = "Terminal portfolio")]
struct Args {}

fn main() -> std::io::Result<()> {
    let _args = Args::parse();

    // Config errors are reported once the logger is up
    let (file_config, config_error) = match config::load_config() {
        Ok(file_config) => (file_config, None),
        Err(e) => (TermfolioConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config);

    // File logger only when one is configured; the TUI owns stdout
    if let Some(path) = &resolved.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create(path) {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {e}");
    }
    log::info!(
        "Termfolio starting up (language: {}, skip welcome: {})",
        resolved.language,
        resolved.skip_welcome
    );

    termfolio::tui::run(resolved)
}
