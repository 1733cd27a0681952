use clap::Parser;
use log::info;

use tick::cli::Cli;
use tick::io::logging;

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.resolve_data_dir();

    // The handle must outlive the event loop or buffered logs are lost
    let _logger = logging::init(&data_dir, &cli.log_level);
    info!("starting in {}", data_dir.display());

    if let Err(e) = tick::tui::run(&data_dir, cli.theme) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
