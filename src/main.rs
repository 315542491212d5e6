// Entrypoint for the CLI application.
// - Keeps `main` small: read config, set up logging, hand a terminal
//   console to the menu loop.
// - Returns `anyhow::Result` so a malformed number ends the process with
//   a readable message and a non-zero exit status.

use angka_cli::{config::Config, console::Terminal, logger, ui::main_menu};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logger::init_logger(config.verbose);
    tracing::info!("starting angka-cli");

    // Blocks until the user picks "Selesai" or an input error is fatal.
    main_menu(&mut Terminal::new())?;

    tracing::info!("angka-cli finished");
    Ok(())
}
