use anyhow::{Context, Result};

use folio::app::App;
use folio::bootstrap::{self, TerminalSession};
use folio::logging;
use folio::runtime::Runner;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logger().context("Failed to initialize logger")?;
    logging::info("Starting Folio");
    bootstrap::install_panic_hook();

    let app = App::new();
    logging::debug(&format!(
        "Initialized application with {} sections",
        app.sections.len()
    ));

    let mut session = TerminalSession::new()?;
    let res = Runner::new(session.terminal_mut(), app).run().await;

    // restore the terminal before reporting anything
    drop(session);

    if let Err(err) = res {
        logging::error(&format!("Application error: {}", err));
        return Err(anyhow::anyhow!(err));
    }

    logging::info("Application terminated successfully");
    Ok(())
}
