use anyhow::Result;
use tajazzang::utils::logging;
use tajazzang::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // load configuration
    let config = Config::from_env();

    // initialize the per-run log file
    logging::init(&config.log_file)?;

    // run the application
    App::new(config).run().await?;

    Ok(())
}
