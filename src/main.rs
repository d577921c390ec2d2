use joyeria::logging::init_logging;
use joyeria::{AppConfig, Joyeria};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    info!(
        database = %config.database.database,
        listen = %config.server.bind_address(),
        "Starting joyeria"
    );

    let joyeria = Joyeria::connect(&config.database).await?;
    joyeria.health_check().await?;
    joyeria.serve(&config.server).await?;

    Ok(())
}
