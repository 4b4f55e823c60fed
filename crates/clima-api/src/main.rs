mod constants;
mod data;
mod error;
mod extract;
mod handlers;
mod services;
mod setup;
mod state;
mod telemetry;

use clima_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (telemetry, state, routes)
    let (_state, router) = setup::initialize_app(config.clone())?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
