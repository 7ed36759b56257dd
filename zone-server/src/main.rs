use zone_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("Zone store service starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Load the zone collection (falls back to empty on read/parse failure)
    let state = ServerState::initialize(&config);

    // 4. Serve HTTP
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
