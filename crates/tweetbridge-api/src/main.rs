use tweetbridge_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    tweetbridge_api::telemetry::init_tracing();

    // Initialize the application (storage, Supabase clients, routes)
    let (_state, router) = tweetbridge_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    tweetbridge_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
