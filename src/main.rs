use restaurant_mcp_rust::{config::Config, logging, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    logging::init(&config.log_level);

    tracing::info!("Restaurant MCP server starting...");

    if let Err(e) = server::run(config).await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
