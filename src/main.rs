use clap::Parser;
use std::sync::Arc;
use tiktok_gateway::apis::tikwm::TikwmClient;
use tiktok_gateway::apis::TikTokApi;
use tiktok_gateway::config::Config;
use tiktok_gateway::{logging, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "tiktok_gateway")]
#[command(about = "HTTP gateway for TikTok data via the tikwm.com API")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let config = Config::load()?;
    let port = cli.port.unwrap_or(config.port);

    let client = TikwmClient::new(&config.tikwm)?;
    let api: Arc<dyn TikTokApi> = Arc::new(client);
    info!("Using {} API", api.api_name());

    server::start_server(api, port).await
}
