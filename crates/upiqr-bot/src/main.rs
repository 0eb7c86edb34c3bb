//! Main entry point for the UPI QR bot.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use upiqr_bot::{BotResult, UpiQrBot};
use upiqr_config::ConfigLoader;

#[tokio::main]
async fn main() -> BotResult<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "upiqr_bot=info,upiqr_commands=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting UPI QR bot");

    let config = match ConfigLoader::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("cannot start: {e}");
            return Err(e.into());
        }
    };

    let bot = UpiQrBot::new(config);

    if let Err(e) = bot.start().await {
        error!("bot terminated with error: {e}");
        return Err(e);
    }

    Ok(())
}
