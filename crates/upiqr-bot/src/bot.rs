//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use chrono::Utc;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};
use upiqr_commands::{create_framework, Data};
use upiqr_config::Config;

/// Main bot structure.
pub struct UpiQrBot {
    config: Arc<Config>,
}

impl UpiQrBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Gateway intents the bot needs: message content for prefix commands and
    /// members for resolving mentioned users.
    fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::non_privileged()
            | serenity::GatewayIntents::MESSAGE_CONTENT
            | serenity::GatewayIntents::GUILD_MEMBERS
    }

    /// Starts the bot and blocks until the gateway connection ends.
    pub async fn start(&self) -> BotResult<()> {
        let config = self.config.clone();

        let framework = create_framework()
            .setup(move |ctx, ready, _framework| {
                Box::pin(async move {
                    info!("connected as {}", ready.user.name);
                    info!("serving {} guilds", ready.guilds.len());
                    info!("using UPI ID {}", config.payee.vpa);

                    // Presence is set exactly once, at startup.
                    ctx.set_activity(Some(serenity::ActivityData::listening(".payhelp")));

                    Ok(Data {
                        config,
                        started_at: Utc::now(),
                    })
                })
            })
            .build();

        let mut client =
            serenity::ClientBuilder::new(&self.config.discord.token, Self::intents())
                .framework(framework)
                .await
                .map_err(|e| BotError::Framework(format!("{e:?}")))?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for shutdown signal: {e:?}");
                return;
            }

            info!("received shutdown signal, shutting down shards");
            shard_manager.shutdown_all().await;
        });

        client
            .start()
            .await
            .map_err(|e| BotError::Framework(format!("{e:?}")))?;
        Ok(())
    }
}
