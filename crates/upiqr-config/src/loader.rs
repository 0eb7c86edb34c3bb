//! Configuration loading from the process environment.

use crate::schema::Config;
use tracing::debug;
use upiqr_common::UpiQrError;

/// Name of the environment variable holding the Discord bot token.
pub const TOKEN_ENV: &str = "DISCORD_BOT_TOKEN";

/// Configuration loader backed by process environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the environment.
    ///
    /// The bot token is the single required secret; the payee identity comes
    /// from the compiled-in defaults. Returns a configuration error with a
    /// human-readable diagnostic when the token is absent.
    pub fn from_env() -> Result<Config, UpiQrError> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| {
            UpiQrError::Config(format!("{TOKEN_ENV} is not set in the environment"))
        })?;

        let mut config = Config::default();
        config.discord.token = token;
        config.validate()?;

        debug!(vpa = %config.payee.vpa, "configuration loaded from environment");
        Ok(config)
    }
}
