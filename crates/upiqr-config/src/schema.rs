//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use upiqr_common::{Payee, UpiQrError};

/// Main configuration structure for the UPI QR bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Payee identity configuration.
    pub payee: PayeeConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
}

/// Payee identity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayeeConfig {
    /// Virtual payment address of the receiving account.
    pub vpa: String,
    /// Display name shown by UPI apps.
    pub display_name: String,
}

impl PayeeConfig {
    /// Converts the configuration section into the shared payee identity.
    pub fn to_payee(&self) -> Payee {
        Payee {
            vpa: self.vpa.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), UpiQrError> {
        if self.discord.token.is_empty() {
            return Err(UpiQrError::Config(
                "Discord token cannot be empty".to_string(),
            ));
        }

        if self.payee.vpa.is_empty() || !self.payee.vpa.contains('@') {
            return Err(UpiQrError::Config(format!(
                "payee VPA '{}' is not a valid virtual payment address",
                self.payee.vpa
            )));
        }

        if self.payee.display_name.is_empty() {
            return Err(UpiQrError::Config(
                "payee display name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
