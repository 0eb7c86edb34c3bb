//! Default values, including the payee identity compiled into the process.

use crate::schema::{Config, DiscordConfig, PayeeConfig};

/// Virtual payment address every generated QR code pays into.
pub const DEFAULT_PAYEE_VPA: &str = "dreamhelper@upi";

/// Display name shown by UPI apps when the code is scanned.
pub const DEFAULT_PAYEE_NAME: &str = "Dream Helper";

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            payee: PayeeConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
        }
    }
}

impl Default for PayeeConfig {
    fn default() -> Self {
        Self {
            vpa: DEFAULT_PAYEE_VPA.to_string(),
            display_name: DEFAULT_PAYEE_NAME.to_string(),
        }
    }
}
