//! Poise framework setup, shared data, and the silent error handler.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error};
use upiqr_config::Config;

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Wall-clock timestamp recorded when the process connected.
    pub started_at: DateTime<Utc>,
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("config", &"<Config>")
            .field("started_at", &self.started_at)
            .finish()
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Creates a new Poise framework with every command registered on the `.`
/// prefix.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: vec![
            crate::pay::pay(),
            crate::payhelp::payhelp(),
            crate::ping::ping(),
            crate::ping::ping2(),
            crate::uptime::uptime(),
        ],
        on_error: |error| Box::pin(on_error(error)),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(".".into()),
            ..Default::default()
        },
        ..Default::default()
    })
}

/// Global error handler for the framework.
///
/// Nothing is ever reported back into the chat: malformed invocations are
/// dropped, command failures get one log line, and the operation ends there.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().name, "command failed: {error:?}");
        }
        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
            debug!(command = %ctx.command().name, "ignoring malformed invocation: {error}");
        }
        error => {
            debug!("framework error: {error:?}");
        }
    }
}
