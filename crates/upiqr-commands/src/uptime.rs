//! Uptime diagnostics delivered over DM.

use crate::framework::{Context, Error};
use crate::respond::{delete_invocation, send_private_or_transient};
use chrono::Utc;
use poise::serenity_prelude as serenity;
use upiqr_common::{format_duration, format_timestamp};

/// Reports how long the bot has been connected.
#[poise::command(prefix_command)]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    let started_at = ctx.data().started_at;
    let elapsed = Utc::now()
        .signed_duration_since(started_at)
        .to_std()
        .unwrap_or_default();

    let report = format!(
        "⏱️ Up for {} (since {})",
        format_duration(elapsed),
        format_timestamp(started_at)
    );

    send_private_or_transient(ctx, serenity::CreateMessage::new().content(report)).await;
    delete_invocation(ctx).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_is_a_prefix_command() {
        let command = uptime();
        assert_eq!(command.name, "uptime");
        assert!(command.prefix_action.is_some());
    }
}
