//! Latency diagnostics delivered over DM.

use crate::framework::{Context, Error};
use crate::respond::{delete_invocation, send_private_or_transient};
use poise::serenity_prelude as serenity;
use std::time::Instant;
use tracing::debug;

/// Reports the gateway heartbeat latency.
#[poise::command(prefix_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    let report = format!("🏓 Pong! Gateway latency: {}ms", latency.as_millis());

    send_private_or_transient(ctx, serenity::CreateMessage::new().content(report)).await;
    delete_invocation(ctx).await;
    Ok(())
}

/// Reports gateway latency together with a measured REST round-trip.
#[poise::command(prefix_command)]
pub async fn ping2(ctx: Context<'_>) -> Result<(), Error> {
    let gateway = ctx.ping().await;

    let started = Instant::now();
    if let Err(err) = ctx.http().get_current_user().await {
        debug!("REST probe failed: {err}");
    }
    let rest = started.elapsed();

    let report = format!(
        "🏓 Pong! Gateway: {}ms · REST: {}ms",
        gateway.as_millis(),
        rest.as_millis()
    );

    send_private_or_transient(ctx, serenity::CreateMessage::new().content(report)).await;
    delete_invocation(ctx).await;
    Ok(())
}
