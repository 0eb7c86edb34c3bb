//! Best-effort private delivery with a transient public fallback.

use crate::framework::Context;
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tracing::debug;

/// How long a fallback message stays in the public channel before deletion.
const TRANSIENT_TTL: Duration = Duration::from_secs(5);

/// Delivers `message` to the requester's DM channel.
///
/// When the DM cannot be delivered, the message is posted in the invoking
/// channel instead and deleted again after [`TRANSIENT_TTL`]. Failures on
/// both paths are logged and dropped; this function never reports an error.
pub async fn send_private_or_transient(ctx: Context<'_>, message: serenity::CreateMessage) {
    if ctx.author().dm(ctx.http(), message.clone()).await.is_ok() {
        return;
    }

    debug!(user = %ctx.author().id, "direct message undeliverable, falling back to channel");
    match ctx.channel_id().send_message(ctx.http(), message).await {
        Ok(sent) => {
            tokio::time::sleep(TRANSIENT_TTL).await;
            if let Err(err) = sent.delete(ctx.http()).await {
                debug!("could not delete transient message: {err}");
            }
        }
        Err(err) => debug!("fallback channel message failed: {err}"),
    }
}

/// Deletes the invoking command message when the platform permits it, keeping
/// the public channel silent.
pub async fn delete_invocation(ctx: Context<'_>) {
    if let Context::Prefix(prefix) = ctx {
        if let Err(err) = prefix.msg.delete(ctx.http()).await {
            debug!("could not delete command message: {err}");
        }
    }
}
