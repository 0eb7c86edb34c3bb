//! The `.payhelp` command: usage instructions, delivered privately.

use crate::framework::{Context, Error};
use crate::respond::{delete_invocation, send_private_or_transient};
use poise::serenity_prelude as serenity;

/// Sends usage instructions for the payment bot to the requester's DM.
#[poise::command(prefix_command)]
pub async fn payhelp(ctx: Context<'_>) -> Result<(), Error> {
    let vpa = &ctx.data().config.payee.vpa;

    let embed = serenity::CreateEmbed::new()
        .title("💰 UPI Payment Bot")
        .description(format!("Your UPI ID: `{vpa}`"))
        .colour(serenity::Colour::GOLD)
        .field(
            "How to Use",
            "`.pay @user 100`\nSends a QR code to the user's DM",
            false,
        );

    send_private_or_transient(ctx, serenity::CreateMessage::new().embed(embed)).await;
    delete_invocation(ctx).await;
    Ok(())
}
