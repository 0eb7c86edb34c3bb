//! The `.pay` command: deliver a UPI payment QR code by direct message.

use crate::framework::{Context, Error};
use poise::serenity_prelude as serenity;
use tracing::{debug, error};
use upiqr_common::UserId;
use upiqr_payments::{render_png, PaymentRequest};

/// Discord JSON error code for "Cannot send messages to this user".
const CANNOT_SEND_TO_USER: isize = 50007;

/// Sends a UPI payment QR code to the mentioned user's DM.
///
/// Usage: `.pay @username 100`
///
/// Every invalid invocation is a silent no-op: no reply, no reaction, nothing
/// in the channel. A recipient with closed DMs drops the whole operation the
/// same way. Only unexpected failures leave a trace, as a single log line.
#[poise::command(prefix_command, guild_only)]
pub async fn pay(
    ctx: Context<'_>,
    member: Option<serenity::Member>,
    amount: Option<i64>,
) -> Result<(), Error> {
    let Some(member) = member else {
        return Ok(());
    };
    let Some(amount) = amount else {
        return Ok(());
    };

    let payee = ctx.data().config.payee.to_payee();
    let Some(request) = PaymentRequest::new(
        payee,
        UserId(ctx.author().id.get()),
        UserId(member.user.id.get()),
        amount,
    ) else {
        return Ok(());
    };

    let qr_png = match render_png(&request.payment_uri()) {
        Ok(png) => png,
        Err(err) => {
            error!("failed to render payment QR: {err}");
            return Ok(());
        }
    };

    let requester_name = ctx.author().name.clone();
    let dm_embed = serenity::CreateEmbed::new()
        .title("💰 UPI Payment Request")
        .description(format!("{requester_name} wants to pay you"))
        .colour(serenity::Colour::DARK_GREEN)
        .field("UPI ID", format!("`{}`", request.payee.vpa), true)
        .field("Amount", format!("**₹{}**", request.amount), true)
        .field("From", requester_name.clone(), true)
        .field(
            "📱 How to Pay",
            "1. Scan QR code\n2. Open with any UPI app\n3. Amount is already set\n4. Enter PIN to pay",
            false,
        )
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Fixed Amount: ₹{}",
            request.amount
        )))
        .image("attachment://payment_qr.png");

    let dm = serenity::CreateMessage::new()
        .embed(dm_embed)
        .add_file(serenity::CreateAttachment::bytes(qr_png, "payment_qr.png"));

    if let Err(err) = member.user.dm(ctx.http(), dm).await {
        if dm_blocked(&err) {
            debug!(recipient = %member.user.id, "recipient DMs are closed, dropping request");
        } else {
            error!("failed to deliver payment QR: {err}");
        }
        return Ok(());
    }

    // Receipt back to the requester, best-effort.
    let confirm_embed = serenity::CreateEmbed::new()
        .title("✅ Payment Request Sent")
        .description(format!("QR code sent to {}", member.user.name))
        .colour(serenity::Colour::BLUE)
        .field("Amount", format!("₹{}", request.amount), true)
        .field("Recipient", member.user.name.clone(), true);

    ctx.author()
        .dm(ctx.http(), serenity::CreateMessage::new().embed(confirm_embed))
        .await
        .ok();

    Ok(())
}

/// Whether a delivery error means the recipient cannot receive DMs.
fn dm_blocked(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.error.code == CANNOT_SEND_TO_USER
    )
}
