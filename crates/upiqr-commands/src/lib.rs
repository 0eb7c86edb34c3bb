//! # UpiQr Commands
//!
//! Discord command implementations using the Poise framework for the UPI QR
//! bot.
//!
//! Every handler follows the same best-effort, non-propagating contract:
//! invalid invocations are silent no-ops, delivery goes to DM channels, and
//! unexpected failures are logged and swallowed without ever surfacing in the
//! public chat.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod framework;
pub mod pay;
pub mod payhelp;
pub mod ping;
pub mod respond;
pub mod uptime;

pub use framework::*;
